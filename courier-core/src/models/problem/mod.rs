//! Problem domain models.

mod addresses;
pub use self::addresses::*;

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;

mod packages;
pub use self::packages::*;
