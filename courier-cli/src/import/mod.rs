//! Import of the three csv data sets into core types.

mod csv;
pub use self::csv::*;
