//! This module reimports a common used types.

pub use crate::simulation::DEFAULT_SPEED;
pub use crate::simulation::{DeadlineCheck, FleetSummary, InfoLogger, Simulation, SimulationConfig};
pub use crate::simulation::{PackageView, RouteDispatcher};

pub use crate::models::common::{Deadline, DeliveryStatus, Distance, Duration, END_OF_DAY, Location, Timestamp};
pub use crate::models::common::{format_clock, parse_clock};
pub use crate::models::problem::{AddressCorrection, AddressIndex, HUB};
pub use crate::models::problem::{Departure, Truck, TruckPlan};
pub use crate::models::problem::{MatrixTransportCost, TransportCost, UNREACHABLE};
pub use crate::models::problem::{Package, PackageId, PackageStore};

// Reimport utils
pub use crate::utils::compare_floats;
pub use crate::utils::{GenericError, GenericResult};
