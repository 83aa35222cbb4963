#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Distance, Location, Timestamp};
use crate::models::problem::{HUB, PackageId};

/// Represents one truck during a simulation run.
///
/// Ephemeral: created at orchestration start, mutated by the dispatcher and
/// discarded after reporting. The assigned load is sorted ascending at
/// construction so that candidate iteration is deterministic.
#[derive(Clone, Debug)]
pub struct Truck {
    /// Truck number used in reports.
    pub id: usize,
    /// Ids of the packages loaded onto this truck, ascending.
    pub package_ids: Vec<PackageId>,
    /// Accumulated route mileage.
    pub mileage: Distance,
    /// Simulated clock while the route runs.
    pub current_time: Timestamp,
    /// Where the truck currently is.
    pub current_location: Location,
    /// When the truck got back to the hub, once the route completed.
    pub finish_time: Option<Timestamp>,
}

impl Truck {
    /// Creates a new truck with the given load, at the hub.
    pub fn new(id: usize, mut package_ids: Vec<PackageId>) -> Self {
        package_ids.sort_unstable();
        Self { id, package_ids, mileage: 0., current_time: 0., current_location: HUB, finish_time: None }
    }
}

/// Specifies when a planned truck may leave the hub.
#[derive(Clone, Debug)]
pub enum Departure {
    /// Departs at a fixed time.
    At(Timestamp),
    /// Departs as soon as a driver returns from an earlier route, but not
    /// before the given floor. Models the constrained driver pool: the truck
    /// leaves at max(not_before, earliest finish of the already-dispatched trucks).
    WhenDriverFree {
        /// Earliest allowed departure.
        not_before: Timestamp,
    },
}

/// A planned truck: its manual package assignment plus the departure policy.
#[derive(Clone, Debug)]
pub struct TruckPlan {
    /// Truck number used in reports.
    pub truck_id: usize,
    /// Manually assigned package ids.
    pub package_ids: Vec<PackageId>,
    /// Departure policy.
    pub departure: Departure,
}
