#[cfg(test)]
#[path = "../../tests/unit/simulation/orchestrator_test.rs"]
mod orchestrator_test;

use crate::models::common::{Deadline, Distance, Timestamp, format_clock};
use crate::models::problem::{
    AddressCorrection, AddressIndex, Departure, PackageId, PackageStore, Truck, TruckPlan, TransportCost,
};
use crate::simulation::dispatcher::RouteDispatcher;
use crate::simulation::reporter::{PackageView, package_view, status_board};
use crate::utils::{GenericResult, compare_floats};
use std::cmp::Ordering;
use std::sync::Arc;

/// A logger type which is called with various information regarding the simulation progress.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Distance units every truck covers per hour.
pub const DEFAULT_SPEED: f64 = 18.;

/// Configuration of one simulation run: the manual truck plans in dispatch
/// order, the optional address-correction rule and the fleet speed.
pub struct SimulationConfig {
    /// Truck plans, in dispatch order.
    pub trucks: Vec<TruckPlan>,
    /// The mid-morning address correction, if any.
    pub correction: Option<AddressCorrection>,
    /// Truck speed in distance units per hour.
    pub speed: f64,
}

impl SimulationConfig {
    /// Creates a config with the default speed.
    pub fn new(trucks: Vec<TruckPlan>, correction: Option<AddressCorrection>) -> Self {
        Self { trucks, correction, speed: DEFAULT_SPEED }
    }
}

/// Deadline compliance of a single package after the run.
#[derive(Clone, Debug)]
pub struct DeadlineCheck {
    /// Id of the checked package.
    pub package_id: PackageId,
    /// Its deadline.
    pub deadline: Deadline,
    /// When it was delivered, if it was.
    pub delivery_time: Option<Timestamp>,
    /// Whether it was delivered before or at the deadline.
    pub met: bool,
}

/// The aggregate outcome of a full simulation run.
pub struct FleetSummary {
    /// Final per-truck state: mileage, finish time, load.
    pub trucks: Vec<Truck>,
    /// Mileage of the whole fleet.
    pub total_mileage: Distance,
    /// Per-package deadline verdicts, ascending by package id.
    pub checks: Vec<DeadlineCheck>,
    /// True when every package met its deadline.
    pub all_deadlines_met: bool,
}

/// Owns the problem data and runs the whole fleet simulation.
///
/// Trucks are dispatched strictly sequentially in plan order: a
/// [`Departure::WhenDriverFree`] plan depends on the finish times of the
/// trucks dispatched before it, which is a genuine data dependency.
pub struct Simulation {
    store: PackageStore,
    addresses: AddressIndex,
    transport: Arc<dyn TransportCost>,
    config: SimulationConfig,
    logger: InfoLogger,
}

impl Simulation {
    /// Creates a new simulation over the given problem data.
    pub fn new(
        store: PackageStore,
        addresses: AddressIndex,
        transport: Arc<dyn TransportCost>,
        config: SimulationConfig,
    ) -> Self {
        Self { store, addresses, transport, config, logger: Arc::new(|_| {}) }
    }

    /// Replaces the no-op logger.
    pub fn with_logger(self, logger: InfoLogger) -> Self {
        Self { logger, ..self }
    }

    /// Dispatches every planned truck and verifies deadline compliance.
    pub fn run(&mut self) -> GenericResult<FleetSummary> {
        let dispatcher = RouteDispatcher::new(
            &self.addresses,
            self.transport.as_ref(),
            self.config.correction.as_ref(),
            self.config.speed,
        );

        let mut trucks: Vec<Truck> = Vec::with_capacity(self.config.trucks.len());
        for plan in &self.config.trucks {
            let start = match plan.departure {
                Departure::At(time) => time,
                Departure::WhenDriverFree { not_before } => {
                    let first_free = trucks.iter().filter_map(|truck| truck.finish_time).fold(f64::INFINITY, f64::min);
                    if first_free.is_finite() { not_before.max(first_free) } else { not_before }
                }
            };

            let mut truck = Truck::new(plan.truck_id, plan.package_ids.clone());
            (self.logger)(&format!(
                "truck {} departing at {} with {} packages",
                truck.id,
                format_clock(start),
                truck.package_ids.len()
            ));

            dispatcher.deliver_route(&mut truck, &mut self.store, start)?;

            if let Some(finish) = truck.finish_time {
                (self.logger)(&format!(
                    "truck {} back at the hub at {}, {:.1} miles driven",
                    truck.id,
                    format_clock(finish),
                    truck.mileage
                ));
            }
            trucks.push(truck);
        }

        let checks = self.verify_deadlines();
        let all_deadlines_met = checks.iter().all(|check| check.met);
        let total_mileage = trucks.iter().map(|truck| truck.mileage).sum();

        (self.logger)(&format!("fleet total: {total_mileage:.1} miles, all deadlines met: {all_deadlines_met}"));

        Ok(FleetSummary { trucks, total_mileage, checks, all_deadlines_met })
    }

    /// Returns the package store with the authoritative delivery records.
    pub fn store(&self) -> &PackageStore {
        &self.store
    }

    /// Returns the address-correction rule of this run, if any.
    pub fn correction(&self) -> Option<&AddressCorrection> {
        self.config.correction.as_ref()
    }

    /// Projects the display state of a single package as of the query time.
    pub fn package_status(&self, id: PackageId, at: Timestamp) -> Option<PackageView> {
        self.store.get(id).map(|package| package_view(package, self.correction(), at))
    }

    /// Projects the display state of all packages as of the query time.
    pub fn fleet_status(&self, at: Timestamp) -> Vec<PackageView> {
        status_board(&self.store, self.correction(), at)
    }

    fn verify_deadlines(&self) -> Vec<DeadlineCheck> {
        self.store
            .ids_sorted()
            .into_iter()
            .filter_map(|id| self.store.get(id))
            .map(|package| {
                let met = package
                    .delivery_time
                    .is_some_and(|delivered| compare_floats(delivered, package.deadline.time) != Ordering::Greater);

                if !met {
                    let delivered = package
                        .delivery_time
                        .map_or_else(|| "was not delivered".to_string(), |time| format!("delivered at {}", format_clock(time)));
                    (self.logger)(&format!(
                        "package {} missed its deadline {}: {}",
                        package.id, package.deadline.raw, delivered
                    ));
                }

                DeadlineCheck {
                    package_id: package.id,
                    deadline: package.deadline.clone(),
                    delivery_time: package.delivery_time,
                    met,
                }
            })
            .collect()
    }
}
