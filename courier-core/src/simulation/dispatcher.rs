#[cfg(test)]
#[path = "../../tests/unit/simulation/dispatcher_test.rs"]
mod dispatcher_test;

use crate::models::common::{Distance, Duration, Location, Timestamp};
use crate::models::problem::{
    AddressCorrection, AddressIndex, HUB, PackageId, PackageStore, TransportCost, Truck, UNREACHABLE,
};
use crate::utils::GenericResult;

/// Executes one truck route with a greedy nearest-neighbor walk.
///
/// The dispatcher is the only writer of package departure and delivery
/// timestamps. It borrows the store per route; ownership stays with the caller.
pub struct RouteDispatcher<'a> {
    addresses: &'a AddressIndex,
    transport: &'a dyn TransportCost,
    correction: Option<&'a AddressCorrection>,
    speed: f64,
}

impl<'a> RouteDispatcher<'a> {
    /// Creates a dispatcher. `speed` is in distance units per hour.
    pub fn new(
        addresses: &'a AddressIndex,
        transport: &'a dyn TransportCost,
        correction: Option<&'a AddressCorrection>,
        speed: f64,
    ) -> Self {
        Self { addresses, transport, correction, speed }
    }

    /// Runs the route for the given truck starting at `start`.
    ///
    /// Stamps every loaded package with the departure time, then repeatedly
    /// travels to the closest deliverable package (first minimum wins on ties,
    /// stable in load order). The address-correction package is skipped while
    /// the correction time lies ahead; when it is the only package left the
    /// clock advances to exactly the correction time without accumulating
    /// mileage. The route closes with the return leg to the hub.
    ///
    /// Errors when a package id is not in the store, an address resolves to no
    /// location, or the remaining stops (or the return leg) are unreachable:
    /// each of those would otherwise stall the greedy walk forever.
    pub fn deliver_route(&self, truck: &mut Truck, store: &mut PackageStore, start: Timestamp) -> GenericResult<()> {
        truck.current_time = start;
        truck.current_location = HUB;

        for id in &truck.package_ids {
            let package = store
                .get_mut(*id)
                .ok_or_else(|| format!("unknown package {} assigned to truck {}", id, truck.id))?;
            package.departure_time = Some(start);
        }

        let mut undelivered = truck.package_ids.clone();

        while !undelivered.is_empty() {
            self.open_correction_gate(&undelivered, store, truck.current_time);

            match self.pick_closest(&undelivered, store, truck)? {
                Some((index, location, distance)) => {
                    truck.mileage += distance;
                    truck.current_time += self.travel_duration(distance);
                    truck.current_location = location;

                    let id = undelivered.remove(index);
                    let package =
                        store.get_mut(id).ok_or_else(|| format!("package {id} vanished from the store"))?;
                    package.delivery_time = Some(truck.current_time);
                }
                None => {
                    // nothing deliverable: either the gate is still closed, or
                    // every remaining edge is unusable
                    let pending_gate = self
                        .correction
                        .filter(|correction| undelivered.iter().any(|id| correction.applies_to(*id)))
                        .map(|correction| correction.effective_at)
                        .filter(|gate| truck.current_time < *gate);

                    match pending_gate {
                        Some(gate) => truck.current_time = gate,
                        None => {
                            return Err(format!(
                                "truck {}: remaining stops are unreachable from location {}",
                                truck.id, truck.current_location
                            )
                            .into());
                        }
                    }
                }
            }
        }

        let return_distance = self.transport.distance(truck.current_location, HUB);
        if !return_distance.is_finite() {
            return Err(format!("truck {}: no usable return edge to the hub", truck.id).into());
        }
        truck.mileage += return_distance;
        truck.finish_time = Some(truck.current_time + self.travel_duration(return_distance));

        Ok(())
    }

    /// Once the correction time has passed, persists the corrected address so
    /// that all further lookups see it.
    fn open_correction_gate(&self, undelivered: &[PackageId], store: &mut PackageStore, at: Timestamp) {
        if let Some(correction) = self.correction.filter(|correction| correction.is_effective(at)) {
            if let Some(package) =
                undelivered.iter().find(|id| correction.applies_to(**id)).and_then(|id| store.get_mut(*id))
            {
                correction.apply(package);
            }
        }
    }

    /// Returns (load index, location, distance) of the closest deliverable
    /// package, or `None` when no candidate has a usable finite edge.
    fn pick_closest(
        &self,
        undelivered: &[PackageId],
        store: &PackageStore,
        truck: &Truck,
    ) -> GenericResult<Option<(usize, Location, Distance)>> {
        let mut best_distance = UNREACHABLE;
        let mut next = None;

        for (index, id) in undelivered.iter().enumerate() {
            if self.is_gated(*id, truck.current_time) {
                continue;
            }

            let package = store.get(*id).ok_or_else(|| format!("package {id} vanished from the store"))?;
            let location = self.addresses.resolve(&package.address).ok_or_else(|| {
                format!("cannot resolve address '{}' of package {} to a location", package.address, id)
            })?;
            let distance = self.transport.distance(truck.current_location, location);

            if distance < best_distance {
                best_distance = distance;
                next = Some((index, location, distance));
            }
        }

        Ok(next)
    }

    fn is_gated(&self, id: PackageId, at: Timestamp) -> bool {
        self.correction.is_some_and(|correction| correction.applies_to(id) && !correction.is_effective(at))
    }

    fn travel_duration(&self, distance: Distance) -> Duration {
        distance * (3600. / self.speed)
    }
}
