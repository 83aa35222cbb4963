#[cfg(test)]
#[path = "../../../tests/unit/models/problem/packages_test.rs"]
mod packages_test;

use crate::models::common::{Deadline, DeliveryStatus, Timestamp};
use nohash_hasher::IntMap;

/// A unique, stable package identifier used as the store key.
pub type PackageId = u32;

/// Represents one package: static attributes plus the mutable delivery lifecycle.
#[derive(Clone, Debug)]
pub struct Package {
    /// Package identifier, immutable for the run.
    pub id: PackageId,
    /// Street address. Mutable: the dispatcher overwrites it when an address correction applies.
    pub address: String,
    /// Destination city.
    pub city: String,
    /// Destination state.
    pub state: String,
    /// Postal code. Mutable together with the street address.
    pub zip: String,
    /// Delivery deadline.
    pub deadline: Deadline,
    /// Package weight.
    pub weight: f64,
    /// Free-text notes from the source data.
    pub notes: String,
    /// When the package's truck began its route. Set once by the dispatcher.
    pub departure_time: Option<Timestamp>,
    /// When the package was dropped off. Set once by the dispatcher.
    pub delivery_time: Option<Timestamp>,
}

impl Package {
    /// Creates a new package which is not yet on any route.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PackageId,
        address: String,
        city: String,
        state: String,
        zip: String,
        deadline: Deadline,
        weight: f64,
        notes: String,
    ) -> Self {
        Self { id, address, city, state, zip, deadline, weight, notes, departure_time: None, delivery_time: None }
    }

    /// Derives the delivery status at the given query time from the lifecycle timestamps.
    pub fn status_at(&self, at: Timestamp) -> DeliveryStatus {
        DeliveryStatus::derive(self.departure_time, self.delivery_time, at)
    }
}

/// The single owner of all package records, keyed by package id.
///
/// Lookups and updates are O(1) amortized. Other components borrow records
/// from here; only the dispatcher writes the lifecycle timestamps.
#[derive(Default)]
pub struct PackageStore {
    packages: IntMap<PackageId, Package>,
}

impl PackageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a package, overwriting any record with the same id.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.packages.insert(package.id, package)
    }

    /// Returns the package with the given id, if present.
    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    /// Returns a mutable reference to the package with the given id, if present.
    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        self.packages.get_mut(&id)
    }

    /// Removes the package with the given id, returning it if present.
    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        self.packages.remove(&id)
    }

    /// Returns the amount of stored packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Returns all package ids in ascending order for deterministic iteration.
    pub fn ids_sorted(&self) -> Vec<PackageId> {
        let mut ids = self.packages.keys().copied().collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }
}

/// Represents the mid-morning address correction rule: one package whose real
/// address is unknown until a fixed correction time.
#[derive(Clone, Debug)]
pub struct AddressCorrection {
    /// Id of the affected package.
    pub package_id: PackageId,
    /// When the corrected address becomes known.
    pub effective_at: Timestamp,
    /// The incorrect street address the package is listed under before the correction.
    pub old_address: String,
    /// The incorrect postal code before the correction.
    pub old_zip: String,
    /// The real street address.
    pub new_address: String,
    /// The real postal code.
    pub new_zip: String,
}

impl AddressCorrection {
    /// Checks whether this correction concerns the given package.
    pub fn applies_to(&self, id: PackageId) -> bool {
        self.package_id == id
    }

    /// Checks whether the corrected address is known at the given time.
    pub fn is_effective(&self, at: Timestamp) -> bool {
        at >= self.effective_at
    }

    /// Returns the address/zip pair to display as of the given time.
    pub fn display_pair(&self, at: Timestamp) -> (&str, &str) {
        if self.is_effective(at) {
            (self.new_address.as_str(), self.new_zip.as_str())
        } else {
            (self.old_address.as_str(), self.old_zip.as_str())
        }
    }

    /// Overwrites the stored address fields with the corrected values.
    pub fn apply(&self, package: &mut Package) {
        package.address = self.new_address.clone();
        package.zip = self.new_zip.clone();
    }
}
