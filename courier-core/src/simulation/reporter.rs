#[cfg(test)]
#[path = "../../tests/unit/simulation/reporter_test.rs"]
mod reporter_test;

use crate::models::common::{DeliveryStatus, Timestamp};
use crate::models::problem::{AddressCorrection, Package, PackageId, PackageStore};

/// A read-only projection of one package's display state at a query time.
///
/// Derived as a pure function of the stored record and the query time; the
/// record itself is never touched, so repeated queries cannot drift it.
#[derive(Clone, Debug)]
pub struct PackageView {
    /// Package id.
    pub package_id: PackageId,
    /// Street address as of the query time.
    pub address: String,
    /// Postal code as of the query time.
    pub zip: String,
    /// Deadline as written in the source data.
    pub deadline: String,
    /// Derived delivery status.
    pub status: DeliveryStatus,
    /// Delivery time, present only when the status is `Delivered`.
    pub delivery_time: Option<Timestamp>,
}

/// Projects the display state of a package as of the query time.
///
/// For the address-correction package the displayed address/zip pair comes
/// strictly from the correction rule: the incorrect pair before the correction
/// time, the corrected pair at or after it, regardless of what the stored
/// record currently says.
pub fn package_view(package: &Package, correction: Option<&AddressCorrection>, at: Timestamp) -> PackageView {
    let status = package.status_at(at);

    let (address, zip) = correction
        .filter(|correction| correction.applies_to(package.id))
        .map(|correction| {
            let (address, zip) = correction.display_pair(at);
            (address.to_string(), zip.to_string())
        })
        .unwrap_or_else(|| (package.address.clone(), package.zip.clone()));

    PackageView {
        package_id: package.id,
        address,
        zip,
        deadline: package.deadline.raw.clone(),
        status,
        delivery_time: if status == DeliveryStatus::Delivered { package.delivery_time } else { None },
    }
}

/// Projects the display state of every stored package, ascending by id.
pub fn status_board(store: &PackageStore, correction: Option<&AddressCorrection>, at: Timestamp) -> Vec<PackageView> {
    store
        .ids_sorted()
        .into_iter()
        .filter_map(|id| store.get(id))
        .map(|package| package_view(package, correction, at))
        .collect()
}
