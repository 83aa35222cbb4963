//! Rendering of simulation results: colored console status lines and the
//! serializable run report.

#[cfg(test)]
#[path = "../tests/unit/report_test.rs"]
mod report_test;

use courier_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[93m";
const RESET: &str = "\u{1b}[0m";

/// Formats one status-board line, colored by delivery status.
pub fn format_status_line(view: &PackageView) -> String {
    let color = match view.status {
        DeliveryStatus::Delivered => GREEN,
        DeliveryStatus::EnRoute => YELLOW,
        DeliveryStatus::AtHub => RESET,
    };
    let delivered = view.delivery_time.map_or_else(|| "not yet available".to_string(), format_clock);

    format!(
        "{color}Package {}: {}. Address: {}, {}. Deadline: {}. Delivery time: {delivered}{RESET}",
        view.package_id, view.status, view.address, view.zip, view.deadline
    )
}

/// A serializable snapshot of one truck after the run.
#[derive(Serialize)]
pub struct TruckReport {
    pub truck_id: usize,
    pub mileage: f64,
    pub finish_time: Option<String>,
}

/// A serializable snapshot of one package after the run.
#[derive(Serialize)]
pub struct PackageReport {
    pub package_id: PackageId,
    pub address: String,
    pub zip: String,
    pub deadline: String,
    pub status: String,
    pub delivery_time: Option<String>,
    pub deadline_met: bool,
}

/// The whole run report written with `--out-result`.
#[derive(Serialize)]
pub struct RunReport {
    pub total_mileage: f64,
    pub all_deadlines_met: bool,
    pub trucks: Vec<TruckReport>,
    pub packages: Vec<PackageReport>,
}

/// Builds the run report from the fleet summary and the end-of-day views.
pub fn create_run_report(summary: &FleetSummary, views: &[PackageView]) -> RunReport {
    let trucks = summary
        .trucks
        .iter()
        .map(|truck| TruckReport {
            truck_id: truck.id,
            mileage: truck.mileage,
            finish_time: truck.finish_time.map(format_clock),
        })
        .collect();

    let packages = views
        .iter()
        .map(|view| {
            let met = summary
                .checks
                .iter()
                .find(|check| check.package_id == view.package_id)
                .is_some_and(|check| check.met);

            PackageReport {
                package_id: view.package_id,
                address: view.address.clone(),
                zip: view.zip.clone(),
                deadline: view.deadline.clone(),
                status: view.status.to_string(),
                delivery_time: view.delivery_time.map(format_clock),
                deadline_met: met,
            }
        })
        .collect();

    RunReport {
        total_mileage: summary.total_mileage,
        all_deadlines_met: summary.all_deadlines_met,
        trucks,
        packages,
    }
}

/// Writes the run report as pretty-printed json.
pub fn write_run_report<W: Write>(writer: &mut BufWriter<W>, report: &RunReport) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write run report: {err}").into())
}
