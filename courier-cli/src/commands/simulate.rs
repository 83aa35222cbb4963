#[cfg(test)]
#[path = "../../tests/unit/commands/simulate_test.rs"]
mod simulate_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use courier_core::prelude::*;
use courier_cli::import::{read_addresses, read_distances, read_packages};
use courier_cli::report::{create_run_report, format_status_line, write_run_report};
use std::io::BufReader;
use std::sync::Arc;

const PACKAGES_ARG_NAME: &str = "packages";
const DISTANCES_ARG_NAME: &str = "distances";
const ADDRESSES_ARG_NAME: &str = "addresses";
const AT_ARG_NAME: &str = "at";
const INTERACTIVE_ARG_NAME: &str = "interactive";
const OUT_RESULT_ARG_NAME: &str = "out-result";

// The strategic manual truck loading which satisfies all delivery constraints.
const TRUCK1_PACKAGES: &[PackageId] = &[1, 13, 14, 15, 16, 19, 20, 29, 30, 31, 34, 37, 40];
const TRUCK2_PACKAGES: &[PackageId] = &[3, 6, 18, 25, 27, 28, 32, 33, 35, 36, 38, 39];
const TRUCK3_PACKAGES: &[PackageId] = &[2, 4, 5, 7, 8, 9, 10, 11, 12, 17, 21, 22, 23, 24, 26];

const TRUCK1_DEPARTURE: Timestamp = 8. * 3600.;
const TRUCK2_DEPARTURE: Timestamp = 9. * 3600. + 5. * 60.;
const CORRECTION_TIME: Timestamp = 10. * 3600. + 20. * 60.;

/// Package 9 is listed under a wrong address until dispatch learns the real
/// one at 10:20.
fn create_address_correction() -> AddressCorrection {
    AddressCorrection {
        package_id: 9,
        effective_at: CORRECTION_TIME,
        old_address: "300 State St".to_string(),
        old_zip: "84103".to_string(),
        new_address: "410 S State St".to_string(),
        new_zip: "84111".to_string(),
    }
}

/// The daily plan: two drivers leave at 08:00 and 09:05, the third truck
/// waits for whichever driver returns first.
fn create_daily_plans() -> Vec<TruckPlan> {
    vec![
        TruckPlan { truck_id: 1, package_ids: TRUCK1_PACKAGES.to_vec(), departure: Departure::At(TRUCK1_DEPARTURE) },
        TruckPlan { truck_id: 2, package_ids: TRUCK2_PACKAGES.to_vec(), departure: Departure::At(TRUCK2_DEPARTURE) },
        TruckPlan {
            truck_id: 3,
            package_ids: TRUCK3_PACKAGES.to_vec(),
            departure: Departure::WhenDriverFree { not_before: TRUCK2_DEPARTURE },
        },
    ]
}

pub fn get_simulate_command() -> Command {
    Command::new("simulate")
        .about("Runs the daily delivery routes and verifies deadline compliance")
        .arg(
            Arg::new(PACKAGES_ARG_NAME)
                .help("Sets the package data set file to use")
                .long(PACKAGES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(DISTANCES_ARG_NAME)
                .help("Sets the distance table file to use")
                .long(DISTANCES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(ADDRESSES_ARG_NAME)
                .help("Sets the canonical address list file to use")
                .long(ADDRESSES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(AT_ARG_NAME)
                .help("Prints the package status board at the given time (HH:MM), repeatable")
                .long(AT_ARG_NAME)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(INTERACTIVE_ARG_NAME)
                .help("Queries package statuses interactively after the run")
                .short('i')
                .long(INTERACTIVE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for the json run report")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
}

pub fn run_simulate(matches: &ArgMatches) -> GenericResult<()> {
    let packages_path = matches.get_one::<String>(PACKAGES_ARG_NAME).ok_or("packages file is not set")?;
    let distances_path = matches.get_one::<String>(DISTANCES_ARG_NAME).ok_or("distances file is not set")?;
    let addresses_path = matches.get_one::<String>(ADDRESSES_ARG_NAME).ok_or("addresses file is not set")?;

    let store = read_packages(BufReader::new(open_file(packages_path, "packages")))?;
    let transport = read_distances(BufReader::new(open_file(distances_path, "distances")))?;
    let addresses = read_addresses(BufReader::new(open_file(addresses_path, "addresses")))?;

    let plans = create_daily_plans();
    let config = SimulationConfig::new(plans.clone(), Some(create_address_correction()));

    let mut simulation = Simulation::new(store, addresses, Arc::new(transport), config)
        .with_logger(Arc::new(|msg| println!("{msg}")));

    let summary = simulation.run()?;
    print_summary(&summary);

    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let report = create_run_report(&summary, &simulation.fleet_status(END_OF_DAY));
        let mut writer = create_write_buffer(Some(create_file(path, "out result")));
        write_run_report(&mut writer, &report)?;
    }

    if let Some(queries) = matches.get_many::<String>(AT_ARG_NAME) {
        for query in queries {
            print_status_board(&simulation, &plans, parse_clock(query)?);
        }
    }

    if matches.get_flag(INTERACTIVE_ARG_NAME) {
        run_query_loop(&simulation, &plans)?;
    }

    Ok(())
}

fn print_summary(summary: &FleetSummary) {
    println!("\n--- delivery deadlines ---");
    for check in summary.checks.iter().filter(|check| !check.met) {
        let delivered = check.delivery_time.map_or_else(|| "was not delivered".to_string(), |time| {
            format!("delivered at {}", format_clock(time))
        });
        println!("FAILED: package {} missed its deadline {}: {}", check.package_id, check.deadline.raw, delivered);
    }
    if summary.all_deadlines_met {
        println!("all packages were delivered on time");
    }

    println!("\n--- mileage ---");
    for truck in &summary.trucks {
        let finish = truck.finish_time.map_or_else(|| "n/a".to_string(), format_clock);
        println!("truck {}: {:.1} miles, back at the hub at {}", truck.id, truck.mileage, finish);
    }
    println!("fleet total: {:.1} miles", summary.total_mileage);
}

fn print_status_board(simulation: &Simulation, plans: &[TruckPlan], at: Timestamp) {
    println!("\n--- package statuses at {} ---", format_clock(at));
    for plan in plans {
        println!("Truck {}", plan.truck_id);
        for id in &plan.package_ids {
            if let Some(view) = simulation.package_status(*id, at) {
                println!("{}", format_status_line(&view));
            }
        }
    }
}

/// Reads query times from stdin until `exit`; a malformed time is rejected
/// and asked again without touching the simulation state.
fn run_query_loop(simulation: &Simulation, plans: &[TruckPlan]) -> GenericResult<()> {
    let stdin = std::io::stdin();

    loop {
        println!("\nEnter a time (HH:MM) to check package statuses, or type 'exit' to quit:");

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        match parse_clock(line) {
            Ok(at) => print_status_board(simulation, plans, at),
            Err(err) => println!("invalid time: {err}"),
        }
    }
}
