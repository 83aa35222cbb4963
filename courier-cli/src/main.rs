//! A command line interface to the delivery fleet simulator.
//!

mod commands;

use clap::Command;
use commands::simulate::{get_simulate_command, run_simulate};
use std::process;

fn main() {
    let matches = Command::new("Delivery Fleet Simulator")
        .version("0.3")
        .about("Routes a small truck fleet against per-package delivery deadlines")
        .subcommand(get_simulate_command())
        .get_matches();

    match matches.subcommand() {
        Some(("simulate", simulate_matches)) => {
            if let Err(err) = run_simulate(simulate_matches) {
                eprintln!("cannot run simulation: '{err}'");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
