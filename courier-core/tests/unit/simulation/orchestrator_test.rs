use super::*;
use crate::helpers::models::*;
use crate::helpers::simulation::*;
use crate::models::problem::Package;

fn create_three_truck_rows() -> Vec<Vec<f64>> {
    vec![
        vec![0., 9., 18., 9.],
        vec![9., 0., 1., 1.],
        vec![18., 1., 0., 1.],
        vec![9., 1., 1., 0.],
    ]
}

fn create_three_truck_plans(not_before: f64) -> Vec<TruckPlan> {
    vec![
        TruckPlan { truck_id: 1, package_ids: vec![1], departure: Departure::At(28800.) },
        TruckPlan { truck_id: 2, package_ids: vec![2], departure: Departure::At(32700.) },
        TruckPlan { truck_id: 3, package_ids: vec![3], departure: Departure::WhenDriverFree { not_before } },
    ]
}

fn create_three_truck_packages() -> Vec<Package> {
    vec![
        create_test_package(1, "Stop A", "EOD"),
        create_test_package(2, "Stop B", "EOD"),
        create_test_package(3, "Stop C", "EOD"),
    ]
}

parameterized_test! {can_depart_when_driver_becomes_free, (not_before, expected), {
    // truck 1 is back at the hub at 09:00, truck 2 not before 11:05: the third
    // truck leaves when the first driver returns, but never before its floor
    let mut simulation = create_test_simulation(
        create_three_truck_packages(),
        create_three_truck_rows(),
        create_three_truck_plans(not_before),
        None,
    );

    simulation.run().unwrap();

    assert_eq!(simulation.store().get(3).unwrap().departure_time, Some(expected));
}}

can_depart_when_driver_becomes_free! {
    case_01_floor_wins: (32700., 32700.),
    case_02_driver_return_wins: (30600., 32400.),
}

#[test]
fn can_run_whole_fleet_sequentially() {
    let mut simulation = create_test_simulation(
        create_three_truck_packages(),
        create_three_truck_rows(),
        create_three_truck_plans(32700.),
        None,
    );

    let summary = simulation.run().unwrap();

    assert_eq!(summary.trucks.iter().map(|truck| truck.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(summary.trucks[0].finish_time, Some(32400.));
    assert_eq!(summary.total_mileage, 18. + 36. + 18.);
    assert!(summary.all_deadlines_met);
    assert_eq!(summary.checks.len(), 3);
}

#[test]
fn can_set_both_timestamps_for_every_package() {
    let mut simulation = create_test_simulation(
        create_three_truck_packages(),
        create_three_truck_rows(),
        create_three_truck_plans(32700.),
        None,
    );

    simulation.run().unwrap();

    for id in simulation.store().ids_sorted() {
        let package = simulation.store().get(id).unwrap();
        let (departure, delivery) = (package.departure_time.unwrap(), package.delivery_time.unwrap());

        assert!(delivery >= departure, "package {id} delivered before departure");
    }
}

#[test]
fn can_flag_missed_deadline() {
    // the only stop is an hour away, but the deadline is five minutes in
    let mut simulation = create_test_simulation(
        vec![create_test_package(1, "Stop B", "8:05 AM")],
        create_three_truck_rows(),
        vec![TruckPlan { truck_id: 1, package_ids: vec![1], departure: Departure::At(28800.) }],
        None,
    );

    let summary = simulation.run().unwrap();

    assert!(!summary.all_deadlines_met);
    assert_eq!(summary.checks.len(), 1);
    assert!(!summary.checks[0].met);
    assert_eq!(summary.checks[0].delivery_time, Some(32400.));
}

#[test]
fn can_verify_undelivered_package_as_missed() {
    // package 2 is never assigned to any truck
    let mut simulation = create_test_simulation(
        vec![create_test_package(1, "Stop A", "EOD"), create_test_package(2, "Stop B", "EOD")],
        create_three_truck_rows(),
        vec![TruckPlan { truck_id: 1, package_ids: vec![1], departure: Departure::At(28800.) }],
        None,
    );

    let summary = simulation.run().unwrap();

    assert!(!summary.all_deadlines_met);
    let unassigned = summary.checks.iter().find(|check| check.package_id == 2).unwrap();
    assert!(!unassigned.met);
    assert!(unassigned.delivery_time.is_none());
}

#[test]
fn can_propagate_route_failure() {
    let mut simulation = create_test_simulation(
        vec![create_test_package(1, "zzz qqq", "EOD")],
        create_three_truck_rows(),
        vec![TruckPlan { truck_id: 1, package_ids: vec![1], departure: Departure::At(28800.) }],
        None,
    );

    assert!(simulation.run().is_err());
}

#[test]
fn can_capture_log_messages() {
    use std::sync::{Arc, Mutex};

    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));
    let sink = messages.clone();
    let mut simulation = create_test_simulation(
        create_three_truck_packages(),
        create_three_truck_rows(),
        create_three_truck_plans(32700.),
        None,
    )
    .with_logger(Arc::new(move |msg| sink.lock().unwrap().push(msg.to_string())));

    simulation.run().unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.contains("truck 1 departing at 08:00")));
    assert!(messages.iter().any(|msg| msg.contains("fleet total")));
}
