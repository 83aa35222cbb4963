use super::*;
use courier_core::prelude::{DeliveryStatus, END_OF_DAY, TransportCost, UNREACHABLE};

fn create_reader(data: &str) -> BufReader<&[u8]> {
    BufReader::new(data.as_bytes())
}

#[test]
fn can_read_packages_with_notes_column() {
    let data = "id,address,city,state,zip,deadline,weight,notes\n\
                1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,\n\
                9,300 State St,Salt Lake City,UT,84103,EOD,2,Wrong address listed";

    let store = read_packages(create_reader(data)).unwrap();

    assert_eq!(store.len(), 2);

    let first = store.get(1).unwrap();
    assert_eq!(first.address, "195 W Oakland Ave");
    assert_eq!(first.zip, "84115");
    assert_eq!(first.deadline.time, 37800.);
    assert_eq!(first.weight, 21.);
    assert_eq!(first.notes, "");
    assert_eq!(first.status_at(0.), DeliveryStatus::AtHub);

    let gated = store.get(9).unwrap();
    assert_eq!(gated.deadline.time, END_OF_DAY);
    assert_eq!(gated.notes, "Wrong address listed");
}

#[test]
fn can_read_packages_without_notes_column() {
    let data = "id,address,city,state,zip,deadline,weight\n\
                7,2530 S 500 E,Salt Lake City,UT,84106,EOD,40";

    let store = read_packages(create_reader(data)).unwrap();

    assert_eq!(store.get(7).unwrap().notes, "");
}

#[test]
fn can_reject_package_with_malformed_deadline() {
    let data = "id,address,city,state,zip,deadline,weight,notes\n\
                1,195 W Oakland Ave,Salt Lake City,UT,84115,sometime,21,";

    assert!(read_packages(create_reader(data)).is_err());
}

#[test]
fn can_reject_empty_package_data_set() {
    let data = "id,address,city,state,zip,deadline,weight,notes\n";

    assert!(read_packages(create_reader(data)).is_err());
}

#[test]
fn can_read_addresses_from_second_column() {
    let data = "0,4001 South 700 East\n1,195 W Oakland Ave\n2,2530 S 500 E";

    let addresses = read_addresses(create_reader(data)).unwrap();

    assert_eq!(addresses.len(), 3);
    assert_eq!(addresses.get(1), Some("195 W Oakland Ave"));
    assert_eq!(addresses.resolve("195 W Oakland Ave"), Some(1));
}

#[test]
fn can_reject_address_row_without_address_column() {
    assert!(read_addresses(create_reader("lonely value")).is_err());
}

#[test]
fn can_read_distances_with_blank_cells() {
    let data = "0,7.2,3.8\n,0,1.5\n3.8,,0";

    let matrix = read_distances(create_reader(data)).unwrap();

    // blank cells fall back to the mirrored ones
    assert_eq!(matrix.distance(1, 0), 7.2);
    assert_eq!(matrix.distance(2, 1), 1.5);
    assert_eq!(matrix.distance(0, 2), 3.8);
}

#[test]
fn can_treat_unparseable_cell_as_unreachable() {
    let data = "0,x\nx,0";

    let matrix = read_distances(create_reader(data)).unwrap();

    assert_eq!(matrix.distance(0, 1), UNREACHABLE);
}

#[test]
fn can_reject_empty_distance_table() {
    assert!(read_distances(create_reader("")).is_err());
}
