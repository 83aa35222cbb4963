//! Import from the csv formats of the package list, the canonical address
//! list and the distance table.

#[cfg(test)]
#[path = "../../tests/unit/import/csv_test.rs"]
mod csv_test;

use courier_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

#[derive(Debug, Deserialize)]
struct CsvPackage {
    id: PackageId,
    address: String,
    city: String,
    state: String,
    zip: String,
    deadline: String,
    weight: f64,
    notes: Option<String>,
}

/// Reads the package data set into a store.
///
/// Expects a header row `id,address,city,state,zip,deadline,weight,notes`;
/// the notes column may be missing. Deadlines are `EOD` or `H:MM AM/PM`.
pub fn read_packages<R: Read>(reader: BufReader<R>) -> GenericResult<PackageStore> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut store = PackageStore::new();

    for entry in reader.deserialize() {
        let row: CsvPackage = entry.map_err(|err| format!("cannot read package row: {err}"))?;
        let deadline = Deadline::parse(&row.deadline)?;

        store.insert(Package::new(
            row.id,
            row.address,
            row.city,
            row.state,
            row.zip,
            deadline,
            row.weight,
            row.notes.unwrap_or_default(),
        ));
    }

    if store.is_empty() {
        return Err("package data set is empty".into());
    }

    Ok(store)
}

/// Reads the canonical address list: row order defines location ids, the
/// address itself sits in the second column.
pub fn read_addresses<R: Read>(reader: BufReader<R>) -> GenericResult<AddressIndex> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
    let mut addresses = vec![];

    for (row, entry) in reader.records().enumerate() {
        let record = entry.map_err(|err| format!("cannot read address row {row}: {err}"))?;
        let address = record.get(1).ok_or_else(|| format!("address row {row} has no address column"))?;

        addresses.push(address.trim().to_string());
    }

    if addresses.is_empty() {
        return Err("address list is empty".into());
    }

    Ok(AddressIndex::new(addresses))
}

/// Reads the distance table indexed by location id.
///
/// Blank and non-numeric cells become empty: the matrix falls back to the
/// mirrored cell on lookup and reports unusable edges as unreachable.
pub fn read_distances<R: Read>(reader: BufReader<R>) -> GenericResult<MatrixTransportCost> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
    let mut cells = vec![];

    for entry in reader.records() {
        let record = entry.map_err(|err| format!("cannot read distance row: {err}"))?;

        cells.push(record.iter().map(|cell| cell.trim().parse::<Distance>().ok()).collect());
    }

    if cells.is_empty() {
        return Err("distance table is empty".into());
    }

    Ok(MatrixTransportCost::new(cells))
}
