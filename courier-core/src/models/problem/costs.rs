#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Distance, Location};

/// A sentinel distance for an unusable edge: missing in both matrix triangles
/// or out of range. The greedy selection must never pick it while any finite
/// alternative exists.
pub const UNREACHABLE: Distance = f64::INFINITY;

/// Provides the way to get routing distance between two locations.
pub trait TransportCost {
    /// Returns travel distance between two locations.
    fn distance(&self, from: Location, to: Location) -> Distance;
}

/// A transport cost backed by a square or lower-triangular distance matrix.
///
/// The matrix is symmetric by contract: a lookup falls back to the mirrored
/// cell when its own cell is empty, so `distance(a, b) == distance(b, a)`
/// regardless of which triangle is populated.
pub struct MatrixTransportCost {
    cells: Vec<Vec<Option<Distance>>>,
}

impl MatrixTransportCost {
    /// Creates a new matrix from raw cells, `None` meaning an empty cell.
    pub fn new(cells: Vec<Vec<Option<Distance>>>) -> Self {
        Self { cells }
    }

    fn cell(&self, row: Location, col: Location) -> Option<Distance> {
        self.cells.get(row).and_then(|row| row.get(col)).copied().flatten()
    }
}

impl TransportCost for MatrixTransportCost {
    fn distance(&self, from: Location, to: Location) -> Distance {
        self.cell(from, to).or_else(|| self.cell(to, from)).unwrap_or(UNREACHABLE)
    }
}
