#[cfg(test)]
#[path = "../../../tests/unit/models/problem/addresses_test.rs"]
mod addresses_test;

use crate::models::common::Location;
use rustc_hash::FxHashMap;

/// The location id of the hub, where every truck starts and ends its route.
pub const HUB: Location = 0;

/// Written forms under which the hub address is recognized, in normalized form.
const HUB_FORMS: &[&str] = &["hub", "4001 south 700 east", "4001 south 700 east salt lake city ut 84107"];

/// Resolves free-form address strings to location ids.
///
/// Wraps the canonical address list: list position is the location id used to
/// index the distance matrix. Queries may differ cosmetically from the stored
/// form (case, whitespace, directional abbreviations), so resolution is
/// layered: hub forms, then exact/substring matching, then a token-overlap
/// heuristic as the last resort.
pub struct AddressIndex {
    canonical: Vec<String>,
    normalized: Vec<String>,
    exact: FxHashMap<String, Location>,
}

impl AddressIndex {
    /// Creates a new index from the canonical address list.
    pub fn new(addresses: Vec<String>) -> Self {
        let normalized = addresses.iter().map(|address| normalize(address)).collect::<Vec<_>>();
        let exact = normalized
            .iter()
            .enumerate()
            .fold(FxHashMap::default(), |mut acc: FxHashMap<String, Location>, (location, address)| {
                acc.entry(address.clone()).or_insert(location);
                acc
            });

        Self { canonical: addresses, normalized, exact }
    }

    /// Returns the canonical address stored for the given location.
    pub fn get(&self, location: Location) -> Option<&str> {
        self.canonical.get(location).map(String::as_str)
    }

    /// Returns the amount of known locations.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Checks whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Resolves an address string to its location id.
    ///
    /// Matching tiers, in order of precedence:
    /// 1. a known written form of the hub address maps to [`HUB`];
    /// 2. case-insensitive substring match: query within canonical or canonical
    ///    within query (normalized-exact hits shortcut through a hash lookup);
    /// 3. token overlap: the first candidate containing at least two of the
    ///    query's whitespace tokens as substrings.
    ///
    /// The first candidate in list order wins within a tier. Substring matches
    /// always beat token-overlap ones; short generic tokens can still produce
    /// false positives, so production data should join on location ids instead.
    pub fn resolve(&self, query: &str) -> Option<Location> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        if HUB_FORMS.contains(&normalized.as_str()) {
            return Some(HUB);
        }

        if let Some(&location) = self.exact.get(&normalized) {
            return Some(location);
        }

        let substring_match = self
            .normalized
            .iter()
            .position(|canonical| canonical.contains(normalized.as_str()) || normalized.contains(canonical.as_str()));
        if substring_match.is_some() {
            return substring_match;
        }

        let tokens = normalized.split(' ').collect::<Vec<_>>();
        self.normalized
            .iter()
            .position(|canonical| tokens.iter().filter(|token| canonical.contains(*token)).count() >= 2)
    }
}

/// Lowercases, strips punctuation, collapses whitespace and expands the
/// directional abbreviations N/S/E/W so that e.g. `410 S State St` and
/// `410 South State St` normalize to the same form.
fn normalize(address: &str) -> String {
    address
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(|token| match token {
            "n" => "north",
            "s" => "south",
            "e" => "east",
            "w" => "west",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
