#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::Timestamp;
use crate::utils::GenericResult;

const SECONDS_PER_HOUR: f64 = 3600.;
const SECONDS_PER_MINUTE: f64 = 60.;

/// A sentinel deadline meaning "any time before the end of the working day", stored as 23:59.
pub const END_OF_DAY: Timestamp = 23. * SECONDS_PER_HOUR + 59. * SECONDS_PER_MINUTE;

/// Parses a 24h wall clock string (`H:MM` or `HH:MM`) into a timestamp.
pub fn parse_clock(text: &str) -> GenericResult<Timestamp> {
    let (hours, minutes) = text
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("cannot parse time from '{text}': expected H:MM"))?;

    let hours = hours.parse::<u32>().map_err(|err| format!("cannot parse hours from '{text}': {err}"))?;
    let minutes = minutes.parse::<u32>().map_err(|err| format!("cannot parse minutes from '{text}': {err}"))?;

    if hours > 23 || minutes > 59 {
        return Err(format!("time out of range in '{text}'").into());
    }

    Ok(f64::from(hours) * SECONDS_PER_HOUR + f64::from(minutes) * SECONDS_PER_MINUTE)
}

/// Formats a timestamp as a 24h `HH:MM` string, wrapping times past midnight.
pub fn format_clock(timestamp: Timestamp) -> String {
    let total_seconds = timestamp.max(0.) as u64;
    let hours = (total_seconds / 3600) % 24;
    let minutes = (total_seconds % 3600) / 60;

    format!("{hours:02}:{minutes:02}")
}

/// Represents a delivery deadline: the original text plus its normalized time-of-day offset.
#[derive(Clone, Debug)]
pub struct Deadline {
    /// Deadline as written in the source data, e.g. `EOD` or `10:30 AM`.
    pub raw: String,
    /// Normalized offset from midnight.
    pub time: Timestamp,
}

impl Deadline {
    /// Parses deadline text: `EOD` or `H:MM AM/PM`.
    pub fn parse(text: &str) -> GenericResult<Self> {
        let raw = text.trim().to_string();

        if raw.eq_ignore_ascii_case("EOD") {
            return Ok(Self { raw, time: END_OF_DAY });
        }

        let (clock, meridiem) = raw
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("cannot parse deadline from '{text}': expected 'H:MM AM/PM' or 'EOD'"))?;

        let (hours, minutes) =
            clock.split_once(':').ok_or_else(|| format!("cannot parse deadline clock from '{text}'"))?;
        let hours = hours.parse::<u32>().map_err(|err| format!("cannot parse deadline hours from '{text}': {err}"))?;
        let minutes =
            minutes.parse::<u32>().map_err(|err| format!("cannot parse deadline minutes from '{text}': {err}"))?;

        if !(1..=12).contains(&hours) || minutes > 59 {
            return Err(format!("deadline clock out of range in '{text}'").into());
        }

        let hours = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => hours % 12,
            "PM" if hours == 12 => 12,
            "PM" => hours + 12,
            other => return Err(format!("unknown meridiem '{other}' in deadline '{text}'").into()),
        };

        Ok(Self { raw, time: f64::from(hours) * SECONDS_PER_HOUR + f64::from(minutes) * SECONDS_PER_MINUTE })
    }

    /// Returns an end-of-day deadline.
    pub fn end_of_day() -> Self {
        Self { raw: "EOD".to_string(), time: END_OF_DAY }
    }
}

/// Represents the delivery lifecycle state of a package at some point in time.
///
/// The state is always derived from the departure and delivery timestamps, it is
/// never stored: exactly one variant holds for any query time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeliveryStatus {
    /// The package has not yet left on a route.
    AtHub,
    /// The package is on a truck which has departed but not yet dropped it off.
    EnRoute,
    /// The package has been dropped off at its destination.
    Delivered,
}

impl DeliveryStatus {
    /// Derives the status at a given query time from the two lifecycle timestamps.
    pub fn derive(departure: Option<Timestamp>, delivery: Option<Timestamp>, at: Timestamp) -> Self {
        match (departure, delivery) {
            (None, _) => DeliveryStatus::AtHub,
            (Some(departure), _) if at < departure => DeliveryStatus::AtHub,
            (_, None) => DeliveryStatus::EnRoute,
            (_, Some(delivery)) if at < delivery => DeliveryStatus::EnRoute,
            _ => DeliveryStatus::Delivered,
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::AtHub => write!(f, "At Hub"),
            DeliveryStatus::EnRoute => write!(f, "En Route"),
            DeliveryStatus::Delivered => write!(f, "Delivered"),
        }
    }
}
