use super::*;

parameterized_test! {can_parse_clock, (text, expected), {
    assert_eq!(parse_clock(text).unwrap(), expected);
}}

can_parse_clock! {
    case_01: ("8:00", 28800.),
    case_02: ("08:00", 28800.),
    case_03: ("13:05", 47100.),
    case_04: ("0:00", 0.),
    case_05: ("23:59", 86340.),
    case_06: (" 10:20 ", 37200.),
}

parameterized_test! {can_reject_malformed_clock, text, {
    assert!(parse_clock(text).is_err());
}}

can_reject_malformed_clock! {
    case_01: "24:00",
    case_02: "8:61",
    case_03: "8",
    case_04: "eight:thirty",
    case_05: "",
}

#[test]
fn can_format_clock() {
    assert_eq!(format_clock(29400.), "08:10");
    assert_eq!(format_clock(0.), "00:00");
    assert_eq!(format_clock(86340.), "23:59");
}

#[test]
fn can_format_clock_wrapping_past_midnight() {
    assert_eq!(format_clock(25. * 3600.), "01:00");
}

parameterized_test! {can_parse_deadline, (text, expected), {
    let deadline = Deadline::parse(text).unwrap();

    assert_eq!(deadline.raw, text);
    assert_eq!(deadline.time, expected);
}}

can_parse_deadline! {
    case_01_eod: ("EOD", END_OF_DAY),
    case_02_morning: ("10:30 AM", 37800.),
    case_03_single_digit: ("9:00 AM", 32400.),
    case_04_noon: ("12:00 PM", 43200.),
    case_05_after_noon: ("5:00 PM", 61200.),
    case_06_midnight: ("12:15 AM", 900.),
}

parameterized_test! {can_reject_malformed_deadline, text, {
    assert!(Deadline::parse(text).is_err());
}}

can_reject_malformed_deadline! {
    case_01: "10:30",
    case_02: "13:00 PM",
    case_03: "10:30 XM",
    case_04: "whenever",
    case_05: "0:30 AM",
}

parameterized_test! {can_derive_status, (departure, delivery, at, expected), {
    assert_eq!(DeliveryStatus::derive(departure, delivery, at), expected);
}}

can_derive_status! {
    case_01_no_route_yet: (None, None, 36000., DeliveryStatus::AtHub),
    case_02_before_departure: (Some(28800.), None, 18000., DeliveryStatus::AtHub),
    case_03_departed_undelivered: (Some(28800.), None, 36000., DeliveryStatus::EnRoute),
    case_04_before_delivery: (Some(28800.), Some(37200.), 36000., DeliveryStatus::EnRoute),
    case_05_at_delivery: (Some(28800.), Some(37200.), 37200., DeliveryStatus::Delivered),
    case_06_after_delivery: (Some(28800.), Some(37200.), 50000., DeliveryStatus::Delivered),
    case_07_at_departure: (Some(28800.), None, 28800., DeliveryStatus::EnRoute),
}

#[test]
fn can_create_end_of_day_deadline() {
    let deadline = Deadline::end_of_day();

    assert_eq!(deadline.raw, "EOD");
    assert_eq!(deadline.time, END_OF_DAY);
}
