use super::*;

#[test]
fn iso_datetime_renders_date_and_minutes() {
    assert_eq!(format_timestamp("2025-03-05T14:30:00Z"), "2025-03-05 14:30");
}

#[test]
fn fractional_seconds_and_offsets_are_dropped() {
    assert_eq!(format_timestamp("2025-03-05T14:30:12.345+05:30"), "2025-03-05 14:30");
}

#[test]
fn empty_string_stays_empty() {
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn non_iso_strings_pass_through() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}

#[test]
fn short_time_component_is_kept_whole() {
    assert_eq!(format_timestamp("2025-03-05T14"), "2025-03-05 14");
}
