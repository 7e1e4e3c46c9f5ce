use super::*;
use time::macros::date;

#[test]
fn from_parts_builds_calendar_dates() {
    assert_eq!(from_parts(2026, Some(10), Some(16)), date!(2026 - 10 - 16));
    assert_eq!(from_parts(2024, Some(2), Some(29)), date!(2024 - 02 - 29));
}

#[test]
fn from_parts_fails_closed() {
    assert_eq!(from_parts(2026, Some(13), Some(1)), Date::MAX);
    assert_eq!(from_parts(2025, Some(2), Some(29)), Date::MAX);
    assert_eq!(from_parts(2026, None, Some(1)), Date::MAX);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_is_a_plausible_date() {
    assert!(today().year() >= 2024);
}
