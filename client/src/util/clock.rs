//! Current calendar date for date-only validation.
//!
//! In the browser this is the user's local date, read through `js_sys::Date`.
//! Server-side and in native tests it falls back to the UTC date.

use time::{Date, Month};

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Today's date with the time of day discarded.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(i32::MAX);
        // JS months are zero-based.
        let month = u8::try_from(now.get_month() + 1).ok();
        let day = u8::try_from(now.get_date()).ok();
        from_parts(year, month, day)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Build a date from raw calendar parts.
///
/// Invalid parts yield `Date::MAX`, which no availability date can exceed, so
/// a broken clock blocks submission rather than accepting past dates.
pub fn from_parts(year: i32, month: Option<u8>, day: Option<u8>) -> Date {
    month
        .and_then(|m| Month::try_from(m).ok())
        .zip(day)
        .and_then(|(m, d)| Date::from_calendar_date(year, m, d).ok())
        .unwrap_or(Date::MAX)
}
