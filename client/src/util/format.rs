//! Display formatting for catalog values.
//!
//! Numbers follow the page's Polish locale: decimal comma, and a
//! non-breaking-space thousands separator that only kicks in from five
//! integer digits (`4495` stays compact, `139 820` is grouped).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use mission::catalog::{ExplorationStatus, Mission};

const GROUP_SEPARATOR: char = '\u{a0}';
const MAX_FRACTION_DIGITS: usize = 3;

/// Locale-style number: up to three fraction digits, trailing zeros dropped.
pub fn localized_number(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_owned();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Distance from the Sun, stored in million km.
pub fn format_distance(million_km: f64) -> String {
    format!("{} mln km", localized_number(million_km))
}

/// Mean temperature with an explicit `+` for values above zero.
pub fn format_temperature(celsius: f64) -> String {
    let sign = if celsius > 0.0 { "+" } else { "" };
    format!("{sign}{celsius}°C")
}

/// Surface gravity relative to Earth, two decimals.
pub fn format_gravity(g: f64) -> String {
    format!("{g:.2}g")
}

pub fn format_diameter(km: f64) -> String {
    format!("{} km", localized_number(km))
}

pub fn format_danger(level: u8) -> String {
    format!("{level}/10")
}

/// Inline style width for a danger bar.
pub fn danger_width_style(percent: f64) -> String {
    format!("width: {}%", percent.clamp(0.0, 100.0))
}

/// CSS classes for a status badge.
pub fn status_badge_class(status: ExplorationStatus) -> String {
    format!("status-badge status-badge--{}", status.as_str())
}

/// Tooltip text for a mission row.
pub fn mission_tooltip(mission: &Mission) -> String {
    format!("Cel: {} · Załoga: {}", mission.destination, mission.crew_size)
}
