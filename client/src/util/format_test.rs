use super::*;
use mission::catalog::RECENT_MISSIONS;

#[test]
fn localized_number_uses_decimal_comma() {
    assert_eq!(localized_number(57.9), "57,9");
    assert_eq!(localized_number(0.38), "0,38");
    assert_eq!(localized_number(12.0), "12");
}

#[test]
fn localized_number_groups_from_five_digits() {
    assert_eq!(localized_number(4495.1), "4495,1");
    assert_eq!(localized_number(12104.0), "12\u{a0}104");
    assert_eq!(localized_number(139_820.0), "139\u{a0}820");
    assert_eq!(localized_number(1_234_567.0), "1\u{a0}234\u{a0}567");
}

#[test]
fn localized_number_rounds_to_three_fraction_digits() {
    assert_eq!(localized_number(1.23456), "1,235");
    assert_eq!(localized_number(-0.0001), "0");
    assert_eq!(localized_number(-65.5), "-65,5");
}

#[test]
fn distance_is_in_million_km() {
    assert_eq!(format_distance(227.9), "227,9 mln km");
}

#[test]
fn temperature_marks_positive_values() {
    assert_eq!(format_temperature(464.0), "+464°C");
    assert_eq!(format_temperature(-65.0), "-65°C");
    assert_eq!(format_temperature(0.0), "0°C");
}

#[test]
fn gravity_has_two_decimals() {
    assert_eq!(format_gravity(0.38), "0.38g");
    assert_eq!(format_gravity(2.5), "2.50g");
}

#[test]
fn diameter_and_danger() {
    assert_eq!(format_diameter(6779.0), "6779 km");
    assert_eq!(format_danger(7), "7/10");
}

#[test]
fn danger_width_is_clamped() {
    assert_eq!(danger_width_style(40.0), "width: 40%");
    assert_eq!(danger_width_style(140.0), "width: 100%");
    assert_eq!(danger_width_style(-5.0), "width: 0%");
}

#[test]
fn status_badge_class_uses_slug() {
    assert_eq!(
        status_badge_class(ExplorationStatus::InProgress),
        "status-badge status-badge--in-progress"
    );
}

#[test]
fn mission_tooltip_names_destination_and_crew() {
    assert_eq!(mission_tooltip(&RECENT_MISSIONS[0]), "Cel: Mars · Załoga: 6");
}
