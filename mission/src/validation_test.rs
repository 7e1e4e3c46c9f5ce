use super::*;
use crate::application::Step;
use time::macros::date;

fn ctx() -> ValidationContext {
    ValidationContext::new(date!(2026 - 10 - 16))
}

fn valid_application() -> MissionApplication {
    MissionApplication {
        full_name: "Jan Kowalski".to_owned(),
        email: "jan@kosmonauta.pl".to_owned(),
        callsign: "PL-4521".to_owned(),
        role: Some(CrewRole::Pilot),
        preferred_destination: "mars".to_owned(),
        experience_level: 3,
        motivation: "Od dziecka marzę o locie na Marsa.".to_owned(),
        availability_date: "2026-12-01".to_owned(),
        terms_accepted: true,
        recaptcha_token: "token-abc".to_owned(),
    }
}

// =============================================================
// Full name
// =============================================================

#[test]
fn full_name_accepts_bounds() {
    assert_eq!(validate_full_name("Ala"), Ok(()));
    assert_eq!(validate_full_name(&"x".repeat(60)), Ok(()));
}

#[test]
fn full_name_rejects_short_and_long() {
    assert_eq!(validate_full_name("Al"), Err(FieldError::NameTooShort));
    assert_eq!(validate_full_name(""), Err(FieldError::NameTooShort));
    assert_eq!(validate_full_name(&"x".repeat(61)), Err(FieldError::NameTooLong));
}

#[test]
fn full_name_counts_characters_not_bytes() {
    // three characters, six bytes
    assert_eq!(validate_full_name("Łóż"), Ok(()));
    assert_eq!(validate_full_name(&"ż".repeat(60)), Ok(()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert_eq!(validate_email("jan@kosmonauta.pl"), Ok(()));
    assert_eq!(validate_email("first.last+tag@mail.example.com"), Ok(()));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "jan", "jan@", "@kosmonauta.pl", "jan@kosmonauta", "jan@@kosmonauta.pl", ".jan@x.pl", "ja..n@x.pl", "jan.@x.pl", "jan @x.pl"] {
        assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "{bad}");
    }
}

// =============================================================
// Callsign
// =============================================================

#[test]
fn callsign_accepts_three_to_five_digits() {
    assert_eq!(validate_callsign("PL-452"), Ok(()));
    assert_eq!(validate_callsign("PL-4521"), Ok(()));
    assert_eq!(validate_callsign("US-12345"), Ok(()));
}

#[test]
fn callsign_rejects_lowercase_and_short_digits() {
    let err = validate_callsign("pl-45").expect_err("lowercase with two digits");
    assert_eq!(err, FieldError::InvalidCallsign);
    assert!(err.to_string().contains("XX-000"));
}

#[test]
fn callsign_rejects_other_shapes() {
    for bad in ["PL4521", "PLX-4521", "P-4521", "PL-123456", "PL-45a1", " PL-4521", "PL-٤٥٢١"] {
        assert_eq!(validate_callsign(bad), Err(FieldError::InvalidCallsign), "{bad}");
    }
}

// =============================================================
// Role / destination / experience / motivation
// =============================================================

#[test]
fn role_must_be_selected() {
    assert_eq!(validate_role(None), Err(FieldError::RoleMissing));
    assert_eq!(validate_role(Some(CrewRole::Medic)), Ok(()));
}

#[test]
fn destination_known_planet_policy() {
    assert_eq!(validate_destination("", DestinationPolicy::KnownPlanet), Err(FieldError::DestinationMissing));
    assert_eq!(validate_destination("vulcan", DestinationPolicy::KnownPlanet), Err(FieldError::UnknownDestination));
    assert_eq!(validate_destination("saturn", DestinationPolicy::KnownPlanet), Ok(()));
}

#[test]
fn destination_non_empty_policy_accepts_any_value() {
    assert_eq!(validate_destination("vulcan", DestinationPolicy::NonEmpty), Ok(()));
    assert_eq!(validate_destination("", DestinationPolicy::NonEmpty), Err(FieldError::DestinationMissing));
}

#[test]
fn experience_bounds() {
    assert_eq!(validate_experience(0), Err(FieldError::ExperienceTooLow));
    assert_eq!(validate_experience(1), Ok(()));
    assert_eq!(validate_experience(5), Ok(()));
    assert_eq!(validate_experience(6), Err(FieldError::ExperienceTooHigh));
}

#[test]
fn motivation_bounds() {
    assert_eq!(validate_motivation(&"a".repeat(19)), Err(FieldError::MotivationTooShort));
    assert_eq!(validate_motivation(&"a".repeat(20)), Ok(()));
    assert_eq!(validate_motivation(&"a".repeat(500)), Ok(()));
    assert_eq!(validate_motivation(&"a".repeat(501)), Err(FieldError::MotivationTooLong));
}

// =============================================================
// Availability date
// =============================================================

#[test]
fn availability_today_is_rejected() {
    assert_eq!(validate_availability("2026-10-16", date!(2026 - 10 - 16)), Err(FieldError::AvailabilityNotFuture));
}

#[test]
fn availability_tomorrow_is_accepted() {
    assert_eq!(validate_availability("2026-10-17", date!(2026 - 10 - 16)), Ok(date!(2026 - 10 - 17)));
}

#[test]
fn availability_past_is_rejected() {
    assert_eq!(validate_availability("2020-01-01", date!(2026 - 10 - 16)), Err(FieldError::AvailabilityNotFuture));
}

#[test]
fn availability_requires_a_calendar_date() {
    let today = date!(2026 - 10 - 16);
    assert_eq!(validate_availability("", today), Err(FieldError::AvailabilityMissing));
    assert_eq!(validate_availability("jutro", today), Err(FieldError::AvailabilityMalformed));
    assert_eq!(validate_availability("2026-02-30", today), Err(FieldError::AvailabilityMalformed));
}

// =============================================================
// Consent
// =============================================================

#[test]
fn terms_and_token() {
    assert_eq!(validate_terms(false), Err(FieldError::TermsNotAccepted));
    assert_eq!(validate_terms(true), Ok(()));
    assert_eq!(validate_verification_token(""), Err(FieldError::VerificationMissing));
    assert_eq!(validate_verification_token("x"), Ok(()));
}

// =============================================================
// Groups and documents
// =============================================================

#[test]
fn validate_fields_only_checks_requested_group() {
    let app = MissionApplication { full_name: "Jan Kowalski".to_owned(), ..MissionApplication::default() };
    let errors = validate_fields(&app, Step::Personal.fields(), &ctx());
    assert_eq!(errors.fields(), vec![Field::Email, Field::Callsign, Field::Role]);
    assert!(!errors.contains(Field::Motivation));
}

#[test]
fn empty_document_fails_every_field() {
    let errors = validate_document(&MissionApplication::default(), &ctx()).expect_err("empty document");
    assert_eq!(errors.len(), Field::ALL.len());
    for field in Field::ALL {
        assert!(!errors.message(field).unwrap_or_default().is_empty(), "{field}");
    }
}

#[test]
fn valid_document_produces_typed_application() {
    let done = validate_document(&valid_application(), &ctx()).expect("valid");
    assert_eq!(done.role, CrewRole::Pilot);
    assert_eq!(done.availability_date, date!(2026 - 12 - 01));
    assert_eq!(done.preferred_destination, "mars");
}

#[test]
fn single_violation_blocks_document() {
    let mut app = valid_application();
    app.terms_accepted = false;
    let errors = validate_document(&app, &ctx()).expect_err("terms not accepted");
    assert_eq!(errors.fields(), vec![Field::TermsAccepted]);
}

#[test]
fn field_errors_record_sets_and_clears() {
    let mut errors = FieldErrors::new();
    errors.record(Field::Email, Err(FieldError::InvalidEmail));
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    errors.record(Field::Email, Ok(()));
    assert!(errors.is_empty());
}

#[test]
fn field_errors_display_lists_fields_in_form_order() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Role, FieldError::RoleMissing);
    errors.insert(Field::FullName, FieldError::NameTooShort);
    assert_eq!(
        errors.to_string(),
        "fullName: Imię i nazwisko musi mieć min. 3 znaki; role: Wybierz rolę w załodze"
    );
}
