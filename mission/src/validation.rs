//! Per-field predicates for the mission application.
//!
//! Each predicate looks at exactly one field and yields `Ok(())` or the single
//! [`FieldError`] that should be shown next to that field's control. Lengths are
//! counted in characters, not bytes, so Polish diacritics count once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

use crate::application::{CompletedApplication, CrewRole, Field, MissionApplication};
use crate::catalog;

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const FULL_NAME_MIN: usize = 3;
pub const FULL_NAME_MAX: usize = 60;
pub const MOTIVATION_MIN: usize = 20;
pub const MOTIVATION_MAX: usize = 500;
pub const EXPERIENCE_MIN: u8 = 1;
pub const EXPERIENCE_MAX: u8 = 5;

static CALLSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}-[0-9]{3,5}$").expect("callsign pattern compiles"));

// Local part may not start with a dot or contain "..", checked separately
// because the regex engine has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Why a single field failed. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Imię i nazwisko musi mieć min. 3 znaki")]
    NameTooShort,
    #[error("Imię i nazwisko musi mieć maks. 60 znaków")]
    NameTooLong,
    #[error("Podaj prawidłowy adres e-mail")]
    InvalidEmail,
    #[error("Znak wywoławczy musi mieć format XX-000 (np. PL-4521)")]
    InvalidCallsign,
    #[error("Wybierz rolę w załodze")]
    RoleMissing,
    #[error("Wybierz cel misji")]
    DestinationMissing,
    #[error("Nieznany cel misji")]
    UnknownDestination,
    #[error("Oceń swoje doświadczenie (min. 1)")]
    ExperienceTooLow,
    #[error("Maksymalnie 5")]
    ExperienceTooHigh,
    #[error("Motywacja musi mieć min. 20 znaków")]
    MotivationTooShort,
    #[error("Motywacja musi mieć maks. 500 znaków")]
    MotivationTooLong,
    #[error("Podaj datę dostępności")]
    AvailabilityMissing,
    #[error("Nieprawidłowa data")]
    AvailabilityMalformed,
    #[error("Data dostępności musi być w przyszłości")]
    AvailabilityNotFuture,
    #[error("Musisz zaakceptować regulamin")]
    TermsNotAccepted,
    #[error("Potwierdź, że nie jesteś robotem")]
    VerificationMissing,
}

/// How strictly the destination field is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestinationPolicy {
    /// Must be the id of a catalog planet.
    #[default]
    KnownPlanet,
    /// Any non-empty value is accepted.
    NonEmpty,
}

/// Inputs a predicate needs beyond the field value itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current calendar date; availability must be strictly after it.
    pub today: Date,
    pub destinations: DestinationPolicy,
}

impl ValidationContext {
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self { today, destinations: DestinationPolicy::default() }
    }

    #[must_use]
    pub fn with_destinations(mut self, destinations: DestinationPolicy) -> Self {
        self.destinations = destinations;
        self
    }
}

/// At most one active error per field, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// User-facing message for `field`, if it currently has an error.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Record the outcome of validating `field`: set on failure, clear on success.
    pub fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e);
            }
        }
    }

    /// Copy every entry of `other` over `self`.
    pub fn merge(&mut self, other: &FieldErrors) {
        self.0.extend(other.iter());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn validate_full_name(value: &str) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < FULL_NAME_MIN {
        Err(FieldError::NameTooShort)
    } else if len > FULL_NAME_MAX {
        Err(FieldError::NameTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.starts_with('.') || value.contains("..") || !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_callsign(value: &str) -> Result<(), FieldError> {
    if CALLSIGN_RE.is_match(value) { Ok(()) } else { Err(FieldError::InvalidCallsign) }
}

pub fn validate_role(value: Option<CrewRole>) -> Result<(), FieldError> {
    value.map(|_| ()).ok_or(FieldError::RoleMissing)
}

pub fn validate_destination(value: &str, policy: DestinationPolicy) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::DestinationMissing);
    }
    match policy {
        DestinationPolicy::KnownPlanet if !catalog::is_known_planet(value) => Err(FieldError::UnknownDestination),
        _ => Ok(()),
    }
}

pub fn validate_experience(value: u8) -> Result<(), FieldError> {
    if value < EXPERIENCE_MIN {
        Err(FieldError::ExperienceTooLow)
    } else if value > EXPERIENCE_MAX {
        Err(FieldError::ExperienceTooHigh)
    } else {
        Ok(())
    }
}

pub fn validate_motivation(value: &str) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < MOTIVATION_MIN {
        Err(FieldError::MotivationTooShort)
    } else if len > MOTIVATION_MAX {
        Err(FieldError::MotivationTooLong)
    } else {
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date input.
///
/// # Errors
///
/// [`FieldError::AvailabilityMissing`] for empty input,
/// [`FieldError::AvailabilityMalformed`] when the text is not a calendar date.
pub fn parse_date(value: &str) -> Result<Date, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::AvailabilityMissing);
    }
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| FieldError::AvailabilityMalformed)
}

/// Availability must be a date strictly after `today`; time of day plays no part.
///
/// # Errors
///
/// Any [`parse_date`] error, or [`FieldError::AvailabilityNotFuture`].
pub fn validate_availability(value: &str, today: Date) -> Result<Date, FieldError> {
    let date = parse_date(value)?;
    if date > today { Ok(date) } else { Err(FieldError::AvailabilityNotFuture) }
}

pub fn validate_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted { Ok(()) } else { Err(FieldError::TermsNotAccepted) }
}

pub fn validate_verification_token(token: &str) -> Result<(), FieldError> {
    if token.is_empty() { Err(FieldError::VerificationMissing) } else { Ok(()) }
}

/// Run the predicate for one field against the document.
///
/// # Errors
///
/// The [`FieldError`] for `field`, if its predicate fails.
pub fn validate_field(app: &MissionApplication, field: Field, ctx: &ValidationContext) -> Result<(), FieldError> {
    match field {
        Field::FullName => validate_full_name(&app.full_name),
        Field::Email => validate_email(&app.email),
        Field::Callsign => validate_callsign(&app.callsign),
        Field::Role => validate_role(app.role),
        Field::PreferredDestination => validate_destination(&app.preferred_destination, ctx.destinations),
        Field::ExperienceLevel => validate_experience(app.experience_level),
        Field::Motivation => validate_motivation(&app.motivation),
        Field::AvailabilityDate => validate_availability(&app.availability_date, ctx.today).map(|_| ()),
        Field::TermsAccepted => validate_terms(app.terms_accepted),
        Field::RecaptchaToken => validate_verification_token(&app.recaptcha_token),
    }
}

/// Validate exactly `fields`, collecting every failure.
#[must_use]
pub fn validate_fields(app: &MissionApplication, fields: &[Field], ctx: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for &field in fields {
        if let Err(e) = validate_field(app, field, ctx) {
            errors.insert(field, e);
        }
    }
    errors
}

/// Validate all ten fields and build the typed hand-off document.
///
/// # Errors
///
/// Every failing field, keyed by [`Field`].
pub fn validate_document(app: &MissionApplication, ctx: &ValidationContext) -> Result<CompletedApplication, FieldErrors> {
    let errors = validate_fields(app, &Field::ALL, ctx);
    if !errors.is_empty() {
        return Err(errors);
    }
    let (Some(role), Ok(availability_date)) = (app.role, validate_availability(&app.availability_date, ctx.today))
    else {
        return Err(errors);
    };
    Ok(CompletedApplication {
        full_name: app.full_name.clone(),
        email: app.email.clone(),
        callsign: app.callsign.clone(),
        role,
        preferred_destination: app.preferred_destination.clone(),
        experience_level: app.experience_level,
        motivation: app.motivation.clone(),
        availability_date,
        terms_accepted: app.terms_accepted,
        recaptcha_token: app.recaptcha_token.clone(),
    })
}
