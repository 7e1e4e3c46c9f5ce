//! The mission-application document and its field/step vocabulary.
//!
//! DESIGN
//! ======
//! `MissionApplication` is the working copy the wizard edits. Every field is a
//! plain value with an "empty" default so a half-filled form is a valid value
//! of the type. `CompletedApplication` is the typed result of validating the
//! whole document; it only exists once every predicate has passed.

use serde::Serialize;
use time::Date;

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

/// Crew position the applicant is applying for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewRole {
    Commander,
    Pilot,
    Engineer,
    Scientist,
    Medic,
}

impl CrewRole {
    pub const ALL: [Self; 5] = [Self::Commander, Self::Pilot, Self::Engineer, Self::Scientist, Self::Medic];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commander => "commander",
            Self::Pilot => "pilot",
            Self::Engineer => "engineer",
            Self::Scientist => "scientist",
            Self::Medic => "medic",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Commander => "Dowódca",
            Self::Pilot => "Pilot",
            Self::Engineer => "Inżynier",
            Self::Scientist => "Naukowiec",
            Self::Medic => "Medyk",
        }
    }

    /// Parse the lowercase slug used by `<select>` option values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// The ten fields of the application, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Callsign,
    Role,
    PreferredDestination,
    ExperienceLevel,
    Motivation,
    AvailabilityDate,
    TermsAccepted,
    RecaptchaToken,
}

impl Field {
    pub const ALL: [Self; 10] = [
        Self::FullName,
        Self::Email,
        Self::Callsign,
        Self::Role,
        Self::PreferredDestination,
        Self::ExperienceLevel,
        Self::Motivation,
        Self::AvailabilityDate,
        Self::TermsAccepted,
        Self::RecaptchaToken,
    ];

    /// Stable key used for error maps and element ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Callsign => "callsign",
            Self::Role => "role",
            Self::PreferredDestination => "preferredDestination",
            Self::ExperienceLevel => "experienceLevel",
            Self::Motivation => "motivation",
            Self::AvailabilityDate => "availabilityDate",
            Self::TermsAccepted => "termsAccepted",
            Self::RecaptchaToken => "recaptchaToken",
        }
    }

    /// Step whose group contains this field.
    #[must_use]
    pub fn step(self) -> Step {
        match self {
            Self::FullName | Self::Email | Self::Callsign | Self::Role => Step::Personal,
            Self::PreferredDestination | Self::ExperienceLevel | Self::Motivation | Self::AvailabilityDate => {
                Step::Preferences
            }
            Self::TermsAccepted | Self::RecaptchaToken => Step::Review,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the three ordered field groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Personal,
    Preferences,
    Review,
}

impl Step {
    pub const ALL: [Self; 3] = [Self::Personal, Self::Preferences, Self::Review];

    /// Zero-based position in the wizard.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Preferences => 1,
            Self::Review => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Dane osobowe",
            Self::Preferences => "Preferencje misji",
            Self::Review => "Podsumowanie",
        }
    }

    /// Fields validated when leaving this step.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Personal => &[Field::FullName, Field::Email, Field::Callsign, Field::Role],
            Self::Preferences => &[
                Field::PreferredDestination,
                Field::ExperienceLevel,
                Field::Motivation,
                Field::AvailabilityDate,
            ],
            Self::Review => &[Field::TermsAccepted, Field::RecaptchaToken],
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Preferences),
            Self::Preferences => Some(Self::Review),
            Self::Review => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Preferences => Some(Self::Personal),
            Self::Review => Some(Self::Preferences),
        }
    }
}

/// Working document edited by the wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionApplication {
    pub full_name: String,
    pub email: String,
    pub callsign: String,
    pub role: Option<CrewRole>,

    pub preferred_destination: String,
    /// 0 means "not rated yet" and never validates.
    pub experience_level: u8,
    pub motivation: String,
    /// `YYYY-MM-DD` as produced by a date input; empty when unset.
    pub availability_date: String,

    pub terms_accepted: bool,
    pub recaptcha_token: String,
}

/// A single-field edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Callsign(String),
    Role(Option<CrewRole>),
    PreferredDestination(String),
    ExperienceLevel(u8),
    Motivation(String),
    AvailabilityDate(String),
    TermsAccepted(bool),
    RecaptchaToken(String),
}

impl FieldUpdate {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::FullName(_) => Field::FullName,
            Self::Email(_) => Field::Email,
            Self::Callsign(_) => Field::Callsign,
            Self::Role(_) => Field::Role,
            Self::PreferredDestination(_) => Field::PreferredDestination,
            Self::ExperienceLevel(_) => Field::ExperienceLevel,
            Self::Motivation(_) => Field::Motivation,
            Self::AvailabilityDate(_) => Field::AvailabilityDate,
            Self::TermsAccepted(_) => Field::TermsAccepted,
            Self::RecaptchaToken(_) => Field::RecaptchaToken,
        }
    }
}

impl MissionApplication {
    /// Write one field, returning which field changed.
    pub fn apply(&mut self, update: FieldUpdate) -> Field {
        let field = update.field();
        match update {
            FieldUpdate::FullName(v) => self.full_name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Callsign(v) => self.callsign = v,
            FieldUpdate::Role(v) => self.role = v,
            FieldUpdate::PreferredDestination(v) => self.preferred_destination = v,
            FieldUpdate::ExperienceLevel(v) => self.experience_level = v,
            FieldUpdate::Motivation(v) => self.motivation = v,
            FieldUpdate::AvailabilityDate(v) => self.availability_date = v,
            FieldUpdate::TermsAccepted(v) => self.terms_accepted = v,
            FieldUpdate::RecaptchaToken(v) => self.recaptcha_token = v,
        }
        field
    }
}

/// Fully validated application, ready to hand to a submission sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedApplication {
    pub full_name: String,
    pub email: String,
    pub callsign: String,
    pub role: CrewRole,
    pub preferred_destination: String,
    pub experience_level: u8,
    pub motivation: String,
    #[serde(with = "iso_date")]
    pub availability_date: Date,
    pub terms_accepted: bool,
    pub recaptcha_token: String,
}

impl CompletedApplication {
    /// JSON form used for the submission log.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures; none are expected for this type.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

mod iso_date {
    use serde::Serializer;
    use time::Date;
    use time::macros::format_description;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
