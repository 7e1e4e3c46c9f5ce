//! Three-step application wizard as an explicit state machine.
//!
//! DESIGN
//! ======
//! `Wizard` owns the working document, the per-field error map, and the
//! current state. Transitions are methods that either move to an adjacent
//! state or leave everything untouched and report why. Nothing here knows
//! about rendering; the Leptos form holds a `Wizard` in a signal and calls
//! these methods from event handlers.
//!
//! ```text
//!   Personal --next--> Preferences --next--> Review --submit--> Submitted
//!      ^                 |    ^                 |                  |
//!      +------back-------+    +------back-------+                  |
//!      ^                                                           |
//!      +----------------------------reset_all----------------------+
//! ```

use std::collections::BTreeSet;

use crate::application::{CompletedApplication, Field, FieldUpdate, MissionApplication, Step};
use crate::validation::{self, FieldErrors, ValidationContext};

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// Where the wizard currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WizardState {
    #[default]
    Personal,
    Preferences,
    Review,
    Submitted,
}

impl WizardState {
    /// The field group being edited, `None` once submitted.
    #[must_use]
    pub fn step(self) -> Option<Step> {
        match self {
            Self::Personal => Some(Step::Personal),
            Self::Preferences => Some(Step::Preferences),
            Self::Review => Some(Step::Review),
            Self::Submitted => None,
        }
    }

    fn from_step(step: Step) -> Self {
        match step {
            Step::Personal => Self::Personal,
            Step::Preferences => Self::Preferences,
            Step::Review => Self::Review,
        }
    }
}

/// A requested transition, used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Submit,
    ResetAll,
}

/// Why a transition did not happen. The wizard is unchanged in both cases
/// except that `Invalid` has refreshed the error map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("{n} field(s) failed validation: {0}", n = .0.len())]
    Invalid(FieldErrors),
    #[error("{action:?} is not available in state {state:?}")]
    NotAllowed { state: WizardState, action: WizardAction },
}

/// Signal from the external human-verification widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationEvent {
    /// The challenge was solved; the token is opaque.
    Verified(String),
    /// The previously issued token is no longer valid.
    Expired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    state: WizardState,
    document: MissionApplication,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> WizardState {
        self.state
    }

    #[must_use]
    pub fn document(&self) -> &MissionApplication {
        &self.document
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message to show next to `field`, if any.
    #[must_use]
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    /// Messages for fields that the current step does not render, in form
    /// order. A whole-document `submit` can fail on an earlier step's field.
    #[must_use]
    pub fn errors_outside_step(&self) -> Vec<(Field, String)> {
        let Some(step) = self.state.step() else {
            return Vec::new();
        };
        self.errors
            .iter()
            .filter(|(field, _)| field.step() != step)
            .map(|(field, error)| (field, error.to_string()))
            .collect()
    }

    /// Edit one field. Touched or currently failing fields are re-validated
    /// immediately so their message tracks the input.
    ///
    /// Returns `false` when the edit was ignored because the wizard is
    /// already submitted.
    pub fn apply(&mut self, update: FieldUpdate, ctx: &ValidationContext) -> bool {
        if self.is_submitted() {
            return false;
        }
        let field = self.document.apply(update);
        if self.touched.contains(&field) || self.errors.contains(field) {
            self.revalidate(field, ctx);
        }
        true
    }

    /// Mark a field as visited (its control lost focus) and validate it.
    pub fn touch(&mut self, field: Field, ctx: &ValidationContext) {
        if self.is_submitted() {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field, ctx);
    }

    /// Feed a verification widget event into the token field.
    ///
    /// Clearing never adds a message; a fresh token removes any pending one.
    pub fn apply_verification(&mut self, event: VerificationEvent) {
        if self.is_submitted() {
            return;
        }
        match event {
            VerificationEvent::Verified(token) if !token.is_empty() => {
                self.document.recaptcha_token = token;
                self.errors.remove(Field::RecaptchaToken);
            }
            VerificationEvent::Verified(_) | VerificationEvent::Expired => {
                self.document.recaptcha_token.clear();
            }
        }
    }

    /// Advance to the next step if every field of the current step is valid.
    ///
    /// # Errors
    ///
    /// [`TransitionError::Invalid`] with one message per failing field of the
    /// current step, or [`TransitionError::NotAllowed`] from `Review` and
    /// `Submitted`.
    pub fn next(&mut self, ctx: &ValidationContext) -> Result<WizardState, TransitionError> {
        let Some((step, to)) = self.state.step().and_then(|s| s.next().map(|n| (s, n))) else {
            return Err(self.not_allowed(WizardAction::Next));
        };
        let failures = self.validate_group(step.fields(), ctx);
        if !failures.is_empty() {
            return Err(TransitionError::Invalid(failures));
        }
        self.state = WizardState::from_step(to);
        Ok(self.state)
    }

    /// Return to the previous step without validating anything.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAllowed`] from `Personal` and `Submitted`.
    pub fn back(&mut self) -> Result<WizardState, TransitionError> {
        let Some(to) = self.state.step().and_then(Step::previous) else {
            return Err(self.not_allowed(WizardAction::Back));
        };
        self.state = WizardState::from_step(to);
        Ok(self.state)
    }

    /// Validate the whole document and, if it passes, enter `Submitted`.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAllowed`] outside `Review`;
    /// [`TransitionError::Invalid`] with every failing field otherwise.
    pub fn submit(&mut self, ctx: &ValidationContext) -> Result<CompletedApplication, TransitionError> {
        if self.state != WizardState::Review {
            return Err(self.not_allowed(WizardAction::Submit));
        }
        match validation::validate_document(&self.document, ctx) {
            Ok(done) => {
                self.errors.clear();
                self.state = WizardState::Submitted;
                Ok(done)
            }
            Err(failures) => {
                self.errors.merge(&failures);
                Err(TransitionError::Invalid(failures))
            }
        }
    }

    /// Discard the submitted document and start over with an empty one.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAllowed`] unless the wizard is `Submitted`.
    pub fn reset_all(&mut self) -> Result<WizardState, TransitionError> {
        if !self.is_submitted() {
            return Err(self.not_allowed(WizardAction::ResetAll));
        }
        *self = Self::new();
        Ok(self.state)
    }

    fn revalidate(&mut self, field: Field, ctx: &ValidationContext) {
        let outcome = validation::validate_field(&self.document, field, ctx);
        self.errors.record(field, outcome);
    }

    /// Re-run `fields`, refreshing their entries in the error map, and return
    /// only the failures.
    fn validate_group(&mut self, fields: &[Field], ctx: &ValidationContext) -> FieldErrors {
        let failures = validation::validate_fields(&self.document, fields, ctx);
        for &field in fields {
            match failures.get(field) {
                Some(e) => self.errors.insert(field, e),
                None => {
                    self.errors.remove(field);
                }
            }
        }
        failures
    }

    fn not_allowed(&self, action: WizardAction) -> TransitionError {
        TransitionError::NotAllowed { state: self.state, action }
    }
}
