//! Domain model for the CosmicVoyager mission dashboard.
//!
//! This crate owns everything that is not rendering: the static planet and
//! mission catalogs, the mission-application document, the per-field
//! validation predicates, and the three-step application wizard. Both the
//! Leptos client and the server depend on it, and it has no UI dependencies so
//! the wizard can be exercised directly from unit tests.

pub mod application;
pub mod catalog;
pub mod validation;
pub mod wizard;

pub use application::{CompletedApplication, CrewRole, Field, FieldUpdate, MissionApplication, Step};
pub use catalog::{ChartPoint, ExplorablePlanet, ExplorationStatus, Mission, Planet, PlanetKind};
pub use validation::{DestinationPolicy, FieldError, FieldErrors, ValidationContext};
pub use wizard::{TransitionError, VerificationEvent, Wizard, WizardAction, WizardState};
