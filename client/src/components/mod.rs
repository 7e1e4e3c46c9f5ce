//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog data and the application wizard. Page-level
//! state (the selected planet) is read from Leptos context; everything else
//! arrives as props.

pub mod application_form;
pub mod data_list;
pub mod mission_chart;
pub mod navbar;
pub mod planet_card;
pub mod planet_dialog;
pub mod recent_missions;
pub mod star_rating;
pub mod stat_card;
pub mod status_badge;
pub mod verification;
