//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure geometry and formatting live here so they can be unit tested without a
//! DOM; `clock` and `verification` isolate the browser APIs the page touches.

pub mod chart;
pub mod clock;
pub mod format;
pub mod starfield;
pub mod verification;
