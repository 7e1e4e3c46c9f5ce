//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` composes every section and delegates
//! rendering details to `components`.

pub mod home;
