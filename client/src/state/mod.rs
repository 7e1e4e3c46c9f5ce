//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal`s by the components that own them. The
//! application wizard's state lives in the `mission` crate instead.

pub mod rating;
pub mod selection;
