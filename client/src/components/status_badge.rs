//! Exploration status pill.

use leptos::prelude::*;
use mission::catalog::ExplorationStatus;

use crate::util::format::status_badge_class;

#[component]
pub fn StatusBadge(status: ExplorationStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.label()}</span> }
}
