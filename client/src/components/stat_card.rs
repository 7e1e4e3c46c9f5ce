//! Dashboard statistic tile.
//!
//! DESIGN
//! ======
//! The tile's variant is handed to each part as a plain prop rather than
//! through context, so every part can render on its own.

use leptos::prelude::*;
use mission::catalog::{DashboardStat, StatIcon, StatVariant};

fn variant_class(base: &str, variant: StatVariant) -> String {
    match variant {
        StatVariant::Default => base.to_owned(),
        StatVariant::Highlight => format!("{base} {base}--highlight"),
    }
}

fn icon_glyph(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Rocket => "🚀",
        StatIcon::Globe => "🪐",
        StatIcon::Users => "👩‍🚀",
        StatIcon::Star => "✨",
    }
}

#[component]
pub fn StatIconView(icon: StatIcon, variant: StatVariant) -> impl IntoView {
    view! {
        <span class=variant_class("stat-card__icon", variant) aria-hidden="true">{icon_glyph(icon)}</span>
    }
}

#[component]
pub fn StatValue(value: u32, variant: StatVariant) -> impl IntoView {
    view! { <span class=variant_class("stat-card__value", variant)>{value}</span> }
}

#[component]
pub fn StatLabel(label: &'static str, variant: StatVariant) -> impl IntoView {
    view! { <span class=variant_class("stat-card__label", variant)>{label}</span> }
}

/// One headline number with its icon and caption.
#[component]
pub fn StatCard(stat: DashboardStat) -> impl IntoView {
    let variant = stat.variant;
    view! {
        <div class=variant_class("stat-card", variant)>
            <StatIconView icon=stat.icon variant=variant />
            <div class="stat-card__body">
                <StatValue value=stat.value variant=variant />
                <StatLabel label=stat.label variant=variant />
            </div>
        </div>
    }
}
