//! Selectable planet tile for the catalog grid.

use leptos::prelude::*;
use mission::catalog::ExplorablePlanet;

use crate::components::status_badge::StatusBadge;
use crate::util::format::{danger_width_style, format_distance, format_gravity, format_temperature};

#[cfg(test)]
#[path = "planet_card_test.rs"]
mod planet_card_test;

/// Keys that activate a focused card, matching native button behaviour.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
pub fn PlanetCard(planet: &'static ExplorablePlanet, on_select: Callback<&'static ExplorablePlanet>) -> impl IntoView {
    let on_click = move |_| on_select.run(planet);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            on_select.run(planet);
        }
    };
    let accent = format!("--planet-color: {}", planet.color);

    view! {
        <article
            class="planet-card"
            style=accent
            role="button"
            tabindex="0"
            aria-label=format!("Szczegóły: {}", planet.name)
            on:click=on_click
            on:keydown=on_keydown
        >
            <header class="planet-card__header">
                <img class="planet-card__image" src=planet.image alt="" loading="lazy" />
                <h3 class="planet-card__name">{planet.name}</h3>
                <StatusBadge status=planet.exploration_status />
            </header>
            <p class="planet-card__description">{planet.description}</p>
            <dl class="planet-card__stats">
                <div class="planet-card__stat" title="Średnia temperatura powierzchni">
                    <dt>"Temperatura"</dt>
                    <dd>{format_temperature(planet.temperature)}</dd>
                </div>
                <div class="planet-card__stat" title="Grawitacja względem Ziemi">
                    <dt>"Grawitacja"</dt>
                    <dd>{format_gravity(planet.gravity)}</dd>
                </div>
                <div class="planet-card__stat" title="Średnia odległość od Słońca">
                    <dt>"Odległość"</dt>
                    <dd>{format_distance(planet.distance_from_sun)}</dd>
                </div>
            </dl>
            <div class="danger-bar" title=format!("Poziom zagrożenia: {}/10", planet.danger_level)>
                <div class="danger-bar__fill" style=danger_width_style(planet.danger_percent())></div>
            </div>
        </article>
    }
}
