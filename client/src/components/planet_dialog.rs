//! Modal detail view for the selected planet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the home page only while `PlanetSelection` holds a planet.
//! Backdrop click, the close button and Escape all report through `on_close`,
//! which clears the selection.

use leptos::prelude::*;
use mission::catalog::ExplorablePlanet;

use crate::components::status_badge::StatusBadge;
use crate::util::format::{
    danger_width_style, format_danger, format_diameter, format_distance, format_gravity, format_temperature,
};

#[cfg(test)]
#[path = "planet_dialog_test.rs"]
mod planet_dialog_test;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub tooltip: &'static str,
}

/// The seven tiles shown in the dialog, in display order.
pub(crate) fn stat_tiles(planet: &ExplorablePlanet) -> Vec<StatTile> {
    vec![
        StatTile { label: "Typ", value: planet.kind.label().to_owned(), tooltip: "Klasyfikacja planety" },
        StatTile { label: "Średnica", value: format_diameter(planet.diameter), tooltip: "Średnica równikowa" },
        StatTile {
            label: "Odległość",
            value: format_distance(planet.distance_from_sun),
            tooltip: "Średnia odległość od Słońca",
        },
        StatTile { label: "Grawitacja", value: format_gravity(planet.gravity), tooltip: "Grawitacja względem Ziemi" },
        StatTile {
            label: "Temperatura",
            value: format_temperature(planet.temperature),
            tooltip: "Średnia temperatura powierzchni",
        },
        StatTile { label: "Misje", value: planet.missions_count.to_string(), tooltip: "Liczba przeprowadzonych misji" },
        StatTile {
            label: "Zagrożenie",
            value: format_danger(planet.danger_level),
            tooltip: "Poziom zagrożenia w skali 0-10",
        },
    ]
}

#[component]
pub fn PlanetDialog(planet: &'static ExplorablePlanet, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    // Focus the dialog so Escape reaches its keydown handler.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(el) = dialog_ref.get() {
                let _ = el.focus();
            }
        });
    }

    let tiles = stat_tiles(planet)
        .into_iter()
        .map(|tile| {
            view! {
                <div class="planet-dialog__tile" title=tile.tooltip>
                    <span class="planet-dialog__tile-label">{tile.label}</span>
                    <span class="planet-dialog__tile-value">{tile.value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="planet-dialog__backdrop" on:click=on_backdrop>
            <div
                class="planet-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="planet-dialog-title"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <button class="planet-dialog__close" on:click=on_close_click title="Zamknij" aria-label="Zamknij">
                    "✕"
                </button>
                <img class="planet-dialog__image" src=planet.image alt=planet.name />
                <div class="planet-dialog__heading">
                    <h2 id="planet-dialog-title">{planet.name}</h2>
                    <StatusBadge status=planet.exploration_status />
                    {planet
                        .last_explored
                        .map(|date| {
                            view! { <span class="planet-dialog__explored">{format!("Ostatnio badana: {date}")}</span> }
                        })}
                </div>
                <p class="planet-dialog__description">{planet.description}</p>
                <div class="planet-dialog__tiles">{tiles}</div>
                <div class="planet-dialog__danger">
                    <span class="planet-dialog__danger-label">"Poziom zagrożenia"</span>
                    <div class="danger-bar danger-bar--large">
                        <div class="danger-bar__fill" style=danger_width_style(planet.danger_percent())></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
