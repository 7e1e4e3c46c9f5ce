//! The single CosmicVoyager page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the cross-section state: which planet (if any) the detail dialog
//! shows. It is provided as `RwSignal<PlanetSelection>` context so cards and
//! the dialog agree without prop drilling. The wizard owns its own state.

use leptos::prelude::*;
use mission::catalog::{DASHBOARD_STATS, ExplorablePlanet, MISSION_CHART_DATA, PLANETS, RECENT_MISSIONS};

use crate::components::application_form::ApplicationForm;
use crate::components::mission_chart::MissionChart;
use crate::components::navbar::Navbar;
use crate::components::planet_card::PlanetCard;
use crate::components::planet_dialog::PlanetDialog;
use crate::components::recent_missions::RecentMissions;
use crate::components::stat_card::StatCard;
use crate::state::selection::PlanetSelection;
use crate::util::starfield::{HERO_STAR_COUNT, stars};

const STARFIELD_SEED: u64 = 0x00C0_5E1C;

#[component]
pub fn HomePage() -> impl IntoView {
    let selection = RwSignal::new(PlanetSelection::default());
    provide_context(selection);

    view! {
        <div id="top" class="page">
            <Navbar />
            <main>
                <Hero />
                <section id="dashboard" class="section">
                    <h2 class="section__title">"Dashboard"</h2>
                    <div class="stats-grid">
                        {DASHBOARD_STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
                    </div>
                </section>
                <PlanetsSection />
                <section id="missions" class="section section--split">
                    <div class="card">
                        <h2 class="section__title">"Aktywność misji"</h2>
                        <MissionChart points=MISSION_CHART_DATA />
                    </div>
                    <div class="card">
                        <h2 class="section__title">"Ostatnie misje"</h2>
                        <RecentMissions missions=RECENT_MISSIONS />
                    </div>
                </section>
                <section id="apply" class="section">
                    <ApplicationForm />
                </section>
            </main>
            <footer class="footer">
                <p>"© 2026 CosmicVoyager. Projekt zaliczeniowy."</p>
            </footer>
            <SelectedPlanetDialog />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let field = stars(STARFIELD_SEED, HERO_STAR_COUNT)
        .into_iter()
        .map(|star| view! { <span class="hero__star" style=star.style()></span> })
        .collect_view();

    view! {
        <header class="hero">
            <div class="hero__stars" aria-hidden="true">{field}</div>
            <div class="hero__content">
                <h1 class="hero__title">"Eksploruj Wszechświat"</h1>
                <p class="hero__lead">
                    "Dołącz do programu CosmicVoyager i wyrusz na misję badawczą do najdalszych zakątków Układu Słonecznego."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#apply">"Aplikuj teraz"</a>
                    <a class="btn btn--ghost" href="#planets">"Poznaj planety"</a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn PlanetsSection() -> impl IntoView {
    let selection = expect_context::<RwSignal<PlanetSelection>>();
    let on_select = Callback::new(move |planet: &'static ExplorablePlanet| selection.update(|s| s.select(planet)));

    view! {
        <section id="planets" class="section">
            <h2 class="section__title">"Planety"</h2>
            <div class="planet-grid">
                {PLANETS.iter().map(|planet| view! { <PlanetCard planet=planet on_select=on_select /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SelectedPlanetDialog() -> impl IntoView {
    let selection = expect_context::<RwSignal<PlanetSelection>>();
    let on_close = Callback::new(move |()| selection.update(PlanetSelection::close));

    view! {
        <Show when=move || selection.with(PlanetSelection::is_open)>
            {move || {
                selection.get().selected().map(|planet| view! { <PlanetDialog planet=planet on_close=on_close /> })
            }}
        </Show>
    }
}
