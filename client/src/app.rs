//! Root component and SSR document shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `shell` for every page request; the browser bundle
//! hydrates `App` inside the same `<body>`. The verification script is loaded
//! once here so the widget can render whenever the review step mounts.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::util::verification::SCRIPT_URL;

pub const PAGE_TITLE: &str = "CosmicVoyager — Eksploracja Kosmosu";
pub const PAGE_DESCRIPTION: &str =
    "CosmicVoyager: katalog planet, statystyki misji i formularz aplikacyjny dla przyszłych członków załogi.";

/// HTML document wrapper used by the server renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pl">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
                <script src=SCRIPT_URL defer></script>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/voyager.css" />
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Router>
            <Routes fallback=|| "Nie znaleziono strony.">
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
    }
}
