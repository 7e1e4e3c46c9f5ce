//! Top navigation bar with in-page anchors.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#dashboard", label: "Dashboard" },
    NavLink { href: "#planets", label: "Planety" },
    NavLink { href: "#missions", label: "Misje" },
    NavLink { href: "#apply", label: "Aplikuj" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar" aria-label="Nawigacja główna">
            <a class="navbar__brand" href="#top">
                <span class="navbar__logo" aria-hidden="true">"🚀"</span>
                "CosmicVoyager"
            </a>
            <ul class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="navbar__link" href=link.href>{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
