//! Planet selection driving the detail dialog.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<PlanetSelection>` and provides it via context.
//! The dialog is visible exactly when a planet is selected; closing always
//! drops the selection so a stale planet is never re-shown.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use mission::catalog::ExplorablePlanet;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanetSelection {
    selected: Option<&'static ExplorablePlanet>,
}

impl PlanetSelection {
    pub fn selected(&self) -> Option<&'static ExplorablePlanet> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, planet: &'static ExplorablePlanet) {
        self.selected = Some(planet);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
