//! Star-rating input state.
//!
//! DESIGN
//! ======
//! The committed value and the hover preview are tracked separately: hovering
//! only changes what is drawn, a click commits. Leaving the widget drops the
//! preview. A disabled rating ignores every input.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingState {
    value: u8,
    preview: Option<u8>,
    max: u8,
    disabled: bool,
}

impl RatingState {
    pub fn new(value: u8, max: u8) -> Self {
        let max = max.max(1);
        Self { value: value.min(max), preview: None, max, disabled: false }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        if disabled {
            self.preview = None;
        }
        self
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn preview(&self) -> Option<u8> {
        self.preview
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Overwrite the committed value from outside (e.g. a form reset).
    pub fn sync(&mut self, value: u8) {
        self.value = value.min(self.max);
    }

    pub fn hover(&mut self, star: u8) {
        if self.disabled || !(1..=self.max).contains(&star) {
            return;
        }
        self.preview = Some(star);
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Commit `star`. Returns the new value when it was accepted.
    pub fn click(&mut self, star: u8) -> Option<u8> {
        if self.disabled || !(1..=self.max).contains(&star) {
            return None;
        }
        self.value = star;
        Some(star)
    }

    /// Value currently drawn: the preview while hovering, else the committed value.
    pub fn display_value(&self) -> u8 {
        self.preview.unwrap_or(self.value)
    }

    pub fn is_filled(&self, star: u8) -> bool {
        star >= 1 && star <= self.display_value()
    }

    /// Caption such as `3/5`.
    pub fn caption(&self) -> String {
        format!("{}/{}", self.value, self.max)
    }
}
