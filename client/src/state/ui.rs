//! Local UI chrome state (theme, sidebar, locale, cross-component requests).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`datasets`,
//! `analytics`, `chat`). Requests from one component to another are
//! sequence counters: the receiver watches the counter and acts on change.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use timerange::Locale;

#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_expanded: bool,
    /// BCP-47 tag for control labels (`"en"`, `"fr-FR"`, ...).
    pub locale_tag: String,
    /// Bumped to ask the time-range filter to clear its selection.
    pub filter_clear_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, sidebar_expanded: true, locale_tag: "en".to_owned(), filter_clear_seq: 0 }
    }
}

impl UiState {
    pub fn request_filter_clear(&mut self) {
        self.filter_clear_seq += 1;
    }

    pub fn locale(&self) -> Locale {
        Locale::for_tag(&self.locale_tag)
    }
}
