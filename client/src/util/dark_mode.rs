//! Dark mode initialization and toggle.
//!
//! The preference is stored as a JSON boolean under
//! [`DARK_MODE_KEY`](super::ui_persistence::DARK_MODE_KEY); when nothing is
//! stored the system `prefers-color-scheme` wins. The active theme is a
//! `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::ui_persistence::{DARK_MODE_KEY, load_json, save_json};

/// Read the dark mode preference.
///
/// Returns the stored flag, or the system preference when none is stored.
pub fn read_preference() -> bool {
    load_json::<bool>(DARK_MODE_KEY).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Theme attribute value for `enabled`.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.set_attribute("data-theme", theme_name(enabled)).is_err() {
                leptos::logging::warn!("failed to set data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    save_json(DARK_MODE_KEY, &next);
    next
}
