//! Browser localStorage helpers for client preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dark mode and the last active dataset survive reloads. These helpers
//! centralize hydrate-only read/write behavior so state modules never touch
//! web-sys directly; SSR builds read nothing and write nothing.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "k2m_dark_mode";
/// Storage key for the last selected dataset id.
pub const ACTIVE_DATASET_KEY: &str = "k2m_active_dataset";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
