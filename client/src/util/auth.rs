//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and the TOTP form must submit the same normalized code everywhere.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Digits in an authenticator code.
pub const TOTP_CODE_LEN: usize = 6;

fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Normalize a typed authenticator code.
///
/// Whitespace is stripped (codes are often pasted as `123 456`); the result
/// must be exactly [`TOTP_CODE_LEN`] ASCII digits.
pub fn normalize_totp_code(raw: &str) -> Option<String> {
    let code: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    (code.len() == TOTP_CODE_LEN && code.chars().all(|c| c.is_ascii_digit())).then_some(code)
}
