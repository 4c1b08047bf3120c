//! Top bar with product name, theme toggle, current user, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible on every authenticated page. Logout clears the auth context and
//! leaves through a full navigation so no dashboard state survives.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Toolbar(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let display_name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::sign_out);
                if let Some(w) = web_sys::window() {
                    if w.location().set_href("/login").is_err() {
                        leptos::logging::warn!("redirect to /login failed");
                    }
                }
            });
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"K2M Analytics"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            {children()}

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">{display_name}</span>

            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
