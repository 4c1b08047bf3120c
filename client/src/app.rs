//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{
    analytics::AnalyticsState, auth::AuthState, chat::ChatState, datasets::DatasetsState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the session and theme once
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(RwSignal::new(DatasetsState::default()));
    provide_context(RwSignal::new(AnalyticsState::default()));
    provide_context(RwSignal::new(ChatState::default()));

    // Effects only run after hydration, so SSR output stays deterministic.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        #[cfg(feature = "hydrate")]
        {
            if let Some(tag) = web_sys::window().and_then(|w| w.navigator().language()) {
                ui.update(|u| u.locale_tag = tag);
            }
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.set_user(user));
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/k2m-web.css"/>
        <Title text="K2M Analytics"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
