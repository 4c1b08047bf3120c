//! Dashboard page: dataset sidebar, time-range filter, overview, and
//! insights chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns every backend call the
//! dashboard makes: the dataset list on mount, stats whenever the active
//! dataset or the time-range selection changes, and chat questions scoped to
//! the same dataset and window. Stats and chat responses are fenced so a slow
//! response never overwrites a newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use timerange::{Clock, PickerConfig, Selection, StatsQuery, SystemClock};

use crate::components::chat_panel::ChatPanel;
use crate::components::dataset_panel::{DatasetPanel, UPLOAD_INPUT_ID};
use crate::components::series_chart::SeriesChart;
use crate::components::stat_cards::StatCards;
use crate::components::time_range_filter::TimeRangeFilter;
use crate::components::toolbar::Toolbar;
use crate::net::types::ChatRequest;
use crate::state::analytics::AnalyticsState;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::datasets::DatasetsState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::ui_persistence::{ACTIVE_DATASET_KEY, load_json, save_json};

fn today() -> NaiveDate {
    SystemClock.today()
}

/// Chat body for `message` scoped to the dataset and the selection's window.
fn build_chat_request(dataset_id: &str, message: &str, selection: Option<&Selection>, today: NaiveDate) -> ChatRequest {
    ChatRequest {
        dataset_id: dataset_id.to_owned(),
        message: message.to_owned(),
        query: selection.map(|s| StatsQuery::for_selection(Some(s), today)),
    }
}

/// Header text above the overview.
fn overview_heading(dataset_name: Option<&str>, range_label: Option<&str>) -> String {
    match (dataset_name, range_label) {
        (None, _) => "No dataset selected".to_owned(),
        (Some(name), None) => format!("{name} · all time"),
        (Some(name), Some(range)) => format!("{name} · {range}"),
    }
}

fn load_datasets(datasets: RwSignal<DatasetsState>) {
    datasets.update(|d| d.loading = true);
    let preferred = load_json::<String>(ACTIVE_DATASET_KEY);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_datasets().await;
        if let Err(e) = &result {
            leptos::logging::warn!("dataset list unavailable, using demo data: {e}");
        }
        datasets.update(|d| d.apply_list_result(result, preferred.as_deref()));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preferred;
    }
}

fn load_stats(analytics: RwSignal<AnalyticsState>, dataset_id: String, query: StatsQuery) {
    let token = analytics.try_update(|a| a.begin_request(query.clone()));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = token else {
            return;
        };
        let result = crate::net::api::fetch_stats(&dataset_id, &query).await;
        if let Err(e) = &result {
            leptos::logging::warn!("stats request failed, using demo data: {e}");
        }
        analytics.try_update(|a| a.apply_response(token, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, dataset_id);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let datasets = expect_context::<RwSignal<DatasetsState>>();
    let analytics = expect_context::<RwSignal<AnalyticsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(auth, use_navigate());

    let selection = RwSignal::new(None::<Selection>);
    let range_label = RwSignal::new(None::<String>);

    // Load the inventory once the user is known.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get_untracked() || auth.with(|a| a.user.is_none()) {
            return;
        }
        requested_list.set(true);
        load_datasets(datasets);
    });

    // Refetch whenever the dataset or the committed range changes.
    let active_id = Memo::new(move |_| datasets.with(|d| d.active_id.clone()));
    Effect::new(move || {
        let current = selection.get();
        match active_id.get() {
            Some(id) => {
                save_json(ACTIVE_DATASET_KEY, &id);
                load_stats(analytics, id, StatsQuery::for_selection(current.as_ref(), today()));
            }
            None => analytics.update(AnalyticsState::reset),
        }
    });

    let on_range_change = Callback::new(move |next: Option<Selection>| {
        let locale = ui.with_untracked(UiState::locale);
        range_label.set(next.map(|s| s.label(&locale)));
        selection.set(next);
    });

    let on_select = Callback::new(move |id: String| {
        datasets.update(|d| {
            d.select(&id);
        });
    });

    let on_upload = Callback::new(move |()| {
        datasets.update(|d| {
            d.upload_pending = true;
            d.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::upload_dataset(UPLOAD_INPUT_ID).await;
            datasets.update(|d| d.apply_upload(result));
        });
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_dataset(&id).await {
                Ok(()) => datasets.update(|d| d.remove(&id)),
                Err(e) => datasets.update(|d| d.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_send = Callback::new(move |message: String| {
        let Some(dataset_id) = active_id.get_untracked() else {
            return;
        };
        let Some(token) = chat.try_update(|c| c.push_user(&message)).flatten() else {
            return;
        };
        let request = build_chat_request(&dataset_id, &message, selection.get_untracked().as_ref(), today());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&request).await;
            chat.try_update(|c| c.apply_reply(token, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
        }
    });

    // A new conversation also drops the time range it was scoped to.
    let on_new_chat = Callback::new(move |()| {
        chat.update(ChatState::reset);
        ui.update(UiState::request_filter_clear);
    });

    let heading = move || {
        let name = datasets.with(|d| d.active().map(|ds| ds.name.clone()));
        overview_heading(name.as_deref(), range_label.get().as_deref())
    };
    let stats = Signal::derive(move || analytics.with(|a| a.stats.clone()));
    let series = Signal::derive(move || analytics.with(|a| a.stats.as_ref().map(|s| s.series.clone()).unwrap_or_default()));

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Toolbar>
                    <TimeRangeFilter config=PickerConfig::default() on_change=on_range_change />
                </Toolbar>
                <div class="dashboard-page__body">
                    <DatasetPanel on_select=on_select on_upload=on_upload on_delete=on_delete />
                    <main class="dashboard-page__overview">
                        <header class="dashboard-page__heading">
                            <h1>{heading}</h1>
                            <Show when=move || analytics.with(|a| a.is_demo)>
                                <span class="badge badge--demo">"demo data"</span>
                            </Show>
                            <Show when=move || analytics.with(|a| a.loading)>
                                <span class="dashboard-page__spinner" aria-label="Loading"></span>
                            </Show>
                        </header>
                        <StatCards stats=stats />
                        <SeriesChart points=series />
                    </main>
                    <ChatPanel on_send=on_send on_new_chat=on_new_chat />
                </div>
            </div>
        </Show>
    }
}
