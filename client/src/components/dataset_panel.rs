//! Sidebar listing datasets with select, upload, and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `DatasetsState` from context; the page performs the REST calls via
//! the callbacks so this component stays free of network code.

use leptos::prelude::*;

use crate::state::datasets::DatasetsState;

/// DOM id of the file input the upload helper reads from.
pub const UPLOAD_INPUT_ID: &str = "dataset-upload";

#[component]
pub fn DatasetPanel(on_select: Callback<String>, on_upload: Callback<()>, on_delete: Callback<String>) -> impl IntoView {
    let datasets = expect_context::<RwSignal<DatasetsState>>();
    let pending_delete = RwSignal::new(None::<String>);
    let has_file = RwSignal::new(false);

    view! {
        <aside class="dataset-panel">
            <header class="dataset-panel__header">
                <h2>"Datasets"</h2>
                <Show when=move || datasets.with(|d| d.is_demo)>
                    <span class="badge badge--demo" title=move || datasets.with(|d| d.error.clone().unwrap_or_default())>
                        "demo data"
                    </span>
                </Show>
            </header>
            <Show
                when=move || !datasets.with(|d| d.loading)
                fallback=move || view! { <p class="dataset-panel__loading">"Loading datasets..."</p> }
            >
                <ul class="dataset-panel__list">
                    {move || {
                        let state = datasets.get();
                        state
                            .items
                            .into_iter()
                            .map(|dataset| {
                                let active = state.active_id.as_deref() == Some(dataset.id.as_str());
                                let select_id = dataset.id.clone();
                                let delete_id = dataset.id.clone();
                                let is_demo = state.is_demo;
                                view! {
                                    <li class="dataset-panel__item" class:dataset-panel__item--active=active>
                                        <button class="dataset-panel__select" on:click=move |_| on_select.run(select_id.clone())>
                                            <span class="dataset-panel__name">{dataset.name}</span>
                                            <span class="dataset-panel__meta">
                                                {format!("{} rows · {} cols", dataset.row_count, dataset.column_count)}
                                            </span>
                                        </button>
                                        <Show when=move || !is_demo>
                                            <button
                                                class="btn btn--icon dataset-panel__delete"
                                                title="Delete dataset"
                                                on:click={
                                                    let delete_id = delete_id.clone();
                                                    move |_| pending_delete.set(Some(delete_id.clone()))
                                                }
                                            >
                                                "🗑"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <div class="dataset-panel__upload">
                <input
                    id=UPLOAD_INPUT_ID
                    type="file"
                    accept=".csv,.xlsx,.xls"
                    on:change=move |ev| has_file.set(!event_target_value(&ev).is_empty())
                />
                <button
                    class="btn btn--primary"
                    disabled=move || !has_file.get() || datasets.with(|d| d.upload_pending)
                    on:click=move |_| on_upload.run(())
                >
                    {move || if datasets.with(|d| d.upload_pending) { "Uploading..." } else { "Upload" }}
                </button>
            </div>
            <Show when=move || datasets.with(|d| d.error.is_some() && !d.is_demo)>
                <p class="dataset-panel__error">{move || datasets.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <DeleteDatasetDialog dataset_id=pending_delete on_confirm=on_delete />
            </Show>
        </aside>
    }
}

#[component]
fn DeleteDatasetDialog(dataset_id: RwSignal<Option<String>>, on_confirm: Callback<String>) -> impl IntoView {
    let cancel = move || dataset_id.set(None);
    let confirm = move |_| {
        if let Some(id) = dataset_id.get_untracked() {
            on_confirm.run(id);
        }
        dataset_id.set(None);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Dataset"</h2>
                <p class="dialog__danger">"This permanently removes the dataset and its analyses."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=confirm>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
