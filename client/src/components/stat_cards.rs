//! Summary cards for the active dataset overview.

#[cfg(test)]
#[path = "stat_cards_test.rs"]
mod stat_cards_test;

use leptos::prelude::*;

use crate::net::types::DatasetStats;

/// Compact number for card values: `1.2M`, `12.5k`, `42`, `3.14`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_owned();
    }
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 10_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    let text = format!("{scaled:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}{suffix}")
}

#[allow(clippy::cast_precision_loss)]
fn count(value: u64) -> String {
    format_number(value as f64)
}

#[component]
pub fn StatCards(#[prop(into)] stats: Signal<Option<DatasetStats>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {move || {
                let Some(stats) = stats.get() else {
                    return ().into_any();
                };
                let numeric = stats
                    .numeric_columns()
                    .map(|column| {
                        let mean = column.mean.map_or_else(|| "–".to_owned(), format_number);
                        let range = match (column.min, column.max) {
                            (Some(min), Some(max)) => format!("{} – {}", format_number(min), format_number(max)),
                            _ => String::new(),
                        };
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">{format!("avg {}", column.name)}</span>
                                <span class="stat-card__value">{mean}</span>
                                <span class="stat-card__detail">{range}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="stat-card">
                        <span class="stat-card__label">"Rows"</span>
                        <span class="stat-card__value">{count(stats.row_count)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Columns"</span>
                        <span class="stat-card__value">{stats.column_count}</span>
                    </div>
                    {numeric}
                }
                .into_any()
            }}
        </div>
    }
}
