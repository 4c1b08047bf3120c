//! Plain HTML/CSS bar chart for the overview series.

#[cfg(test)]
#[path = "series_chart_test.rs"]
mod series_chart_test;

use leptos::prelude::*;

use crate::net::types::SeriesPoint;

/// Bar heights as percentages of the tallest bar. Non-positive and
/// non-finite values render as empty bars.
pub fn bar_heights(points: &[SeriesPoint]) -> Vec<f64> {
    let max = points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|p| if max > 0.0 && p.value.is_finite() && p.value > 0.0 { p.value / max * 100.0 } else { 0.0 })
        .collect()
}

#[component]
pub fn SeriesChart(#[prop(into)] points: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    view! {
        <div class="series-chart" role="img">
            {move || {
                let points = points.get();
                if points.is_empty() {
                    return view! { <p class="series-chart__empty">"No data in this range"</p> }.into_any();
                }
                let heights = bar_heights(&points);
                points
                    .into_iter()
                    .zip(heights)
                    .map(|(point, height)| {
                        let title = format!("{}: {}", point.label, super::stat_cards::format_number(point.value));
                        view! {
                            <div class="series-chart__column" title=title>
                                <div class="series-chart__bar" style=format!("height: {height:.1}%")></div>
                                <span class="series-chart__label">{point.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
