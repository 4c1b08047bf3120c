use super::*;
use timerange::{AutoRange, Preset, QuickKey, Selection};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn unbounded_query_returns_full_series() {
    let stats = demo_stats(&StatsQuery::default());
    assert_eq!(stats.series.len(), 36);
    assert_eq!(stats.series[0].label, "Jan 2024");
    assert_eq!(stats.dataset_id, DEMO_DATASET_ID);
}

#[test]
fn quarter_window_narrows_series() {
    let selection = Selection::Auto(AutoRange::new(Preset::Quarter, 2025, Some(1)).unwrap());
    let stats = demo_stats(&StatsQuery::for_selection(Some(&selection), today()));
    let labels: Vec<&str> = stats.series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Apr 2025", "May 2025", "Jun 2025"]);
}

#[test]
fn row_count_tracks_window() {
    let all = demo_stats(&StatsQuery::default());
    let selection = Selection::Quick { key: QuickKey::YearToDate };
    let ytd = demo_stats(&StatsQuery::for_selection(Some(&selection), today()));
    assert!(ytd.row_count < all.row_count);
    assert_eq!(demo_datasets()[0].row_count, all.row_count);
}

#[test]
fn numeric_columns_summarise_series() {
    let stats = demo_stats(&StatsQuery::default());
    let revenue = stats.columns.iter().find(|c| c.name == "revenue").unwrap();
    let max = stats.series.iter().map(|p| p.value).fold(f64::MIN, f64::max);
    assert_eq!(revenue.max, Some(max));
    assert_eq!(stats.numeric_columns().count(), 2);
}

#[test]
fn window_outside_demo_range_is_empty() {
    let query = StatsQuery { from: Some("2030-01-01".to_owned()), to: Some("2031-01-01".to_owned()), selection: None };
    let stats = demo_stats(&query);
    assert!(stats.series.is_empty());
    assert_eq!(stats.row_count, 0);
    let revenue = stats.columns.iter().find(|c| c.name == "revenue").unwrap();
    assert_eq!(revenue.mean, None);
}
