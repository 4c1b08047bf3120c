use super::*;
use chrono::NaiveDate;
use timerange::{QuickKey, Selection};

fn stats(dataset_id: &str, rows: u64) -> DatasetStats {
    DatasetStats { dataset_id: dataset_id.to_owned(), row_count: rows, column_count: 2, columns: Vec::new(), series: Vec::new() }
}

fn ytd_query() -> StatsQuery {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    StatsQuery::for_selection(Some(&Selection::Quick { key: QuickKey::YearToDate }), today)
}

#[test]
fn response_to_latest_request_is_applied() {
    let mut state = AnalyticsState::default();
    let token = state.begin_request(StatsQuery::default());
    assert!(state.loading);
    assert!(state.apply_response(token, Ok(stats("d-1", 5))));
    assert!(!state.loading);
    assert_eq!(state.stats.as_ref().map(|s| s.row_count), Some(5));
}

#[test]
fn stale_response_is_dropped() {
    let mut state = AnalyticsState::default();
    let first = state.begin_request(StatsQuery::default());
    let second = state.begin_request(ytd_query());

    assert!(state.apply_response(second, Ok(stats("d-1", 7))));
    // The slower first response lands afterwards and must not win.
    assert!(!state.apply_response(first, Ok(stats("d-1", 99))));
    assert_eq!(state.stats.as_ref().map(|s| s.row_count), Some(7));
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = AnalyticsState::default();
    let first = state.begin_request(StatsQuery::default());
    state.begin_request(ytd_query());
    state.apply_response(first, Ok(stats("d-1", 1)));
    assert!(state.loading);
}

#[test]
fn error_falls_back_to_demo_for_same_window() {
    let mut state = AnalyticsState::default();
    let token = state.begin_request(ytd_query());
    state.apply_response(token, Err("stats failed: 502".to_owned()));
    assert!(state.is_demo);
    assert_eq!(state.error.as_deref(), Some("stats failed: 502"));
    let labels: Vec<String> = state.stats.unwrap().series.into_iter().map(|p| p.label).collect();
    assert_eq!(labels.first().map(String::as_str), Some("Jan 2026"));
    assert_eq!(labels.last().map(String::as_str), Some("Oct 2026"));
}

#[test]
fn success_after_demo_clears_flag() {
    let mut state = AnalyticsState::default();
    let token = state.begin_request(StatsQuery::default());
    state.apply_response(token, Err("down".to_owned()));
    let token = state.begin_request(StatsQuery::default());
    state.apply_response(token, Ok(stats("d-1", 3)));
    assert!(!state.is_demo);
    assert_eq!(state.error, None);
}

#[test]
fn reset_invalidates_in_flight_request() {
    let mut state = AnalyticsState::default();
    let token = state.begin_request(StatsQuery::default());
    state.reset();
    assert!(!state.apply_response(token, Ok(stats("d-1", 3))));
    assert!(state.stats.is_none());
}
