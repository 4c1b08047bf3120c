use super::*;
use timerange::{AutoRange, Preset, QuickKey};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn chat_request_without_selection_has_no_query() {
    let req = build_chat_request("d-1", "summary?", None, fixed_today());
    assert_eq!(req.dataset_id, "d-1");
    assert_eq!(req.query, None);
}

#[test]
fn chat_request_carries_selection_window() {
    let selection = Selection::Auto(AutoRange::new(Preset::Quarter, 2025, Some(1)).unwrap());
    let req = build_chat_request("d-1", "why?", Some(&selection), fixed_today());
    let query = req.query.unwrap();
    assert_eq!(query.from.as_deref(), Some("2025-04-01"));
    assert_eq!(query.to.as_deref(), Some("2025-07-01"));
    assert_eq!(query.selection, Some(selection));
}

#[test]
fn chat_request_for_all_keeps_selection_without_bounds() {
    let selection = Selection::Quick { key: QuickKey::All };
    let query = build_chat_request("d-1", "q", Some(&selection), fixed_today()).query.unwrap();
    assert!(query.is_unbounded());
    assert_eq!(query.selection, Some(selection));
}

#[test]
fn overview_heading_variants() {
    assert_eq!(overview_heading(None, Some("Q2 2025")), "No dataset selected");
    assert_eq!(overview_heading(Some("sales.csv"), None), "sales.csv · all time");
    assert_eq!(overview_heading(Some("sales.csv"), Some("Q2 2025")), "sales.csv · Q2 2025");
}
