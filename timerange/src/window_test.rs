use super::*;
use crate::selection::{CustomRange, Preset};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn auto(preset: Preset, year: i32, period: Option<u8>) -> Selection {
    Selection::Auto(AutoRange::new(preset, year, period).unwrap())
}

fn quick(key: QuickKey) -> Selection {
    Selection::Quick { key }
}

#[test]
fn quarter_two_covers_april_through_june() {
    let window = auto(Preset::Quarter, 2025, Some(1)).window(date(2026, 1, 1)).unwrap();
    assert_eq!(window.from, date(2025, 4, 1));
    assert_eq!(window.to, date(2025, 7, 1));
    assert_eq!(window.last_day(), date(2025, 6, 30));
}

#[test]
fn month_window_spans_calendar_month() {
    let feb = auto(Preset::Month, 2024, Some(1)).window(date(2026, 1, 1)).unwrap();
    assert_eq!(feb.from, date(2024, 2, 1));
    assert_eq!(feb.to, date(2024, 3, 1));
    assert_eq!(feb.days(), 29);

    let dec = auto(Preset::Month, 2025, Some(11)).window(date(2026, 1, 1)).unwrap();
    assert_eq!(dec.from, date(2025, 12, 1));
    assert_eq!(dec.to, date(2026, 1, 1));
}

#[test]
fn half_year_and_year_windows() {
    let h2 = auto(Preset::HalfYear, 2025, Some(1)).window(date(2026, 1, 1)).unwrap();
    assert_eq!((h2.from, h2.to), (date(2025, 7, 1), date(2026, 1, 1)));
    let year = auto(Preset::Year, 2025, None).window(date(2026, 1, 1)).unwrap();
    assert_eq!((year.from, year.to), (date(2025, 1, 1), date(2026, 1, 1)));
}

#[test]
fn relative_quick_ranges_end_tomorrow() {
    let today = date(2026, 10, 19);
    let one = quick(QuickKey::OneMonth).window(today).unwrap();
    assert_eq!((one.from, one.to), (date(2026, 9, 19), date(2026, 10, 20)));
    let three = quick(QuickKey::ThreeMonths).window(today).unwrap();
    assert_eq!(three.from, date(2026, 7, 19));
    let six = quick(QuickKey::SixMonths).window(today).unwrap();
    assert_eq!(six.from, date(2026, 4, 19));
    assert!(six.contains(today));
}

#[test]
fn month_back_clamps_to_month_end() {
    let window = quick(QuickKey::OneMonth).window(date(2025, 3, 31)).unwrap();
    assert_eq!(window.from, date(2025, 2, 28));
}

#[test]
fn year_to_date_and_literal_year() {
    let today = date(2026, 10, 19);
    let ytd = quick(QuickKey::YearToDate).window(today).unwrap();
    assert_eq!((ytd.from, ytd.to), (date(2026, 1, 1), date(2026, 10, 20)));
    let year = quick(QuickKey::Year(2026)).window(today).unwrap();
    assert_eq!((year.from, year.to), (date(2026, 1, 1), date(2027, 1, 1)));
}

#[test]
fn all_is_unbounded() {
    assert_eq!(quick(QuickKey::All).window(date(2026, 1, 1)), None);
}

#[test]
fn custom_window_includes_last_day() {
    let range = CustomRange::parse("2025-01-10", "2025-01-20").unwrap();
    let window = Selection::Custom(range).window(date(2026, 1, 1)).unwrap();
    assert_eq!((window.from, window.to), (date(2025, 1, 10), date(2025, 1, 21)));
    assert!(window.contains(date(2025, 1, 20)));
    assert!(!window.contains(date(2025, 1, 21)));
    assert_eq!(window.days(), 11);
}

#[test]
fn stats_query_formats_bounds() {
    let selection = auto(Preset::Quarter, 2025, Some(1));
    let query = StatsQuery::for_selection(Some(&selection), date(2026, 1, 1));
    assert_eq!(query.from.as_deref(), Some("2025-04-01"));
    assert_eq!(query.to.as_deref(), Some("2025-07-01"));
    assert!(!query.is_unbounded());
    assert_eq!(
        query.to_query_pairs(),
        vec![("from", "2025-04-01".to_owned()), ("to", "2025-07-01".to_owned())]
    );
}

#[test]
fn stats_query_without_selection_is_unbounded() {
    let query = StatsQuery::for_selection(None, date(2026, 1, 1));
    assert!(query.is_unbounded());
    assert!(query.to_query_pairs().is_empty());
    assert_eq!(serde_json::to_value(&query).unwrap(), serde_json::json!({}));
}

#[test]
fn stats_query_for_all_keeps_selection_without_bounds() {
    let selection = quick(QuickKey::All);
    let query = StatsQuery::for_selection(Some(&selection), date(2026, 1, 1));
    assert!(query.is_unbounded());
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        serde_json::json!({"selection": {"kind": "quick", "key": "all"}})
    );
}
