use super::*;
use crate::clock::FixedClock;
use chrono::NaiveDate;

// =============================================================
// Helpers
// =============================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn picker_with(config: PickerConfig) -> TimeRangePicker<FixedClock> {
    TimeRangePicker::new(config, Locale::english(), FixedClock(today()))
}

fn nested() -> TimeRangePicker<FixedClock> {
    picker_with(PickerConfig::default())
}

fn flat() -> TimeRangePicker<FixedClock> {
    picker_with(PickerConfig { layout: MenuLayout::Flat, ..PickerConfig::default() })
}

fn scheduled_ticket(actions: &[PickerAction]) -> Option<Ticket> {
    actions.iter().find_map(|a| match a {
        PickerAction::ScheduleReset { ticket, .. } => Some(*ticket),
        _ => None,
    })
}

fn open_month_grid(picker: &mut TimeRangePicker<FixedClock>) {
    picker.open();
    picker.enter_auto();
    picker.choose_category(Preset::Month);
    assert_eq!(picker.view(), PickerView::Month);
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_closed_menu_with_current_year() {
    let picker = nested();
    assert!(!picker.is_open());
    assert_eq!(picker.view(), PickerView::Menu);
    assert_eq!(picker.picker_year(), 2026);
    assert!(picker.draft().is_empty());
    assert_eq!(picker.selection(), None);
    assert_eq!(picker.label(), None);
    assert_eq!(picker.trigger_text(), "Time range");
}

#[test]
fn single_preset_config_defaults_to_its_grid() {
    let picker = picker_with(PickerConfig { allowed_presets: vec![Preset::Quarter], ..PickerConfig::default() });
    assert_eq!(picker.view(), PickerView::Quarter);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: PickerConfig =
        serde_json::from_str(r#"{"allowed_presets": ["month", "half-year"], "layout": "flat"}"#).unwrap();
    assert_eq!(config.allowed_presets, vec![Preset::Month, Preset::HalfYear]);
    assert_eq!(config.layout, MenuLayout::Flat);
    assert!(config.allow_custom);
    assert_eq!(config.reset_delay_ms, DEFAULT_RESET_DELAY_MS);
}

// =============================================================
// Open / close / deferred reset
// =============================================================

#[test]
fn open_resets_view_regardless_of_previous_view() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    picker.close();
    assert_eq!(picker.view(), PickerView::Month);

    picker.open();
    assert!(picker.is_open());
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn open_twice_is_ignored() {
    let mut picker = nested();
    assert_eq!(picker.open(), vec![PickerAction::Redraw]);
    assert!(picker.open().is_empty());
}

#[test]
fn close_schedules_reset_with_configured_delay() {
    let mut picker = picker_with(PickerConfig { reset_delay_ms: 350, ..PickerConfig::default() });
    open_month_grid(&mut picker);
    let actions = picker.close();
    assert!(!picker.is_open());
    assert!(matches!(actions.as_slice(), [PickerAction::Redraw, PickerAction::ScheduleReset { delay_ms: 350, .. }]));

    let ticket = scheduled_ticket(&actions).unwrap();
    assert_eq!(picker.fire_reset(ticket), vec![PickerAction::Redraw]);
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn close_when_closed_is_ignored() {
    let mut picker = nested();
    assert!(picker.close().is_empty());
    assert_eq!(picker.pending_reset(), None);
}

#[test]
fn reopening_cancels_pending_reset() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    let ticket = scheduled_ticket(&picker.close()).unwrap();
    picker.open();
    picker.enter_custom();
    assert!(picker.fire_reset(ticket).is_empty());
    assert_eq!(picker.view(), PickerView::Custom);
}

#[test]
fn stale_ticket_does_not_reset() {
    let mut picker = nested();
    picker.open();
    let first = scheduled_ticket(&picker.close()).unwrap();
    picker.open();
    let second = scheduled_ticket(&picker.close()).unwrap();
    assert!(picker.fire_reset(first).is_empty());
    assert_eq!(picker.fire_reset(second), vec![PickerAction::Redraw]);
}

#[test]
fn toggle_alternates_open_and_close() {
    let mut picker = nested();
    picker.toggle();
    assert!(picker.is_open());
    picker.toggle();
    assert!(!picker.is_open());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nested_layout_navigation_and_back() {
    let mut picker = nested();
    picker.open();
    assert!(picker.choose_category(Preset::Month).is_empty(), "categories live under auto");
    picker.enter_auto();
    assert_eq!(picker.view(), PickerView::Auto);
    picker.choose_category(Preset::HalfYear);
    assert_eq!(picker.view(), PickerView::HalfYear);
    picker.back();
    assert_eq!(picker.view(), PickerView::Auto);
    picker.back();
    assert_eq!(picker.view(), PickerView::Menu);
    assert!(picker.back().is_empty());
}

#[test]
fn flat_layout_categories_in_menu() {
    let mut picker = flat();
    picker.open();
    assert!(picker.enter_auto().is_empty());
    picker.choose_category(Preset::Year);
    assert_eq!(picker.view(), PickerView::Year);
    picker.back();
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn custom_backs_to_menu() {
    let mut picker = nested();
    picker.open();
    picker.enter_custom();
    assert_eq!(picker.view(), PickerView::Custom);
    picker.back();
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn custom_from_auto_submenu_backs_to_auto() {
    let mut picker = nested();
    picker.open();
    picker.enter_auto();
    assert_eq!(picker.enter_custom(), vec![PickerAction::Redraw]);
    assert_eq!(picker.view(), PickerView::Custom);
    picker.back();
    assert_eq!(picker.view(), PickerView::Auto);
    picker.back();
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn custom_parent_is_forgotten_on_reopen() {
    let mut picker = nested();
    picker.open();
    picker.enter_auto();
    picker.enter_custom();
    picker.close();
    picker.open();
    picker.enter_custom();
    picker.back();
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn custom_is_not_reachable_from_a_grid() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    assert!(picker.enter_custom().is_empty());
    assert_eq!(picker.view(), PickerView::Month);
}

#[test]
fn disallowed_category_and_custom_are_ignored() {
    let mut picker = picker_with(PickerConfig {
        allowed_presets: vec![Preset::Month, Preset::Year],
        allow_custom: false,
        layout: MenuLayout::Flat,
        ..PickerConfig::default()
    });
    picker.open();
    assert!(picker.choose_category(Preset::Quarter).is_empty());
    assert!(picker.enter_custom().is_empty());
    assert_eq!(picker.view(), PickerView::Menu);
    assert_eq!(picker.categories(), vec![Preset::Month, Preset::Year]);
}

#[test]
fn navigation_requires_open_popover() {
    let mut picker = nested();
    assert!(picker.enter_auto().is_empty());
    assert!(picker.enter_custom().is_empty());
    assert!(picker.back().is_empty());
}

#[test]
fn back_does_not_touch_selection() {
    let mut picker = nested();
    picker.open();
    picker.choose_quick(QuickKey::YearToDate);
    open_month_grid(&mut picker);
    picker.back();
    assert_eq!(picker.selection(), Some(&Selection::Quick { key: QuickKey::YearToDate }));
}

// =============================================================
// Year stepping
// =============================================================

#[test]
fn step_year_changes_only_picker_year() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    picker.step_year(-1);
    picker.step_year(-1);
    assert_eq!(picker.picker_year(), 2024);
    assert_eq!(picker.view(), PickerView::Month);
    assert!(picker.selection().is_none());
    picker.step_year(1);
    assert_eq!(picker.picker_year(), 2025);
}

#[test]
fn step_year_outside_grid_is_ignored() {
    let mut picker = nested();
    picker.open();
    assert!(picker.step_year(1).is_empty());
    assert_eq!(picker.picker_year(), 2026);
}

#[test]
fn choosing_category_resets_picker_year() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    picker.step_year(-3);
    picker.back();
    picker.choose_category(Preset::Quarter);
    assert_eq!(picker.picker_year(), 2026);
}

// =============================================================
// Grids
// =============================================================

#[test]
fn grid_boundaries_map_to_first_and_last_period() {
    let mut picker = flat();
    picker.open();
    for (preset, max) in [(Preset::Month, 11), (Preset::Quarter, 3), (Preset::HalfYear, 1)] {
        picker.choose_category(preset);
        let grid = picker.grid();
        assert_eq!(grid.first().map(|c| c.value), Some(0));
        assert_eq!(grid.last().map(|c| c.value), Some(max));
        picker.back();
    }
}

#[test]
fn month_grid_uses_short_names() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    let labels = picker.grid().into_iter().map(|c| c.label).collect::<Vec<_>>();
    assert_eq!(labels.first().map(String::as_str), Some("Jan"));
    assert_eq!(labels.last().map(String::as_str), Some("Dec"));
}

#[test]
fn year_grid_ends_at_picker_year() {
    let mut picker = picker_with(PickerConfig { layout: MenuLayout::Flat, year_span: 4, ..PickerConfig::default() });
    picker.open();
    picker.choose_category(Preset::Year);
    let years = picker.grid().into_iter().map(|c| c.value).collect::<Vec<_>>();
    assert_eq!(years, vec![2023, 2024, 2025, 2026]);
}

#[test]
fn grid_is_empty_outside_grid_views() {
    let mut picker = nested();
    picker.open();
    assert!(picker.grid().is_empty());
}

#[test]
fn grid_marks_committed_cell_for_browsed_year_only() {
    let mut picker = flat();
    picker.open();
    picker.choose_category(Preset::Quarter);
    picker.choose_cell(2);

    picker.open();
    picker.choose_category(Preset::Quarter);
    let selected = picker.grid().into_iter().filter(|c| c.selected).map(|c| c.value).collect::<Vec<_>>();
    assert_eq!(selected, vec![2]);

    picker.step_year(-1);
    assert!(picker.grid().iter().all(|c| !c.selected));
}

// =============================================================
// Commits
// =============================================================

#[test]
fn choosing_period_commits_closes_and_schedules_reset() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    picker.step_year(-1);
    let actions = picker.choose_cell(2);

    assert_eq!(picker.label().as_deref(), Some("March 2025"));
    assert!(!picker.is_open());
    assert!(actions.contains(&PickerAction::SelectionChanged));
    assert_eq!(picker.picker_year(), 2026, "picker year discarded on commit");
    assert_eq!(picker.view(), PickerView::Month, "view resets after the delay");

    let ticket = scheduled_ticket(&actions).unwrap();
    picker.fire_reset(ticket);
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn choosing_year_commits_whole_year() {
    let mut picker = flat();
    picker.open();
    picker.choose_category(Preset::Year);
    picker.choose_cell(2024);
    assert_eq!(picker.label().as_deref(), Some("2024"));
}

#[test]
fn out_of_range_cell_is_ignored() {
    let mut picker = nested();
    open_month_grid(&mut picker);
    assert!(picker.choose_cell(12).is_empty());
    assert!(picker.choose_cell(-1).is_empty());
    assert!(picker.is_open());
    assert!(picker.selection().is_none());
}

#[test]
fn choose_cell_outside_grid_is_ignored() {
    let mut picker = nested();
    picker.open();
    assert!(picker.choose_cell(0).is_empty());
}

#[test]
fn quick_commit_overwrites_previous_selection() {
    let mut picker = nested();
    picker.open();
    picker.choose_quick(QuickKey::YearToDate);
    assert_eq!(picker.label().as_deref(), Some("YTD"));
    picker.open();
    picker.choose_quick(QuickKey::All);
    assert_eq!(picker.label().as_deref(), Some("All"));
    assert_eq!(picker.selection(), Some(&Selection::Quick { key: QuickKey::All }));
}

#[test]
fn default_quick_keys_use_clock_year() {
    let picker = nested();
    assert!(picker.quick_keys().contains(&QuickKey::Year(2026)));
    let custom = picker_with(PickerConfig { quick_keys: Some(vec![QuickKey::OneMonth]), ..PickerConfig::default() });
    assert_eq!(custom.quick_keys(), vec![QuickKey::OneMonth]);
}

// =============================================================
// Custom range
// =============================================================

#[test]
fn apply_disabled_until_draft_is_valid() {
    let mut picker = nested();
    picker.open();
    picker.enter_custom();
    assert!(!picker.can_apply());
    picker.set_draft_from("2025-01-01");
    assert!(!picker.can_apply());
    picker.set_draft_to("2025-03-31");
    assert!(picker.can_apply());
}

#[test]
fn invalid_custom_range_keeps_selection_and_popover() {
    let mut picker = nested();
    picker.open();
    picker.enter_custom();
    picker.set_draft_from("2025-06-01");
    picker.set_draft_to("2025-01-01");
    assert!(!picker.can_apply());
    assert!(picker.apply_custom().is_empty());
    assert!(picker.selection().is_none());
    assert!(picker.is_open());
    assert_eq!(picker.draft().from, "2025-06-01");
}

#[test]
fn valid_custom_range_commits_and_discards_draft() {
    let mut picker = nested();
    picker.open();
    picker.enter_custom();
    picker.set_draft_from("2025-01-01");
    picker.set_draft_to("2025-03-31");
    let actions = picker.apply_custom();
    assert!(actions.contains(&PickerAction::SelectionChanged));
    assert_eq!(picker.label().as_deref(), Some("Custom"));
    assert!(picker.draft().is_empty());
    assert_eq!(
        picker.committed_custom_bounds(),
        Some(("2025-01-01".to_owned(), "2025-03-31".to_owned()))
    );
}

#[test]
fn apply_outside_custom_view_is_ignored() {
    let mut picker = nested();
    picker.open();
    picker.set_draft_from("2025-01-01");
    picker.set_draft_to("2025-01-02");
    assert!(picker.apply_custom().is_empty());
}

#[test]
fn reopening_discards_draft() {
    let mut picker = nested();
    picker.open();
    picker.enter_custom();
    picker.set_draft_from("2025-01-01");
    picker.close();
    picker.open();
    assert!(picker.draft().is_empty());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_resets_immediately_without_delay() {
    let mut picker = nested();
    picker.open();
    picker.choose_quick(QuickKey::SixMonths);
    open_month_grid(&mut picker);
    picker.set_draft_from("2025-01-01");

    let actions = picker.clear();
    assert_eq!(actions, vec![PickerAction::SelectionChanged, PickerAction::Redraw]);
    assert_eq!(picker.selection(), None);
    assert!(!picker.is_open());
    assert_eq!(picker.view(), PickerView::Menu);
    assert!(picker.draft().is_empty());
    assert_eq!(picker.pending_reset(), None);
}

#[test]
fn clear_without_selection_reports_no_change() {
    let mut picker = nested();
    picker.open();
    picker.enter_auto();

    let actions = picker.clear();
    assert_eq!(actions, vec![PickerAction::Redraw]);
    assert_eq!(picker.model().revision(), 0);
    assert!(!picker.is_open());
    assert_eq!(picker.view(), PickerView::Menu);
}

#[test]
fn quick_commit_requires_open_popover() {
    let mut picker = nested();
    assert!(picker.choose_quick(QuickKey::YearToDate).is_empty());
    assert_eq!(picker.selection(), None);
    assert_eq!(picker.pending_reset(), None);
}

#[test]
fn clear_cancels_pending_reset() {
    let mut picker = nested();
    picker.open();
    let ticket = scheduled_ticket(&picker.close()).unwrap();
    picker.clear();
    assert!(picker.fire_reset(ticket).is_empty());
}

#[test]
fn trigger_text_follows_selection() {
    let mut picker = picker_with(PickerConfig::default());
    picker.open();
    picker.choose_quick(QuickKey::ThreeMonths);
    assert_eq!(picker.trigger_text(), "3M");
    picker.clear();
    assert_eq!(picker.trigger_text(), "Time range");
}
