//! Popover navigation state machine for the time-range filter.
//!
//! The picker owns the committed [`SelectionModel`] plus the transient state
//! of its popover: whether it is open, which sub-view is showing, the year
//! being browsed, and the custom-range draft. Draft state never reaches the
//! selection until a commit, and it is discarded on every open, commit and
//! clear.
//!
//! Every transition returns the [`PickerAction`]s the host must carry out.
//! An empty list means the event was ignored in the current state.
//!
//! ```text
//!            Nested layout                       Flat layout
//!   menu ─┬─> auto ─┬─> month                menu ─┬─> month
//!         │         ├─> quarter                    ├─> quarter
//!         │         ├─> half-year                  ├─> half-year
//!         │         └─> year                       ├─> year
//!         └─> custom                               └─> custom
//! ```
//!
//! Back always pops one level. Closing (commit, outside click) hides the
//! popover at once and schedules the view reset through [`Deferred`] so the
//! stale sub-view is not swapped out mid-animation.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::deferred::{Deferred, Ticket};
use crate::locale::Locale;
use crate::selection::{AutoRange, CustomRange, DATE_FORMAT, Preset, QuickKey, Selection, SelectionModel};

/// Default delay before a closed popover returns to its default view.
pub const DEFAULT_RESET_DELAY_MS: u32 = 200;

/// Default number of years listed in the year grid.
pub const DEFAULT_YEAR_SPAN: u8 = 6;

/// Which popover panel is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickerView {
    #[default]
    Menu,
    Auto,
    Month,
    Quarter,
    HalfYear,
    Year,
    Custom,
}

impl PickerView {
    #[must_use]
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Month => Self::Month,
            Preset::Quarter => Self::Quarter,
            Preset::HalfYear => Self::HalfYear,
            Preset::Year => Self::Year,
        }
    }

    /// The preset a period-grid view commits, `None` for navigation views.
    #[must_use]
    pub fn preset(self) -> Option<Preset> {
        match self {
            Self::Month => Some(Preset::Month),
            Self::Quarter => Some(Preset::Quarter),
            Self::HalfYear => Some(Preset::HalfYear),
            Self::Year => Some(Preset::Year),
            Self::Menu | Self::Auto | Self::Custom => None,
        }
    }
}

/// Whether preset categories live under an "Auto" sub-menu or directly in the
/// top-level menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuLayout {
    #[default]
    Nested,
    Flat,
}

/// Static configuration of one filter control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Preset categories offered; order follows [`Preset::ALL`].
    pub allowed_presets: Vec<Preset>,
    pub layout: MenuLayout,
    /// Quick-range pills; `None` offers [`QuickKey::defaults`] for this year.
    pub quick_keys: Option<Vec<QuickKey>>,
    pub allow_custom: bool,
    pub reset_delay_ms: u32,
    /// Years listed in the year grid, ending at the browsed year.
    pub year_span: u8,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allowed_presets: Preset::ALL.to_vec(),
            layout: MenuLayout::Nested,
            quick_keys: None,
            allow_custom: true,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl PickerConfig {
    /// View shown when the popover opens: the only preset's grid when exactly
    /// one preset is enabled, the menu otherwise.
    #[must_use]
    pub fn default_view(&self) -> PickerView {
        match self.allowed_presets.as_slice() {
            [only] => PickerView::for_preset(*only),
            _ => PickerView::Menu,
        }
    }

    /// View that lists the preset categories for this layout.
    #[must_use]
    pub fn categories_view(&self) -> PickerView {
        match self.layout {
            MenuLayout::Nested => PickerView::Auto,
            MenuLayout::Flat => PickerView::Menu,
        }
    }

    #[must_use]
    pub fn allows(&self, preset: Preset) -> bool {
        self.allowed_presets.contains(&preset)
    }
}

/// Uncommitted custom-range text inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRange {
    pub from: String,
    pub to: String,
}

impl DraftRange {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
}

/// Work the host must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// Popover state changed; re-render.
    Redraw,
    /// The committed selection changed (commit or clear); refetch data.
    SelectionChanged,
    /// Call [`TimeRangePicker::fire_reset`] with `ticket` after `delay_ms`.
    ScheduleReset { ticket: Ticket, delay_ms: u32 },
}

/// One clickable cell of a period grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Period index for month/quarter/half-year grids, the year for the year grid.
    pub value: i32,
    pub label: String,
    /// The cell matches the committed selection.
    pub selected: bool,
}

/// The filter control's state machine.
#[derive(Clone, Debug)]
pub struct TimeRangePicker<C: Clock = SystemClock> {
    config: PickerConfig,
    locale: Locale,
    clock: C,
    model: SelectionModel,
    is_open: bool,
    view: PickerView,
    picker_year: i32,
    draft: DraftRange,
    /// View the custom panel was entered from; `back` returns there.
    custom_parent: PickerView,
    reset: Deferred<PickerView>,
}

impl Default for TimeRangePicker<SystemClock> {
    fn default() -> Self {
        Self::new(PickerConfig::default(), Locale::english(), SystemClock)
    }
}

impl<C: Clock> TimeRangePicker<C> {
    #[must_use]
    pub fn new(config: PickerConfig, locale: Locale, clock: C) -> Self {
        let view = config.default_view();
        let picker_year = clock.today().year();
        Self {
            config,
            locale,
            clock,
            model: SelectionModel::new(),
            is_open: false,
            view,
            picker_year,
            draft: DraftRange::default(),
            custom_parent: PickerView::Menu,
            reset: Deferred::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn view(&self) -> PickerView {
        self.view
    }

    #[must_use]
    pub fn picker_year(&self) -> i32 {
        self.picker_year
    }

    #[must_use]
    pub fn draft(&self) -> &DraftRange {
        &self.draft
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.model.current()
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.model.label(&self.locale)
    }

    /// Text for the trigger pill: the selection label or the placeholder.
    #[must_use]
    pub fn trigger_text(&self) -> String {
        self.label().unwrap_or_else(|| self.locale.ui.placeholder.clone())
    }

    /// Committed custom bounds as `YYYY-MM-DD` strings, shown inside the
    /// custom panel.
    #[must_use]
    pub fn committed_custom_bounds(&self) -> Option<(String, String)> {
        match self.model.current() {
            Some(Selection::Custom(range)) => Some((
                range.start().format(DATE_FORMAT).to_string(),
                range.end().format(DATE_FORMAT).to_string(),
            )),
            _ => None,
        }
    }

    /// Quick-range pills offered in the menu.
    #[must_use]
    pub fn quick_keys(&self) -> Vec<QuickKey> {
        self.config
            .quick_keys
            .clone()
            .unwrap_or_else(|| QuickKey::defaults(self.current_year()))
    }

    /// Enabled preset categories in menu order.
    #[must_use]
    pub fn categories(&self) -> Vec<Preset> {
        Preset::ALL
            .into_iter()
            .filter(|p| self.config.allows(*p))
            .collect()
    }

    /// Whether the custom panel's Apply button is enabled.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        CustomRange::parse(&self.draft.from, &self.draft.to).is_ok()
    }

    /// Ticket of the scheduled view reset, if one is pending.
    #[must_use]
    pub fn pending_reset(&self) -> Option<Ticket> {
        self.reset.pending_ticket()
    }

    /// Cells of the current period grid; empty outside grid views.
    #[must_use]
    pub fn grid(&self) -> Vec<GridCell> {
        let Some(preset) = self.view.preset() else {
            return Vec::new();
        };
        match preset.period_count() {
            Some(count) => (0..count)
                .map(|index| GridCell {
                    value: i32::from(index),
                    label: self.period_label(preset, index),
                    selected: self.is_committed(preset, self.picker_year, Some(index)),
                })
                .collect(),
            None => {
                let span = i32::from(self.config.year_span.max(1));
                let first = self.picker_year.saturating_sub(span - 1);
                (first..=self.picker_year)
                    .map(|year| GridCell {
                        value: year,
                        label: year.to_string(),
                        selected: self.is_committed(Preset::Year, year, None),
                    })
                    .collect()
            }
        }
    }

    // --- Open / close ---

    /// Open the popover at its default view with fresh draft state.
    pub fn open(&mut self) -> Vec<PickerAction> {
        if self.is_open {
            return Vec::new();
        }
        self.reset.cancel();
        self.is_open = true;
        self.view = self.config.default_view();
        self.discard_drafts();
        vec![PickerAction::Redraw]
    }

    /// Close the popover without committing (outside click, escape).
    pub fn close(&mut self) -> Vec<PickerAction> {
        if !self.is_open {
            return Vec::new();
        }
        self.is_open = false;
        let ticket = self.reset.schedule(self.config.default_view());
        vec![PickerAction::Redraw, self.schedule_action(ticket)]
    }

    pub fn toggle(&mut self) -> Vec<PickerAction> {
        if self.is_open { self.close() } else { self.open() }
    }

    /// Complete a scheduled view reset. Stale tickets, and tickets fired
    /// after the popover was reopened, are ignored.
    pub fn fire_reset(&mut self, ticket: Ticket) -> Vec<PickerAction> {
        match self.reset.fire(ticket) {
            Some(view) if !self.is_open => {
                self.view = view;
                vec![PickerAction::Redraw]
            }
            _ => Vec::new(),
        }
    }

    // --- Navigation ---

    /// Enter the "Auto" sub-menu (nested layout only).
    pub fn enter_auto(&mut self) -> Vec<PickerAction> {
        if !self.is_open || self.config.layout != MenuLayout::Nested || self.view != PickerView::Menu {
            return Vec::new();
        }
        if self.config.allowed_presets.is_empty() {
            return Vec::new();
        }
        self.view = PickerView::Auto;
        vec![PickerAction::Redraw]
    }

    /// Open a preset's period grid from the category list.
    pub fn choose_category(&mut self, preset: Preset) -> Vec<PickerAction> {
        if !self.is_open || !self.config.allows(preset) || self.view != self.config.categories_view() {
            return Vec::new();
        }
        self.view = PickerView::for_preset(preset);
        self.picker_year = self.current_year();
        vec![PickerAction::Redraw]
    }

    /// Open the custom-range panel from the menu or the category list.
    pub fn enter_custom(&mut self) -> Vec<PickerAction> {
        if !self.is_open || !self.config.allow_custom {
            return Vec::new();
        }
        if self.view != PickerView::Menu && self.view != self.config.categories_view() {
            return Vec::new();
        }
        self.custom_parent = self.view;
        self.view = PickerView::Custom;
        vec![PickerAction::Redraw]
    }

    /// Pop one level.
    pub fn back(&mut self) -> Vec<PickerAction> {
        if !self.is_open {
            return Vec::new();
        }
        let parent = match self.view {
            PickerView::Menu => return Vec::new(),
            PickerView::Auto => PickerView::Menu,
            PickerView::Custom => self.custom_parent,
            PickerView::Month | PickerView::Quarter | PickerView::HalfYear | PickerView::Year => {
                self.config.categories_view()
            }
        };
        self.view = parent;
        vec![PickerAction::Redraw]
    }

    /// Move the browsed year by `delta` inside a period grid.
    pub fn step_year(&mut self, delta: i32) -> Vec<PickerAction> {
        if !self.is_open || self.view.preset().is_none() || delta == 0 {
            return Vec::new();
        }
        self.picker_year = self.picker_year.saturating_add(delta);
        vec![PickerAction::Redraw]
    }

    // --- Draft ---

    pub fn set_draft_from(&mut self, value: impl Into<String>) -> Vec<PickerAction> {
        self.draft.from = value.into();
        vec![PickerAction::Redraw]
    }

    pub fn set_draft_to(&mut self, value: impl Into<String>) -> Vec<PickerAction> {
        self.draft.to = value.into();
        vec![PickerAction::Redraw]
    }

    // --- Commits ---

    /// Commit a quick range from the menu pills.
    pub fn choose_quick(&mut self, key: QuickKey) -> Vec<PickerAction> {
        if !self.is_open {
            return Vec::new();
        }
        self.model.commit_quick(key);
        self.finish_commit()
    }

    /// Commit a cell of the current grid: a period index, or a year in the
    /// year grid.
    pub fn choose_cell(&mut self, value: i32) -> Vec<PickerAction> {
        if !self.is_open {
            return Vec::new();
        }
        let Some(preset) = self.view.preset() else {
            return Vec::new();
        };
        let committed = if preset == Preset::Year {
            self.model.commit_auto(preset, value, None)
        } else {
            match u8::try_from(value) {
                Ok(period) => self.model.commit_auto(preset, self.picker_year, Some(period)),
                Err(_) => return Vec::new(),
            }
        };
        if committed.is_err() {
            return Vec::new();
        }
        self.finish_commit()
    }

    /// Commit the custom draft. Ignored unless [`Self::can_apply`] holds.
    pub fn apply_custom(&mut self) -> Vec<PickerAction> {
        if !self.is_open || self.view != PickerView::Custom {
            return Vec::new();
        }
        if self.model.commit_custom(&self.draft.from, &self.draft.to).is_err() {
            return Vec::new();
        }
        self.finish_commit()
    }

    /// Drop the selection and return to the initial state immediately.
    /// `SelectionChanged` is only reported when something was selected.
    pub fn clear(&mut self) -> Vec<PickerAction> {
        let had_selection = self.model.is_active();
        if had_selection {
            self.model.clear();
        }
        self.reset.cancel();
        self.is_open = false;
        self.view = self.config.default_view();
        self.discard_drafts();
        if had_selection {
            vec![PickerAction::SelectionChanged, PickerAction::Redraw]
        } else {
            vec![PickerAction::Redraw]
        }
    }

    // --- Internals ---

    fn finish_commit(&mut self) -> Vec<PickerAction> {
        self.is_open = false;
        self.discard_drafts();
        let ticket = self.reset.schedule(self.config.default_view());
        vec![PickerAction::SelectionChanged, PickerAction::Redraw, self.schedule_action(ticket)]
    }

    fn schedule_action(&self, ticket: Ticket) -> PickerAction {
        PickerAction::ScheduleReset { ticket, delay_ms: self.config.reset_delay_ms }
    }

    fn discard_drafts(&mut self) {
        self.draft = DraftRange::default();
        self.custom_parent = PickerView::Menu;
        self.picker_year = self.current_year();
    }

    fn current_year(&self) -> i32 {
        self.clock.today().year()
    }

    fn period_label(&self, preset: Preset, index: u8) -> String {
        match preset {
            Preset::Month => self.locale.month_short_name(index),
            Preset::Quarter => self.locale.quarter_label(index),
            Preset::HalfYear => self.locale.half_label(index),
            Preset::Year => index.to_string(),
        }
    }

    fn is_committed(&self, preset: Preset, year: i32, period: Option<u8>) -> bool {
        match (self.model.current(), AutoRange::new(preset, year, period)) {
            (Some(Selection::Auto(current)), Ok(candidate)) => *current == candidate,
            _ => false,
        }
    }
}
