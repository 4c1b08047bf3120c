//! Selection variants and the committing selection model.
//!
//! DESIGN
//! ======
//! A [`Selection`] is a closed set of mutually exclusive time windows. The
//! "no selection" state is `Option::None` on [`SelectionModel`], never a
//! variant. Constructors validate, so a stored `AutoRange` always carries a
//! period that fits its preset and a stored `CustomRange` always has
//! `from <= to`. Deserialization goes through the same validation.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Date format used by custom-range inputs and wire payloads.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a commit or a parse is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The quick-range key is not one of the known short keys or a year.
    #[error("unknown quick range key: {0}")]
    UnknownQuickKey(String),
    /// The preset name is not `month`, `quarter`, `half-year` or `year`.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// A month/quarter/half-year range was committed without a period.
    #[error("{0} range requires a period")]
    PeriodRequired(Preset),
    /// A whole-year range was committed with a period.
    #[error("{0} range does not take a period")]
    PeriodNotAllowed(Preset),
    /// The period index does not fit the preset.
    #[error("period {period} out of range for {preset} (max {max})")]
    PeriodOutOfRange { preset: Preset, period: u8, max: u8 },
    /// A custom-range bound was left blank.
    #[error("custom range bound is empty")]
    EmptyDate,
    /// A custom-range bound is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The custom range starts after it ends.
    #[error("custom range starts after it ends: {from} > {to}")]
    ReversedRange { from: NaiveDate, to: NaiveDate },
}

// =============================================================================
// QUICK RANGE
// =============================================================================

/// Predefined span relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuickKey {
    /// Last calendar month up to today.
    OneMonth,
    /// Last three calendar months up to today.
    ThreeMonths,
    /// Last six calendar months up to today.
    SixMonths,
    /// January 1st of this year up to today.
    YearToDate,
    /// One whole calendar year, keyed by its literal number (e.g. `"2026"`).
    Year(i32),
    /// No time bound.
    All,
}

impl QuickKey {
    /// The quick ranges offered by default, with the literal year set to
    /// `current_year`.
    #[must_use]
    pub fn defaults(current_year: i32) -> Vec<Self> {
        vec![
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::YearToDate,
            Self::Year(current_year),
            Self::All,
        ]
    }

    /// Short wire key (`"1m"`, `"ytd"`, `"2026"`, ...).
    #[must_use]
    pub fn as_key(self) -> String {
        match self {
            Self::OneMonth => "1m".to_owned(),
            Self::ThreeMonths => "3m".to_owned(),
            Self::SixMonths => "6m".to_owned(),
            Self::YearToDate => "ytd".to_owned(),
            Self::Year(year) => year.to_string(),
            Self::All => "all".to_owned(),
        }
    }

    /// Parse a short wire key.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownQuickKey`] for anything that is not a
    /// known key or a four-digit year.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let key = raw.trim().to_ascii_lowercase();
        match key.as_str() {
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "6m" => Ok(Self::SixMonths),
            "ytd" => Ok(Self::YearToDate),
            "all" => Ok(Self::All),
            digits if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse::<i32>()
                .map(Self::Year)
                .map_err(|_| SelectionError::UnknownQuickKey(raw.to_owned())),
            _ => Err(SelectionError::UnknownQuickKey(raw.to_owned())),
        }
    }
}

impl TryFrom<String> for QuickKey {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QuickKey> for String {
    fn from(value: QuickKey) -> Self {
        value.as_key()
    }
}

// =============================================================================
// AUTO RANGE
// =============================================================================

/// Calendar-anchored period type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl Preset {
    /// Every preset kind, in menu order.
    pub const ALL: [Self; 4] = [Self::Month, Self::Quarter, Self::HalfYear, Self::Year];

    /// Number of periods in one year, or `None` for whole-year ranges.
    #[must_use]
    pub fn period_count(self) -> Option<u8> {
        match self {
            Self::Month => Some(12),
            Self::Quarter => Some(4),
            Self::HalfYear => Some(2),
            Self::Year => None,
        }
    }

    /// Number of calendar months covered by one period.
    #[must_use]
    pub fn months_per_period(self) -> u32 {
        match self {
            Self::Month => 1,
            Self::Quarter => 3,
            Self::HalfYear => 6,
            Self::Year => 12,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::HalfYear => "half-year",
            Self::Year => "year",
        }
    }

    /// Parse a preset name.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownPreset`] for unrecognised names.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        match raw.trim() {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "half-year" | "half_year" | "halfyear" => Ok(Self::HalfYear),
            "year" => Ok(Self::Year),
            other => Err(SelectionError::UnknownPreset(other.to_owned())),
        }
    }

    /// Check that `period` is present iff the preset has periods, and that it
    /// fits the preset's range.
    ///
    /// # Errors
    ///
    /// Returns the matching [`SelectionError`] period variant.
    pub fn validate_period(self, period: Option<u8>) -> Result<(), SelectionError> {
        match (self.period_count(), period) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(SelectionError::PeriodNotAllowed(self)),
            (Some(_), None) => Err(SelectionError::PeriodRequired(self)),
            (Some(count), Some(p)) if p < count => Ok(()),
            (Some(count), Some(p)) => Err(SelectionError::PeriodOutOfRange { preset: self, period: p, max: count - 1 }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preset period inside one calendar year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAutoRange")]
pub struct AutoRange {
    preset: Preset,
    year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<u8>,
}

#[derive(Deserialize)]
struct RawAutoRange {
    preset: Preset,
    year: i32,
    #[serde(default)]
    period: Option<u8>,
}

impl TryFrom<RawAutoRange> for AutoRange {
    type Error = SelectionError;

    fn try_from(raw: RawAutoRange) -> Result<Self, Self::Error> {
        Self::new(raw.preset, raw.year, raw.period)
    }
}

impl AutoRange {
    /// Build a validated preset range.
    ///
    /// # Errors
    ///
    /// Returns an error when `period` is missing for a sub-year preset,
    /// present for [`Preset::Year`], or out of range.
    pub fn new(preset: Preset, year: i32, period: Option<u8>) -> Result<Self, SelectionError> {
        preset.validate_period(period)?;
        Ok(Self { preset, year, period })
    }

    #[must_use]
    pub fn preset(&self) -> Preset {
        self.preset
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn period(&self) -> Option<u8> {
        self.period
    }
}

// =============================================================================
// CUSTOM RANGE
// =============================================================================

/// An explicit, inclusive `[from, to]` date pair with `from <= to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCustomRange")]
pub struct CustomRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawCustomRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawCustomRange> for CustomRange {
    type Error = SelectionError;

    fn try_from(raw: RawCustomRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl CustomRange {
    /// Build a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::ReversedRange`] when `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, SelectionError> {
        if from > to {
            return Err(SelectionError::ReversedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Parse the two text-field values of the custom-range inputs.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyDate`], [`SelectionError::InvalidDate`]
    /// or [`SelectionError::ReversedRange`].
    pub fn parse(from: &str, to: &str) -> Result<Self, SelectionError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// First day of the range.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.to
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, SelectionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SelectionError::EmptyDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| SelectionError::InvalidDate(trimmed.to_owned()))
}

// =============================================================================
// SELECTION
// =============================================================================

/// The active time window of a filter control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    Quick { key: QuickKey },
    Auto(AutoRange),
    Custom(CustomRange),
}

impl Selection {
    /// Human-readable trigger label.
    ///
    /// Custom ranges show only the generic custom label; the bounds are
    /// displayed inside the open popover.
    #[must_use]
    pub fn label(&self, locale: &Locale) -> String {
        match self {
            Self::Quick { key } => locale.quick_label(*key),
            Self::Auto(range) => auto_label(range, locale),
            Self::Custom(_) => locale.custom_label.clone(),
        }
    }
}

fn auto_label(range: &AutoRange, locale: &Locale) -> String {
    let year = range.year;
    match (range.preset, range.period) {
        (Preset::Month, Some(m)) => format!("{} {year}", locale.month_name(m)),
        (Preset::Quarter, Some(q)) => format!("{} {year}", locale.quarter_label(q)),
        (Preset::HalfYear, Some(h)) => format!("{} {year}", locale.half_label(h)),
        _ => year.to_string(),
    }
}

// =============================================================================
// SELECTION MODEL
// =============================================================================

/// Owns the committed selection of one control instance.
///
/// `revision` increases on every commit and clear so hosts can detect a
/// change without comparing selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    current: Option<Selection>,
    revision: u64,
}

impl SelectionModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection (e.g. restored from the URL).
    #[must_use]
    pub fn with_selection(selection: Option<Selection>) -> Self {
        Self { current: selection, revision: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn commit_quick(&mut self, key: QuickKey) {
        self.replace(Some(Selection::Quick { key }));
    }

    /// Commit a preset range.
    ///
    /// # Errors
    ///
    /// Returns the [`AutoRange::new`] error and leaves the selection untouched.
    pub fn commit_auto(&mut self, preset: Preset, year: i32, period: Option<u8>) -> Result<(), SelectionError> {
        let range = AutoRange::new(preset, year, period)?;
        self.replace(Some(Selection::Auto(range)));
        Ok(())
    }

    /// Commit a custom range from raw input strings.
    ///
    /// # Errors
    ///
    /// Returns the [`CustomRange::parse`] error and leaves the selection
    /// untouched.
    pub fn commit_custom(&mut self, from: &str, to: &str) -> Result<(), SelectionError> {
        let range = CustomRange::parse(from, to)?;
        self.replace(Some(Selection::Custom(range)));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }

    /// Trigger label for the current selection, `None` when nothing is active.
    #[must_use]
    pub fn label(&self, locale: &Locale) -> Option<String> {
        self.current.as_ref().map(|s| s.label(locale))
    }

    fn replace(&mut self, next: Option<Selection>) {
        self.current = next;
        self.revision += 1;
    }
}
