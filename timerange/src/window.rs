//! Selection to concrete date window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter control only emits a [`Selection`]. Dashboard pages use this
//! module to turn it into the half-open `[from, to)` date pair the analytics
//! API filters on. `All` and "no selection" resolve to no window at all.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::selection::{AutoRange, DATE_FORMAT, QuickKey, Selection};

/// Half-open date interval: `from` is included, `to` is excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Last day inside the window.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.to.pred_opt().unwrap_or(self.to)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date < self.to
    }

    /// Number of days covered.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

impl Selection {
    /// Resolve the selection against `today`. Returns `None` for unbounded
    /// selections and for dates outside chrono's representable range.
    #[must_use]
    pub fn window(&self, today: NaiveDate) -> Option<DateWindow> {
        match self {
            Self::Quick { key } => quick_window(*key, today),
            Self::Auto(range) => auto_window(range),
            Self::Custom(range) => Some(DateWindow { from: range.start(), to: range.end().succ_opt()? }),
        }
    }
}

fn quick_window(key: QuickKey, today: NaiveDate) -> Option<DateWindow> {
    let tomorrow = today.succ_opt()?;
    let from = match key {
        QuickKey::OneMonth => today.checked_sub_months(Months::new(1))?,
        QuickKey::ThreeMonths => today.checked_sub_months(Months::new(3))?,
        QuickKey::SixMonths => today.checked_sub_months(Months::new(6))?,
        QuickKey::YearToDate => first_of_month(today.year(), 1)?,
        QuickKey::Year(year) => {
            return Some(DateWindow { from: first_of_month(year, 1)?, to: first_of_month(year.checked_add(1)?, 1)? });
        }
        QuickKey::All => return None,
    };
    Some(DateWindow { from, to: tomorrow })
}

fn auto_window(range: &AutoRange) -> Option<DateWindow> {
    let span = range.preset().months_per_period();
    let start_month = u32::from(range.period().unwrap_or(0)) * span + 1;
    let from = first_of_month(range.year(), start_month)?;
    let to = from.checked_add_months(Months::new(span))?;
    Some(DateWindow { from, to })
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Query parameters for the analytics stats endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsQuery {
    /// First included day, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// First excluded day, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The selection the window came from, for backend-side labelling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

impl StatsQuery {
    #[must_use]
    pub fn for_selection(selection: Option<&Selection>, today: NaiveDate) -> Self {
        let window = selection.and_then(|s| s.window(today));
        Self {
            from: window.map(|w| w.from.format(DATE_FORMAT).to_string()),
            to: window.map(|w| w.to.format(DATE_FORMAT).to_string()),
            selection: selection.copied(),
        }
    }

    /// `true` when no date bound applies and the unfiltered endpoint fits.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// `from`/`to` as URL query pairs, skipping absent bounds.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = &self.from {
            pairs.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            pairs.push(("to", to.clone()));
        }
        pairs
    }
}
