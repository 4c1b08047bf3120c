//! Label tables for the filter control.
//!
//! Hosts pass a [`Locale`] value into the picker instead of reading a
//! translation context, so labels are plain data and tests can pin them.
//! Missing keys in a JSON table fall back to English.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use serde::{Deserialize, Serialize};

use crate::selection::{Preset, QuickKey};

/// Short labels for the quick-range pills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickLabels {
    pub one_month: String,
    pub three_months: String,
    pub six_months: String,
    pub year_to_date: String,
    pub all: String,
}

impl Default for QuickLabels {
    fn default() -> Self {
        Self {
            one_month: "1M".to_owned(),
            three_months: "3M".to_owned(),
            six_months: "6M".to_owned(),
            year_to_date: "YTD".to_owned(),
            all: "All".to_owned(),
        }
    }
}

/// Popover chrome strings (menu entries, buttons, field captions).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiLabels {
    pub placeholder: String,
    pub auto: String,
    pub month: String,
    pub quarter: String,
    pub half_year: String,
    pub year: String,
    pub custom: String,
    pub apply: String,
    pub from: String,
    pub to: String,
    pub back: String,
    pub clear: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            placeholder: "Time range".to_owned(),
            auto: "Auto".to_owned(),
            month: "Month".to_owned(),
            quarter: "Quarter".to_owned(),
            half_year: "Half-year".to_owned(),
            year: "Year".to_owned(),
            custom: "Custom".to_owned(),
            apply: "Apply".to_owned(),
            from: "From".to_owned(),
            to: "To".to_owned(),
            back: "Back".to_owned(),
            clear: "Clear".to_owned(),
        }
    }
}

/// A complete label table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// BCP 47 language tag, e.g. `"en"` or `"fr"`.
    pub tag: String,
    /// Full month names, January first.
    pub month_names: Vec<String>,
    /// Abbreviated month names for the month grid.
    pub month_short: Vec<String>,
    /// Prefix for quarter labels (`"Q"` gives `"Q2"`).
    pub quarter_prefix: String,
    /// Labels for the first and second half of a year.
    pub half_labels: Vec<String>,
    /// Trigger label shown for any custom range.
    pub custom_label: String,
    pub quick: QuickLabels,
    pub ui: UiLabels,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Locale {
    #[must_use]
    pub fn english() -> Self {
        Self {
            tag: "en".to_owned(),
            month_names: owned(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            month_short: owned(&["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
            quarter_prefix: "Q".to_owned(),
            half_labels: owned(&["H1", "H2"]),
            custom_label: "Custom".to_owned(),
            quick: QuickLabels::default(),
            ui: UiLabels::default(),
        }
    }

    #[must_use]
    pub fn french() -> Self {
        Self {
            tag: "fr".to_owned(),
            month_names: owned(&[
                "Janvier",
                "Février",
                "Mars",
                "Avril",
                "Mai",
                "Juin",
                "Juillet",
                "Août",
                "Septembre",
                "Octobre",
                "Novembre",
                "Décembre",
            ]),
            month_short: owned(&[
                "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.", "Déc.",
            ]),
            quarter_prefix: "T".to_owned(),
            half_labels: owned(&["S1", "S2"]),
            custom_label: "Personnalisé".to_owned(),
            quick: QuickLabels {
                one_month: "1M".to_owned(),
                three_months: "3M".to_owned(),
                six_months: "6M".to_owned(),
                year_to_date: "AAJ".to_owned(),
                all: "Tout".to_owned(),
            },
            ui: UiLabels {
                placeholder: "Période".to_owned(),
                auto: "Auto".to_owned(),
                month: "Mois".to_owned(),
                quarter: "Trimestre".to_owned(),
                half_year: "Semestre".to_owned(),
                year: "Année".to_owned(),
                custom: "Personnalisé".to_owned(),
                apply: "Appliquer".to_owned(),
                from: "Du".to_owned(),
                to: "Au".to_owned(),
                back: "Retour".to_owned(),
                clear: "Effacer".to_owned(),
            },
        }
    }

    /// Built-in table for a language tag. Region subtags are ignored
    /// (`"fr-CA"` resolves to French); unknown languages get English.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Self::french(),
            _ => Self::english(),
        }
    }

    /// Parse a JSON label table; absent keys keep their English value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn month_name(&self, month: u8) -> String {
        self.month_names
            .get(usize::from(month))
            .cloned()
            .unwrap_or_else(|| format!("M{}", u16::from(month) + 1))
    }

    #[must_use]
    pub fn month_short_name(&self, month: u8) -> String {
        self.month_short
            .get(usize::from(month))
            .cloned()
            .unwrap_or_else(|| self.month_name(month))
    }

    #[must_use]
    pub fn quarter_label(&self, quarter: u8) -> String {
        format!("{}{}", self.quarter_prefix, u16::from(quarter) + 1)
    }

    #[must_use]
    pub fn half_label(&self, half: u8) -> String {
        self.half_labels
            .get(usize::from(half))
            .cloned()
            .unwrap_or_else(|| format!("H{}", u16::from(half) + 1))
    }

    #[must_use]
    pub fn quick_label(&self, key: QuickKey) -> String {
        match key {
            QuickKey::OneMonth => self.quick.one_month.clone(),
            QuickKey::ThreeMonths => self.quick.three_months.clone(),
            QuickKey::SixMonths => self.quick.six_months.clone(),
            QuickKey::YearToDate => self.quick.year_to_date.clone(),
            QuickKey::Year(year) => year.to_string(),
            QuickKey::All => self.quick.all.clone(),
        }
    }

    /// Menu entry for a preset category.
    #[must_use]
    pub fn preset_label(&self, preset: Preset) -> &str {
        match preset {
            Preset::Month => &self.ui.month,
            Preset::Quarter => &self.ui.quarter,
            Preset::HalfYear => &self.ui.half_year,
            Preset::Year => &self.ui.year,
        }
    }
}
