use super::*;

#[test]
fn english_is_default() {
    assert_eq!(Locale::default(), Locale::english());
    assert_eq!(Locale::default().tag, "en");
}

#[test]
fn for_tag_ignores_region_and_case() {
    assert_eq!(Locale::for_tag("fr").tag, "fr");
    assert_eq!(Locale::for_tag("FR-ca").tag, "fr");
    assert_eq!(Locale::for_tag("fr_BE").tag, "fr");
    assert_eq!(Locale::for_tag("de").tag, "en");
    assert_eq!(Locale::for_tag("").tag, "en");
}

#[test]
fn month_tables_have_twelve_entries() {
    for locale in [Locale::english(), Locale::french()] {
        assert_eq!(locale.month_names.len(), 12);
        assert_eq!(locale.month_short.len(), 12);
    }
}

#[test]
fn month_name_out_of_table_falls_back() {
    let mut locale = Locale::english();
    locale.month_names.truncate(2);
    locale.month_short.clear();
    assert_eq!(locale.month_name(1), "February");
    assert_eq!(locale.month_name(5), "M6");
    assert_eq!(locale.month_short_name(0), "January");
}

#[test]
fn quarter_and_half_labels() {
    let en = Locale::english();
    assert_eq!(en.quarter_label(0), "Q1");
    assert_eq!(en.quarter_label(3), "Q4");
    assert_eq!(en.half_label(0), "H1");
    assert_eq!(en.half_label(1), "H2");
    let fr = Locale::french();
    assert_eq!(fr.quarter_label(1), "T2");
    assert_eq!(fr.half_label(1), "S2");
}

#[test]
fn quick_label_for_year_is_literal() {
    assert_eq!(Locale::french().quick_label(QuickKey::Year(2024)), "2024");
    assert_eq!(Locale::french().quick_label(QuickKey::All), "Tout");
}

#[test]
fn preset_label_reads_ui_table() {
    let en = Locale::english();
    assert_eq!(en.preset_label(Preset::HalfYear), "Half-year");
    assert_eq!(Locale::french().preset_label(Preset::Quarter), "Trimestre");
}

#[test]
fn from_json_fills_missing_keys_with_english() {
    let locale = Locale::from_json(r#"{"tag": "en-GB", "custom_label": "Bespoke", "ui": {"apply": "OK"}}"#).unwrap();
    assert_eq!(locale.tag, "en-GB");
    assert_eq!(locale.custom_label, "Bespoke");
    assert_eq!(locale.ui.apply, "OK");
    assert_eq!(locale.ui.from, "From");
    assert_eq!(locale.month_name(0), "January");
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(Locale::from_json("{ not json").is_err());
}
