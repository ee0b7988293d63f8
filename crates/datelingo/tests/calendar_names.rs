//! Properties of month and weekday names across every built-in locale.

use datelingo::format::{SHORT_NAME_LENGTH, month_name, translate_time_string, weekday_name};
use datelingo::table::builtin_locales;
use datelingo::table::keys::{MONTHS, WEEKDAYS, is_wrapper_override, short_key};
use datelingo::{FormatError, LocaleTable, bindings, load_table};

fn expected_short(table: &LocaleTable, key: &str, full: &str) -> String {
    match table.source_of(&short_key(key)) {
        Some(explicit) => explicit,
        None => full.chars().take(SHORT_NAME_LENGTH).collect(),
    }
}

#[test]
fn test_month_names_in_every_locale() {
    for code in builtin_locales() {
        let table = load_table(code).unwrap();
        for (i, key) in MONTHS.iter().enumerate() {
            let full = month_name(&table, i + 1, false).unwrap();
            assert!(!full.is_empty(), "{code} {key}");
            assert_eq!(
                month_name(&table, i + 1, true).unwrap(),
                expected_short(&table, key, &full),
                "{code} {key}"
            );
        }
    }
}

#[test]
fn test_weekday_names_in_every_locale() {
    for code in builtin_locales() {
        let table = load_table(code).unwrap();
        for (i, key) in WEEKDAYS.iter().enumerate() {
            let full = weekday_name(&table, i + 1, false).unwrap();
            assert!(!full.is_empty(), "{code} {key}");
            assert_eq!(
                weekday_name(&table, i + 1, true).unwrap(),
                expected_short(&table, key, &full),
                "{code} {key}"
            );
        }
    }
}

#[test]
fn test_directional_and_unit_templates_have_placeholders() {
    for code in builtin_locales() {
        let table = load_table(code).unwrap();
        for key in ["ago", "from_now", "after", "before"] {
            assert!(table.entry(key).unwrap().mentions("time"), "{code} {key}");
        }
        for key in ["year", "month", "week", "day", "hour", "minute", "second"] {
            assert!(table.entry(key).unwrap().mentions("count"), "{code} {key}");
        }
    }
}

#[test]
fn test_unit_forms_never_leave_placeholders() {
    for code in builtin_locales() {
        let table = load_table(code).unwrap();
        let unit_keys: Vec<&str> = table
            .keys()
            .filter(|key| !MONTHS.iter().chain(WEEKDAYS.iter()).any(|name| key.starts_with(name)))
            .filter(|key| !["ago", "from_now", "after", "before"].contains(key))
        .filter(|key| !is_wrapper_override(key))
            .collect();
        for key in unit_keys {
            for count in 0..=60 {
                let out = table.trans_choice(key, count, &bindings! {}).unwrap();
                assert!(!out.contains(":count"), "{code} {key} {count}: {out}");
            }
        }
    }
}

#[test]
fn test_truncation_is_by_character() {
    let hu = load_table("hu").unwrap();
    assert_eq!(weekday_name(&hu, 1, true).unwrap(), "hét");
    assert_eq!(month_name(&hu, 3, true).unwrap(), "már");

    let ru = load_table("ru").unwrap();
    assert_eq!(weekday_name(&ru, 3, true).unwrap(), "сре");
}

#[test]
fn test_short_names_shorter_than_limit_are_unchanged() {
    let de = load_table("de").unwrap();
    assert_eq!(month_name(&de, 5, true).unwrap(), "Mai");
    let ja = load_table("ja").unwrap();
    assert_eq!(month_name(&ja, 12, true).unwrap(), "12月");
}

#[test]
fn test_japanese_weekdays_use_explicit_short_names() {
    let ja = load_table("ja").unwrap();
    assert_eq!(weekday_name(&ja, 1, false).unwrap(), "月曜日");
    assert_eq!(weekday_name(&ja, 1, true).unwrap(), "月");
    assert_eq!(weekday_name(&ja, 7, true).unwrap(), "日");
}

#[test]
fn test_index_out_of_range() {
    let en = load_table("en").unwrap();
    for index in [0, 13] {
        let err = month_name(&en, index, false).unwrap_err();
        assert!(matches!(err, FormatError::IndexOutOfRange { max: 12, .. }));
    }
    let err = weekday_name(&en, 8, true).unwrap_err();
    assert_eq!(err.to_string(), "weekday index 8 is out of range 1..=7");
}

// =============================================================================
// Reverse translation
// =============================================================================

#[test]
fn test_translate_russian() {
    let ru = load_table("ru").unwrap();
    assert_eq!(
        translate_time_string(&ru, "понедельник 21 март 2015").unwrap(),
        "monday 21 march 2015"
    );
}

#[test]
fn test_translate_german() {
    let de = load_table("de").unwrap();
    assert_eq!(
        translate_time_string(&de, "Montag 21 März 2015").unwrap(),
        "monday 21 march 2015"
    );
    assert_eq!(
        translate_time_string(&de, "Mo 21 Mär").unwrap(),
        "mo 21 mar"
    );
}

#[test]
fn test_translate_short_names() {
    let hu = load_table("hu").unwrap();
    assert_eq!(
        translate_time_string(&hu, "Hét, 21 Már 2015").unwrap(),
        "mon, 21 mar 2015"
    );
}

#[test]
fn test_translate_japanese() {
    let ja = load_table("ja").unwrap();
    assert_eq!(
        translate_time_string(&ja, "月曜日 12月 21").unwrap(),
        "monday december 21"
    );
}

#[test]
fn test_translate_english_is_lowercase() {
    let en = load_table("en").unwrap();
    assert_eq!(
        translate_time_string(&en, "Friday 13 SEPTEMBER").unwrap(),
        "friday 13 september"
    );
}
