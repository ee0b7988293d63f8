//! Relative time phrases in every built-in locale.

use datelingo::format::{
    DescribeOptions, LocalizedDate, RelativeDescriptor, describe_relative,
};
use datelingo::table::builtin_locales;
use datelingo::{Comparison, Direction, Unit, bindings, load_table};
use jiff::civil::{DateTime, date};
use jiff::{SignedDuration, Span, ToSpan};

fn now() -> DateTime {
    date(2013, 4, 28).at(21, 58, 16, 0)
}

/// Render `now + span` relative to `now`.
fn relative(lang: &str, span: Span) -> String {
    let subject = now().checked_add(span).unwrap();
    LocalizedDate::new(subject, lang)
        .unwrap()
        .relative_to_now(now(), false)
        .unwrap()
}

/// Render `now + span` relative to `now` as a reference date.
fn versus(lang: &str, span: Span) -> String {
    let subject = now().checked_add(span).unwrap();
    LocalizedDate::new(subject, lang)
        .unwrap()
        .diff_for_humans(now(), false)
        .unwrap()
}

fn describe(lang: &str, unit: Unit, magnitude: u64, direction: Direction) -> String {
    let table = load_table(lang).unwrap();
    describe_relative(
        RelativeDescriptor::new(unit, magnitude, direction),
        &table,
        &DescribeOptions::default(),
    )
    .unwrap()
}

// =============================================================================
// Descriptors
// =============================================================================

#[test]
fn test_from_seconds_picks_largest_unit() {
    let cases = [
        (-1, Unit::Second, 1, Direction::Past),
        (59, Unit::Second, 59, Direction::Future),
        (60, Unit::Minute, 1, Direction::Future),
        (-3_600 * 21, Unit::Hour, 21, Direction::Past),
        (86_400 * 6, Unit::Day, 6, Direction::Future),
        (-86_400 * 15, Unit::Week, 2, Direction::Past),
        (-86_400 * 100, Unit::Month, 3, Direction::Past),
        (86_400 * 365, Unit::Month, 11, Direction::Future),
        (86_400 * 366, Unit::Year, 1, Direction::Future),
    ];
    for (seconds, unit, magnitude, direction) in cases {
        assert_eq!(
            RelativeDescriptor::from_seconds(seconds),
            RelativeDescriptor::new(unit, magnitude, direction),
            "{seconds} seconds"
        );
    }
}

#[test]
fn test_from_duration() {
    let d = RelativeDescriptor::from_duration(SignedDuration::from_mins(-90));
    assert_eq!(d, RelativeDescriptor::new(Unit::Hour, 1, Direction::Past));
}

#[test]
fn test_from_span_carries_days_into_weeks() {
    let d = RelativeDescriptor::from_span(&15.days());
    assert_eq!(d, RelativeDescriptor::new(Unit::Week, 2, Direction::Future));

    let d = RelativeDescriptor::from_span(&3.days().hours(4).negate());
    assert_eq!(d, RelativeDescriptor::new(Unit::Day, 3, Direction::Past));

    let d = RelativeDescriptor::from_span(&Span::new());
    assert_eq!(d, RelativeDescriptor::new(Unit::Second, 0, Direction::Past));
}

#[test]
fn test_between_uses_calendar_months() {
    let d = RelativeDescriptor::between(now().checked_sub(32.days()).unwrap(), now()).unwrap();
    assert_eq!(d, RelativeDescriptor::new(Unit::Month, 1, Direction::Past));
}

#[test]
fn test_descriptor_serializes() {
    let d = RelativeDescriptor::new(Unit::Month, 3, Direction::Past);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"unit":"month","magnitude":3,"direction":"past"}"#);
    let back: RelativeDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

// =============================================================================
// English
// =============================================================================

#[test]
fn test_english_ago() {
    assert_eq!(relative("en", -5.years()), "5 years ago");
    assert_eq!(relative("en", -32.days()), "1 month ago");
    assert_eq!(relative("en", -15.days()), "2 weeks ago");
    assert_eq!(relative("en", -13.days()), "1 week ago");
    assert_eq!(relative("en", -1.seconds()), "1 second ago");
}

#[test]
fn test_english_from_now() {
    assert_eq!(relative("en", 5.days()), "5 days from now");
    assert_eq!(relative("en", 1.hour()), "1 hour from now");
}

#[test]
fn test_english_against_reference() {
    assert_eq!(versus("en", 5.days()), "5 days after");
    assert_eq!(versus("en", -5.days()), "5 days before");
    assert_eq!(versus("en", 2.weeks()), "2 weeks after");
    assert_eq!(versus("en", -2.weeks()), "2 weeks before");
}

#[test]
fn test_english_absolute() {
    let subject = now().checked_sub(5.days()).unwrap();
    let localized = LocalizedDate::new(subject, "en").unwrap();
    assert_eq!(localized.relative_to_now(now(), true).unwrap(), "5 days");
    assert_eq!(localized.diff_for_humans(now(), true).unwrap(), "5 days");
}

#[test]
fn test_hundred_days_ago_is_three_months() {
    let table = load_table("en").unwrap();
    let descriptor = RelativeDescriptor::from_seconds(-100 * 86_400);
    assert_eq!(
        describe_relative(descriptor, &table, &DescribeOptions::default()).unwrap(),
        "3 months ago"
    );
    assert_eq!(relative("en", -100.days()), "3 months ago");
}

#[test]
fn test_zero_delta_is_past() {
    assert_eq!(relative("en", Span::new()), "0 seconds ago");
    assert_eq!(relative("ru", Span::new()), "0 секунд назад");
}

#[test]
fn test_largest_magnitude_renders_exactly() {
    let table = load_table("en").unwrap();
    let descriptor = RelativeDescriptor::new(Unit::Second, u64::MAX, Direction::Past);
    assert_eq!(
        describe_relative(descriptor, &table, &DescribeOptions::default()).unwrap(),
        "18446744073709551615 seconds ago"
    );
    let descriptor = RelativeDescriptor::from_seconds(i64::MIN);
    assert_eq!(descriptor.direction, Direction::Past);
    assert_eq!(
        table.trans_choice("second", u64::MAX, &bindings! {}).unwrap(),
        "18446744073709551615 seconds"
    );
}

#[test]
fn test_singular_differs_from_plural() {
    assert_eq!(describe("en", Unit::Day, 1, Direction::None), "1 day");
    assert_eq!(describe("en", Unit::Day, 5, Direction::None), "5 days");
}

// =============================================================================
// Hungarian
// =============================================================================

#[test]
fn test_hungarian_ago() {
    assert_eq!(relative("hu", -1.minute()), "1 perce");
    assert_eq!(relative("hu", -21.hours()), "21 órája");
    assert_eq!(relative("hu", -5.days()), "5 napja");
    assert_eq!(relative("hu", -21.days()), "3 hete");
    assert_eq!(relative("hu", -6.months()), "6 hónapja");
    assert_eq!(relative("hu", -10.years()), "10 éve");
}

#[test]
fn test_hungarian_from_now() {
    assert_eq!(relative("hu", 1.minute()), "1 perc múlva");
    assert_eq!(relative("hu", 3.weeks()), "3 hét múlva");
}

#[test]
fn test_hungarian_against_reference() {
    assert_eq!(versus("hu", 21.hours()), "21 órával később");
    assert_eq!(versus("hu", -21.hours()), "21 órával korábban");
}

// =============================================================================
// Other locales
// =============================================================================

#[test]
fn test_japanese() {
    assert_eq!(relative("ja", -1.second()), "1 秒 前");
    assert_eq!(relative("ja", -1.hour()), "1 時間前");
    assert_eq!(relative("ja", -5.hours()), "5 時間前");
    assert_eq!(relative("ja", 5.hours()), "今から 5 時間");
    assert_eq!(versus("ja", -5.hours()), "5 時間 前");
    assert_eq!(relative("ja", 5.days()), "今から 5 日");
    assert_eq!(versus("ja", 3.months()), "3 ヶ月 後");
    assert_eq!(versus("ja", -2.weeks()), "2 週間 前");
}

#[test]
fn test_german_uses_dative_after_prepositions() {
    assert_eq!(relative("de", -5.days()), "vor 5 Tagen");
    assert_eq!(relative("de", -1.day()), "vor 1 Tag");
    assert_eq!(relative("de", 2.years()), "in 2 Jahren");
    assert_eq!(relative("de", -3.weeks()), "vor 3 Wochen");
    assert_eq!(versus("de", 5.days()), "5 Tage später");
    assert_eq!(versus("de", -1.hour()), "1 Stunde zuvor");
}

#[test]
fn test_russian_categories_and_accusative() {
    assert_eq!(relative("ru", -5.minutes()), "5 минут назад");
    assert_eq!(relative("ru", 1.minute()), "через 1 минуту");
    assert_eq!(relative("ru", 2.weeks()), "через 2 недели");
    assert_eq!(relative("ru", -21.years()), "21 год назад");
    assert_eq!(relative("ru", -3.hours()), "3 часа назад");
    assert_eq!(relative("ru", -6.days()), "6 дней назад");
    assert_eq!(versus("ru", 1.hour()), "1 час после");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_no_placeholder_survives_rendering() {
    let directions = [Direction::Past, Direction::Future, Direction::None];
    let comparisons = [Comparison::Now, Comparison::Reference];
    for code in builtin_locales() {
        let table = load_table(code).unwrap();
        for unit in Unit::ALL {
            for direction in directions {
                for comparison in comparisons {
                    for absolute in [false, true] {
                        let options = DescribeOptions::builder()
                            .absolute(absolute)
                            .comparison(comparison)
                            .build();
                        for magnitude in 0..=60 {
                            let descriptor = RelativeDescriptor::new(unit, magnitude, direction);
                            let out = describe_relative(descriptor, &table, &options).unwrap();
                            assert!(
                                !out.contains(":count") && !out.contains(":time"),
                                "{code} {descriptor:?} {options:?}: {out}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_wrapper_override_applies_to_one_unit() {
    let source = format!(
        "{}\nafter_day = \":time later\";",
        datelingo::table::builtin_source("en").unwrap()
    );
    let table = datelingo::LocaleTable::parse("en", &source).unwrap();
    let options = DescribeOptions::builder()
        .comparison(Comparison::Reference)
        .build();
    let day = RelativeDescriptor::new(Unit::Day, 2, Direction::Future);
    let week = RelativeDescriptor::new(Unit::Week, 2, Direction::Future);
    assert_eq!(describe_relative(day, &table, &options).unwrap(), "2 days later");
    assert_eq!(describe_relative(week, &table, &options).unwrap(), "2 weeks after");
    assert!(table.lint().is_empty());
}

#[test]
fn test_direction_none_skips_wrapper() {
    assert_eq!(describe("hu", Unit::Minute, 1, Direction::None), "1 perc");
    assert_eq!(describe("ja", Unit::Week, 2, Direction::None), "2 週間");
}

#[test]
fn test_ago_against_the_clock() {
    let localized = LocalizedDate::now("en").unwrap();
    assert_eq!(localized.ago().unwrap(), "0 seconds ago");
}
