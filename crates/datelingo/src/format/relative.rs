//! Relative time phrases ("5 days ago", "1 perc múlva") and timespans.
//!
//! A delta is first reduced to a [`RelativeDescriptor`]: the largest whole
//! unit, its magnitude and a direction. The descriptor is then rendered in two
//! passes. The unit entry is selected by magnitude and `:count` is bound, and
//! unless the phrase is absolute the result is bound to `:time` in the
//! directional entry, which is itself selected by the same magnitude.

use std::collections::HashMap;

use bon::Builder;
use jiff::civil::DateTime;
use jiff::{SignedDuration, Span, Unit as JiffUnit};
use serde::{Deserialize, Serialize};

use crate::bindings;
use crate::table::keys::{unit_override_key, wrapper_override_key};
use crate::table::{FormatError, LocaleTable};
use crate::types::{Comparison, Direction, Phrase, Unit};

/// A delta reduced to one unit and a non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDescriptor {
    pub unit: Unit,
    pub magnitude: u64,
    pub direction: Direction,
}

impl RelativeDescriptor {
    pub fn new(unit: Unit, magnitude: u64, direction: Direction) -> Self {
        Self {
            unit,
            magnitude,
            direction,
        }
    }

    /// Decompose a signed number of seconds using average unit lengths.
    ///
    /// Negative and zero deltas are in the past. Months and years use the
    /// Gregorian averages, so 100 days is 3 months.
    ///
    /// ```
    /// use datelingo::{Direction, Unit};
    /// use datelingo::format::RelativeDescriptor;
    ///
    /// let d = RelativeDescriptor::from_seconds(-100 * 86_400);
    /// assert_eq!(d, RelativeDescriptor::new(Unit::Month, 3, Direction::Past));
    ///
    /// let d = RelativeDescriptor::from_seconds(0);
    /// assert_eq!(d, RelativeDescriptor::new(Unit::Second, 0, Direction::Past));
    /// ```
    pub fn from_seconds(seconds: i64) -> Self {
        let direction = direction_of(seconds.signum());
        let total = seconds.unsigned_abs();
        let unit = Unit::ALL
            .into_iter()
            .find(|unit| total >= unit.average_seconds())
            .unwrap_or(Unit::Second);
        Self::new(unit, total.div_euclid(unit.average_seconds()), direction)
    }

    /// Decompose a duration using average unit lengths.
    pub fn from_duration(duration: SignedDuration) -> Self {
        Self::from_seconds(duration.as_secs())
    }

    /// Pick the largest non-zero calendar unit of a span.
    ///
    /// Days beyond a whole week are carried into weeks, so a span of
    /// 15 days is 2 weeks. Sub-second components are ignored.
    pub fn from_span(span: &Span) -> Self {
        let direction = direction_of(i64::from(span.signum()));
        let (unit, magnitude) = span_components(span)
            .into_iter()
            .find(|(_, magnitude)| *magnitude > 0)
            .unwrap_or((Unit::Second, 0));
        Self::new(unit, magnitude, direction)
    }

    /// Describe `subject` as seen from `reference`.
    ///
    /// The calendar difference is computed by the date engine, so month and
    /// year lengths follow the actual calendar rather than averages.
    pub fn between(subject: DateTime, reference: DateTime) -> Result<Self, FormatError> {
        let span = reference.until((JiffUnit::Year, subject))?;
        Ok(Self::from_span(&span))
    }
}

/// Magnitudes of a span per unit, largest first, with whole weeks taken out
/// of the days.
fn span_components(span: &Span) -> [(Unit, u64); 7] {
    let days = u64::from(span.get_days().unsigned_abs());
    let weeks = u64::from(span.get_weeks().unsigned_abs()) + days.div_euclid(7);
    [
        (Unit::Year, u64::from(span.get_years().unsigned_abs())),
        (Unit::Month, u64::from(span.get_months().unsigned_abs())),
        (Unit::Week, weeks),
        (Unit::Day, days.rem_euclid(7)),
        (Unit::Hour, u64::from(span.get_hours().unsigned_abs())),
        (Unit::Minute, span.get_minutes().unsigned_abs()),
        (Unit::Second, span.get_seconds().unsigned_abs()),
    ]
}

fn direction_of(signum: i64) -> Direction {
    if signum > 0 {
        Direction::Future
    } else {
        Direction::Past
    }
}

/// How a relative phrase is rendered.
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct DescribeOptions {
    /// Render only the unit phrase ("5 days"), without a directional wrapper.
    #[builder(default)]
    pub absolute: bool,

    /// Whether the phrase is relative to now or to another date.
    #[builder(default)]
    pub comparison: Comparison,
}

/// Render a descriptor in the language of `table`.
///
/// # Example
///
/// ```
/// use datelingo::{Comparison, Direction, LocaleTable, Unit};
/// use datelingo::format::{DescribeOptions, RelativeDescriptor, describe_relative};
///
/// let hu = LocaleTable::builtin("hu").unwrap();
/// let past = RelativeDescriptor::new(Unit::Minute, 1, Direction::Past);
/// let future = RelativeDescriptor::new(Unit::Minute, 1, Direction::Future);
/// let options = DescribeOptions::default();
///
/// assert_eq!(describe_relative(past, &hu, &options).unwrap(), "1 perce");
/// assert_eq!(describe_relative(future, &hu, &options).unwrap(), "1 perc múlva");
///
/// let options = DescribeOptions::builder().comparison(Comparison::Reference).build();
/// let later = RelativeDescriptor::new(Unit::Hour, 21, Direction::Future);
/// assert_eq!(describe_relative(later, &hu, &options).unwrap(), "21 órával később");
/// ```
pub fn describe_relative(
    descriptor: RelativeDescriptor,
    table: &LocaleTable,
    options: &DescribeOptions,
) -> Result<String, FormatError> {
    let directional = if options.absolute {
        None
    } else {
        descriptor.direction.directional_key(options.comparison)
    };

    let unit_key = directional
        .map(|directional| unit_override_key(descriptor.unit, directional))
        .filter(|key| table.contains(key))
        .unwrap_or_else(|| descriptor.unit.key().to_string());
    let time = Phrase::new(
        table.select(&unit_key, descriptor.magnitude)?.clone(),
        bindings! { "count" => descriptor.magnitude },
    );

    let Some(directional) = directional else {
        return Ok(time.render());
    };
    let wrapper_key = wrapper_override_key(descriptor.unit, directional);
    let wrapper_key = if table.contains(&wrapper_key) {
        wrapper_key.as_str()
    } else {
        directional
    };
    let wrapper = table.select(wrapper_key, descriptor.magnitude)?;
    Ok(Phrase::new(wrapper.clone(), bindings! { "time" => time }).render())
}

/// How a timespan is joined.
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct TimespanOptions {
    /// Placed between components.
    #[builder(default = ", ".to_string())]
    pub separator: String,

    /// Keep only the largest N non-zero components.
    pub max_units: Option<usize>,
}

impl Default for TimespanOptions {
    fn default() -> Self {
        TimespanOptions::builder().build()
    }
}

/// Every non-zero component of the difference between two datetimes.
///
/// Components use the plain unit entries, largest first. A zero difference
/// renders as zero seconds.
///
/// ```
/// use datelingo::LocaleTable;
/// use datelingo::format::{TimespanOptions, describe_timespan};
/// use jiff::civil::date;
///
/// let en = LocaleTable::builtin("en").unwrap();
/// let start = date(2014, 6, 24).at(14, 16, 8, 0);
/// let end = date(2014, 10, 2).at(17, 36, 8, 0);
/// assert_eq!(
///     describe_timespan(&en, start, end, &TimespanOptions::default()).unwrap(),
///     "3 months, 1 week, 1 day, 3 hours, 20 minutes"
/// );
/// ```
pub fn describe_timespan(
    table: &LocaleTable,
    subject: DateTime,
    reference: DateTime,
    options: &TimespanOptions,
) -> Result<String, FormatError> {
    let span = subject.until((JiffUnit::Year, reference))?;

    let no_bindings = HashMap::new();
    let mut parts = Vec::new();
    for (unit, count) in span_components(&span) {
        if count == 0 || options.max_units.is_some_and(|max| parts.len() >= max) {
            continue;
        }
        parts.push(table.trans_choice(unit.key(), count, &no_bindings)?);
    }
    if parts.is_empty() {
        parts.push(table.trans_choice(Unit::Second.key(), 0, &no_bindings)?);
    }
    Ok(parts.join(&options.separator))
}
