//! A civil datetime paired with the locale it is rendered in.

use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::fmt::strtime;

use crate::format::calendar::{month_name, translate_time_string, weekday_name};
use crate::format::relative::{
    DescribeOptions, RelativeDescriptor, TimespanOptions, describe_relative, describe_timespan,
};
use crate::global::load_table;
use crate::table::{FormatError, LocaleTable};
use crate::types::Comparison;

/// A datetime that renders names and relative phrases in one locale.
///
/// All calendar arithmetic is done by `jiff`. This type only chooses which
/// table entries to render.
///
/// # Example
///
/// ```
/// use datelingo::format::LocalizedDate;
/// use jiff::civil::date;
///
/// let en = LocalizedDate::new(date(2013, 4, 28).at(21, 58, 16, 0), "en").unwrap();
/// assert_eq!(en.format("l j F Y H:i:s").unwrap(), "Sunday 28 April 2013 21:58:16");
///
/// let ja = LocalizedDate::new(date(2013, 4, 28).at(21, 58, 16, 0), "ja").unwrap();
/// assert_eq!(ja.format("D, n月j日").unwrap(), "日, 4月28日");
/// ```
#[derive(Debug, Clone)]
pub struct LocalizedDate {
    datetime: DateTime,
    table: Arc<LocaleTable>,
}

impl LocalizedDate {
    /// Pair `datetime` with a built-in locale, loading its table if needed.
    pub fn new(datetime: DateTime, language: &str) -> Result<Self, FormatError> {
        Ok(Self::with_table(datetime, load_table(language)?))
    }

    /// Pair `datetime` with an explicit table.
    pub fn with_table(datetime: DateTime, table: Arc<LocaleTable>) -> Self {
        Self { datetime, table }
    }

    /// Parse localized text with a `strftime` style format.
    ///
    /// Month and weekday names in `text` are first translated to English,
    /// so `%B`, `%b`, `%A` and `%a` match them. A missing time of day is
    /// midnight.
    ///
    /// ```
    /// use datelingo::format::LocalizedDate;
    /// use jiff::civil::date;
    ///
    /// let hu = LocalizedDate::parse("%Y. %B %d.", "2015. január 01.", "hu").unwrap();
    /// assert_eq!(hu.datetime(), date(2015, 1, 1).at(0, 0, 0, 0));
    /// assert_eq!(hu.format("Y. F j.").unwrap(), "2015. január 1.");
    /// ```
    pub fn parse(format: &str, text: &str, language: &str) -> Result<Self, FormatError> {
        let table = load_table(language)?;
        let english = translate_time_string(&table, text)?;
        let datetime = strtime::parse(format, english)?.to_datetime()?;
        Ok(Self::with_table(datetime, table))
    }

    /// The current local datetime in a built-in locale.
    pub fn now(language: &str) -> Result<Self, FormatError> {
        Self::new(Zoned::now().datetime(), language)
    }

    pub fn datetime(&self) -> DateTime {
        self.datetime
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    pub fn month_name(&self, short: bool) -> Result<String, FormatError> {
        month_name(&self.table, usize::from(self.datetime.month().unsigned_abs()), short)
    }

    pub fn weekday_name(&self, short: bool) -> Result<String, FormatError> {
        weekday_name(&self.table, self.weekday_index(), short)
    }

    /// Describe this date relative to the current local time.
    pub fn ago(&self) -> Result<String, FormatError> {
        self.relative_to_now(Zoned::now().datetime(), false)
    }

    /// Describe this date relative to `now`: "5 days ago", "in 5 days".
    pub fn relative_to_now(&self, now: DateTime, absolute: bool) -> Result<String, FormatError> {
        let descriptor = RelativeDescriptor::between(self.datetime, now)?;
        let options = DescribeOptions::builder().absolute(absolute).build();
        describe_relative(descriptor, &self.table, &options)
    }

    /// Describe this date relative to another date: "5 days after".
    pub fn diff_for_humans(&self, other: DateTime, absolute: bool) -> Result<String, FormatError> {
        let descriptor = RelativeDescriptor::between(self.datetime, other)?;
        let options = DescribeOptions::builder()
            .absolute(absolute)
            .comparison(Comparison::Reference)
            .build();
        describe_relative(descriptor, &self.table, &options)
    }

    /// Every non-zero component of the difference to `other`.
    pub fn timespan(&self, other: DateTime) -> Result<String, FormatError> {
        describe_timespan(&self.table, self.datetime, other, &TimespanOptions::default())
    }

    /// Format with PHP `date()` style pattern characters.
    ///
    /// | char | output |
    /// | --- | --- |
    /// | `d` `j` | day of month, padded / unpadded |
    /// | `D` `l` | weekday name, short / full (localized) |
    /// | `N` `w` | weekday number, 1 (Monday) to 7 / 0 (Sunday) to 6 |
    /// | `z` | day of the year, from 0 |
    /// | `F` `M` | month name, full / short (localized) |
    /// | `m` `n` | month number, padded / unpadded |
    /// | `t` | days in the month |
    /// | `L` | 1 in a leap year, else 0 |
    /// | `Y` `y` | year, four / two digits |
    /// | `a` `A` | am/pm, lower / upper case |
    /// | `g` `h` | 12-hour hour, unpadded / padded |
    /// | `G` `H` | 24-hour hour, unpadded / padded |
    /// | `i` `s` | minutes, seconds, padded |
    ///
    /// A backslash copies the next character verbatim. Every other character
    /// is copied as is.
    pub fn format(&self, pattern: &str) -> Result<String, FormatError> {
        let dt = self.datetime;
        let hour12 = match dt.hour().rem_euclid(12) {
            0 => 12,
            hour => hour,
        };
        let mut out = String::new();
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.extend(chars.next()),
                'd' => out.push_str(&format!("{:02}", dt.day())),
                'D' => out.push_str(&self.weekday_name(true)?),
                'j' => out.push_str(&dt.day().to_string()),
                'l' => out.push_str(&self.weekday_name(false)?),
                'N' => out.push_str(&self.weekday_index().to_string()),
                'w' => out.push_str(&dt.weekday().to_sunday_zero_offset().to_string()),
                'z' => out.push_str(&(dt.day_of_year() - 1).to_string()),
                'F' => out.push_str(&self.month_name(false)?),
                'm' => out.push_str(&format!("{:02}", dt.month())),
                'M' => out.push_str(&self.month_name(true)?),
                'n' => out.push_str(&dt.month().to_string()),
                't' => out.push_str(&dt.days_in_month().to_string()),
                'L' => out.push(if dt.in_leap_year() { '1' } else { '0' }),
                'Y' => out.push_str(&format!("{:04}", dt.year())),
                'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
                'a' => out.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
                'A' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
                'g' => out.push_str(&hour12.to_string()),
                'G' => out.push_str(&dt.hour().to_string()),
                'h' => out.push_str(&format!("{hour12:02}")),
                'H' => out.push_str(&format!("{:02}", dt.hour())),
                'i' => out.push_str(&format!("{:02}", dt.minute())),
                's' => out.push_str(&format!("{:02}", dt.second())),
                other => out.push(other),
            }
        }
        Ok(out)
    }

    fn weekday_index(&self) -> usize {
        usize::from(self.datetime.weekday().to_monday_one_offset().unsigned_abs())
    }
}
