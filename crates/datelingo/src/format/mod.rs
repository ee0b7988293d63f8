//! Formatting on top of locale tables: calendar names, relative phrases,
//! timespans and localized dates.

mod calendar;
mod date;
mod relative;

pub use calendar::{SHORT_NAME_LENGTH, month_name, translate_time_string, weekday_name};
pub use date::LocalizedDate;
pub use relative::{
    DescribeOptions, RelativeDescriptor, TimespanOptions, describe_relative, describe_timespan,
};
