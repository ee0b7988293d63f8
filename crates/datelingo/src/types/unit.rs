use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A calendar or clock unit that a relative phrase is expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// The locale table key holding this unit's plural forms.
    pub fn key(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Average length in seconds, used when only a second count is known.
    ///
    /// Months and years use the Gregorian averages (30.436875 and 365.2425
    /// days).
    pub fn average_seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 3_600,
            Unit::Day => 86_400,
            Unit::Week => 604_800,
            Unit::Month => 2_629_746,
            Unit::Year => 31_556_952,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.key())
    }
}

/// Which side of the comparison point a date falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Earlier than the comparison point (a zero delta counts as past).
    Past,
    /// Later than the comparison point.
    Future,
    /// No direction: the phrase is rendered without a directional wrapper.
    None,
}

impl Direction {
    /// The directional template key for this direction, if any.
    ///
    /// ```
    /// use datelingo::{Comparison, Direction};
    ///
    /// assert_eq!(Direction::Past.directional_key(Comparison::Now), Some("ago"));
    /// assert_eq!(Direction::Future.directional_key(Comparison::Reference), Some("after"));
    /// assert_eq!(Direction::None.directional_key(Comparison::Now), None);
    /// ```
    pub fn directional_key(self, comparison: Comparison) -> Option<&'static str> {
        match (self, comparison) {
            (Direction::Past, Comparison::Now) => Some("ago"),
            (Direction::Future, Comparison::Now) => Some("from_now"),
            (Direction::Past, Comparison::Reference) => Some("before"),
            (Direction::Future, Comparison::Reference) => Some("after"),
            (Direction::None, _) => None,
        }
    }
}

/// What a relative phrase is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// The current instant: "5 days ago", "in 5 days".
    #[default]
    Now,
    /// An explicit reference date: "5 days before", "5 days after".
    Reference,
}
