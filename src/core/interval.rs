//! Recurrence intervals used to group scheduled jobs.
//!
//! An interval is either a number of seconds (`every 3 hours`), a raw cron
//! expression (`"0 0 27-31 * *"`) or a keyword (`:reboot`, `:day`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building intervals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    /// Unit name is not one of second, minute, hour, day, week, month, year.
    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
}

/// How often a job recurs. Jobs are grouped by this value.
///
/// Equality is structural, so `Interval::Seconds(600)` and
/// `Interval::Expression("600".into())` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Interval {
    /// A fixed number of seconds.
    Seconds(u64),
    /// A raw cron expression.
    Expression(String),
    /// A named shortcut such as `day` or `reboot`.
    Keyword(String),
}

/// Units accepted by [`Interval::every`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Length of one unit in seconds.
    ///
    /// A month is 30 days and a year is 365.25 days.
    pub fn seconds(self) -> u64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 604_800,
            TimeUnit::Month => 2_592_000,
            TimeUnit::Year => 31_557_600,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" => Ok(TimeUnit::Second),
            "minute" | "minutes" => Ok(TimeUnit::Minute),
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "week" | "weeks" => Ok(TimeUnit::Week),
            "month" | "months" => Ok(TimeUnit::Month),
            "year" | "years" => Ok(TimeUnit::Year),
            _ => Err(IntervalError::UnknownUnit(s.to_string())),
        }
    }
}

impl Interval {
    /// `count` units, expressed in seconds.
    pub fn every(count: u64, unit: TimeUnit) -> Self {
        Interval::Seconds(count.saturating_mul(unit.seconds()))
    }

    /// A raw cron expression.
    pub fn expression(expr: impl Into<String>) -> Self {
        Interval::Expression(expr.into())
    }

    /// A keyword interval. A leading `:` is stripped.
    pub fn keyword(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(':') {
            Some(stripped) => Interval::Keyword(stripped.to_string()),
            None => Interval::Keyword(name),
        }
    }

    /// Number of seconds for numeric intervals.
    pub fn as_secs(&self) -> Option<u64> {
        match self {
            Interval::Seconds(secs) => Some(*secs),
            _ => None,
        }
    }

    /// Whether this interval is a count of seconds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Interval::Seconds(_))
    }
}

impl From<u64> for Interval {
    fn from(secs: u64) -> Self {
        Interval::Seconds(secs)
    }
}

impl From<&str> for Interval {
    fn from(expr: &str) -> Self {
        Interval::Expression(expr.to_string())
    }
}

impl From<String> for Interval {
    fn from(expr: String) -> Self {
        Interval::Expression(expr)
    }
}

impl From<std::time::Duration> for Interval {
    fn from(duration: std::time::Duration) -> Self {
        Interval::Seconds(duration.as_secs())
    }
}

impl From<chrono::Duration> for Interval {
    fn from(duration: chrono::Duration) -> Self {
        Interval::Seconds(duration.num_seconds().max(0) as u64)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Seconds(secs) => write!(f, "{} seconds", secs),
            Interval::Expression(value) | Interval::Keyword(value) => write!(f, "\"{}\"", value),
        }
    }
}
