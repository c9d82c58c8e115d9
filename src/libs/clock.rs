//! Wall-clock arithmetic on "HH:MM" times of day.
//!
//! Every value here is a count of minutes since local midnight in the range
//! `0..1440`. Anything that crosses midnight wraps modulo [`MINUTES_PER_DAY`],
//! and derived durations never go negative.
//!
//! ## Examples
//!
//! ```rust
//! use dremota::libs::clock::{interval_duration, ClockTime};
//!
//! let start: ClockTime = "23:30".parse()?;
//! let end: ClockTime = "00:15".parse()?;
//! assert_eq!(interval_duration(start, end), 45);
//! # Ok::<(), dremota::libs::error::DashboardError>(())
//! ```

use crate::libs::error::DashboardError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a day in minutes.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, stored as minutes since midnight.
///
/// Serializes to and from the "HH:MM" string form used by the day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Builds a clock time from any minute count, wrapping past midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        ClockTime(minutes % MINUTES_PER_DAY)
    }

    /// Minutes since midnight, always below [`MINUTES_PER_DAY`].
    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        ClockTime(time.hour() * 60 + time.minute())
    }
}

impl FromStr for ClockTime {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time_to_minutes(s).map(ClockTime)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Parses "HH:MM" into `hours * 60 + minutes`.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] when the input is not two numeric fields
/// separated by a colon, or is outside 00:00–23:59.
pub fn time_to_minutes(clock: &str) -> Result<u32, DashboardError> {
    let trimmed = clock.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| DashboardError::parse(clock, e.to_string()))?;
    Ok(ClockTime::from_naive_time(time).minutes())
}

/// Renders a minute count as "HH:MM" after reducing it modulo one day.
pub fn format_minutes_as_clock(minutes: u32) -> String {
    ClockTime::from_minutes(minutes).to_string()
}

/// Minutes from `start` to `end`, wrapping over midnight when `end < start`.
///
/// The result is always in `0..1440`.
pub fn interval_duration(start: ClockTime, end: ClockTime) -> u32 {
    if end >= start {
        end.minutes() - start.minutes()
    } else {
        (MINUTES_PER_DAY - start.minutes()) + end.minutes()
    }
}

/// Minutes still missing to reach `target`, floored at zero.
pub fn remaining_minutes(accumulated: u32, target: u32) -> u32 {
    target.saturating_sub(accumulated)
}

/// Minutes spent beyond `target`, floored at zero.
pub fn excess_minutes(accumulated: u32, target: u32) -> u32 {
    accumulated.saturating_sub(target)
}
