//! Night bedtime prediction.
//!
//! ## Formula
//!
//! ```text
//! unaccounted = max(0, 1440 - naps - awake - night sleep)
//! bedtime     = (last wake-up + unaccounted) mod 1440
//! ```
//!
//! The day's 1440 minutes are split between naps, wakefulness and night sleep;
//! whatever is not yet accounted for is assumed to be spent awake after the
//! last wake-up, so bedtime lands at its end. `naps` is the aggregator's
//! `totalSleep`, which by contract excludes night sleep.

use crate::libs::clock::{ClockTime, MINUTES_PER_DAY};
use crate::libs::config::PredictionConfig;
use crate::libs::entry::{EntryIntervals, TimeEntry};
use crate::libs::error::DashboardError;
use crate::libs::messages::Message;
use crate::libs::metrics::SleepMetrics;
use crate::msg_debug;
use std::fmt;

/// Projects the night bedtime from the last wake-up and the day's totals.
///
/// # Errors
///
/// Returns [`DashboardError::MissingMetric`] when any input is absent. No
/// partial estimate is ever produced.
///
/// # Examples
///
/// ```rust
/// use dremota::libs::prediction::predict_bedtime;
///
/// let bedtime = predict_bedtime(Some("07:00".parse()?), Some(60), Some(600), Some(0))?;
/// assert_eq!(bedtime.to_string(), "20:00");
/// # Ok::<(), dremota::libs::error::DashboardError>(())
/// ```
pub fn predict_bedtime(
    last_wake_up: Option<ClockTime>,
    total_nap_minutes: Option<u32>,
    total_awake_minutes: Option<u32>,
    night_sleep_minutes: Option<u32>,
) -> Result<ClockTime, DashboardError> {
    let last_wake_up = last_wake_up.ok_or(DashboardError::MissingMetric("last wake-up"))?;
    let naps = total_nap_minutes.ok_or(DashboardError::MissingMetric("total sleep"))?;
    let awake = total_awake_minutes.ok_or(DashboardError::MissingMetric("total awake"))?;
    let night = night_sleep_minutes.ok_or(DashboardError::MissingMetric("night sleep"))?;

    let accounted = naps.saturating_add(awake).saturating_add(night);
    let unaccounted = MINUTES_PER_DAY.saturating_sub(accounted);

    Ok(ClockTime::from_minutes(last_wake_up.minutes() + unaccounted))
}

/// Outcome of a bedtime prediction as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedtimeEstimate {
    Predicted(ClockTime),
    /// No wake-up recorded yet today.
    NoData,
    /// A required metric is missing.
    InsufficientData,
    /// A clock or duration label could not be parsed.
    Failed,
}

impl BedtimeEstimate {
    /// Estimates bedtime from a metrics snapshot and the day's entries.
    ///
    /// Errors never escape; each kind maps to its placeholder.
    pub fn from_day(metrics: &SleepMetrics, entries: &[TimeEntry]) -> Self {
        match estimate(metrics, entries) {
            Ok(bedtime) => BedtimeEstimate::Predicted(bedtime),
            Err(DashboardError::NoQualifyingEntry) => BedtimeEstimate::NoData,
            Err(DashboardError::MissingMetric(_)) => BedtimeEstimate::InsufficientData,
            Err(e @ DashboardError::Parse { .. }) => {
                msg_debug!(Message::PredictionErrorDetails(e.to_string()));
                BedtimeEstimate::Failed
            }
        }
    }

    /// Same as [`BedtimeEstimate::from_day`], but only inside the evening
    /// window on the current date with at least one entry. Returns `None`
    /// otherwise, meaning nothing is shown.
    pub fn for_evening(metrics: &SleepMetrics, entries: &[TimeEntry], is_today: bool, hour: u32, window: &PredictionConfig) -> Option<Self> {
        if is_today && !entries.is_empty() && window.contains_hour(hour) {
            Some(Self::from_day(metrics, entries))
        } else {
            None
        }
    }

    pub fn message(&self) -> Message {
        match self {
            BedtimeEstimate::Predicted(_) => Message::PredictedBedtime(self.to_string()),
            BedtimeEstimate::NoData => Message::PredictionNoData,
            BedtimeEstimate::InsufficientData => Message::PredictionInsufficientData,
            BedtimeEstimate::Failed => Message::PredictionFailed,
        }
    }
}

impl fmt::Display for BedtimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BedtimeEstimate::Predicted(bedtime) => write!(f, "{}", bedtime),
            other => write!(f, "{}", other.message()),
        }
    }
}

fn estimate(metrics: &SleepMetrics, entries: &[TimeEntry]) -> Result<ClockTime, DashboardError> {
    let last_wake_up = entries.last_wake_up().ok_or(DashboardError::NoQualifyingEntry)?;
    // Absence wins over a malformed label.
    if let Some(name) = metrics.missing_prediction_input() {
        return Err(DashboardError::MissingMetric(name));
    }

    predict_bedtime(
        Some(last_wake_up),
        metrics.total_sleep_minutes()?,
        metrics.total_awake_minutes()?,
        metrics.night_sleep_minutes()?,
    )
}
