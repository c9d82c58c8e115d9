//! The per-day metrics snapshot supplied by the upstream aggregator.
//!
//! This crate never computes these totals itself. It reads them, parses the
//! duration labels on demand and derives display values from them.

use crate::libs::clock::{excess_minutes, remaining_minutes};
use crate::libs::entry::TimeEntry;
use crate::libs::error::DashboardError;
use crate::libs::formatter::parse_duration_label;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledSleepKind {
    Nap,
    Night,
}

/// Countdown to the next scheduled sleep.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NextScheduledSleep {
    #[serde(rename = "type")]
    pub kind: ScheduledSleepKind,
    pub minutes: u32,
}

/// Aggregate totals for one calendar date.
///
/// `total_sleep` is the sum of daytime naps only. Bedtime prediction depends
/// on that contract of the aggregator and does not re-derive it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sleep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_awake: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_sleep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_completion_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_sleep_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_next_scheduled_sleep: Option<NextScheduledSleep>,
}

/// One day's input: the metrics snapshot plus the ordered event list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayRecord {
    pub metrics: SleepMetrics,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

/// Which side of the sleep target the day is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Below target; minutes still to sleep.
    Remaining(u32),
    /// At or above target; minutes slept beyond it.
    Exceeded(u32),
}

/// Progress toward the day's required sleep.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionProgress {
    pub percentage: f64,
    pub target_minutes: u32,
    pub status: Completion,
}

/// Routes a completion percentage to exactly one branch.
///
/// A percentage of 100 or more is `Exceeded`, anything below is `Remaining`.
pub fn completion_status(percentage: f64, accumulated: u32, target: u32) -> Completion {
    if percentage >= 100.0 {
        Completion::Exceeded(excess_minutes(accumulated, target))
    } else {
        Completion::Remaining(remaining_minutes(accumulated, target))
    }
}

/// A label is usable only when present and not blank.
fn present(label: &Option<String>) -> Option<&str> {
    label.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_optional(label: &Option<String>) -> Result<Option<u32>, DashboardError> {
    present(label).map(parse_duration_label).transpose()
}

impl SleepMetrics {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_sleep: None,
            total_awake: None,
            night_sleep: None,
            sleep_completion_percentage: None,
            required_sleep_minutes: None,
            time_to_next_scheduled_sleep: None,
        }
    }

    /// Total nap minutes, `None` when the label is absent or blank.
    pub fn total_sleep_minutes(&self) -> Result<Option<u32>, DashboardError> {
        parse_optional(&self.total_sleep)
    }

    pub fn total_awake_minutes(&self) -> Result<Option<u32>, DashboardError> {
        parse_optional(&self.total_awake)
    }

    /// Night sleep minutes. A present but blank label means no night sleep
    /// yet and counts as zero; only an absent label is `None`.
    pub fn night_sleep_minutes(&self) -> Result<Option<u32>, DashboardError> {
        match &self.night_sleep {
            None => Ok(None),
            Some(_) => Ok(Some(parse_optional(&self.night_sleep)?.unwrap_or(0))),
        }
    }

    /// Name of the first prediction input that is absent, checked without
    /// parsing any label.
    pub fn missing_prediction_input(&self) -> Option<&'static str> {
        if present(&self.total_sleep).is_none() {
            Some("total sleep")
        } else if present(&self.total_awake).is_none() {
            Some("total awake")
        } else if self.night_sleep.is_none() {
            Some("night sleep")
        } else {
            None
        }
    }

    /// Completion progress, shown only with a defined percentage and a
    /// non-zero target. A missing or unparsable total sleep counts as zero.
    pub fn completion(&self) -> Option<CompletionProgress> {
        let percentage = self.sleep_completion_percentage?;
        let target = self.required_sleep_minutes.filter(|t| *t > 0)?;
        let accumulated = self.total_sleep_minutes().ok().flatten().unwrap_or(0);

        Some(CompletionProgress {
            percentage,
            target_minutes: target,
            status: completion_status(percentage, accumulated, target),
        })
    }
}

impl DayRecord {
    /// Loads a day record from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).map_err(|_| msg_error_anyhow!(Message::DayRecordReadFailed(path.display().to_string())))?;
        serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::DayRecordParseFailed(e.to_string())))
    }

    pub fn last_entry(&self) -> Option<&TimeEntry> {
        self.entries.last()
    }
}
