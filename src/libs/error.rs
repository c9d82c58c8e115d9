//! Error kinds raised by the dashboard calculations.
//!
//! None of these are fatal. Callers recover from every variant locally and
//! show a fixed placeholder instead (see [`crate::libs::prediction::BedtimeEstimate`]).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A clock ("HH:MM") or duration label could not be parsed.
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// One of the bedtime prediction inputs is absent.
    #[error("missing metric: {0}")]
    MissingMetric(&'static str),

    /// No woke-up entry exists where one is required.
    #[error("no woke-up entry recorded")]
    NoQualifyingEntry,
}

impl DashboardError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        DashboardError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
