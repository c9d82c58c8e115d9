//! Everything the dashboard shows for one day, derived in a single pass.
//!
//! [`DashboardSummary::build`] is recomputed from scratch on each evaluation;
//! it owns no state beyond the snapshot it was built from.

use crate::libs::clock::ClockTime;
use crate::libs::config::PredictionConfig;
use crate::libs::entry::{EntryIntervals, IntervalMarker};
use crate::libs::formatter::{format_duration, format_duration_grammatical};
use crate::libs::messages::Message;
use crate::libs::metrics::{Completion, CompletionProgress, DayRecord, NextScheduledSleep, ScheduledSleepKind};
use crate::libs::prediction::BedtimeEstimate;
use crate::libs::wakefulness::current_wakefulness;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Shown in place of a total the aggregator did not provide.
pub const MISSING_TOTAL: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub is_today: bool,
    pub total_sleep: String,
    pub total_awake: String,
    pub night_sleep: String,
    pub completion: Option<CompletionProgress>,
    pub sleep_markers: Vec<IntervalMarker>,
    pub awake_markers: Vec<IntervalMarker>,
    /// `None` outside the evening prediction window.
    pub bedtime: Option<BedtimeEstimate>,
    /// Only on the current date.
    pub next_sleep: Option<NextScheduledSleep>,
    pub current_wakefulness: Option<String>,
}

impl DashboardSummary {
    pub fn build(record: &DayRecord, now: NaiveDateTime, prediction: &PredictionConfig) -> Self {
        let metrics = &record.metrics;
        let entries = record.entries.as_slice();
        let is_today = metrics.date == now.date();
        let now_clock = ClockTime::from_naive_time(now.time());

        let label = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING_TOTAL.to_string());

        DashboardSummary {
            date: metrics.date,
            is_today,
            total_sleep: label(&metrics.total_sleep),
            total_awake: label(&metrics.total_awake),
            night_sleep: label(&metrics.night_sleep),
            completion: metrics.completion(),
            sleep_markers: entries.markers(&entries.sleep_intervals()),
            awake_markers: entries.markers(&entries.awake_intervals()),
            bedtime: BedtimeEstimate::for_evening(metrics, entries, is_today, now.hour(), prediction),
            next_sleep: metrics.time_to_next_scheduled_sleep.clone().filter(|_| is_today),
            current_wakefulness: current_wakefulness(entries, is_today, now_clock).map(format_duration_grammatical),
        }
    }

    /// "Ціль: HH:MM" for the sleep target.
    pub fn target_message(&self) -> Option<Message> {
        self.completion
            .as_ref()
            .map(|c| Message::SleepTarget(format_duration(c.target_minutes)))
    }

    /// The remaining-or-exceeded line under the progress bar.
    pub fn completion_message(&self) -> Option<Message> {
        self.completion.as_ref().map(|c| match c.status {
            Completion::Remaining(minutes) => Message::SleepRemaining(format_duration_grammatical(minutes)),
            Completion::Exceeded(minutes) => Message::SleepExceeded(format_duration_grammatical(minutes)),
        })
    }

    /// Title and value of the next-sleep countdown card.
    pub fn next_sleep_card(&self) -> Option<(Message, String)> {
        self.next_sleep.as_ref().map(|next| {
            let title = match next.kind {
                ScheduledSleepKind::Nap => Message::NapCountdownTitle,
                ScheduledSleepKind::Night => Message::NightCountdownTitle,
            };
            (title, format_duration_grammatical(next.minutes))
        })
    }
}
