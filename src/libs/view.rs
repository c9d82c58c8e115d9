use super::entry::IntervalMarker;
use super::formatter::FormattedInterval;
use super::messages::Message;
use super::summary::DashboardSummary;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the day's cards as a two-column table, then the markers.
    pub fn summary(summary: &DashboardSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![Message::TotalSleepTitle, summary.total_sleep]);
        if let Some(completion) = &summary.completion {
            table.add_row(row![Message::CompletionOfRequired, format!("{}%", completion.percentage)]);
        }
        if let Some(target) = summary.target_message() {
            table.add_row(row!["", target]);
        }
        if let Some(status) = summary.completion_message() {
            table.add_row(row!["", status]);
        }
        table.add_row(row![Message::TotalAwakeTitle, summary.total_awake]);
        if let Some(current) = &summary.current_wakefulness {
            table.add_row(row!["", Message::CurrentWakefulness(current.clone())]);
        }
        table.add_row(row![Message::NightSleepTitle, summary.night_sleep]);
        if let Some(bedtime) = &summary.bedtime {
            table.add_row(row!["", Message::PredictedBedtime(bedtime.to_string())]);
        }
        if let Some((title, value)) = summary.next_sleep_card() {
            table.add_row(row![title, value]);
        }
        table.printstd();

        if !summary.sleep_markers.is_empty() {
            msg_print!(Message::SleepIntervalsHeader, true);
            Self::markers(&summary.sleep_markers)?;
        }
        if !summary.awake_markers.is_empty() {
            msg_print!(Message::AwakeIntervalsHeader, true);
            Self::markers(&summary.awake_markers)?;
        }

        Ok(())
    }

    pub fn markers(markers: &[IntervalMarker]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "POSITION", "DURATION"]);
        for marker in markers {
            let ordinal = marker.ordinal.map(|o| o.to_string()).unwrap_or_default();
            table.add_row(row![ordinal, format!("{:.0}%", marker.position), marker.label]);
        }
        table.printstd();

        Ok(())
    }

    pub fn intervals(intervals: &[FormattedInterval], total: &str) -> Result<()> {
        if intervals.is_empty() {
            msg_print!(Message::NoIntervalsFound);
            return Ok(());
        }

        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "DURATION"]);
        for interval in intervals {
            table.add_row(row![interval.id, interval.start, interval.end, interval.duration]);
        }
        table.printstd();
        msg_print!(Message::IntervalsTotal(total.to_string()));

        Ok(())
    }
}
