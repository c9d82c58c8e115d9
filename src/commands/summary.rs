//! Dashboard summary command.

use crate::libs::{config::Config, messages::Message, metrics::DayRecord, summary::DashboardSummary, view::View};
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Day record JSON file with `metrics` and `entries`
    #[arg(long, short)]
    file: PathBuf,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let record = DayRecord::from_file(&args.file)?;
    msg_debug!(Message::DayRecordLoaded {
        entries: record.entries.len(),
        date: record.metrics.date.to_string(),
    });

    let prediction = match Config::read() {
        Ok(config) => config.prediction.unwrap_or_default(),
        Err(e) => {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            Default::default()
        }
    };

    let summary = DashboardSummary::build(&record, Local::now().naive_local(), &prediction);

    msg_print!(Message::SummaryHeader(summary.date.format("%B %-d, %Y").to_string()), true);
    View::summary(&summary)?;

    Ok(())
}
