use crate::libs::{
    entry::{EntryIntervals, IntervalGroup},
    formatter::format_duration,
    messages::Message,
    metrics::DayRecord,
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct IntervalsArgs {
    /// Day record JSON file with `metrics` and `entries`
    #[arg(long, short)]
    file: PathBuf,
}

pub fn cmd(args: IntervalsArgs) -> Result<()> {
    let record = DayRecord::from_file(&args.file)?;
    let entries = record.entries.as_slice();

    let sleep = entries.sleep_intervals();
    msg_print!(Message::SleepIntervalsHeader, true);
    View::intervals(&sleep.format(), &format_duration(sleep.total_minutes()))?;

    let awake = entries.awake_intervals();
    msg_print!(Message::AwakeIntervalsHeader, true);
    View::intervals(&awake.format(), &format_duration(awake.total_minutes()))?;

    Ok(())
}
