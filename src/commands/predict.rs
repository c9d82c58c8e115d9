//! One-off bedtime prediction from explicit values.
//!
//! Unlike the summary, this ignores the evening window: the estimate is
//! always computed and printed.

use crate::libs::{clock::ClockTime, entry::TimeEntry, messages::Message, metrics::SleepMetrics, prediction::BedtimeEstimate};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Time of the last wake-up, HH:MM
    #[arg(long, short)]
    wake: Option<String>,

    /// Total nap time, e.g. "1год. 30хв."
    #[arg(long)]
    naps: Option<String>,

    /// Total awake time, e.g. "9год. 0хв."
    #[arg(long)]
    awake: Option<String>,

    /// Night sleep so far, e.g. "0год. 0хв."
    #[arg(long)]
    night: Option<String>,
}

pub fn cmd(args: PredictArgs) -> Result<()> {
    let estimate = match estimate(args) {
        Ok(estimate) => estimate,
        Err(e) => {
            msg_debug!(Message::PredictionErrorDetails(e.to_string()));
            BedtimeEstimate::Failed
        }
    };

    msg_print!(estimate.message());
    Ok(())
}

/// Runs the flags through the same path as a day record, with the wake-up
/// as the only entry.
fn estimate(args: PredictArgs) -> Result<BedtimeEstimate> {
    let Some(wake) = args.wake else {
        return Ok(BedtimeEstimate::NoData);
    };
    let wake: ClockTime = wake.parse()?;

    let mut metrics = SleepMetrics::new(Local::now().date_naive());
    metrics.total_sleep = args.naps;
    metrics.total_awake = args.awake;
    metrics.night_sleep = args.night;

    Ok(BedtimeEstimate::from_day(&metrics, &[TimeEntry::woke_up(wake)]))
}
