//! Live wakefulness counter.
//!
//! Prints "currently awake for N" and refreshes it until Ctrl+C, or until the
//! counter stops applying (the date rolls over). The ticker is stopped before
//! the command returns.

use crate::libs::{
    config::Config,
    messages::Message,
    metrics::DayRecord,
    wakefulness::{LocalClock, WakefulnessTicker},
};
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Day record JSON file with `metrics` and `entries`
    #[arg(long, short)]
    file: PathBuf,

    /// Seconds between refreshes, overriding the configured interval
    #[arg(long, short)]
    interval: Option<u64>,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let record = DayRecord::from_file(&args.file)?;
    let watch_config = match Config::read() {
        Ok(config) => config.watch.unwrap_or_default(),
        Err(e) => {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            Default::default()
        }
    };
    let period = Duration::from_secs(args.interval.unwrap_or(watch_config.tick_interval).max(1));

    let Some(ticker) = WakefulnessTicker::start(record.entries, record.metrics.date, LocalClock, period) else {
        msg_info!(Message::WatchNotActive);
        return Ok(());
    };

    msg_info!(Message::WatchStarted(period.as_secs()));
    if let Some(current) = ticker.current() {
        msg_print!(Message::CurrentWakefulness(current));
    }

    let mut updates = ticker.subscribe();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let value = updates.borrow_and_update().clone();
                match value {
                    Some(current) => msg_print!(Message::CurrentWakefulness(current)),
                    None => {
                        msg_info!(Message::WatchConditionLost);
                        break;
                    }
                }
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    msg_error!(Message::WatchCtrlCListenFailed(e.to_string()));
                }
                msg_info!(Message::WatchShuttingDown);
                break;
            }
        }
    }

    ticker.stop().await;
    Ok(())
}
