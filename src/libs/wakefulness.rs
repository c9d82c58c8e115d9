//! The live "currently awake for N" counter.
//!
//! The counter is active while the displayed day is today and its last entry
//! is a wake-up. [`WakefulnessTicker`] evaluates that condition once when it
//! is created and only spawns its periodic task if the condition holds. The
//! task republishes the formatted duration on every tick and ends by itself
//! once the condition stops holding. Dropping or stopping the ticker cancels
//! the task, so nothing outlives its owner.

use crate::libs::clock::{interval_duration, ClockTime};
use crate::libs::entry::{EntryType, TimeEntry};
use crate::libs::formatter::format_duration_grammatical;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Minutes since the last wake-up, if the counter applies.
///
/// Returns `None` unless the day is today and the last entry is a woke-up.
/// A wake-up later than `now` on the clock is treated as crossing midnight.
pub fn current_wakefulness(entries: &[TimeEntry], is_today: bool, now: ClockTime) -> Option<u32> {
    if !is_today {
        return None;
    }
    let last = entries.last()?;
    (last.entry_type == EntryType::WokeUp).then(|| interval_duration(last.time, now))
}

/// Formatted wakefulness for `date`'s entries at the moment `now`.
pub fn wakefulness_at(entries: &[TimeEntry], date: NaiveDate, now: NaiveDateTime) -> Option<String> {
    current_wakefulness(entries, now.date() == date, ClockTime::from_naive_time(now.time())).map(format_duration_grammatical)
}

/// A cancellable periodic task publishing the wakefulness counter.
///
/// Must be created inside a tokio runtime.
pub struct WakefulnessTicker {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    updates: watch::Receiver<Option<String>>,
}

impl WakefulnessTicker {
    /// Starts the counter for `date`'s entries.
    ///
    /// Returns `None`, and spawns nothing, when the counter does not apply
    /// right now. Otherwise the first value is available immediately and a
    /// new one is published every `period`.
    pub fn start<C: Clock>(entries: Vec<TimeEntry>, date: NaiveDate, clock: C, period: Duration) -> Option<Self> {
        let initial = wakefulness_at(&entries, date, clock.now())?;

        let (tx, updates) = watch::channel(Some(initial));
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticks.tick() => {
                        let value = wakefulness_at(&entries, date, clock.now());
                        let active = value.is_some();
                        if tx.send(value).is_err() || !active {
                            break;
                        }
                    }
                }
            }
        });

        Some(Self {
            token,
            handle: Some(handle),
            updates,
        })
    }

    /// The latest published value; `None` once the condition was lost.
    pub fn current(&self) -> Option<String> {
        self.updates.borrow().clone()
    }

    /// A receiver notified on every refresh.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.updates.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels the task and waits for it to finish.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for WakefulnessTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
