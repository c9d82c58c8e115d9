//! Sleep/wake transition events and the intervals between them.

use crate::libs::clock::{interval_duration, ClockTime};
use crate::libs::formatter::{format_duration, FormattedInterval};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    FellAsleep,
    WokeUp,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryType::FellAsleep => write!(f, "fell-asleep"),
            EntryType::WokeUp => write!(f, "woke-up"),
        }
    }
}

/// A single fell-asleep or woke-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub time: ClockTime,
}

impl TimeEntry {
    pub fn new(entry_type: EntryType, time: ClockTime) -> Self {
        Self { entry_type, time }
    }

    pub fn fell_asleep(time: ClockTime) -> Self {
        Self::new(EntryType::FellAsleep, time)
    }

    pub fn woke_up(time: ClockTime) -> Self {
        Self::new(EntryType::WokeUp, time)
    }
}

/// An interval between two adjacent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Index of the opening entry in the day's entry list.
    pub index: usize,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Length in minutes, midnight-aware.
    pub minutes: u32,
}

/// A point on the day's timeline for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalMarker {
    pub index: usize,
    /// Ordinal shown on sleep markers, `index / 2 + 1`. Awake markers are
    /// unnumbered.
    pub ordinal: Option<usize>,
    /// Horizontal position along the timeline, 0 to 100.
    pub position: f64,
    /// Interval length as "HH:MM".
    pub label: String,
}

/// Collects intervals of `(index, minutes)` over adjacent entry pairs.
pub trait EntryIntervals {
    /// Yields an interval for every adjacent pair whose first entry is
    /// `start_tag` and whose second is `end_tag`. Single pass, one element of
    /// lookahead.
    fn intervals_between(&self, start_tag: EntryType, end_tag: EntryType) -> Vec<Interval>;

    /// Fell-asleep → woke-up intervals.
    fn sleep_intervals(&self) -> Vec<Interval> {
        self.intervals_between(EntryType::FellAsleep, EntryType::WokeUp)
    }

    /// Woke-up → fell-asleep intervals.
    fn awake_intervals(&self) -> Vec<Interval> {
        self.intervals_between(EntryType::WokeUp, EntryType::FellAsleep)
    }

    /// The most recent woke-up entry, scanning from the end.
    fn last_wake_up(&self) -> Option<ClockTime>;

    /// Timeline markers for the given intervals of this entry list.
    fn markers(&self, intervals: &[Interval]) -> Vec<IntervalMarker>;
}

impl EntryIntervals for [TimeEntry] {
    fn intervals_between(&self, start_tag: EntryType, end_tag: EntryType) -> Vec<Interval> {
        self.windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].entry_type == start_tag && pair[1].entry_type == end_tag)
            .map(|(index, pair)| Interval {
                index,
                start: pair[0].time,
                end: pair[1].time,
                minutes: interval_duration(pair[0].time, pair[1].time),
            })
            .collect()
    }

    fn last_wake_up(&self) -> Option<ClockTime> {
        self.iter().rev().find(|e| e.entry_type == EntryType::WokeUp).map(|e| e.time)
    }

    fn markers(&self, intervals: &[Interval]) -> Vec<IntervalMarker> {
        intervals
            .iter()
            .map(|interval| IntervalMarker {
                index: interval.index,
                ordinal: self
                    .get(interval.index)
                    .is_some_and(|e| e.entry_type == EntryType::FellAsleep)
                    .then_some(interval.index / 2 + 1),
                position: marker_position(interval.index, self.len()),
                label: format_duration(interval.minutes),
            })
            .collect()
    }
}

/// `(index, minutes)` pairs for every `start_tag` → `end_tag` adjacent pair.
pub fn intervals_between_tags(entries: &[TimeEntry], start_tag: EntryType, end_tag: EntryType) -> Vec<(usize, u32)> {
    entries
        .intervals_between(start_tag, end_tag)
        .into_iter()
        .map(|interval| (interval.index, interval.minutes))
        .collect()
}

/// Position of the interval starting at `index` on a 0–100 timeline.
///
/// The last possible pair starts at `len - 2`, which maps to 100. With two or
/// fewer entries there is only one slot and it sits at 0.
pub fn marker_position(index: usize, len: usize) -> f64 {
    if len <= 2 {
        return 0.0;
    }
    let position = index as f64 / (len - 2) as f64 * 100.0;
    position.clamp(0.0, 100.0)
}

/// Formats a group of intervals for table display.
pub trait IntervalGroup {
    fn format(&self) -> Vec<FormattedInterval>;
    fn total_minutes(&self) -> u32;
}

impl IntervalGroup for [Interval] {
    fn format(&self) -> Vec<FormattedInterval> {
        self.iter()
            .enumerate()
            .map(|(index, interval)| FormattedInterval {
                id: index + 1,
                start: interval.start.to_string(),
                end: interval.end.to_string(),
                duration: format_duration(interval.minutes),
            })
            .collect()
    }

    fn total_minutes(&self) -> u32 {
        self.iter().map(|i| i.minutes).sum()
    }
}
