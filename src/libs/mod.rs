//! Core library modules for dremota.
//!
//! ## Features
//!
//! - **Time Arithmetic**: clock parsing, midnight-aware intervals, clamped remainders
//! - **Localized Durations**: label and grammatical formatting with a matching parser
//! - **Day Analysis**: interval scans, timeline markers, completion progress
//! - **Prediction**: night bedtime estimate with placeholder fallbacks
//! - **Live Counter**: cancellable once-a-minute wakefulness refresh
//! - **Infrastructure**: configuration, data storage, messaging, console views
//!
//! ## Usage
//!
//! ```rust
//! use dremota::libs::entry::{EntryIntervals, TimeEntry};
//!
//! let entries = vec![
//!     TimeEntry::fell_asleep("22:00".parse()?),
//!     TimeEntry::woke_up("06:00".parse()?),
//! ];
//! assert_eq!(entries.sleep_intervals()[0].minutes, 480);
//! # Ok::<(), dremota::libs::error::DashboardError>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod metrics;
pub mod prediction;
pub mod summary;
pub mod view;
pub mod wakefulness;
