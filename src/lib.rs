//! # Dremota - daily sleep dashboard calculations
//!
//! A command-line utility that reads one day's sleep log (an upstream metrics
//! snapshot plus the ordered fell-asleep / woke-up events) and derives what a
//! sleep dashboard shows.
//!
//! ## Features
//!
//! - **Totals**: sleep, wakefulness and night sleep labels
//! - **Progress**: completion against the required sleep, with remaining or exceeded time
//! - **Markers**: sleep and awake intervals placed along the day's timeline
//! - **Prediction**: an evening estimate of tonight's bedtime
//! - **Live Counter**: "currently awake for N", refreshed every minute
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dremota::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
