//! User-facing text for dremota.
//!
//! Every string the application prints, including the fixed placeholders the
//! dashboard falls back to, is a [`Message`] variant rendered by one `Display`
//! implementation. The macros in [`macros`] route messages to the console or
//! to `tracing` depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
