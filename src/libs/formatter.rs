//! Duration formatting and parsing for user-friendly display.
//!
//! All locale rules live here so they can be tested on their own. Three
//! renderings are supported:
//!
//! - **Clock style** `"HH:MM"`: interval lengths and sleep targets
//!   (hours are zero-padded and never wrapped, so 25 hours is `"25:00"`)
//! - **Label** `"7год. 30хв."`: the abbreviated form the metrics aggregator
//!   emits for totals
//! - **Grammatical** `"7 годин 30 хвилин"`: full words with Ukrainian plural
//!   agreement, used for countdowns and the live wakefulness counter
//!
//! [`parse_duration_label`] reads both the label and the grammatical form back
//! into minutes.
//!
//! ## Examples
//!
//! ```rust
//! use dremota::libs::formatter::{format_duration_grammatical, format_duration_label, parse_duration_label};
//!
//! assert_eq!(format_duration_label(450), "7год. 30хв.");
//! assert_eq!(format_duration_grammatical(122), "2 години 2 хвилини");
//! assert_eq!(parse_duration_label("7год. 30хв.")?, 450);
//! assert_eq!(parse_duration_label("2 години 2 хвилини")?, 122);
//! # Ok::<(), dremota::libs::error::DashboardError>(())
//! ```

use crate::libs::error::DashboardError;
use serde::{Deserialize, Serialize};

/// A sleep or awake interval pre-formatted for table display.
///
/// Holds string representations only, so it can go straight into a table or
/// a JSON dump without further formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedInterval {
    /// Ordinal of the interval within its kind, starting from 1.
    pub id: usize,
    /// Start of the interval, "HH:MM".
    pub start: String,
    /// End of the interval, "HH:MM".
    pub end: String,
    /// Length of the interval, "HH:MM".
    pub duration: String,
}

/// Formats a minute count as zero-padded "HH:MM" without wrapping hours.
///
/// ```rust
/// use dremota::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(30), "00:30");
/// assert_eq!(format_duration(480), "08:00");
/// assert_eq!(format_duration(1500), "25:00");
/// ```
pub fn format_duration(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a minute count as the abbreviated "Xгод. Yхв." label.
pub fn format_duration_label(minutes: u32) -> String {
    format!("{}год. {}хв.", minutes / 60, minutes % 60)
}

/// Ukrainian plural categories for cardinal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PluralForm {
    One,
    Few,
    Many,
}

fn plural_form(n: u32) -> PluralForm {
    let last = n % 10;
    let last_two = n % 100;
    if last == 1 && last_two != 11 {
        PluralForm::One
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        PluralForm::Few
    } else {
        PluralForm::Many
    }
}

struct UnitWords {
    one: &'static str,
    few: &'static str,
    many: &'static str,
}

impl UnitWords {
    fn agree(&self, n: u32) -> String {
        let word = match plural_form(n) {
            PluralForm::One => self.one,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        };
        format!("{} {}", n, word)
    }
}

const HOUR_WORDS: UnitWords = UnitWords {
    one: "година",
    few: "години",
    many: "годин",
};

const MINUTE_WORDS: UnitWords = UnitWords {
    one: "хвилина",
    few: "хвилини",
    many: "хвилин",
};

/// Formats a minute count with full words and plural agreement.
///
/// Zero components are omitted, except that a zero total renders as
/// `"0 хвилин"`.
pub fn format_duration_grammatical(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => MINUTE_WORDS.agree(m),
        (h, 0) => HOUR_WORDS.agree(h),
        (h, m) => format!("{} {}", HOUR_WORDS.agree(h), MINUTE_WORDS.agree(m)),
    }
}

/// Minutes per unit for a unit token, matched by prefix so that both the
/// abbreviations and the inflected words are accepted.
fn unit_multiplier(unit: &str) -> Option<u32> {
    let unit = unit.to_lowercase();
    if unit.starts_with("год") || unit == "h" {
        Some(60)
    } else if unit.starts_with("хв") || unit == "m" || unit == "min" {
        Some(1)
    } else {
        None
    }
}

/// Parses a localized duration label into minutes.
///
/// Accepts any sequence of `<number><unit>` components separated by spaces
/// or dots, for example `"7год. 30хв."`, `"45хв."` or `"1 година 5 хвилин"`.
/// A bare `"0"` is accepted as zero.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] for an empty label, a number without a
/// unit, an unknown unit or a value that overflows.
pub fn parse_duration_label(label: &str) -> Result<u32, DashboardError> {
    let trimmed = label.trim();
    if trimmed == "0" {
        return Ok(0);
    }

    let mut chars = trimmed.chars().peekable();
    let mut total: u32 = 0;
    let mut components = 0;

    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == '.' || *c == ',').is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut digits = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
            digits.push(c);
        }
        if digits.is_empty() {
            return Err(DashboardError::parse(label, "expected a number"));
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut unit = String::new();
        while let Some(c) = chars.next_if(|c| c.is_alphabetic()) {
            unit.push(c);
        }
        if unit.is_empty() {
            return Err(DashboardError::parse(label, format!("missing unit after {}", digits)));
        }

        let multiplier = unit_multiplier(&unit).ok_or_else(|| DashboardError::parse(label, format!("unknown unit '{}'", unit)))?;
        let value: u32 = digits.parse().map_err(|_| DashboardError::parse(label, "number out of range"))?;

        total = value
            .checked_mul(multiplier)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| DashboardError::parse(label, "duration out of range"))?;
        components += 1;
    }

    if components == 0 {
        return Err(DashboardError::parse(label, "empty duration"));
    }

    Ok(total)
}
