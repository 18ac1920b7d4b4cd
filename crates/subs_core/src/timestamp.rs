use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use regex::Regex;
use subs_logging::{subs_debug, subs_error};
use thiserror::Error;

/// Shown in place of a timestamp that could not be parsed.
pub const FALLBACK_TEXT: &str = "Некорректная дата";

/// Stored timestamps are this many hours behind the displayed wall clock.
pub const DISPLAY_OFFSET_HOURS: i64 = 3;

static RAW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})\.(\d{6}))$")
        .expect("timestamp pattern is valid")
});

const SHORT_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

const LONG_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp {0:?} does not match YYYY-MM-DD HH:MM:SS.ffffff")]
    PatternMismatch(String),
    #[error("timestamp {0:?} is not a valid calendar time")]
    InvalidCalendar(String),
}

/// Turns stored `YYYY-MM-DD HH:MM:SS.ffffff` timestamps into Russian display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormatter {
    fallback: String,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampFormatter {
    pub fn new() -> Self {
        Self::with_fallback(FALLBACK_TEXT)
    }

    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Parses `raw` and shifts it to display time. The fractional seconds are
    /// required by the pattern but ignored.
    pub fn parse(&self, raw: &str) -> Result<NaiveDateTime, TimestampError> {
        let caps = RAW_PATTERN
            .captures(raw)
            .ok_or_else(|| TimestampError::PatternMismatch(raw.to_string()))?;

        let normalized = format!(
            "{}-{}-{}T{}:{}:{}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6]
        );
        subs_debug!("timestamp {:?} normalized to {}", raw, normalized);

        let stored = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S")
            .map_err(|_| TimestampError::InvalidCalendar(raw.to_string()))?;
        stored
            .checked_add_signed(TimeDelta::hours(DISPLAY_OFFSET_HOURS))
            .ok_or_else(|| TimestampError::InvalidCalendar(raw.to_string()))
    }

    /// Formats as `26 февр. 2025 г. 09:37`, or returns the fallback text.
    pub fn format(&self, raw: &str) -> String {
        match self.parse(raw) {
            Ok(local) => format_short(&local),
            Err(err) => {
                subs_error!("{}", err);
                self.fallback.clone()
            }
        }
    }
}

fn format_short<T: Datelike + Timelike>(value: &T) -> String {
    format!(
        "{} {} {} г. {:02}:{:02}",
        value.day(),
        SHORT_MONTHS[value.month0() as usize],
        value.year(),
        value.hour(),
        value.minute()
    )
}

/// Long form with the full month name, e.g. `26 февраля 2025 г. в 09:37`.
pub fn format_long<T: Datelike + Timelike>(value: &T) -> String {
    format!(
        "{} {} {} г. в {:02}:{:02}",
        value.day(),
        LONG_MONTHS[value.month0() as usize],
        value.year(),
        value.hour(),
        value.minute()
    )
}
