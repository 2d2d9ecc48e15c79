//! Scroll keep-alive durations
//!
//! The backend accepts `<positive-integer><unit>`, e.g. `30s`, `5m`, `1h`.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9][0-9]*)(d|h|m|s|ms|micros|nanos)$").unwrap()
});

/// Time unit of a scroll duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl TimeUnit {
    /// Suffix used on the wire
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Days => "d",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "micros",
            TimeUnit::Nanos => "nanos",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "d" => Some(TimeUnit::Days),
            "h" => Some(TimeUnit::Hours),
            "m" => Some(TimeUnit::Minutes),
            "s" => Some(TimeUnit::Seconds),
            "ms" => Some(TimeUnit::Millis),
            "micros" => Some(TimeUnit::Micros),
            "nanos" => Some(TimeUnit::Nanos),
            _ => None,
        }
    }
}

/// A validated scroll keep-alive, e.g. `30s`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDuration {
    /// Positive amount
    pub amount: u64,
    /// Unit of `amount`
    pub unit: TimeUnit,
}

impl ScrollDuration {
    /// Parse a duration token such as `30s` or `500ms`
    pub fn parse(token: &str) -> Result<Self> {
        let caps = DURATION_RE.captures(token.trim()).ok_or_else(|| {
            Error::validation(format!(
                "invalid scroll duration '{token}', expected <positive-integer><d|h|m|s|ms|micros|nanos> (e.g. 30s)"
            ))
        })?;

        let amount = caps[1]
            .parse::<u64>()
            .map_err(|e| Error::validation(format!("invalid scroll duration '{token}': {e}")))?;
        let unit = TimeUnit::from_suffix(&caps[2])
            .ok_or_else(|| Error::validation(format!("unknown time unit in '{token}'")))?;

        Ok(Self { amount, unit })
    }
}

impl std::fmt::Display for ScrollDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}
