//! Progress estimation
//!
//! Converts elapsed time and page counts into a remaining-time estimate.

use std::time::Duration;

/// Number of pages needed to drain `total_hits` at `page_size` per page
pub fn expected_pages(total_hits: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_hits.div_ceil(page_size)
}

/// Estimate the time left, assuming every page takes as long as the average so far.
///
/// `pages_completed` must be positive; zero yields a zero estimate.
pub fn estimate_remaining(elapsed: Duration, pages_completed: u64, pages_total: u64) -> Duration {
    if pages_completed == 0 {
        return Duration::ZERO;
    }
    let per_page_ms = elapsed.as_millis() / u128::from(pages_completed);
    let pages_left = u128::from(pages_total.saturating_sub(pages_completed));
    let remaining_ms = per_page_ms.saturating_mul(pages_left);
    Duration::from_millis(u64::try_from(remaining_ms).unwrap_or(u64::MAX))
}

/// Hours, minutes and seconds of a duration, truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl From<Duration> for Clock {
    fn from(duration: Duration) -> Self {
        let ms = duration.as_millis() as u64;
        Self {
            hours: ms / 1000 / 60 / 60,
            minutes: (ms / 1000 / 60) % 60,
            seconds: (ms / 1000) % 60,
        }
    }
}

impl std::fmt::Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h:{}m:{}s", self.hours, self.minutes, self.seconds)
    }
}

/// Point-in-time view of a session's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Pages fetched and emitted so far
    pub pages_completed: u64,
    /// Pages expected in total, unknown when the backend sent no hit count
    pub pages_expected: Option<u64>,
    /// Time since the session started
    pub elapsed: Duration,
    /// Estimated time left
    pub remaining: Option<Duration>,
}

impl ProgressSnapshot {
    /// Derive a snapshot from the current counters
    pub fn new(elapsed: Duration, pages_completed: u64, pages_expected: Option<u64>) -> Self {
        let remaining = match pages_expected {
            Some(total) if pages_completed > 0 => {
                Some(estimate_remaining(elapsed, pages_completed, total))
            }
            _ => None,
        };
        Self {
            pages_completed,
            pages_expected,
            elapsed,
            remaining,
        }
    }
}

impl std::fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pages_expected {
            Some(total) => write!(f, "Page {}/{}", self.pages_completed, total)?,
            None => write!(f, "Page {}", self.pages_completed)?,
        }
        write!(f, " complete, elapsed {}", Clock::from(self.elapsed))?;
        if let Some(remaining) = self.remaining {
            write!(f, ", remaining ~{}", Clock::from(remaining))?;
        }
        Ok(())
    }
}
