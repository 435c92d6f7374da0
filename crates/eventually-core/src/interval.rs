//! Time intervals of events on the timeline.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Errors raised when constructing a [`DateInterval`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval duration must not be negative, got {0}")]
    NegativeDuration(TimeDelta),

    #[error("interval ends at {end} before it starts at {start}")]
    EndBeforeStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A closed span of time: a start instant and a non-negative duration.
///
/// # Examples
///
/// ```
/// # use chrono::{TimeDelta, TimeZone, Utc};
/// # use eventually_core::interval::DateInterval;
/// let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
/// let interval = DateInterval::new(start, TimeDelta::minutes(90)).unwrap();
///
/// assert_eq!(interval.end(), Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap());
/// assert_eq!(interval.duration_seconds(), 5400.0);
///
/// assert!(DateInterval::new(start, TimeDelta::minutes(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: DateTime<Utc>,
    duration: TimeDelta,
}

impl DateInterval {
    /// Creates an interval starting at `start` and lasting `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NegativeDuration`] if `duration` is negative.
    pub fn new(start: DateTime<Utc>, duration: TimeDelta) -> Result<Self, IntervalError> {
        if duration < TimeDelta::zero() {
            return Err(IntervalError::NegativeDuration(duration));
        }
        Ok(Self { start, duration })
    }

    /// Creates an interval spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EndBeforeStart`] if `end` precedes `start`.
    pub fn from_bounds(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        if end < start {
            return Err(IntervalError::EndBeforeStart { start, end });
        }
        Ok(Self {
            start,
            duration: end - start,
        })
    }

    /// Returns the start instant
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the duration
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Returns the end instant
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.duration
    }

    /// Returns the duration in fractional seconds
    pub fn duration_seconds(&self) -> f64 {
        seconds(self.duration)
    }

    /// Returns the fractional seconds from `anchor` to the start of this
    /// interval. Negative when the interval starts before `anchor`.
    pub fn seconds_since(&self, anchor: DateTime<Utc>) -> f64 {
        seconds(self.start - anchor)
    }
}

/// Converts a [`TimeDelta`] to fractional seconds without losing sub-second
/// precision.
pub fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}
