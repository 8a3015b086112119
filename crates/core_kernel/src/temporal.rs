//! Time sources and version stamping
//!
//! Records carry a last-modified timestamp that doubles as their version
//! token. This module provides:
//! - `Clock`: the source of "now" used when a write is committed
//! - `SystemClock`: wall-clock time in UTC
//! - `ManualClock`: a clock that only moves when told to, for deterministic tests
//! - `next_modified`: derives a stamp that is strictly newer than the previous one

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::fmt;

/// Smallest step, in microseconds, between two consecutive stamps of the same record
pub const MIN_STAMP_STEP: i64 = 1;

/// A source of the current time
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that is advanced explicitly
///
/// Useful when a test needs to know the exact stamp a write will receive,
/// or needs to simulate a wall clock that stalls or steps backwards.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Moves the clock forward (or backward, for a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }

    /// Sets the clock to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.current.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

/// Computes the stamp for a write committed at `now` over a record last stamped at `previous`
///
/// The result is always strictly greater than `previous`: when the clock has
/// not moved past the previous stamp, the stamp advances by `MIN_STAMP_STEP`
/// microseconds instead. Returns `None` when no representable instant is
/// newer than `previous`.
pub fn next_modified(previous: DateTime<Utc>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if now > previous {
        return Some(now);
    }
    previous.checked_add_signed(Duration::microseconds(MIN_STAMP_STEP))
}
