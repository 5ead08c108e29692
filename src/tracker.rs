//! Timeout tracking against a caller-supplied clock.
//!
//! A [`TimeTracker`] owns a timeout span and a "now" cursor, both exact
//! [`TimeVal`] values. The caller feeds it timestamps from whatever clock
//! it trusts (wall, monotonic, simulated); the tracker never reads a clock
//! itself, so every operation is deterministic and directly testable.
//!
//! # Two Check Families
//!
//! The tracker answers "has the deadline `now + timeout` been passed?" in
//! two ways that differ only in when the cursor advances:
//!
//! - **Sampling** ([`is_timed_out`](TimeTracker::is_timed_out),
//!   [`is_timed_out_with`](TimeTracker::is_timed_out_with)): the cursor is
//!   set to the supplied time on every call that passes the stale guard,
//!   regardless of the outcome. Each poll restarts the window from the
//!   latest observed time, which suits sliding activity windows.
//!
//! - **Fixed-baseline** ([`is_timed_out_fixed`](TimeTracker::is_timed_out_fixed),
//!   [`is_timed_out_fixed_secs`](TimeTracker::is_timed_out_fixed_secs)):
//!   the cursor moves only when the timeout actually fires. Repeated
//!   non-timeout polls keep counting from the same baseline, which suits
//!   fixed-deadline countdowns that must not silently reset on every poll.
//!
//! Callers must pick the variant matching their semantics; mixing them on
//! one tracker changes which baseline later deadlines are computed from.
//!
//! # Stale Timestamps
//!
//! Every check first compares the supplied time against the cursor. A time
//! strictly earlier than the cursor is stale (an out-of-order reading from
//! the caller's clock): the check returns `false` and leaves all state
//! untouched. The cursor is therefore never decremented.
//!
//! # Example
//!
//! ```
//! use timetrack::{TimeTracker, TimeVal};
//!
//! let mut tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
//!
//! // 3s elapsed: not past the 5s deadline, but the cursor samples to 3s.
//! assert!(!tracker.is_timed_out(TimeVal::from_secs(3)));
//! assert_eq!(tracker.now(), TimeVal::from_secs(3));
//!
//! // 9s: deadline was 3s + 5s = 8s, so this fires.
//! assert!(tracker.is_timed_out(TimeVal::from_secs(9)));
//! assert_eq!(tracker.now(), TimeVal::from_secs(9));
//! ```

use crate::timeval::TimeVal;
use serde::{Deserialize, Serialize};

/// Tracks one timeout span and one "now" cursor.
///
/// A plain `Copy` value with no resources; keep one instance per timed
/// operation. It is not internally synchronized; wrap it in a lock if it
/// must be shared across threads.
///
/// The deadline for every check is `cursor + timeout`, and "timed out"
/// always means *strictly* past the deadline: a supplied time exactly
/// equal to the deadline does not fire.
///
/// # Example
///
/// ```
/// use timetrack::{TimeTracker, TimeVal};
///
/// let mut tracker = TimeTracker::with_timeout_micros(250_000)
///     .starting_at(TimeVal::from_secs(100));
///
/// assert_eq!(tracker.timeout_micros(), 250_000);
/// assert_eq!(tracker.now(), TimeVal::from_secs(100));
///
/// // 100.25s is exactly the deadline: not timed out, cursor samples.
/// assert!(!tracker.is_timed_out(TimeVal::new(100, 250_000)));
/// // The next deadline is 100.5s; a microsecond past it fires.
/// assert!(tracker.is_timed_out(TimeVal::new(100, 500_001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeTracker {
    /// The default timeout span for checks without an explicit override.
    timeout: TimeVal,
    /// The cursor deadlines are computed from. Advances per the rules of
    /// the two check families; never decremented by a check.
    now: TimeVal,
}

impl TimeTracker {
    /// Creates a tracker with a zero timeout and a zero cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let tracker = TimeTracker::new();
    /// assert_eq!(tracker.timeout(), TimeVal::ZERO);
    /// assert_eq!(tracker.now(), TimeVal::ZERO);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: TimeVal::ZERO,
            now: TimeVal::ZERO,
        }
    }

    /// Creates a tracker with the given default timeout and a zero cursor.
    #[must_use]
    pub const fn with_timeout(timeout: TimeVal) -> Self {
        Self {
            timeout,
            now: TimeVal::ZERO,
        }
    }

    /// Creates a tracker with the default timeout given as a flat
    /// microsecond count, and a zero cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let tracker = TimeTracker::with_timeout_micros(1_500_000);
    /// assert_eq!(tracker.timeout(), TimeVal::new(1, 500_000));
    /// ```
    #[must_use]
    pub const fn with_timeout_micros(timeout_us: i64) -> Self {
        Self {
            timeout: TimeVal::from_micros(timeout_us),
            now: TimeVal::ZERO,
        }
    }

    /// Sets the initial cursor, preserving sub-second precision.
    ///
    /// Builder-style; chain after a constructor.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let tracker = TimeTracker::with_timeout_micros(500_000)
    ///     .starting_at(TimeVal::new(10, 123_456));
    /// assert_eq!(tracker.now(), TimeVal::new(10, 123_456));
    /// ```
    #[must_use]
    pub const fn starting_at(mut self, now: TimeVal) -> Self {
        self.now = now;
        self
    }

    /// Sets the initial cursor from a coarse whole-second clock reading;
    /// the microsecond component is zero.
    #[must_use]
    pub const fn starting_at_secs(mut self, now_secs: i64) -> Self {
        self.now = TimeVal::from_secs(now_secs);
        self
    }

    /// Overwrites the cursor unconditionally; no ordering check against
    /// the previous cursor is made.
    pub fn set_now(&mut self, current_time: TimeVal) {
        self.now = current_time;
    }

    /// Overwrites the cursor from a coarse whole-second clock reading.
    pub fn set_now_secs(&mut self, now_secs: i64) {
        self.now = TimeVal::from_secs(now_secs);
    }

    /// Returns the cursor.
    #[must_use]
    pub const fn now(&self) -> TimeVal {
        self.now
    }

    /// Overwrites the default timeout.
    ///
    /// Nothing rejects a negative or absurd span; the caller owns sanity.
    pub fn set_timeout(&mut self, timeout: TimeVal) {
        self.timeout = timeout;
    }

    /// Overwrites the default timeout from a flat microsecond count.
    pub fn set_timeout_micros(&mut self, timeout_us: i64) {
        self.timeout = TimeVal::from_micros(timeout_us);
    }

    /// Returns the default timeout.
    #[must_use]
    pub const fn timeout(&self) -> TimeVal {
        self.timeout
    }

    /// Returns the default timeout as a flat microsecond count.
    ///
    /// Exact for timeouts within roughly ±292,000 years of seconds; no
    /// overflow protection beyond that.
    #[must_use]
    pub const fn timeout_micros(&self) -> i64 {
        self.timeout.as_micros()
    }

    /// Returns the deadline the next check will test against:
    /// cursor + default timeout.
    #[must_use]
    pub fn deadline(&self) -> TimeVal {
        self.now + self.timeout
    }

    /// Returns the time left until the deadline at `current_time`, or
    /// [`TimeVal::ZERO`] once the deadline has been reached or passed.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
    /// assert_eq!(tracker.remaining(TimeVal::from_secs(3)), TimeVal::from_secs(2));
    /// assert_eq!(tracker.remaining(TimeVal::from_secs(8)), TimeVal::ZERO);
    /// ```
    #[must_use]
    pub fn remaining(&self, current_time: TimeVal) -> TimeVal {
        let deadline = self.deadline();
        if current_time >= deadline {
            TimeVal::ZERO
        } else {
            deadline - current_time
        }
    }

    /// Pure form of the sampling check: reports whether `current_time` is
    /// strictly past the deadline without touching any state.
    ///
    /// The stale guard applies: a `current_time` behind the cursor reports
    /// `false`.
    #[must_use]
    pub fn is_expired(&self, current_time: TimeVal) -> bool {
        if self.now > current_time {
            return false;
        }
        current_time > self.deadline()
    }

    /// Sampling check against the default timeout.
    ///
    /// Equivalent to [`is_timed_out_with`](Self::is_timed_out_with) with
    /// the stored timeout.
    pub fn is_timed_out(&mut self, current_time: TimeVal) -> bool {
        let timeout = self.timeout;
        self.is_timed_out_with(current_time, timeout)
    }

    /// Sampling check against an explicit timeout.
    ///
    /// If `current_time` is strictly behind the cursor it is stale:
    /// returns `false` and nothing changes. Otherwise the deadline is
    /// `cursor + timeout`, the cursor is set to `current_time`
    /// unconditionally, and the result is whether the new cursor is
    /// strictly past that deadline.
    ///
    /// Because the cursor samples on every passing call, consecutive polls
    /// measure from the latest observed time; see the
    /// [module docs](self) for when to prefer the fixed-baseline family.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let mut tracker = TimeTracker::new().starting_at(TimeVal::from_secs(10));
    ///
    /// // Stale: 5s is behind the 10s cursor.
    /// assert!(!tracker.is_timed_out_with(TimeVal::from_secs(5), TimeVal::from_secs(1)));
    /// assert_eq!(tracker.now(), TimeVal::from_secs(10));
    ///
    /// // 12s against a 1s deadline from 10s: fires, cursor advances.
    /// assert!(tracker.is_timed_out_with(TimeVal::from_secs(12), TimeVal::from_secs(1)));
    /// assert_eq!(tracker.now(), TimeVal::from_secs(12));
    /// ```
    pub fn is_timed_out_with(&mut self, current_time: TimeVal, timeout: TimeVal) -> bool {
        if self.now > current_time {
            tracing::trace!(cursor = %self.now, supplied = %current_time, "stale timestamp ignored");
            return false;
        }

        let deadline = self.now + timeout;
        self.now = current_time;

        let timed_out = self.now > deadline;
        if timed_out {
            tracing::trace!(cursor = %self.now, deadline = %deadline, "timeout fired");
        }
        timed_out
    }

    /// Fixed-baseline check against the default timeout.
    ///
    /// If `current_time` is strictly behind the cursor it is stale:
    /// returns `false` and nothing changes. Otherwise the deadline is
    /// `cursor + timeout`, and the cursor is set to `current_time` *only
    /// when the check fires*; a non-timeout poll leaves the baseline
    /// untouched, so the window does not reset between polls.
    ///
    /// There is no explicit-timeout form of this check.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::{TimeTracker, TimeVal};
    ///
    /// let mut tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
    ///
    /// // 3s: not past 5s, and the baseline stays at 0.
    /// assert!(!tracker.is_timed_out_fixed(TimeVal::from_secs(3)));
    /// assert_eq!(tracker.now(), TimeVal::ZERO);
    ///
    /// // 9s against the unchanged 5s deadline: fires, cursor commits.
    /// assert!(tracker.is_timed_out_fixed(TimeVal::from_secs(9)));
    /// assert_eq!(tracker.now(), TimeVal::from_secs(9));
    /// ```
    pub fn is_timed_out_fixed(&mut self, current_time: TimeVal) -> bool {
        if self.now > current_time {
            tracing::trace!(cursor = %self.now, supplied = %current_time, "stale timestamp ignored");
            return false;
        }

        let deadline = self.now + self.timeout;
        let timed_out = current_time > deadline;
        if timed_out {
            self.now = current_time;
            tracing::trace!(cursor = %self.now, deadline = %deadline, "timeout fired");
        }
        timed_out
    }

    /// Fixed-baseline check from a coarse whole-second clock reading.
    ///
    /// Converts with a zero microsecond component, then delegates to
    /// [`is_timed_out_fixed`](Self::is_timed_out_fixed).
    pub fn is_timed_out_fixed_secs(&mut self, now_secs: i64) -> bool {
        self.is_timed_out_fixed(TimeVal::from_secs(now_secs))
    }
}
