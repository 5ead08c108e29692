//! Exact second + microsecond time values.
//!
//! A [`TimeVal`] is a (seconds, microseconds) pair representing either an
//! absolute point in time or a span of time, depending on context; the
//! representation is identical for both. All arithmetic is integer-exact,
//! so repeated additions never accumulate floating-point drift.
//!
//! # Normalization
//!
//! Every stored or computed value keeps its microsecond component within
//! `0..1_000_000`. The addition operator is the only place a carry can
//! arise, and it propagates the carry into the seconds component;
//! [`TimeVal::from_micros`] splits a flat count euclideanly so even
//! negative totals produce a normalized value.
//!
//! # Ordering
//!
//! Values order lexicographically on (seconds, microseconds). Equal values
//! compare as `Equal`, which callers rely on for strict "past the
//! deadline" checks: a time exactly at a deadline has not elapsed it.
//!
//! # Example
//!
//! ```
//! use timetrack::TimeVal;
//!
//! let a = TimeVal::new(0, 900_000);
//! let b = TimeVal::new(0, 200_000);
//! assert_eq!(a + b, TimeVal::new(1, 100_000));
//! assert!(a < a + b);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;
use thiserror::Error;

/// Microseconds in one second.
pub const MICROS_PER_SEC: i64 = 1_000_000;

/// Error returned when constructing a [`TimeVal`] from unnormalized parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeValError {
    /// The microsecond component was outside `0..1_000_000`.
    #[error("microsecond component {0} out of range (expected 0..1000000)")]
    MicrosOutOfRange(i64),
}

/// An exact (seconds, microseconds) time value.
///
/// `TimeVal` serves as both a timestamp (seconds since some epoch) and a
/// duration (a span of seconds); which one it means is up to the caller.
/// It is a plain `Copy` value with derived lexicographic ordering and
/// carry-propagating addition.
///
/// Seconds are `i64`, so a flat microsecond count ([`as_micros`]) only
/// overflows past roughly ±292,000 years of seconds; no runtime guard is
/// applied.
///
/// [`as_micros`]: TimeVal::as_micros
///
/// # Example
///
/// ```
/// use timetrack::TimeVal;
///
/// let t = TimeVal::from_micros(2_500_000);
/// assert_eq!(t.secs(), 2);
/// assert_eq!(t.subsec_micros(), 500_000);
/// assert_eq!(t.as_micros(), 2_500_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TimeVal {
    /// Whole seconds. Negative values are permitted (pre-epoch timestamps,
    /// negative spans) and stay normalized: `-0.5s` is `(-1, 500_000)`.
    secs: i64,
    /// Sub-second microseconds, always within `0..1_000_000`.
    micros: i64,
}

impl TimeVal {
    /// The zero value.
    pub const ZERO: Self = Self { secs: 0, micros: 0 };

    /// Creates a value from explicit seconds and sub-second microseconds.
    ///
    /// # Panics
    ///
    /// Panics if `micros` is not within `0..1_000_000`.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::TimeVal;
    ///
    /// let t = TimeVal::new(3, 250_000);
    /// assert_eq!(t.secs(), 3);
    /// assert_eq!(t.subsec_micros(), 250_000);
    /// ```
    #[must_use]
    pub const fn new(secs: i64, micros: i64) -> Self {
        assert!(
            micros >= 0 && micros < MICROS_PER_SEC,
            "microsecond component out of range"
        );
        Self { secs, micros }
    }

    /// Fallible form of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`TimeValError::MicrosOutOfRange`] if `micros` is not within
    /// `0..1_000_000`.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::TimeVal;
    ///
    /// assert!(TimeVal::try_new(1, 999_999).is_ok());
    /// assert!(TimeVal::try_new(1, 1_000_000).is_err());
    /// ```
    pub const fn try_new(secs: i64, micros: i64) -> Result<Self, TimeValError> {
        if micros >= 0 && micros < MICROS_PER_SEC {
            Ok(Self { secs, micros })
        } else {
            Err(TimeValError::MicrosOutOfRange(micros))
        }
    }

    /// Creates a value from a flat microsecond count.
    ///
    /// The count is split euclideanly, so the result is normalized for any
    /// input, including negative totals, and round-trips exactly through
    /// [`as_micros`](Self::as_micros).
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::TimeVal;
    ///
    /// assert_eq!(TimeVal::from_micros(1_500_000), TimeVal::new(1, 500_000));
    /// assert_eq!(TimeVal::from_micros(-1), TimeVal::new(-1, 999_999));
    /// assert_eq!(TimeVal::from_micros(-1).as_micros(), -1);
    /// ```
    #[must_use]
    pub const fn from_micros(total: i64) -> Self {
        Self {
            secs: total.div_euclid(MICROS_PER_SEC),
            micros: total.rem_euclid(MICROS_PER_SEC),
        }
    }

    /// Creates a value from whole seconds, with a zero microsecond
    /// component.
    ///
    /// This is the coarse, wall-clock-granularity constructor; use
    /// [`new`](Self::new) when sub-second precision is available.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::TimeVal;
    ///
    /// let t = TimeVal::from_secs(42);
    /// assert_eq!(t.subsec_micros(), 0);
    /// ```
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, micros: 0 }
    }

    /// Returns the whole-second component.
    #[must_use]
    pub const fn secs(&self) -> i64 {
        self.secs
    }

    /// Returns the sub-second microsecond component, always within
    /// `0..1_000_000`.
    #[must_use]
    pub const fn subsec_micros(&self) -> i64 {
        self.micros
    }

    /// Returns the value as a flat microsecond count.
    ///
    /// Computed as `secs * 1_000_000 + micros` without overflow
    /// protection; the result is exact for any value within roughly
    /// ±292,000 years of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use timetrack::TimeVal;
    ///
    /// assert_eq!(TimeVal::new(2, 500_000).as_micros(), 2_500_000);
    /// ```
    #[must_use]
    pub const fn as_micros(&self) -> i64 {
        self.secs * MICROS_PER_SEC + self.micros
    }

    /// Returns `true` if this is the zero value.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.micros == 0
    }
}

impl Add for TimeVal {
    type Output = Self;

    /// Component-wise sum with carry.
    ///
    /// If the microsecond sum reaches `1_000_000`, one second carries into
    /// the seconds sum. Overflow of the `i64` seconds component is not
    /// guarded.
    fn add(self, rhs: Self) -> Self {
        let mut secs = self.secs + rhs.secs;
        let mut micros = self.micros + rhs.micros;
        if micros >= MICROS_PER_SEC {
            secs += 1;
            micros -= MICROS_PER_SEC;
        }
        Self { secs, micros }
    }
}

impl Sub for TimeVal {
    type Output = Self;

    /// Component-wise difference with borrow.
    ///
    /// The result is normalized; when `rhs > self` the seconds component
    /// goes negative while the microsecond component stays within
    /// `0..1_000_000`.
    fn sub(self, rhs: Self) -> Self {
        let mut secs = self.secs - rhs.secs;
        let mut micros = self.micros - rhs.micros;
        if micros < 0 {
            secs -= 1;
            micros += MICROS_PER_SEC;
        }
        Self { secs, micros }
    }
}

impl From<Duration> for TimeVal {
    /// Converts a [`Duration`], truncating to microsecond precision.
    #[allow(clippy::cast_possible_wrap)]
    fn from(d: Duration) -> Self {
        Self {
            secs: d.as_secs() as i64,
            micros: i64::from(d.subsec_micros()),
        }
    }
}

impl fmt::Display for TimeVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}s", self.secs, self.micros)
    }
}
