//! Deterministic timeout tracking over exact second + microsecond values.
//!
//! This crate answers one question: *given the last time I looked at the
//! clock, has my time budget elapsed at this newer reading?* The caller
//! supplies every timestamp explicitly; nothing here reads a system
//! clock, so trackers behave identically under a wall clock, a monotonic
//! clock, or a simulated clock in tests.
//!
//! - [`timeval`]: the exact [`TimeVal`] pair type, its ordering and
//!   carry-propagating arithmetic
//! - [`tracker`]: the [`TimeTracker`] component with its two
//!   timeout-check families (sampling and fixed-baseline)
//!
//! # Example
//!
//! ```
//! use timetrack::{TimeTracker, TimeVal};
//!
//! let mut tracker = TimeTracker::with_timeout(TimeVal::from_secs(30));
//!
//! // Poll with whatever clock readings the caller has.
//! assert!(!tracker.is_timed_out(TimeVal::from_secs(20)));
//! assert!(!tracker.is_timed_out(TimeVal::from_secs(45)));
//! assert!(tracker.is_timed_out(TimeVal::from_secs(80)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod timeval;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_utils;

pub use timeval::{TimeVal, TimeValError, MICROS_PER_SEC};
pub use tracker::TimeTracker;
