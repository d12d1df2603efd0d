//! Trigger logic unit mask calculation.
//!
//! A trigger configuration such as `XX1110` states, per signal line, whether
//! the signal must be present (`1`), absent (`0`) or is ignored (`X`).
//! [`pattern::decode`] turns it into a pair of `required_present` and
//! `required_absent` bit patterns and [`enumerate::enumerate`] turns those
//! into a [`ResultMask`] with bit `i` set iff combination `i` of the signal
//! lines triggers.
//!
//! ```
//! use tlu_mask::TriggerPattern;
//!
//! let pattern: TriggerPattern = "XX1110".parse().unwrap();
//! let mask = pattern.enumerate();
//!
//! assert_eq!(mask.iter_ones().collect::<Vec<_>>(), vec![28, 29, 30, 31]);
//! ```

pub mod config;
pub mod enumerate;
pub mod error;
pub mod mask;
pub mod pattern;
pub mod report;
pub mod signal;

pub use error::PatternError;
pub use mask::ResultMask;
pub use pattern::{TriggerPattern, SIGNAL_LINES};
