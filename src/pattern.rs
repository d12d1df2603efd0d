//! Decoding of ternary trigger configurations.
//!
//! A configuration such as `XX1110` lists one [`Signal`] per signal line.
//! The first character is signal line 0, i.e. the least significant bit of
//! the derived integers:
//!
//! ```
//! let (present, absent) = tlu_mask::pattern::decode("XX1110").unwrap();
//!
//! assert_eq!(present, 0b011100);
//! assert_eq!(absent, 0b100000);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::enumerate::{self, MAX_SIGNAL_LINES};
use crate::error::PatternError;
use crate::mask::ResultMask;
use crate::signal::Signal;

/// Number of trigger signal lines on the unit.
pub const SIGNAL_LINES: usize = 6;

/// Decodes a configuration of [`SIGNAL_LINES`] symbols into
/// `(required_present, required_absent)`.
pub fn decode(config: &str) -> Result<(u32, u32), PatternError> {
    decode_width(config, SIGNAL_LINES)
}

/// Decodes a configuration of exactly `width` symbols.
///
/// # Panics
///
/// If `width` exceeds [`MAX_SIGNAL_LINES`].
pub fn decode_width(
    config: &str,
    width: usize,
) -> Result<(u32, u32), PatternError> {
    assert!(width <= MAX_SIGNAL_LINES, "unsupported width {width}");

    let actual = config.chars().count();
    if actual != width {
        return Err(PatternError::InvalidLength {
            expected: width,
            actual,
        });
    }

    let mut required_present = 0_u32;
    let mut required_absent = 0_u32;

    for (position, symbol) in config.chars().enumerate() {
        let signal = Signal::from_char(symbol)
            .ok_or(PatternError::InvalidSymbol { position, symbol })?;

        match signal {
            Signal::Present => required_present |= 1 << position,
            Signal::Absent => required_absent |= 1 << position,
            Signal::DontCare => {}
        }
    }

    Ok((required_present, required_absent))
}

/// A decoded trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerPattern {
    required_present: u32,
    required_absent: u32,
    width: usize,
}

impl TriggerPattern {
    pub fn parse(config: &str, width: usize) -> Result<Self, PatternError> {
        let (required_present, required_absent) = decode_width(config, width)?;

        Ok(Self {
            required_present,
            required_absent,
            width,
        })
    }

    pub fn required_present(&self) -> u32 {
        self.required_present
    }

    pub fn required_absent(&self) -> u32 {
        self.required_absent
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn signal(&self, line: usize) -> Signal {
        assert!(line < self.width, "signal line {line} out of range");

        if self.required_present & (1 << line) != 0 {
            Signal::Present
        } else if self.required_absent & (1 << line) != 0 {
            Signal::Absent
        } else {
            Signal::DontCare
        }
    }

    pub fn signals(&self) -> impl Iterator<Item = Signal> + '_ {
        (0..self.width).map(|line| self.signal(line))
    }

    /// Number of don't-care lines.
    pub fn free_lines(&self) -> usize {
        self.signals().filter(|s| *s == Signal::DontCare).count()
    }

    pub fn enumerate(&self) -> ResultMask {
        enumerate::enumerate(
            self.required_present,
            self.required_absent,
            self.width,
        )
    }
}

impl fmt::Display for TriggerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for signal in self.signals() {
            write!(f, "{signal}")?;
        }
        Ok(())
    }
}

impl FromStr for TriggerPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, SIGNAL_LINES)
    }
}

impl Serialize for TriggerPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TriggerPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: Cow<'de, str> = Deserialize::deserialize(deserializer)?;

        // One symbol per line, so the string length is the width
        let width = s.chars().count();
        if width > MAX_SIGNAL_LINES {
            return Err(D::Error::custom(format!(
                "Trigger configuration has {width} signals, at most {MAX_SIGNAL_LINES} are supported"
            )));
        }

        Self::parse(&s, width).map_err(D::Error::custom)
    }
}
