//! Presentation of a [`ResultMask`] for the trigger logic unit.
//!
//! The unit takes the mask as two 32-bit registers, so this is the only
//! place the mask gets split.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::mask::ResultMask;
use crate::pattern::TriggerPattern;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A 32-bit register value, printed as 8 uppercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HexWord(pub u32);

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl fmt::Debug for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{self}")
    }
}

impl Serialize for HexWord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskReport {
    config: TriggerPattern,
    low: HexWord,
    high: HexWord,
    matches: usize,
    #[serde(skip)]
    words: Vec<u32>,
}

impl MaskReport {
    pub fn new(pattern: &TriggerPattern, mask: &ResultMask) -> Self {
        let words = words(mask);

        Self {
            config: *pattern,
            low: HexWord(words[0]),
            high: HexWord(words.get(1).copied().unwrap_or(0)),
            matches: mask.count_ones(),
            words,
        }
    }

    pub fn config(&self) -> &TriggerPattern {
        &self.config
    }

    /// Combinations 0 to 31.
    pub fn low(&self) -> u32 {
        self.low.0
    }

    /// Combinations 32 to 63.
    pub fn high(&self) -> u32 {
        self.high.0
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    /// All 32-bit words of the mask, least significant first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn render(&self, format: OutputFormat) -> eyre::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for MaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trigger Config: {}", self.config)?;
        writeln!(f)?;
        writeln!(f, "Trigger Masks:")?;
        writeln!(f, "Low : {}", self.low)?;
        write!(f, "High: {}", self.high)
    }
}

fn words(mask: &ResultMask) -> Vec<u32> {
    let words: Vec<u32> = mask
        .as_raw_slice()
        .iter()
        .flat_map(|&word| [word as u32, (word >> 32) as u32])
        .collect();

    // A mask of up to 32 combinations still fills a whole u64
    let used = mask.len().div_ceil(32);
    words[..used].to_vec()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use test_case::test_case;

    use super::*;

    fn report(config: &str) -> MaskReport {
        let pattern: TriggerPattern = config.parse().unwrap();
        MaskReport::new(&pattern, &pattern.enumerate())
    }

    #[test_case("XX1110" => (0xF000_0000, 0x0000_0000))]
    #[test_case("XXXXXX" => (0xFFFF_FFFF, 0xFFFF_FFFF))]
    #[test_case("111111" => (0x0000_0000, 0x8000_0000))]
    #[test_case("000000" => (0x0000_0001, 0x0000_0000))]
    #[test_case("XXXXX1" => (0x0000_0000, 0xFFFF_FFFF) ; "last line present")]
    #[test_case("XXXXX0" => (0xFFFF_FFFF, 0x0000_0000) ; "last line absent")]
    #[test_case("1XXXXX" => (0xAAAA_AAAA, 0xAAAA_AAAA) ; "first line present")]
    fn low_and_high(config: &str) -> (u32, u32) {
        let report = report(config);

        (report.low(), report.high())
    }

    #[test]
    fn text_output() -> eyre::Result<()> {
        let expected = indoc! {"
            Trigger Config: XX1110

            Trigger Masks:
            Low : F0000000
            High: 00000000"
        };

        similar_asserts::assert_eq!(
            report("XX1110").render(OutputFormat::Text)?,
            expected
        );

        Ok(())
    }

    #[test]
    fn json_output() -> eyre::Result<()> {
        let rendered = report("111111").render(OutputFormat::Json)?;

        assert_eq!(
            rendered,
            r#"{"config":"111111","low":"00000000","high":"80000000","matches":1}"#
        );

        Ok(())
    }

    #[test]
    fn narrow_mask_has_single_word() -> eyre::Result<()> {
        let pattern = TriggerPattern::parse("1X", 2)?;
        let report = MaskReport::new(&pattern, &pattern.enumerate());

        assert_eq!(report.words(), &[0b1010]);
        assert_eq!(report.low(), 0b1010);
        assert_eq!(report.high(), 0);

        Ok(())
    }

    #[test]
    fn wide_mask_keeps_every_word() -> eyre::Result<()> {
        let pattern = TriggerPattern::parse("XXXXXX1", 7)?;
        let report = MaskReport::new(&pattern, &pattern.enumerate());

        assert_eq!(report.words(), &[0, 0, u32::MAX, u32::MAX]);
        assert_eq!(report.matches(), 64);

        Ok(())
    }

    #[test_case("text" => OutputFormat::Text)]
    #[test_case("json" => OutputFormat::Json)]
    fn output_format_from_str(s: &str) -> OutputFormat {
        s.parse().unwrap()
    }

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
