//! Flag and ALU rules.
//!
//! The defaults reproduce the simplified rules the core has always used.
//! `Behavior::nmos()` switches every rule to what NMOS silicon does.

use serde::{Deserialize, Serialize};

/// How the negative flag is derived from a register write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeRule {
    /// Set only when the whole byte is `$FF`.
    #[default]
    FullByte,
    /// Set when bit 7 is set.
    Bit7,
}

impl NegativeRule {
    #[must_use]
    pub const fn is_negative(self, value: u8) -> bool {
        match self {
            Self::FullByte => value == 0xFF,
            Self::Bit7 => value & 0x80 != 0,
        }
    }
}

/// How ADC/SBC derive the overflow flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowRule {
    /// Set when bit 7 of the accumulator differs before and after.
    #[default]
    AccumulatorSignChange,
    /// Two's-complement signed overflow.
    Signed,
}

/// What ADC commits when the sum exceeds `$FF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SumRule {
    /// Clamp to `$FF`.
    #[default]
    Saturate,
    /// Keep the low 8 bits.
    Wrap,
}

/// Rule set a `Chip6502` executes with.
///
/// Missing fields deserialize to their defaults, so a config only needs to
/// name the rules it changes:
///
/// ```json
/// { "negative": "bit7" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub negative: NegativeRule,
    pub overflow: OverflowRule,
    pub sum: SumRule,
}

impl Behavior {
    /// Hardware-accurate NMOS 6502 rules.
    #[must_use]
    pub const fn nmos() -> Self {
        Self {
            negative: NegativeRule::Bit7,
            overflow: OverflowRule::Signed,
            sum: SumRule::Wrap,
        }
    }
}
