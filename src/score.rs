//! Strength score, label and meter types.

use std::fmt;

pub const MAX_SCORE: u8 = 7;

/// Number of passed strength checks, always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Builds a score, clamping anything above 7.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        match self.0 {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5..=6 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    /// Width of the meter fill, `score / 7 * 100`.
    pub fn fill_percent(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SCORE) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    pub fn color(&self) -> MeterColor {
        match self {
            StrengthLabel::Weak => MeterColor::Red,
            StrengthLabel::Fair => MeterColor::Yellow,
            StrengthLabel::Good => MeterColor::Blue,
            StrengthLabel::Strong => MeterColor::Green,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill color of the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterColor {
    Red,
    Yellow,
    Blue,
    Green,
}

/// Result of a strength evaluation: the score and the checks that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    pub unmet: Vec<&'static str>,
}

impl StrengthEvaluation {
    pub fn label(&self) -> StrengthLabel {
        self.score.label()
    }
}
