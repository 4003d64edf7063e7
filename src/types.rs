//! Result types produced by the strength evaluator.

use std::fmt;

use crate::crack_time::CrackTime;

/// Composite strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Clamps a raw point total into the valid range.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        match self.0 {
            90.. => StrengthLabel::Excellent,
            75..=89 => StrengthLabel::VeryStrong,
            60..=74 => StrengthLabel::Strong,
            40..=59 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }
}

/// Human-facing strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    NoPassword,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Excellent,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No Password",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }

    /// Display color (CSS hex) for this label.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "#cccccc",
            StrengthLabel::Weak => "#ff4444",
            StrengthLabel::Medium => "#ff8800",
            StrengthLabel::Strong => "#ffbb33",
            StrengthLabel::VeryStrong => "#7cb342",
            StrengthLabel::Excellent => "#00c851",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthResult {
    pub score: PasswordScore,
    pub label: StrengthLabel,
    /// Estimated bits of entropy, unrounded.
    pub entropy: f64,
    pub crack_time: CrackTime,
    /// Findings reported by the scoring sections.
    pub reasons: Vec<String>,
}

impl StrengthResult {
    /// Result for an empty password.
    pub fn no_password() -> Self {
        Self {
            score: PasswordScore::default(),
            label: StrengthLabel::NoPassword,
            entropy: 0.0,
            crack_time: CrackTime::NotApplicable,
            reasons: vec!["No password provided".to_string()],
        }
    }

    /// Entropy rounded to whole bits, for display.
    pub fn entropy_bits(&self) -> u32 {
        self.entropy.round() as u32
    }

    pub fn color(&self) -> &'static str {
        self.label.color()
    }
}
