//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and
//! contributes points (positive or negative) to the final score.

mod entropy;
mod length;
mod pattern;
mod variety;

pub use entropy::{entropy_bits, entropy_section};
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// Contribution of a single section to the overall score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResult {
    /// Points added (or, when negative, deducted).
    pub points: i64,
    /// Findings worth reporting to the user.
    pub reasons: Vec<String>,
}

impl SectionResult {
    pub fn points(points: i64) -> Self {
        Self {
            points,
            reasons: Vec::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }
}
