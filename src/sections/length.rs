//! Length section - awards up to 45 points for password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;

/// Scores password length on a six-step scale.
///
/// Length is measured in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let points = match len {
        0..=7 => 10,
        8..=9 => 20,
        10..=11 => 25,
        12..=15 => 30,
        16..=19 => 40,
        _ => 45,
    };

    let result = SectionResult::points(points);
    if len < MIN_LENGTH {
        return result.with_reason(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    result
}
