//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::{CharacterClass, Composition};

const POINTS_PER_CLASS: i64 = 11;
const ALL_CLASSES_BONUS: i64 = 1;

/// Awards 11 points per character class present, plus 1 when all four are.
///
/// Missing classes are reported as a reason.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let composition = Composition::of(password.expose_secret());
    let count = composition.class_count();

    let mut points = count as i64 * POINTS_PER_CLASS;
    if count == CharacterClass::ALL.len() {
        points += ALL_CLASSES_BONUS;
    }

    let missing: Vec<_> = composition.missing().map(CharacterClass::name).collect();
    let result = SectionResult::points(points);
    if !missing.is_empty() {
        return result.with_reason(format!("Missing: {}", missing.join(", ")));
    }
    result
}
