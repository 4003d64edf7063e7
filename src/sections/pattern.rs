//! Pattern analysis section - detects repetitive, sequential and keyboard patterns.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const REPEATED_PENALTY: i64 = 10;
const ONLY_DIGITS_PENALTY: i64 = 15;
const ONLY_LETTERS_PENALTY: i64 = 10;
const SEQUENCE_PENALTY: i64 = 5;
const KEYBOARD_PENALTY: i64 = 10;

const SEQUENCES: [&str; 2] = ["abcdefghijklmnopqrstuvwxyz", "123456789"];
const KEYBOARD_WALKS: [&str; 5] = ["qwerty", "asdf", "zxcv", "1qaz", "2wsx"];

/// Analyzes password for weak patterns.
///
/// Every detected pattern deducts points independently, so penalties stack.
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let mut result = SectionResult::default();
    if pwd.is_empty() {
        return result;
    }

    if has_repeated_run(pwd) {
        result.points -= REPEATED_PENALTY;
        result = result.with_reason("Password contains repetitive patterns");
    }

    if pwd.chars().all(|c| c.is_ascii_digit()) {
        result.points -= ONLY_DIGITS_PENALTY;
        result = result.with_reason("Password contains only numbers");
    }

    if pwd.chars().all(|c| c.is_ascii_alphabetic()) {
        result.points -= ONLY_LETTERS_PENALTY;
        result = result.with_reason("Password contains only letters");
    }

    let lowered = pwd.to_lowercase();

    if has_ascending_sequence(&lowered) {
        result.points -= SEQUENCE_PENALTY;
        result = result.with_reason("Password contains sequential patterns");
    }

    if KEYBOARD_WALKS.iter().any(|walk| lowered.contains(walk)) {
        result.points -= KEYBOARD_PENALTY;
        result = result.with_reason("Password contains keyboard patterns");
    }

    result
}

/// Same character three or more times in a row (e.g. "aaa").
fn has_repeated_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= 3 {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// Any three-character window of a known ascending sequence ("abc", "789").
fn has_ascending_sequence(lowered: &str) -> bool {
    SEQUENCES.iter().any(|sequence| {
        (0..=sequence.len() - 3).any(|i| lowered.contains(&sequence[i..i + 3]))
    })
}
