//! Entropy section - bonus points for high estimated entropy.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::Composition;

/// Estimated entropy in bits: `length * log2(observed charset size)`.
///
/// A password made only of unrecognized characters has an observed
/// charset of zero and is credited with zero bits.
pub fn entropy_bits(password: &str) -> f64 {
    let charset = Composition::of(password).charset_size();
    if charset == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(charset).log2()
}

/// Awards up to 20 points on a four-step entropy scale.
pub fn entropy_section(password: &SecretString) -> SectionResult {
    let bits = entropy_bits(password.expose_secret());
    let points = if bits >= 128.0 {
        20
    } else if bits >= 100.0 {
        15
    } else if bits >= 80.0 {
        10
    } else if bits >= 60.0 {
        5
    } else {
        0
    };
    SectionResult::points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus(pwd: &str) -> i64 {
        entropy_section(&SecretString::new(pwd.to_string().into())).points
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(entropy_bits(""), 0.0);
        assert!((entropy_bits("1234") - 4.0 * 10f64.log2()).abs() < 1e-9);
        assert!((entropy_bits("aB3!") - 4.0 * 82f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_bits_unknown_charset() {
        assert_eq!(entropy_bits("   ~~~"), 0.0);
    }

    #[test]
    fn test_entropy_section_steps() {
        // 8 lowercase: ~37.6 bits
        assert_eq!(bonus("qhxmvtrk"), 0);
        // 13 lowercase: ~61.1 bits
        assert_eq!(bonus("qhxmvtrkpwzjn"), 5);
        // 14 mixed-case + digits: 14 * log2(62) ~ 83.4 bits
        assert_eq!(bonus("Qh7mVt2kPw9jNr"), 10);
        // 16 chars, four classes: 16 * log2(82) ~ 101.7 bits
        assert_eq!(bonus("Qh7#Vt2kPw9jN$rx"), 15);
        // 24 chars, four classes: ~152.6 bits
        assert_eq!(bonus("Xk9#mQ2$vR7!pL4@wT6%bN8&"), 20);
    }
}
