//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::estimate_crack_time;
use crate::sections::{
    SectionResult, character_variety_section, entropy_bits, entropy_section, length_section,
    pattern_analysis_section,
};
use crate::types::{PasswordScore, StrengthResult};

/// Delay before a live evaluation runs, so fast typing only triggers one.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength from the string alone.
///
/// Total and pure: the same input always yields the same result. An empty
/// password maps to [`StrengthResult::no_password`].
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthResult::no_password();
    }

    let mut raw: i64 = 0;
    let mut reasons = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("entropy", entropy_section),
        ("pattern", pattern_analysis_section),
    ];

    for (section_name, section_fn) in sections {
        let SectionResult { points, reasons: found } = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = section_name, points, "section evaluated");
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        raw += points;
        reasons.extend(found);
    }

    let score = PasswordScore::new(raw);
    let entropy = entropy_bits(pwd);

    StrengthResult {
        score,
        label: score.label(),
        entropy,
        crack_time: estimate_crack_time(entropy),
        reasons,
    }
}

/// Debounced evaluation for live input.
///
/// Waits [`EVALUATION_DEBOUNCE`], then evaluates and sends the result. If
/// `token` is cancelled first (the input changed), nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crack_time::CrackTime;
    use crate::types::StrengthLabel;

    fn evaluate(pwd: &str) -> StrengthResult {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.label, StrengthLabel::NoPassword);
        assert_eq!(evaluation.label.to_string(), "No Password");
        assert_eq!(evaluation.entropy, 0.0);
        assert_eq!(evaluation.crack_time.to_string(), "-");
    }

    #[test]
    fn test_evaluate_repeated_lowercase() {
        // length 20 + variety 11 - repeated 10 - letters only 10
        let evaluation = evaluate("aaaaaaaa");
        assert_eq!(evaluation.score.value(), 11);
        assert_eq!(evaluation.label, StrengthLabel::Weak);
        assert_eq!(evaluation.color(), "#ff4444");
        assert_eq!(evaluation.entropy_bits(), 38);
        assert_eq!(evaluation.crack_time, CrackTime::Seconds);
    }

    #[test]
    fn test_evaluate_excellent_password() {
        // length 45 + variety 45 + entropy 20 = 110, clamped
        let evaluation = evaluate("Xk9#mQ2$vR7!pL4@wT6%bN8&");
        assert_eq!(evaluation.score.value(), 100);
        assert_eq!(evaluation.label, StrengthLabel::Excellent);
        assert_eq!(evaluation.entropy_bits(), 153);
        assert_eq!(evaluation.crack_time, CrackTime::Millennia);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_common_word_with_digits() {
        // length 25 + variety 22 - sequence 5
        let evaluation = evaluate("password123");
        assert_eq!(evaluation.score.value(), 42);
        assert!(evaluation.label <= StrengthLabel::Medium);
        assert!(evaluation.reasons.iter().any(|r| r.contains("sequential")));
    }

    #[test]
    fn test_evaluate_pin() {
        // length 10 + variety 11 - digits only 15 - sequence 5
        let evaluation = evaluate("1234");
        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.crack_time, CrackTime::Instantly);
    }

    #[test]
    fn test_evaluate_score_never_negative() {
        let evaluation = evaluate("111");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_evaluate_unrecognized_characters() {
        let evaluation = evaluate("~~ ~ ~");
        assert_eq!(evaluation.entropy, 0.0);
        assert_eq!(evaluation.crack_time, CrackTime::Instantly);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for pwd in ["", "a", "password123", "Tr0ub4dor&3", "Xk9#mQ2$vR7!pL4@wT6%bN8&"] {
            assert_eq!(evaluate(pwd), evaluate(pwd), "password '{}'", pwd);
        }
    }

    #[test]
    fn test_evaluate_longer_never_scores_lower() {
        let base = "Xk9#mQ2$";
        let extensions = ["vR7!", "vR7!pL4@", "vR7!pL4@wT6%", "vR7!pL4@wT6%bN8&zH5^"];
        let mut previous = evaluate(base).score;
        for ext in extensions {
            let longer = format!("{}{}", base, ext);
            let score = evaluate(&longer).score;
            assert!(score >= previous, "'{}' scored lower", longer);
            previous = score;
        }
    }

    #[test]
    fn test_evaluate_generated_passwords() {
        use crate::generator::{GenerationRequest, generate_password_with};
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        // 40 + 45 + 15 before penalties, which total at most 25 here
        let request = GenerationRequest::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let password = generate_password_with(&request, &mut rng).unwrap();
            let evaluation = evaluate_password_strength(&password);
            assert!(evaluation.label >= StrengthLabel::VeryStrong);
            assert_eq!(evaluation.crack_time, CrackTime::Millennia);
        }
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = vec![
            "",
            "a",
            "password",
            "MyPass123!",
            "qwerty",
            "VeryStrongPassword123!@#",
        ];

        for pwd_str in test_passwords {
            let evaluation = evaluate(pwd_str);
            assert!(
                evaluation.score.value() <= 100,
                "Score {} out of bounds for password '{}'",
                evaluation.score.value(),
                pwd_str
            );
            assert_eq!(evaluation.label, if pwd_str.is_empty() {
                StrengthLabel::NoPassword
            } else {
                evaluation.score.label()
            });
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, evaluate_password_strength(&secret("TestPass123!")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("SomePassword123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let started = tokio::time::Instant::now();

        evaluate_password_strength_tx(&secret("abc"), token, tx).await;

        assert!(started.elapsed() >= EVALUATION_DEBOUNCE);
        assert!(rx.recv().await.is_some());
    }
}
