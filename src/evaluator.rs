//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

use crate::score::{StrengthEvaluation, StrengthScore};
use crate::sections::CHECKS;

/// Evaluates password strength and returns the score with the unmet checks.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthEvaluation` whose score is the number of passed checks.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    let mut passed: u8 = 0;
    let mut unmet = Vec::new();

    // Orchestrator: execute checks in sequence
    for (check_name, check_fn) in CHECKS {
        if check_fn(password) {
            passed += 1;
        } else {
            unmet.push(check_name);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("strength check '{}' evaluated", check_name);
    }

    StrengthEvaluation {
        score: StrengthScore::new(passed),
        unmet,
    }
}

/// Shorthand for the score alone.
pub fn score_password(password: &SecretString) -> StrengthScore {
    evaluate_password_strength(password).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::StrengthLabel;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_lowercase_eight() {
        let evaluation = evaluate_password_strength(&secret("abcdefgh"));
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(evaluation.label(), StrengthLabel::Weak);
        assert_eq!(
            evaluation.unmet,
            vec![
                "at least 12 characters",
                "at least 16 characters",
                "an uppercase letter",
                "a number",
                "a symbol",
            ]
        );
    }

    #[test]
    fn test_evaluate_mixed_case_digits() {
        let evaluation = evaluate_password_strength(&secret("Abcdefgh12"));
        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.label(), StrengthLabel::Fair);
    }

    #[test]
    fn test_evaluate_all_classes_fifteen() {
        let evaluation = evaluate_password_strength(&secret("Abc123!@#XYZ456"));
        assert_eq!(evaluation.score.value(), 6);
        assert_eq!(evaluation.label(), StrengthLabel::Good);
        assert_eq!(evaluation.unmet, vec!["at least 16 characters"]);
    }

    #[test]
    fn test_evaluate_strong() {
        let evaluation = evaluate_password_strength(&secret("Abc123!@#XYZ456?"));
        assert_eq!(evaluation.score.value(), 7);
        assert_eq!(evaluation.label(), StrengthLabel::Strong);
        assert!(evaluation.unmet.is_empty());
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password_strength(&secret(""));
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.unmet.len(), 7);
    }

    #[test]
    fn test_score_never_decreases_when_a_check_is_added() {
        // Each step satisfies one more check than the previous one.
        let ladder = [
            "",
            "abcdefgh",
            "abcdefghijkl",
            "abcdefghijklmnop",
            "Abcdefghijklmnop",
            "Abcdefghijklmno1",
            "Abcdefghijklmn1!",
        ];
        let scores: Vec<u8> = ladder.iter().map(|p| score_password(&secret(p)).value()).collect();
        assert_eq!(scores, vec![0, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_score_boundaries() {
        for pwd in ["", "a", "!!!!!!!!!!!!!!!!!!!!!!!!", "aA1!aA1!aA1!aA1!aA1!aA1!aA1!aA1!"] {
            assert!(score_password(&secret(pwd)).value() <= 7);
        }
    }
}
