//! Single comparison command
//!
//! Evaluates one guess against one secret without any dictionary rules.

use crate::core::{AnnotatedGuess, CompareError, compare};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: String,
    pub annotated: AnnotatedGuess,
}

/// Compare a guess to a secret
///
/// Both inputs are lowercased and trimmed; any length is accepted as long
/// as the two match.
///
/// # Errors
///
/// Returns `CompareError::LengthMismatch` if the lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, CompareError> {
    let secret = secret.trim().to_lowercase();
    let guess = guess.trim().to_lowercase();
    let annotated = compare(&secret, &guess)?;

    Ok(CheckResult { secret, annotated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchState;

    #[test]
    fn check_normalizes_input() {
        let result = check_guess(" SPEED ", "Erase").unwrap();
        assert_eq!(result.secret, "speed");
        assert_eq!(result.annotated.word(), "erase");
        assert_eq!(result.annotated.count(MatchState::PartialMatch), 3);
    }

    #[test]
    fn check_accepts_other_lengths() {
        let result = check_guess("banana", "bandit").unwrap();
        assert_eq!(result.annotated.len(), 6);
        assert_eq!(result.annotated.count(MatchState::FullMatch), 3);
    }

    #[test]
    fn check_rejects_length_mismatch() {
        assert!(matches!(
            check_guess("ab", "abc"),
            Err(CompareError::LengthMismatch {
                secret_len: 2,
                guess_len: 3
            })
        ));
    }
}
