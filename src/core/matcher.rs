//! Guess evaluation against a secret word
//!
//! Annotation is a two-pass reconciliation over a letter-frequency multiset:
//!
//! 1. First pass: mark every exact position match as full and remove it
//!    from the pool of unmatched secret letters
//! 2. Second pass: walk the remaining positions left to right and mark a
//!    letter as partial only while the pool still holds that letter
//!
//! The first pass must finish before the second starts. Reserving exact
//! matches up front is what stops a repeated guess letter from being
//! reported as present more often than the secret contains it.

use super::feedback::{AnnotatedGuess, AnnotatedLetter, MatchState};
use super::word::Word;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Error returned when a secret and guess cannot be compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Secret and guess differ in length
    LengthMismatch { secret_len: usize, guess_len: usize },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                secret_len,
                guess_len,
            } => write!(
                f,
                "Guess has {guess_len} letters but the secret has {secret_len}"
            ),
        }
    }
}

impl std::error::Error for CompareError {}

/// Compute the match state of every guess position
///
/// Works over any letter type, so callers can compare bytes, chars or
/// other symbols. Equal-length empty inputs produce an empty result.
///
/// # Errors
/// Returns `CompareError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::core::{MatchState, match_states};
///
/// let states = match_states(b"abbey", b"ebbed").unwrap();
/// assert_eq!(
///     states,
///     vec![
///         MatchState::NoMatch,
///         MatchState::FullMatch,
///         MatchState::FullMatch,
///         MatchState::FullMatch,
///         MatchState::NoMatch,
///     ]
/// );
/// ```
pub fn match_states<T>(secret: &[T], guess: &[T]) -> Result<Vec<MatchState>, CompareError>
where
    T: Copy + Eq + Hash,
{
    if secret.len() != guess.len() {
        return Err(CompareError::LengthMismatch {
            secret_len: secret.len(),
            guess_len: guess.len(),
        });
    }

    let mut remaining: FxHashMap<T, usize> = FxHashMap::default();
    for &letter in secret {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    Ok(reconcile(secret, guess, remaining))
}

/// Both passes over a pre-built multiset. Lengths are already equal.
fn reconcile<T, C>(secret: &[T], guess: &[T], mut remaining: FxHashMap<T, C>) -> Vec<MatchState>
where
    T: Copy + Eq + Hash,
    C: Copy + PartialOrd + From<u8> + std::ops::SubAssign,
{
    let zero = C::from(0);
    let one = C::from(1);
    let mut states = vec![MatchState::NoMatch; guess.len()];

    // First pass: exact positions
    for (i, (&s, &g)) in secret.iter().zip(guess).enumerate() {
        if s == g {
            states[i] = MatchState::FullMatch;
            if let Some(count) = remaining.get_mut(&s) {
                *count -= one;
            }
        }
    }

    // Second pass: leftovers, left to right
    for (state, &g) in states.iter_mut().zip(guess) {
        if *state == MatchState::FullMatch {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > zero
        {
            *state = MatchState::PartialMatch;
            *count -= one;
        }
    }

    states
}

/// Annotate a guess string against a secret string, character by character
///
/// No case normalization is performed.
///
/// # Errors
/// Returns `CompareError::LengthMismatch` if the character counts differ.
///
/// # Examples
/// ```
/// use wordle_game::core::{MatchState, compare};
///
/// let result = compare("allot", "books").unwrap();
/// assert_eq!(result.word(), "books");
/// assert_eq!(result.count(MatchState::PartialMatch), 1);
///
/// assert!(compare("ab", "abc").is_err());
/// ```
pub fn compare(secret: &str, guess: &str) -> Result<AnnotatedGuess, CompareError> {
    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    let states = match_states(&secret, &guess)?;
    Ok(annotate(guess.into_iter(), states))
}

/// Annotate one word against another
///
/// Both sides are [`Word`]s, so the lengths always agree and no error path
/// exists.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, compare_words};
///
/// let secret = Word::new("crane").unwrap();
/// assert!(compare_words(&secret, &secret).is_solved());
/// ```
#[must_use]
pub fn compare_words(secret: &Word, guess: &Word) -> AnnotatedGuess {
    let states = reconcile(secret.chars(), guess.chars(), secret.letter_counts());
    annotate(guess.chars().iter().map(|&b| char::from(b)), states)
}

fn annotate(letters: impl Iterator<Item = char>, states: Vec<MatchState>) -> AnnotatedGuess {
    AnnotatedGuess::from_letters(
        letters
            .zip(states)
            .map(|(c, s)| AnnotatedLetter::new(c, s))
            .collect(),
    )
}
