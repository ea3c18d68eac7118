//! State of one round
//!
//! A [`Game`] owns the secret and the history of annotated guesses, and
//! decides when the round is won or lost.

use super::config::GameConfig;
use crate::core::{AnnotatedGuess, Word, WordError, compare_words};
use crate::wordlists::Dictionary;
use std::fmt;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reasons a guess is not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not a well-formed five-letter word
    InvalidWord(WordError),
    /// Well-formed but not in the dictionary
    NotInDictionary(String),
    /// Already guessed this round and repeats are disabled
    RepeatedGuess(String),
    /// The round has already been won or lost
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(WordError::InvalidLength(_)) => {
                write!(f, "Please enter a 5 letter word.")
            }
            Self::InvalidWord(e) => write!(f, "{e}."),
            Self::NotInDictionary(_) => write!(f, "That word is not in our dictionary."),
            Self::RepeatedGuess(word) => {
                write!(f, "You already tried {}.", word.to_uppercase())
            }
            Self::GameOver => write!(f, "The round is over."),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// Validate raw input against the dictionary
///
/// Input is trimmed and case-normalized before lookup.
///
/// # Errors
/// Returns `GuessError::InvalidWord` for malformed input and
/// `GuessError::NotInDictionary` for unknown words.
pub fn parse_guess(input: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
    let word = Word::new(input.trim())?;
    if dictionary.contains(word.text()) {
        Ok(word)
    } else {
        Err(GuessError::NotInDictionary(word.text().to_string()))
    }
}

/// One round: a secret, the guesses so far and the rules
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    config: GameConfig,
    history: Vec<AnnotatedGuess>,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub const fn new(secret: Word, config: GameConfig) -> Self {
        Self {
            secret,
            config,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Evaluate a guess and append it to the history
    ///
    /// # Errors
    /// Returns `GuessError::GameOver` once the round has ended, and
    /// `GuessError::RepeatedGuess` for a repeat when repeats are disabled.
    pub fn submit(&mut self, guess: Word) -> Result<&AnnotatedGuess, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        if !self.config.allow_repeats && self.already_guessed(&guess) {
            return Err(GuessError::RepeatedGuess(guess.text().to_string()));
        }

        let annotated = compare_words(&self.secret, &guess);
        self.history.push(annotated);

        self.status = if guess == self.secret {
            GameStatus::Won
        } else if self.history.len() >= self.config.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        log::debug!(
            "Attempt {}/{}: {} -> {:?}",
            self.history.len(),
            self.config.max_attempts,
            guess,
            self.status
        );

        Ok(&self.history[self.history.len() - 1])
    }

    fn already_guessed(&self, guess: &Word) -> bool {
        self.history.iter().any(|g| g.word() == guess.text())
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[AnnotatedGuess] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }
}
