//! Seams between the round driver and the outside world

use super::session::GameStatus;
use crate::core::{AnnotatedGuess, Word};
use crate::wordlists::Dictionary;
use std::io;

/// Supplies guesses for a round
pub trait GuessSource {
    /// Block until a valid dictionary word is available
    ///
    /// Retry policy for malformed or unknown input belongs to the
    /// implementation. Returns `Ok(None)` when input is exhausted or the
    /// player quits.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying input.
    fn next_guess(&mut self, dictionary: &Dictionary) -> io::Result<Option<Word>>;
}

/// Shows the state of a round
pub trait Presenter {
    /// Draw every annotated guess so far, oldest first
    ///
    /// # Errors
    /// Returns any I/O error from the output surface.
    fn render(&mut self, history: &[AnnotatedGuess]) -> io::Result<()>;

    /// Show a one-line message such as a rejected guess
    ///
    /// # Errors
    /// Returns any I/O error from the output surface.
    fn notice(&mut self, text: &str) -> io::Result<()>;

    /// Announce the end of a round
    ///
    /// # Errors
    /// Returns any I/O error from the output surface.
    fn conclude(&mut self, status: GameStatus, secret: &Word, attempts: usize) -> io::Result<()>;
}
