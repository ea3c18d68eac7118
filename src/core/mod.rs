//! Core domain types for the game
//!
//! Words, match feedback and the matcher itself. Everything here is pure:
//! no I/O, no shared state.

mod feedback;
mod matcher;
mod word;

pub use feedback::{AnnotatedGuess, AnnotatedLetter, MatchState};
pub use matcher::{CompareError, compare, compare_words, match_states};
pub use word::{WORD_LENGTH, Word, WordError};
