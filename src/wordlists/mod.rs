//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary and loaders for
//! custom word files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
