//! Wordle Game
//!
//! A five-letter word guessing game with a TUI, a line mode and an
//! exhaustive audit of the feedback matcher.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{MatchState, compare};
//!
//! let feedback = compare("allot", "books").unwrap();
//! let states: Vec<MatchState> = feedback.states().collect();
//!
//! // Only the first 'o' of BOOKS is credited
//! assert_eq!(states[1], MatchState::PartialMatch);
//! assert_eq!(states[2], MatchState::NoMatch);
//! ```

// Core domain types
pub mod core;

// Round rules and game loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
