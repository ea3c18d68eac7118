//! Game loop
//!
//! Round state, rules and the traits that connect a round to an input
//! source and an output surface.

mod config;
mod interfaces;
mod round;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use interfaces::{GuessSource, Presenter};
pub use round::play_round;
pub use session::{Game, GameStatus, GuessError, parse_guess};
