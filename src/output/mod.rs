//! Terminal output formatting
//!
//! Colored rows, emoji grids and the line-mode presenter.

pub mod display;
pub mod formatters;

pub use display::{TerminalPresenter, print_check_result};
pub use formatters::{guess_to_emoji, share_grid};
