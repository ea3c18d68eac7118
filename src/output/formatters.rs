//! Formatting utilities for terminal output

use crate::core::{AnnotatedGuess, MatchState};
use crate::game::GameStatus;

/// Emoji square for a match state
#[must_use]
pub const fn state_emoji(state: MatchState) -> char {
    match state {
        MatchState::NoMatch => '⬜',
        MatchState::PartialMatch => '🟨',
        MatchState::FullMatch => '🟩',
    }
}

/// Format an annotated guess as a row of emoji squares
#[must_use]
pub fn guess_to_emoji(guess: &AnnotatedGuess) -> String {
    guess.states().map(state_emoji).collect()
}

/// Spoiler-free summary of a finished round
///
/// The header reads `3/5` for a win on the third attempt and `X/5` for a
/// loss, followed by one emoji row per guess.
#[must_use]
pub fn share_grid(history: &[AnnotatedGuess], status: GameStatus, max_attempts: usize) -> String {
    let score = match status {
        GameStatus::Won => history.len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{max_attempts}");
    for guess in history {
        grid.push('\n');
        grid.push_str(&guess_to_emoji(guess));
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare;

    #[test]
    fn emoji_all_gray() {
        let guess = compare("crane", "jumpy").unwrap();
        assert_eq!(guess_to_emoji(&guess), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_green() {
        let guess = compare("crane", "crane").unwrap();
        assert_eq!(guess_to_emoji(&guess), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let guess = compare("abbey", "ebbed").unwrap();
        assert_eq!(guess_to_emoji(&guess), "⬜🟩🟩🟩⬜");
    }

    #[test]
    fn share_grid_win() {
        let history = vec![
            compare("crane", "slate").unwrap(),
            compare("crane", "crane").unwrap(),
        ];
        assert_eq!(
            share_grid(&history, GameStatus::Won, 5),
            "Wordle 2/5\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_loss() {
        let history = vec![compare("crane", "jumpy").unwrap()];
        assert_eq!(share_grid(&history, GameStatus::Lost, 5), "Wordle X/5\n⬜⬜⬜⬜⬜");
    }
}
