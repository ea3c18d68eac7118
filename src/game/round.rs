//! Round driver
//!
//! Pulls guesses from a [`GuessSource`] until the round ends, re-rendering
//! the whole history through a [`Presenter`] after every accepted guess.

use super::interfaces::{GuessSource, Presenter};
use super::session::{Game, GameStatus};
use crate::wordlists::Dictionary;
use std::io;

/// Play one round to completion
///
/// Returns the final status. `InProgress` means the source ran dry before
/// the round ended; nothing is concluded in that case.
///
/// # Errors
/// Returns the first I/O error raised by the source or presenter.
pub fn play_round<G, P>(
    game: &mut Game,
    source: &mut G,
    presenter: &mut P,
    dictionary: &Dictionary,
) -> io::Result<GameStatus>
where
    G: GuessSource + ?Sized,
    P: Presenter + ?Sized,
{
    while !game.is_over() {
        let Some(guess) = source.next_guess(dictionary)? else {
            log::info!("Guess source exhausted after {} attempts", game.attempts_used());
            return Ok(game.status());
        };

        if let Err(e) = game.submit(guess) {
            presenter.notice(&e.to_string())?;
            continue;
        }

        presenter.render(game.history())?;
    }

    presenter.conclude(game.status(), game.secret(), game.attempts_used())?;
    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnnotatedGuess, Word};
    use crate::game::GameConfig;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<&'static str>);

    impl GuessSource for Scripted {
        fn next_guess(&mut self, dictionary: &Dictionary) -> io::Result<Option<Word>> {
            Ok(self.0.pop_front().and_then(|s| dictionary.lookup(s).cloned()))
        }
    }

    #[derive(Default)]
    struct Recorder {
        renders: Vec<usize>,
        notices: Vec<String>,
        concluded: Option<(GameStatus, String, usize)>,
    }

    impl Presenter for Recorder {
        fn render(&mut self, history: &[AnnotatedGuess]) -> io::Result<()> {
            self.renders.push(history.len());
            Ok(())
        }

        fn notice(&mut self, text: &str) -> io::Result<()> {
            self.notices.push(text.to_string());
            Ok(())
        }

        fn conclude(&mut self, status: GameStatus, secret: &Word, attempts: usize) -> io::Result<()> {
            self.concluded = Some((status, secret.text().to_string(), attempts));
            Ok(())
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "crane", "slate", "audio", "books", "speed", "erase",
        ]))
    }

    fn scripted(guesses: &[&'static str]) -> Scripted {
        Scripted(guesses.iter().copied().collect())
    }

    #[test]
    fn round_won() {
        let dict = dictionary();
        let mut game = Game::new(Word::new("crane").unwrap(), GameConfig::default());
        let mut source = scripted(&["slate", "crane", "audio"]);
        let mut presenter = Recorder::default();

        let status = play_round(&mut game, &mut source, &mut presenter, &dict).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(presenter.renders, vec![1, 2]);
        assert_eq!(
            presenter.concluded,
            Some((GameStatus::Won, "crane".to_string(), 2))
        );
        // The third scripted guess is never consumed
        assert_eq!(source.0.len(), 1);
    }

    #[test]
    fn round_lost_after_max_attempts() {
        let dict = dictionary();
        let mut game = Game::new(Word::new("crane").unwrap(), GameConfig::default());
        let mut source = scripted(&["slate", "audio", "books", "speed", "erase"]);
        let mut presenter = Recorder::default();

        let status = play_round(&mut game, &mut source, &mut presenter, &dict).unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(presenter.renders, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            presenter.concluded,
            Some((GameStatus::Lost, "crane".to_string(), 5))
        );
    }

    #[test]
    fn exhausted_source_leaves_round_open() {
        let dict = dictionary();
        let mut game = Game::new(Word::new("crane").unwrap(), GameConfig::default());
        let mut source = scripted(&["slate"]);
        let mut presenter = Recorder::default();

        let status = play_round(&mut game, &mut source, &mut presenter, &dict).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        assert!(presenter.concluded.is_none());
    }

    #[test]
    fn rejected_repeat_is_noticed_not_counted() {
        let dict = dictionary();
        let config = GameConfig::new().with_repeats(false);
        let mut game = Game::new(Word::new("crane").unwrap(), config);
        let mut source = scripted(&["slate", "slate", "crane"]);
        let mut presenter = Recorder::default();

        let status = play_round(&mut game, &mut source, &mut presenter, &dict).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(presenter.notices, vec!["You already tried SLATE.".to_string()]);
        assert_eq!(game.attempts_used(), 2);
    }
}
