//! Simple line-based game mode
//!
//! Plays rounds over stdin/stdout without the TUI.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameStatus, GuessSource, parse_guess, play_round};
use crate::output::{TerminalPresenter, share_grid};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Guess source reading one guess per line
///
/// Re-prompts until the line is a dictionary word. `quit`, `exit` and end
/// of input end the round.
pub struct LineGuessSource<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineGuessSource<R, W> {
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> GuessSource for LineGuessSource<R, W> {
    fn next_guess(&mut self, dictionary: &Dictionary) -> io::Result<Option<Word>> {
        loop {
            write!(self.prompt_out, "Guess a word: ")?;
            self.prompt_out.flush()?;

            let Some(input) = self.read_line()? else {
                writeln!(self.prompt_out)?;
                return Ok(None);
            };

            if matches!(input.to_lowercase().as_str(), "quit" | "exit") {
                return Ok(None);
            }

            match parse_guess(&input, dictionary) {
                Ok(word) => return Ok(Some(word)),
                Err(e) => writeln!(self.prompt_out, "{e}")?,
            }
        }
    }
}

/// Play one round in line mode
///
/// # Errors
///
/// Returns an error if the dictionary is empty or on I/O failure.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut R,
) -> Result<GameStatus> {
    let secret = dictionary
        .choose_secret(rng)
        .context("Dictionary has no five-letter words")?
        .clone();

    println!(
        "Guess the {}-letter word in {} attempts. Type 'quit' to give up.",
        crate::core::WORD_LENGTH,
        config.max_attempts
    );

    let stdin = io::stdin();
    let mut source = LineGuessSource::new(stdin.lock(), io::stdout());
    let mut presenter = TerminalPresenter::stdout();

    play_simple_round(secret, config, dictionary, &mut source, &mut presenter)
}

/// Drive a round against explicit input/output, printing the share grid at
/// the end of a finished round
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_simple_round<R: BufRead, W: Write, O: Write>(
    secret: Word,
    config: GameConfig,
    dictionary: &Dictionary,
    source: &mut LineGuessSource<R, W>,
    presenter: &mut TerminalPresenter<O>,
) -> Result<GameStatus> {
    let mut game = Game::new(secret, config);
    let status = play_round(&mut game, source, presenter, dictionary)
        .context("Failed while playing round")?;

    let summary = if status == GameStatus::InProgress {
        format!(
            "Round abandoned. The correct answer was {}",
            game.secret().text().to_uppercase()
        )
    } else {
        format!("\n{}\n", share_grid(game.history(), status, config.max_attempts))
    };
    presenter
        .line(&summary)
        .context("Failed to write round summary")?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "slate", "audio", "books"]))
    }

    fn source(input: &str) -> LineGuessSource<Cursor<Vec<u8>>, Vec<u8>> {
        LineGuessSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn prompts(source: LineGuessSource<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(source.into_parts().1).unwrap()
    }

    #[test]
    fn reads_valid_guess() {
        let mut source = source("crane\n");
        let guess = source.next_guess(&dictionary()).unwrap();
        assert_eq!(guess, Some(Word::new("crane").unwrap()));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let mut source = source("  SLATE  \n");
        let guess = source.next_guess(&dictionary()).unwrap();
        assert_eq!(guess.map(|w| w.text().to_string()), Some("slate".to_string()));
    }

    #[test]
    fn reprompts_on_bad_length() {
        let mut source = source("cat\ncrane\n");
        let guess = source.next_guess(&dictionary()).unwrap();
        assert!(guess.is_some());

        let out = prompts(source);
        assert!(out.contains("Please enter a 5 letter word."));
        assert_eq!(out.matches("Guess a word: ").count(), 2);
    }

    #[test]
    fn reprompts_on_unknown_word() {
        let mut source = source("zebra\naudio\n");
        let guess = source.next_guess(&dictionary()).unwrap();
        assert_eq!(guess.map(|w| w.text().to_string()), Some("audio".to_string()));
        assert!(prompts(source).contains("That word is not in our dictionary."));
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut source = source("cat\n");
        assert_eq!(source.next_guess(&dictionary()).unwrap(), None);
    }

    #[test]
    fn quit_yields_none() {
        let mut source = source("QUIT\ncrane\n");
        assert_eq!(source.next_guess(&dictionary()).unwrap(), None);
    }

    #[test]
    fn full_round_from_script() {
        let dict = dictionary();
        let mut source = source("slate\nnope\ncrane\n");
        let mut presenter = TerminalPresenter::new(Vec::new());

        let status = play_simple_round(
            Word::new("crane").unwrap(),
            GameConfig::default(),
            &dict,
            &mut source,
            &mut presenter,
        )
        .unwrap();

        assert_eq!(status, GameStatus::Won);
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("You win!"));
        assert!(output.contains("Wordle 2/5"));
    }

    #[test]
    fn quitting_mid_round_reveals_secret() {
        let dict = dictionary();
        let mut source = source("slate\nquit\n");
        let mut presenter = TerminalPresenter::new(Vec::new());

        let status = play_simple_round(
            Word::new("crane").unwrap(),
            GameConfig::default(),
            &dict,
            &mut source,
            &mut presenter,
        )
        .unwrap();

        assert_eq!(status, GameStatus::InProgress);
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("Round abandoned. The correct answer was CRANE"));
        assert!(!output.contains("Better luck next time!"));
    }

    #[test]
    fn lost_round_reveals_secret() {
        let dict = dictionary();
        let mut source = source("slate\naudio\n");
        let mut presenter = TerminalPresenter::new(Vec::new());

        let status = play_simple_round(
            Word::new("crane").unwrap(),
            GameConfig::new().with_max_attempts(2),
            &dict,
            &mut source,
            &mut presenter,
        )
        .unwrap();

        assert_eq!(status, GameStatus::Lost);
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("The correct answer was"));
        assert!(output.contains("CRANE"));
    }
}
