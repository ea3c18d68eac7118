//! Colored terminal rendering
//!
//! Fixed mapping: no match on white, partial match on yellow, full match on
//! green.

use super::formatters::guess_to_emoji;
use crate::core::{AnnotatedGuess, AnnotatedLetter, MatchState, Word};
use crate::game::{GameStatus, Presenter};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Paint one letter cell with its state's background
#[must_use]
pub fn paint(letter: &AnnotatedLetter) -> ColoredString {
    let cell = format!(" {} ", letter.character().to_uppercase()).black();
    match letter.state() {
        MatchState::NoMatch => cell.on_white(),
        MatchState::PartialMatch => cell.on_yellow(),
        MatchState::FullMatch => cell.on_green().bold(),
    }
}

/// A full guess as one colored row
#[must_use]
pub fn format_row(guess: &AnnotatedGuess) -> String {
    guess.iter().map(|l| paint(l).to_string()).collect()
}

/// Line-oriented presenter writing to any `Write`
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one plain line
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, history: &[AnnotatedGuess]) -> io::Result<()> {
        writeln!(self.out)?;
        for guess in history {
            writeln!(self.out, "{}", format_row(guess))?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.yellow())
    }

    fn conclude(&mut self, status: GameStatus, secret: &Word, attempts: usize) -> io::Result<()> {
        match status {
            GameStatus::Won => {
                let noun = if attempts == 1 { "guess" } else { "guesses" };
                writeln!(
                    self.out,
                    "{} Solved in {attempts} {noun}.",
                    "You win!".green().bold()
                )
            }
            GameStatus::Lost => writeln!(
                self.out,
                "Better luck next time! The correct answer was {}",
                secret.text().to_uppercase().bright_yellow().bold()
            ),
            GameStatus::InProgress => Ok(()),
        }
    }
}

/// Print the result of a single secret/guess check
pub fn print_check_result(secret: &str, result: &AnnotatedGuess) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}  Guess: {}",
        secret.to_uppercase().bright_yellow().bold(),
        result.word().to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", format_row(result));
    println!("  {}\n", guess_to_emoji(result));

    for (i, letter) in result.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            letter.character().to_uppercase(),
            letter.state()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare;

    // Colors depend on the terminal; compare text with escapes removed
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn rendered(presenter: TerminalPresenter<Vec<u8>>) -> String {
        strip_ansi(&String::from_utf8(presenter.into_inner()).unwrap())
    }

    #[test]
    fn row_shows_uppercase_cells() {
        let guess = compare("crane", "slate").unwrap();
        assert_eq!(strip_ansi(&format_row(&guess)), " S  L  A  T  E ");
    }

    #[test]
    fn render_writes_every_row() {
        let history = vec![
            compare("crane", "slate").unwrap(),
            compare("crane", "crane").unwrap(),
        ];
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.render(&history).unwrap();

        let text = rendered(presenter);
        let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(rows, vec![" S  L  A  T  E ", " C  R  A  N  E "]);
    }

    #[test]
    fn conclude_messages() {
        let secret = Word::new("crane").unwrap();

        let mut won = TerminalPresenter::new(Vec::new());
        won.conclude(GameStatus::Won, &secret, 3).unwrap();
        assert_eq!(rendered(won), "You win! Solved in 3 guesses.\n");

        let mut lost = TerminalPresenter::new(Vec::new());
        lost.conclude(GameStatus::Lost, &secret, 5).unwrap();
        assert_eq!(
            rendered(lost),
            "Better luck next time! The correct answer was CRANE\n"
        );
    }

    #[test]
    fn notice_is_written() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.notice("That word is not in our dictionary.").unwrap();
        assert_eq!(rendered(presenter), "That word is not in our dictionary.\n");
    }
}
