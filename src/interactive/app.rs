//! TUI application state and logic

use crate::core::{MatchState, WORD_LENGTH, Word};
use crate::game::{Game, GameConfig, GameStatus, parse_guess};
use crate::output::share_grid;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Per-session results; index `n` of the distribution counts wins in `n` guesses
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, status: GameStatus, attempts: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            self.current_streak += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        } else {
            self.current_streak = 0;
        }
    }
}

impl<'a> App<'a> {
    /// Start a session with a random first secret
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary is empty.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let secret = dictionary
            .choose_secret(&mut rng)
            .context("Dictionary has no five-letter words")?
            .clone();

        Ok(Self::with_secret(dictionary, config, secret, rng))
    }

    /// Start a session with a known first secret
    #[must_use]
    pub fn with_secret(
        dictionary: &'a Dictionary,
        config: GameConfig,
        secret: Word,
        rng: StdRng,
    ) -> Self {
        Self {
            dictionary,
            config,
            game: Game::new(secret, config),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the word in {} tries. Esc quits.",
                    config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_input(&mut self) {
        let guess = match parse_guess(&self.input_buffer, self.dictionary) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Err(e) = self.game.submit(guess) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        self.input_buffer.clear();

        if self.game.is_over() {
            self.finish_round();
        } else {
            let remaining = self.game.attempts_remaining();
            self.add_message(
                &format!(
                    "{remaining} {} left",
                    if remaining == 1 { "try" } else { "tries" }
                ),
                MessageStyle::Info,
            );
        }
    }

    fn finish_round(&mut self) {
        let status = self.game.status();
        let attempts = self.game.attempts_used();
        self.stats.record(status, attempts);
        self.input_mode = InputMode::RoundOver;

        if status == GameStatus::Won {
            self.add_message(
                &format!(
                    "You win! Solved in {attempts} {}.",
                    if attempts == 1 { "guess" } else { "guesses" }
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!(
                    "Better luck next time! The correct answer was {}",
                    self.game.secret().text().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }

        log::debug!(
            "{}",
            share_grid(self.game.history(), status, self.config.max_attempts)
        );
        self.add_message("Enter for a new game, q to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        let Some(secret) = self.dictionary.choose_secret(&mut self.rng).cloned() else {
            self.add_message("Dictionary is empty!", MessageStyle::Error);
            return;
        };

        self.game = Game::new(secret, self.config);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Strongest state seen so far for each guessed letter
    #[must_use]
    pub fn keyboard_states(&self) -> FxHashMap<char, MatchState> {
        let mut states: FxHashMap<char, MatchState> = FxHashMap::default();
        for letter in self.game.history().iter().flatten() {
            let entry = states.entry(letter.character()).or_default();
            *entry = (*entry).max(letter.state());
        }
        states
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("Terminal session failed")
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
