//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{AnnotatedLetter, MatchState, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn state_color(state: MatchState) -> Color {
    match state {
        MatchState::NoMatch => Color::White,
        MatchState::PartialMatch => Color::Yellow,
        MatchState::FullMatch => Color::Green,
    }
}

fn cell(letter: &AnnotatedLetter) -> Span<'static> {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(state_color(letter.state()));
    if letter.state() == MatchState::FullMatch {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(
        format!(" {} ", letter.character().to_ascii_uppercase()),
        style,
    )
}

fn blank_cell(c: Option<char>) -> Span<'static> {
    let text = c.map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
    Span::styled(text, Style::default().fg(Color::White))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();

    // Two lines per row; scroll so the row being typed stays on screen
    let visible = (usize::from(area.height.saturating_sub(2)) / 2).max(1);
    let shown = app.config.max_attempts.min(visible);
    let first = (history.len() + 1)
        .saturating_sub(shown)
        .min(app.config.max_attempts - shown);

    let mut lines = Vec::new();
    for row in first..first + shown {
        let spans: Vec<Span> = if let Some(guess) = history.get(row) {
            guess.iter().flat_map(|l| [cell(l), Span::raw(" ")]).collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| [blank_cell(typed.get(i).copied()), Span::raw(" ")])
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.keyboard_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = states.get(&c).map_or_else(
                        || Style::default().fg(Color::White),
                        |&state| match state {
                            MatchState::NoMatch => Style::default().fg(Color::DarkGray),
                            _ => Style::default().fg(Color::Black).bg(state_color(state)),
                        },
                    );
                    Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Enter for new game, q to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt: {}/{}",
        app.game.attempts_used(),
        app.config.max_attempts
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!("Streak: {}", app.stats.current_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | Enter: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, compare_words};
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn state_colors_are_distinct() {
        assert_eq!(state_color(MatchState::FullMatch), Color::Green);
        assert_eq!(state_color(MatchState::PartialMatch), Color::Yellow);
        assert_ne!(
            state_color(MatchState::NoMatch),
            state_color(MatchState::PartialMatch)
        );
    }

    #[test]
    fn full_match_cell_is_bold_green() {
        let annotated = compare_words(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        let span = cell(&annotated.letters()[0]);
        assert_eq!(span.content, " C ");
        assert_eq!(span.style.bg, Some(Color::Green));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn no_match_shares_line_mode_white() {
        assert_eq!(state_color(MatchState::NoMatch), Color::White);
    }

    #[test]
    fn board_rows_fit_the_area() {
        let dict = Dictionary::new(words_from_slice(&["crane", "slate"]));
        let config = GameConfig {
            max_attempts: usize::MAX,
            allow_repeats: true,
        };
        let mut app = App::with_secret(
            &dict,
            config,
            Word::new("crane").unwrap(),
            StdRng::seed_from_u64(3),
        );
        for _ in 0..12 {
            for c in "slate".chars() {
                app.push_char(c);
            }
            app.submit_input();
        }
        assert_eq!(app.game.history().len(), 12);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains(" S "));
        assert!(text.contains(" _ "), "row being typed is visible");
    }

    #[test]
    fn draws_board_and_status() {
        let dict = Dictionary::new(words_from_slice(&["crane", "slate"]));
        let mut app = App::with_secret(
            &dict,
            GameConfig::default(),
            Word::new("crane").unwrap(),
            StdRng::seed_from_u64(3),
        );
        for c in "slate".chars() {
            app.push_char(c);
        }
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("WORDLE"));
        assert!(text.contains(" S "));
        assert!(text.contains("Attempt: 1/5"));
        assert!(text.contains("Games: 0"));
    }
}
