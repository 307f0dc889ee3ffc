//! TUI application state and logic

use crate::core::{EQUATION_LENGTH, MAX_ATTEMPTS, is_symbol};
use crate::game::{GameSession, GameStatus, SessionError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
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
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Welcome! Guess the hidden equation in six tries.",
            MessageStyle::Info,
        );
        app.announce_target();
        app
    }

    fn announce_target(&mut self) {
        if self.session.config().show_target {
            let text = format!("Target equation: {}", self.session.target());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Append a typed symbol, ignoring anything outside the alphabet
    pub fn push_symbol(&mut self, ch: char) {
        if is_symbol(ch) && self.input_buffer.chars().count() < EQUATION_LENGTH {
            self.input_buffer.push(ch);
        }
    }

    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit_guess(&input) {
            Ok(_) => {
                self.input_buffer.clear();
                match self.session.status() {
                    GameStatus::Won => self.finish_game(true),
                    GameStatus::Lost => self.finish_game(false),
                    GameStatus::Active => {
                        let text = format!(
                            "{} attempts remaining",
                            self.session.remaining_attempts()
                        );
                        self.add_message(&text, MessageStyle::Info);
                    }
                }
            }
            Err(SessionError::Invalid(err)) => {
                let text = if self.session.config().show_errors {
                    format!("Invalid guess: {err}")
                } else {
                    "Invalid guess".to_string()
                };
                self.add_message(&text, MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if won {
            self.stats.games_won += 1;
            let guess_count = self.session.history().len();
            if guess_count <= MAX_ATTEMPTS {
                self.stats.guess_distribution[guess_count] += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let text = format!("You lost. The answer was {}", self.session.target());
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if !self.session.is_game_over() && !self.session.history().is_empty() {
            // Abandoning a game in progress counts as a loss
            self.stats.total_games += 1;
        }

        match self.session.start_new_game() {
            Ok(()) => {
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_target();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if ctrl => app.should_quit = true,
                (_, KeyCode::Char('n')) if ctrl => app.new_game(),
                (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::GameOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Guessing, KeyCode::Char(c)) => app.push_symbol(c),
                (InputMode::Guessing, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Guessing, KeyCode::Enter) => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
