//! TUI application state and logic

use crate::game::{RoundController, RoundState};
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
    pub controller: RoundController,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
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

/// Rounds finished in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl Statistics {
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }
}

impl App {
    #[must_use]
    pub fn new(controller: RoundController) -> Self {
        let config = controller.config();
        let prompt = format!(
            "Enter your guess ({} colors): {}",
            config.code_length(),
            config.palette().listing()
        );

        Self {
            controller,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! A hidden code has been chosen.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: prompt,
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Append a typed character, upper-cased, up to the code length
    pub fn push_char(&mut self, c: char) {
        if c.is_control() || c.is_whitespace() {
            return;
        }
        if self.input_buffer.chars().count() < self.controller.config().code_length() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.controller.submit_raw(&input) {
            Ok(submission) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("Guess: {} -> {}", input.to_uppercase(), submission.hint),
                    MessageStyle::Info,
                );
                match submission.state {
                    RoundState::InProgress => {}
                    RoundState::Won => {
                        self.stats.rounds_won += 1;
                        self.input_mode = InputMode::RoundOver;
                        self.add_message(
                            "Congratulations! You guessed the correct code.",
                            MessageStyle::Success,
                        );
                        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                    }
                    RoundState::Lost => {
                        self.stats.rounds_lost += 1;
                        self.input_mode = InputMode::RoundOver;
                        let hidden = self
                            .controller
                            .reveal_hidden_sequence()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Game over! The secret code was: {hidden}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                    }
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.controller.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started! A new code has been chosen.", MessageStyle::Info);
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

    if let Err(err) = res {
        log::error!("TUI terminated: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n' | 'N') | KeyCode::Enter => app.new_round(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) => app.push_char(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_input(),
                        KeyCode::Esc => app.new_round(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
