//! TUI rendering with ratatui
//!
//! Board, history and status panels for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Marker;
use crate::game::RoundState;
use crate::output::formatters::hint_pins;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Terminal color for a peg symbol
#[must_use]
pub const fn symbol_color(symbol: char) -> Color {
    match symbol {
        'R' => Color::Red,
        'G' => Color::Green,
        'B' => Color::Blue,
        'Y' => Color::Yellow,
        'O' => Color::Rgb(255, 165, 0),
        'P' => Color::Magenta,
        _ => Color::White,
    }
}

fn peg_span(symbol: char) -> Span<'static> {
    Span::styled(
        format!("{symbol} "),
        Style::default()
            .fg(symbol_color(symbol))
            .add_modifier(Modifier::BOLD),
    )
}

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
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
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
    let controller = &app.controller;
    let config = controller.config();

    let mut rows: Vec<ListItem> = controller
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(attempt.guess().symbols().iter().map(|&s| peg_span(s)));
            spans.push(Span::raw("│ "));
            spans.extend(attempt.hint().markers().iter().map(|marker| match *marker {
                Marker::Exact(symbol) => peg_span(symbol),
                Marker::Blank => Span::styled(
                    format!("{} ", marker.as_char()),
                    Style::default().fg(Color::DarkGray),
                ),
            }));
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(
                hint_pins(attempt.hint()),
                Style::default().fg(Color::White),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    // Empty slots for the attempts still available
    let used = controller.attempts().len();
    if controller.state() == RoundState::InProgress {
        for i in 0..controller.remaining_attempts() as usize {
            let slots = "○ ".repeat(config.code_length());
            rows.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", used + i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(slots, Style::default().fg(Color::DarkGray)),
            ])));
        }
    }

    if let Some(hidden) = controller.reveal_hidden_sequence() {
        let mut spans = vec![Span::styled(
            "Code: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )];
        spans.extend(hidden.symbols().iter().map(|&s| peg_span(s)));
        rows.push(ListItem::new(Line::from(spans)));
    }

    let board = List::new(rows).block(
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
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Palette
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_palette(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.controller.remaining_attempts();
    let max = app.controller.config().max_attempts();
    let ratio = f64::from(remaining) / f64::from(max);

    let color = match ratio {
        r if r > 0.5 => Color::Green,
        r if r > 0.2 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.controller.config().palette();
    let pegs: Vec<Span> = palette.symbols().iter().map(|&s| peg_span(s)).collect();

    let content = vec![
        Line::from(pegs),
        Line::from(Span::styled(
            "● exact  ○ partial  · miss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
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
    let (title, color) = match (app.input_mode, app.controller.state()) {
        (InputMode::RoundOver, RoundState::Won) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new round or 'q' to quit ".to_string(),
            Color::Green,
        ),
        (InputMode::RoundOver, _) => (
            " GAME OVER | Press 'n' for new round or 'q' to quit ".to_string(),
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            format!(
                " Enter your guess ({} colors) | Enter: Submit | Esc: New round ",
                app.controller.config().code_length()
            ),
            Color::Yellow,
        ),
    };

    let content = match app.input_mode {
        InputMode::Guessing => app
            .input_buffer
            .chars()
            .map(peg_span)
            .collect::<Vec<_>>(),
        InputMode::RoundOver => Vec::new(),
    };

    let input = Paragraph::new(Line::from(content)).block(
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

    let state_text = format!("Round: {}", app.controller.state().name());
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Won: {} | Lost: {}",
        app.stats.rounds_won, app.stats.rounds_lost
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!("Guesses: {}", app.controller.attempts().len());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round",
        InputMode::Guessing => "Ctrl-C: Quit | Esc: New Round",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
