//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::alphabet::KEYBOARD_ROWS;
use crate::core::{KeyState, Mark};
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(4),                          // Messages
            Constraint::Length(3),                       // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 W O R D L E 🟨")
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

fn tile_style(mark: Option<Mark>) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Exact) => style.fg(Color::Black).bg(Color::Green),
        Some(Mark::Elsewhere) => style.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Exact => tile_style(Some(Mark::Exact)),
        KeyState::Elsewhere => tile_style(Some(Mark::Elsewhere)),
        KeyState::Absent => Style::default().fg(Color::DarkGray),
        KeyState::Unused => Style::default().fg(Color::White),
    }
}

/// One row of tiles; letters past the end of `guess` are blank tiles
fn board_row(guess: &str, marks: Option<&[Mark]>, width: usize) -> Line<'static> {
    let letters: Vec<char> = guess.chars().collect();
    let spans: Vec<Span> = (0..width)
        .map(|i| {
            let letter = letters.get(i).copied().unwrap_or('_');
            let mark = marks.and_then(|m| m.get(i).copied());
            Span::styled(format!(" {letter} "), tile_style(mark))
        })
        .flat_map(|tile| [tile, Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let rows: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|attempt| {
            let verdict = game.verdict(attempt);
            let mut row = board_row(
                &game.guesses()[attempt],
                verdict.map(|v| v.marks()),
                game.word_length(),
            );
            if attempt == game.attempt() && !game.is_finished() {
                row.spans.push(Span::styled(
                    if app.is_validating() { " ⏳" } else { " ◀" },
                    Style::default().fg(Color::Cyan),
                ));
            }
            row
        })
        .collect();

    let title = match game.revealed_target() {
        Some(target) if game.is_won() => format!(" Solved: {target} "),
        Some(target) => format!(" The word was {target} "),
        None if game.is_rejected() => " Please enter a valid word! ".to_string(),
        None => " Board ".to_string(),
    };
    let border = if game.is_rejected() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let board = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    Span::styled(format!(" {letter} "), key_style(app.game.key_state(letter)))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts_text = format!("Attempts left: {}", app.tries_left());
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.is_finished() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | ^H: Hint | ^N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
