//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use tictactoe_engine::GameStatus;

pub use board::CellMap;

/// The engine treats colors as opaque names; the terminal interprets them.
fn color_from_name(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        _ => Color::White,
    }
}

/// Status text takes the relevant player's color, as the original display
/// did: the mover in progress, the winner after a win.
fn status_color(app: &App) -> Color {
    let engine = app.engine();
    match engine.status() {
        GameStatus::InProgress => color_from_name(engine.current_player().color()),
        GameStatus::Won(_) => engine
            .winner()
            .map(|player| color_from_name(player.color()))
            .unwrap_or(Color::Yellow),
        GameStatus::Tied => Color::Yellow,
    }
}

/// Draws the main UI and records the frame's cell hit map.
pub fn draw(f: &mut Frame, app: &App, cells: &mut CellMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app, cells);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(status_color(app)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: move | Enter: place | Click: place | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_falls_back_to_white() {
        assert_eq!(color_from_name("red"), Color::Red);
        assert_eq!(color_from_name("papyrus"), Color::White);
    }
}
