//! Board rendering and the screen-to-board cell map.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_engine::{Coord, GameEngine};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Screen-space locations of board cells for mouse hit testing.
///
/// One instance per event loop, rebuilt from the current layout on every
/// frame, so resets and terminal resizes never leave a stale mapping.
#[derive(Debug, Default)]
pub struct CellMap {
    cells: Vec<(Rect, Coord)>,
}

impl CellMap {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn record(&mut self, rect: Rect, coord: Coord) {
        self.cells.push((rect, coord));
    }

    /// Finds the board coordinate under a screen position.
    pub fn hit(&self, x: u16, y: u16) -> Option<Coord> {
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|&(_, coord)| coord)
    }
}

/// Renders the board grid and fills the cell map for this frame.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, cells: &mut CellMap) {
    cells.clear();

    let size = app.engine().size() as u16;
    let width = size * CELL_WIDTH + (size - 1);
    let height = size * CELL_HEIGHT + (size - 1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(size, CELL_HEIGHT))
        .split(board_area);

    for row in 0..size as usize {
        if row > 0 {
            render_row_separator(f, rows[2 * row - 1]);
        }
        render_row(f, rows[2 * row], app, row, cells);
    }
}

/// Alternating cell and single-line separator constraints.
fn grid_constraints(size: u16, cell_extent: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(2 * size as usize - 1);
    for i in 0..size {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(cell_extent));
    }
    constraints
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize, cells: &mut CellMap) {
    let size = app.engine().size() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(grid_constraints(size, CELL_WIDTH))
        .split(area);

    for column in 0..size as usize {
        if column > 0 {
            render_column_separator(f, columns[2 * column - 1]);
        }
        render_cell(f, columns[2 * column], app, (row, column), cells);
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, coord: Coord, cells: &mut CellMap) {
    cells.record(area, coord);

    let engine = app.engine();
    let (row, column) = coord;
    let winning = engine
        .winning_combo()
        .is_some_and(|combo| combo.contains(&coord));

    let (text, mut style) = match engine.board().label_at(row, column) {
        Some(label) => (
            label.to_string(),
            Style::default()
                .fg(player_color(engine, label))
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            (row * engine.size() + column + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if winning {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if app.cursor() == coord {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Maps a cell label to its owning player's color.
fn player_color(engine: &GameEngine, label: char) -> Color {
    engine
        .players()
        .iter()
        .find(|player| player.label() == label)
        .map(|player| super::color_from_name(player.color()))
        .unwrap_or(Color::White)
}

fn render_row_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_column_separator(f: &mut Frame, area: Rect) {
    let line = vec!["│"; area.height as usize].join("\n");
    let sep = Paragraph::new(line)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_map_hit_testing() {
        let mut cells = CellMap::default();
        cells.record(Rect::new(0, 0, 5, 3), (0, 0));
        cells.record(Rect::new(6, 0, 5, 3), (0, 1));
        assert_eq!(cells.hit(2, 1), Some((0, 0)));
        assert_eq!(cells.hit(7, 2), Some((0, 1)));
        assert_eq!(cells.hit(5, 0), None);
        cells.clear();
        assert_eq!(cells.hit(2, 1), None);
    }

    #[test]
    fn test_grid_constraints_interleave_separators() {
        let constraints = grid_constraints(3, 3);
        assert_eq!(
            constraints,
            vec![
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
        );
    }
}
