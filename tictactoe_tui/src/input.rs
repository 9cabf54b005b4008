//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Coord;

/// Moves the cursor one cell, clamped to the board edges.
pub fn move_cursor((row, column): Coord, key: KeyCode, size: usize) -> Coord {
    match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(size - 1), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(size - 1)),
        _ => (row, column),
    }
}
