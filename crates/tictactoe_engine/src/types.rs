//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A board coordinate as `(row, column)`.
pub type Coord = (usize, usize);

/// One of the two participants in a game.
///
/// The label identifies the player on the board; the color is opaque to the
/// engine and handed back to the presentation layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    label: char,
    color: String,
}

impl Player {
    /// Creates a player with a single-character label and a display color.
    pub fn new(label: char, color: impl Into<String>) -> Self {
        Self {
            label,
            color: color.into(),
        }
    }

    /// The player's board label.
    pub fn label(&self) -> char {
        self.label
    }

    /// The player's display color, uninterpreted by the engine.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A placement of a player's label at a board coordinate.
///
/// A move with no label is the "unplayed" sentinel that fills a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, in `0..board_size`.
    pub row: usize,
    /// Column index, in `0..board_size`.
    pub column: usize,
    /// The placing player's label, or `None` for an unplayed cell.
    pub label: Option<char>,
}

impl Move {
    /// Creates a move placing `label` at `(row, column)`.
    pub fn new(row: usize, column: usize, label: char) -> Self {
        Self {
            row,
            column,
            label: Some(label),
        }
    }

    /// Creates the unplayed sentinel for `(row, column)`.
    pub fn unplayed(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            label: None,
        }
    }

    /// The move's coordinate.
    pub fn coord(&self) -> Coord {
        (self.row, self.column)
    }

    /// True when this cell has not been played.
    pub fn is_unplayed(&self) -> bool {
        self.label.is_none()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label {
            Some(label) => write!(f, "{label} -> ({}, {})", self.row, self.column),
            None => write!(f, "unplayed ({}, {})", self.row, self.column),
        }
    }
}

/// A size × size grid of moves, row-major.
///
/// Out-of-range coordinates are a caller programming error and panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Creates an empty board where every cell holds the unplayed sentinel
    /// for its own coordinate.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |column| Move::unplayed(row, column)))
            .collect();
        Self { size, cells }
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The move recorded at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> &Move {
        &self.cells[self.index(row, column)]
    }

    /// The label at `(row, column)`, or `None` for an unplayed cell.
    pub fn label_at(&self, row: usize, column: usize) -> Option<char> {
        self.get(row, column).label
    }

    /// True when the cell at `(row, column)` has not been played.
    pub fn is_unplayed(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_unplayed()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Move> {
        self.cells.iter()
    }

    /// Writes a move into its cell. Engine-internal: the engine gates this
    /// behind its validation contract.
    pub(crate) fn set(&mut self, mv: Move) {
        let index = self.index(mv.row, mv.column);
        self.cells[index] = mv;
    }

    /// Returns every cell to the unplayed sentinel.
    pub(crate) fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.label = None;
        }
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.size && column < self.size,
            "coordinate ({row}, {column}) out of range for a {0}x{0} board",
            self.size
        );
        row * self.size + column
    }

    /// Formats the board as a human-readable grid, showing each unplayed
    /// cell's ordinal.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for column in 0..self.size {
                match self.label_at(row, column) {
                    Some(label) => out.push(label),
                    None => out.push_str(&(row * self.size + column + 1).to_string()),
                }
                if column + 1 < self.size {
                    out.push('|');
                }
            }
            if row + 1 < self.size {
                out.push('\n');
                for column in 0..self.size {
                    out.push('-');
                    if column + 1 < self.size {
                        out.push('+');
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

/// Current status of the game. Exactly one variant holds at any time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Moves can still be made.
    #[display("in progress")]
    InProgress,
    /// A winning combo was completed by the labeled player.
    #[display("won by {_0}")]
    Won(char),
    /// The board is full with no combo complete.
    #[display("tied")]
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied`; no further moves are accepted until reset.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// An immutable snapshot of the full game state.
///
/// Presentation layers read snapshots; they never hold a mutable copy of
/// engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_combo: Option<Vec<Coord>>,
}

impl GameState {
    pub(crate) fn new(
        board: Board,
        current_player: Player,
        status: GameStatus,
        winning_combo: Option<Vec<Coord>>,
    ) -> Self {
        Self {
            board,
            current_player,
            status,
            winning_combo,
        }
    }

    /// The board at snapshot time.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose label the next accepted move carries.
    pub fn current_player(&self) -> &Player {
        &self.current_player
    }

    /// The game status at snapshot time.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed combo, present exactly when the status is `Won`.
    pub fn winning_combo(&self) -> Option<&[Coord]> {
        self.winning_combo.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_cells_carry_their_own_coordinates() {
        let board = Board::new(3);
        for row in 0..3 {
            for column in 0..3 {
                let cell = board.get(row, column);
                assert_eq!(cell.coord(), (row, column));
                assert!(cell.is_unplayed());
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_panics() {
        let board = Board::new(3);
        board.get(3, 0);
    }

    #[test]
    fn display_shows_labels_and_ordinals() {
        let mut board = Board::new(3);
        board.set(Move::new(0, 0, 'X'));
        board.set(Move::new(1, 1, 'O'));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn status_display_and_terminality() {
        assert_eq!(GameStatus::Won('X').to_string(), "won by X");
        assert!(GameStatus::Won('X').is_terminal());
        assert!(GameStatus::Tied.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
