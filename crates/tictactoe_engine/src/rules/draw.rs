//! Tie detection logic.

use crate::types::Board;
use tracing::instrument;

/// Checks whether every cell carries a label.
///
/// A full board with no winning line is a tie.
#[instrument(skip_all)]
pub fn board_full(board: &Board) -> bool {
    board.cells().all(|cell| cell.label.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!board_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(Move::new(1, 1, 'X'));
        assert!(!board_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2);
        for row in 0..2 {
            for column in 0..2 {
                board.set(Move::new(row, column, 'X'));
            }
        }
        assert!(board_full(&board));
    }
}
