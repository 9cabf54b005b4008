//! The game engine: a deterministic state machine over a square grid.

use crate::rules;
use crate::types::{Board, Coord, GameState, GameStatus, Move, Player};
use tracing::{debug, instrument};

/// Standard tic-tac-toe board size.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Owns all mutable game state: the board, the two players, whose turn it
/// is, and the winning combo once one completes.
///
/// The engine is synchronous and single-threaded; it is meant to be driven
/// from one event handler at a time. Callers follow a fixed protocol:
///
/// 1. gate every mutation on [`is_valid_move`](Self::is_valid_move),
/// 2. [`apply_move`](Self::apply_move) when valid,
/// 3. read [`is_tied`](Self::is_tied) / [`has_winner`](Self::has_winner),
/// 4. [`toggle_current_player`](Self::toggle_current_player) only when the
///    game continues.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: usize,
    combos: Vec<Vec<Coord>>,
    winning_combo: Option<Vec<Coord>>,
}

impl GameEngine {
    /// Creates an engine over the standard 3x3 board. The first player in
    /// the array starts.
    pub fn new(players: [Player; 2]) -> Self {
        Self::with_size(players, DEFAULT_BOARD_SIZE)
    }

    /// Creates an engine over a size × size board.
    ///
    /// Winning combos (every row, every column, both diagonals) are
    /// precomputed here and never change for the life of the engine.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or the two player labels collide.
    #[instrument]
    pub fn with_size(players: [Player; 2], size: usize) -> Self {
        assert!(
            players[0].label() != players[1].label(),
            "player labels must be distinct"
        );
        Self {
            board: Board::new(size),
            players,
            current: 0,
            combos: rules::winning_combos(size),
            winning_combo: None,
        }
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose label the next accepted move carries.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// True when the game has no winner yet and the target cell is
    /// unplayed.
    ///
    /// Permissive contract: the move's label is not checked against the
    /// current player. Callers stamp moves with
    /// [`current_player`](Self::current_player)'s label themselves.
    ///
    /// # Panics
    ///
    /// Panics if the move's coordinate is out of range; that is a caller
    /// programming error, not a rejectable move.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.has_winner() && self.board.is_unplayed(mv.row, mv.column)
    }

    /// Writes a move into the board and scans for a completed line.
    ///
    /// The cell is overwritten without re-validation, so callers must gate
    /// on [`is_valid_move`](Self::is_valid_move). Combos are scanned in
    /// enumeration order (rows, columns, diagonals) and the first completed
    /// line is recorded; once a winner is recorded it is never replaced.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mv: Move) {
        self.board.set(mv);
        if self.winning_combo.is_none() {
            if let Some(combo) = rules::winning_line(&self.board, &self.combos) {
                debug!(?combo, "winning line completed");
                self.winning_combo = Some(combo.to_vec());
            }
        }
    }

    /// True once a winning combo has completed. Terminal until
    /// [`reset`](Self::reset).
    pub fn has_winner(&self) -> bool {
        self.winning_combo.is_some()
    }

    /// The completed combo's coordinates, present exactly when
    /// [`has_winner`](Self::has_winner) is true.
    pub fn winning_combo(&self) -> Option<&[Coord]> {
        self.winning_combo.as_deref()
    }

    /// The player who completed the winning combo, if any.
    pub fn winner(&self) -> Option<&Player> {
        let combo = self.winning_combo.as_deref()?;
        let (row, column) = combo[0];
        let label = self
            .board
            .label_at(row, column)
            .expect("winning combo cells are uniformly labeled");
        self.players.iter().find(|player| player.label() == label)
    }

    /// True when the board is full with no winner.
    pub fn is_tied(&self) -> bool {
        !self.has_winner() && rules::board_full(&self.board)
    }

    /// Switches the turn to the other player.
    ///
    /// Strict 2-cycle via round-robin index arithmetic, independent of any
    /// other state. Callers do not toggle after a winning move, so the
    /// winner remains the current player in the terminal state.
    #[instrument(skip(self))]
    pub fn toggle_current_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(player = %self.current_player(), "turn toggled");
    }

    /// Clears the board and the winner, returning to the in-progress state.
    ///
    /// The first player becomes current again, so every game starts under
    /// the same conditions. (The reference behavior left the turn wherever
    /// the last game ended; restoring it is a deliberate choice here.)
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.board.clear();
        self.winning_combo = None;
        self.current = 0;
    }

    /// Derives the game status. Exactly one of in-progress, won, or tied
    /// holds at any time.
    pub fn status(&self) -> GameStatus {
        if let Some(combo) = &self.winning_combo {
            let (row, column) = combo[0];
            let label = self
                .board
                .label_at(row, column)
                .expect("winning combo cells are uniformly labeled");
            GameStatus::Won(label)
        } else if rules::board_full(&self.board) {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Takes an immutable snapshot of the full state for a presentation
    /// layer.
    pub fn state(&self) -> GameState {
        GameState::new(
            self.board.clone(),
            self.current_player().clone(),
            self.status(),
            self.winning_combo.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::new([Player::new('X', "red"), Player::new('O', "green")])
    }

    #[test]
    fn test_first_player_starts() {
        assert_eq!(engine().current_player().label(), 'X');
    }

    #[test]
    #[should_panic(expected = "labels must be distinct")]
    fn test_duplicate_labels_rejected() {
        GameEngine::new([Player::new('X', "red"), Player::new('X', "green")]);
    }

    #[test]
    fn test_apply_does_not_revalidate() {
        // The documented contract: an ungated apply overwrites the cell.
        let mut engine = engine();
        engine.apply_move(Move::new(0, 0, 'X'));
        engine.apply_move(Move::new(0, 0, 'O'));
        assert_eq!(engine.board().label_at(0, 0), Some('O'));
    }

    #[test]
    fn test_mismatched_label_is_still_valid() {
        // Permissive contract: label is the caller's responsibility.
        let engine = engine();
        assert_eq!(engine.current_player().label(), 'X');
        assert!(engine.is_valid_move(&Move::new(0, 0, 'O')));
    }

    #[test]
    fn test_recorded_winner_is_never_replaced() {
        let mut engine = engine();
        for column in 0..3 {
            engine.apply_move(Move::new(1, column, 'X'));
        }
        assert_eq!(
            engine.winning_combo(),
            Some([(1, 0), (1, 1), (1, 2)].as_slice())
        );
        // A contract-violating apply after the win must not promote an
        // earlier combo in enumeration order.
        for column in 0..3 {
            engine.apply_move(Move::new(0, column, 'X'));
        }
        assert_eq!(
            engine.winning_combo(),
            Some([(1, 0), (1, 1), (1, 2)].as_slice())
        );
    }

    #[test]
    fn test_winner_lookup() {
        let mut engine = engine();
        for column in 0..3 {
            engine.apply_move(Move::new(0, column, 'O'));
        }
        let winner = engine.winner().expect("game is won");
        assert_eq!(winner.label(), 'O');
        assert_eq!(winner.color(), "green");
    }
}
