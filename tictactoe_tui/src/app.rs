//! Application state and the engine-driving control flow.

use crossterm::event::KeyCode;
use tictactoe_engine::{Coord, GameEngine, Move, Player};
use tracing::debug;

use crate::input;

/// Main application state: the engine plus everything presentational.
pub struct App {
    engine: GameEngine,
    cursor: Coord,
    status: String,
}

impl App {
    /// Creates a fresh game between the given players.
    pub fn new(players: [Player; 2]) -> Self {
        let engine = GameEngine::new(players);
        let status = format!("Ready? {} goes first.", engine.current_player().label());
        Self {
            engine,
            cursor: (0, 0),
            status,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The keyboard selection cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// The status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Moves the selection cursor in response to an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key, self.engine.size());
    }

    /// Plays at the cursor position.
    pub fn play_at_cursor(&mut self) {
        self.play(self.cursor);
    }

    /// Handles one move request: validate, apply, then read the outcome.
    ///
    /// The turn only toggles when the game continues; a winning move leaves
    /// the winner as the current player.
    pub fn play(&mut self, (row, column): Coord) {
        let mv = Move::new(row, column, self.engine.current_player().label());
        if !self.engine.is_valid_move(&mv) {
            debug!(%mv, "ignoring invalid move");
            return;
        }
        self.engine.apply_move(mv);
        if self.engine.is_tied() {
            self.status = "Tied Game! Press 'r' to play again.".to_string();
        } else if self.engine.has_winner() {
            self.status = format!(
                "Player {} won! Press 'r' to play again.",
                self.engine.current_player().label()
            );
        } else {
            self.engine.toggle_current_player();
            self.status = format!("{}'s turn", self.engine.current_player().label());
        }
    }

    /// Starts a fresh game on the same board.
    pub fn reset(&mut self) {
        debug!("resetting board");
        self.engine.reset();
        self.cursor = (0, 0);
        self.status = format!("Ready? {} goes first.", self.engine.current_player().label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new([Player::new('X', "red"), Player::new('O', "green")])
    }

    #[test]
    fn test_play_toggles_and_updates_status() {
        let mut app = app();
        app.play((0, 0));
        assert_eq!(app.engine().current_player().label(), 'O');
        assert_eq!(app.status(), "O's turn");
    }

    #[test]
    fn test_invalid_move_changes_nothing() {
        let mut app = app();
        app.play((0, 0));
        let status = app.status().to_string();
        app.play((0, 0));
        assert_eq!(app.engine().current_player().label(), 'O');
        assert_eq!(app.status(), status);
    }

    #[test]
    fn test_win_keeps_the_winner_current() {
        let mut app = app();
        for coord in [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2)] {
            app.play(coord);
        }
        assert!(app.engine().has_winner());
        assert_eq!(app.engine().current_player().label(), 'X');
        assert_eq!(app.status(), "Player X won! Press 'r' to play again.");
    }

    #[test]
    fn test_no_moves_accepted_after_the_win() {
        let mut app = app();
        for coord in [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2)] {
            app.play(coord);
        }
        app.play((1, 1));
        assert!(app.engine().board().is_unplayed(1, 1));
    }

    #[test]
    fn test_reset_restores_the_opening_state() {
        let mut app = app();
        app.play((1, 1));
        app.reset();
        assert!(app.engine().board().cells().all(|cell| cell.is_unplayed()));
        assert_eq!(app.engine().current_player().label(), 'X');
        assert_eq!(app.cursor(), (0, 0));
        assert_eq!(app.status(), "Ready? X goes first.");
    }
}
