//! Tic-tac-toe game engine: move validation, win and tie detection, and
//! turn alternation over a square grid.
//!
//! The engine is a synchronous, single-threaded state machine. A
//! presentation layer feeds it candidate [`Move`]s and reads back state,
//! either through accessors or as a [`GameState`] snapshot:
//!
//! ```
//! use tictactoe_engine::{GameEngine, Move, Player};
//!
//! let mut engine = GameEngine::new([
//!     Player::new('X', "red"),
//!     Player::new('O', "green"),
//! ]);
//!
//! let mv = Move::new(0, 0, engine.current_player().label());
//! assert!(engine.is_valid_move(&mv));
//! engine.apply_move(mv);
//! engine.toggle_current_player();
//! assert_eq!(engine.current_player().label(), 'O');
//! ```
//!
//! Validation, application, and turn alternation are deliberately separate
//! calls: the caller gates `apply_move` on `is_valid_move`, and does not
//! toggle the turn after a winning move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod rules;
mod types;

pub use engine::{DEFAULT_BOARD_SIZE, GameEngine};
pub use types::{Board, Coord, GameState, GameStatus, Move, Player};
