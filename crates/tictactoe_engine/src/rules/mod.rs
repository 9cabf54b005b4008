//! Win and tie rules over a board.

mod combos;
mod draw;
mod win;

pub use combos::winning_combos;
pub use draw::board_full;
pub use win::winning_line;
