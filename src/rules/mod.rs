//! Game rules for free-style Gomoku
//!
//! Five or more in a row wins. There are no captures and no forbidden
//! moves; any empty cell is a legal placement.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_at_pos, winning_line, WIN_LENGTH};
