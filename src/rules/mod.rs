//! Game rules for tic-tac-toe
//!
//! - Win condition: three marks of one player on any of the 8 lines
//! - Draw condition: fully occupied board with no winning line

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::is_draw;
pub use win::{has_win, winning_line, LINES};
