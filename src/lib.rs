//! Two-player tic-tac-toe with an egui grid interface
//!
//! The game logic is a small state machine: a fixed 3x3 board, win and
//! draw detection over the 8 possible lines, and turn switching. The GUI
//! is a thin view that calls [`game::GameState::apply_move`] on cell
//! clicks and re-renders from the state each frame.
//!
//! # Architecture
//!
//! - [`board`]: board representation (`Board`, `Cell`, `Player`, `Pos`)
//! - [`rules`]: win and draw detection
//! - [`game`]: the `GameState` aggregate and its transitions
//! - [`ui`]: egui/eframe presentation layer
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Player, Pos};
//!
//! let mut game = GameState::new();
//! game.apply_move(Pos::new(0, 0)); // X
//! game.apply_move(Pos::new(1, 1)); // O
//! assert_eq!(game.status, GameStatus::InProgress);
//! assert_eq!(game.current_player, Player::X);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use game::{GameState, GameStatus};
