//! Game state machine
//!
//! [`GameState`] owns the board, the player to move, and the terminal
//! status. The UI mutates it only through [`GameState::apply_move`] and
//! [`GameState::reset`] and re-renders from its fields each frame.
//!
//! State machine: `InProgress` moves to `InProgress` (player swaps),
//! `Won(p)` (move completes a line), or `Draw` (board fills with no
//! line). `Won` and `Draw` are terminal; only `reset` leaves them.

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::rules;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Check if the game has ended
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Main game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Apply the current player's mark at `pos`
    ///
    /// Moves on an occupied cell or after the game has ended are ignored
    /// without error, mirroring a disabled button. After a winning move
    /// `current_player` stays on the winner so the UI can name them.
    pub fn apply_move(&mut self, pos: Pos) {
        if self.status.is_over() {
            debug!(row = pos.row, col = pos.col, "move after game over ignored");
            return;
        }
        if !self.board.is_empty(pos) {
            debug!(row = pos.row, col = pos.col, "move on occupied cell ignored");
            return;
        }

        let player = self.current_player;
        self.board.place_mark(pos, player);
        debug!(row = pos.row, col = pos.col, %player, "mark placed");

        if rules::has_win(&self.board, player) {
            self.status = GameStatus::Won(player);
            info!(winner = %player, "game won");
        } else if rules::is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("game drawn");
        } else {
            self.current_player = player.opponent();
        }
    }

    /// Return to the initial state, regardless of the current one
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
