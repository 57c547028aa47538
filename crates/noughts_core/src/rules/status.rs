//! Overall game status.

use super::{derive_board, is_draw, winning_symbol};
use crate::turn_log::TurnLog;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Symbol),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if no further moves are accepted.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Derives the status from scratch.
#[instrument(skip(log), fields(turns = log.len()))]
pub fn derive_status(log: &TurnLog) -> GameStatus {
    let winner = winning_symbol(&derive_board(log));
    match winner {
        Some(symbol) => GameStatus::Won(symbol),
        None if is_draw(log, winner) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
