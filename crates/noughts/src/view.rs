//! Read-only snapshot handed to front ends.

use crate::session::{GameSession, Opponent};
use derive_getters::Getters;
use noughts_core::{Board, Difficulty, GameStatus, Symbol, Turn};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Current board.
    board: Board,
    /// Symbol to move next.
    active_player: Symbol,
    /// Overall status.
    status: GameStatus,
    /// Winner's display name.
    winner: Option<String>,
    /// Whether the game ended in a draw.
    is_draw: bool,
    /// Turn history, newest first.
    turns: Vec<Turn>,
    /// Name shown for X.
    player_x: String,
    /// Name shown for O.
    player_o: String,
    /// Difficulty for upcoming computer moves.
    difficulty: Difficulty,
    /// Who plays O.
    opponent: Opponent,
}

impl SessionView {
    /// Name shown for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }
}

impl From<&GameSession> for SessionView {
    fn from(session: &GameSession) -> Self {
        Self {
            board: session.board(),
            active_player: session.active_player(),
            status: session.status(),
            winner: session.winner().map(str::to_string),
            is_draw: session.is_draw(),
            turns: session.turns().newest_first().copied().collect(),
            player_x: session.players().name(Symbol::X).to_string(),
            player_o: session.players().name(Symbol::O).to_string(),
            difficulty: session.difficulty(),
            opponent: session.opponent(),
        }
    }
}
