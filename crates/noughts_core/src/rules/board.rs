//! Board reconstruction from the turn log.

use crate::turn_log::TurnLog;
use crate::types::{Board, Cell};
use tracing::{instrument, trace};

/// Paints a fresh board by replaying every turn oldest-first.
///
/// Turns are trusted to target distinct cells; a duplicate would simply
/// overwrite the earlier mark.
#[instrument(skip(log), fields(turns = log.len()))]
pub fn derive_board(log: &TurnLog) -> Board {
    let mut board = Board::new();
    for turn in log.chronological() {
        trace!(%turn, "Replaying turn");
        board.set(turn.position(), Cell::Occupied(turn.player()));
    }
    board
}
