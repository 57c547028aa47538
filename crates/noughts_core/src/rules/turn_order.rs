//! Whose turn it is.

use crate::turn_log::TurnLog;
use crate::types::Symbol;
use tracing::instrument;

/// Returns the symbol that moves next.
///
/// Looks only at the most recent turn: after X comes O, after anything
/// else (or nothing) comes X. This is correct only while turns strictly
/// alternate, which holds for every log built by the session.
#[instrument(skip(log), fields(turns = log.len()))]
pub fn active_player(log: &TurnLog) -> Symbol {
    match log.latest() {
        Some(turn) if turn.player() == Symbol::X => Symbol::O,
        _ => Symbol::X,
    }
}
