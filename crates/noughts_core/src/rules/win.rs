//! Win detection logic for tic-tac-toe.

use crate::combinations::WINNING_COMBINATIONS;
use crate::players::PlayerRegistry;
use crate::types::{Board, Cell, Symbol};
use tracing::{debug, instrument};

/// Returns the symbol holding a complete line, if any.
///
/// Scans all 8 lines without stopping at the first match. On a board with
/// two complete lines (impossible in legal play) the later line in table
/// order decides.
#[instrument(skip(board))]
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    let mut winner = None;
    for [a, b, c] in WINNING_COMBINATIONS {
        let first = board.get(a);
        if let Cell::Occupied(symbol) = first
            && first == board.get(b)
            && first == board.get(c)
        {
            debug!(%symbol, line = ?[a, b, c], "Complete line");
            winner = Some(symbol);
        }
    }
    winner
}

/// Returns the display name of the winner, if any.
#[instrument(skip(board, players))]
pub fn winner_name<'a>(board: &Board, players: &'a PlayerRegistry) -> Option<&'a str> {
    winning_symbol(board).map(|symbol| players.name(symbol))
}
