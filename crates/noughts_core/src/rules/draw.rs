//! Draw detection logic for tic-tac-toe.

use crate::turn_log::TurnLog;
use crate::types::Symbol;
use tracing::instrument;

/// Number of turns that fill the board.
pub const FULL_BOARD_TURNS: usize = 9;

/// Checks for a draw: nine turns played and nobody won.
#[instrument(skip(log), fields(turns = log.len()))]
pub fn is_draw(log: &TurnLog, winner: Option<Symbol>) -> bool {
    log.len() == FULL_BOARD_TURNS && winner.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Turn, derive_board, winning_symbol};

    fn full_log(cells: [(usize, usize); 9]) -> TurnLog {
        let mut player = Symbol::X;
        TurnLog::from_chronological(cells.map(|(row, col)| {
            let turn = Turn::new(Position::new(row, col).unwrap(), player);
            player = player.opponent();
            turn
        }))
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let log = full_log([
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        let winner = winning_symbol(&derive_board(&log));
        assert_eq!(winner, None);
        assert!(is_draw(&log, winner));
    }

    #[test]
    fn test_not_draw_if_winner_on_ninth_turn() {
        // X fills the top row last.
        let log = full_log([
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
            (0, 2),
        ]);
        let winner = winning_symbol(&derive_board(&log));
        assert_eq!(winner, Some(Symbol::X));
        assert!(!is_draw(&log, winner));
    }

    #[test]
    fn test_not_draw_before_board_full() {
        assert!(!is_draw(&TurnLog::new(), None));
    }
}
