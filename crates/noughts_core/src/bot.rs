//! Computer opponent move selection.
//!
//! The policy is deliberately shallow: it only recognizes lines that are
//! one mark away from completion. It does not look ahead, so it misses
//! forks and double threats.

use crate::combinations::WINNING_COMBINATIONS;
use crate::position::Position;
use crate::turn::Turn;
use crate::types::{Board, Cell, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// How hard the computer opponent plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty cell.
    #[default]
    Easy,
    /// Blocks the opponent's open line, otherwise random.
    Medium,
    /// Completes its own line, otherwise plays like Medium.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty, falling back to [`Difficulty::Easy`] on
    /// anything unrecognized.
    #[instrument]
    pub fn parse_lenient(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            warn!(value, "Unrecognized difficulty, using Easy");
            Difficulty::Easy
        })
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

/// Lists empty cells in row-major order.
#[instrument(skip(board))]
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Finds the cell that would complete a line for `player`.
///
/// Returns the open cell of the first line (in table order) where
/// `player` already holds the other two cells.
#[instrument(skip(board))]
pub fn find_best_move(board: &Board, player: Symbol) -> Option<Position> {
    let mark = Cell::Occupied(player);
    WINNING_COMBINATIONS.iter().find_map(|line| {
        let held = line.iter().filter(|pos| board.get(**pos) == mark).count();
        let open = line.iter().copied().find(|pos| board.is_empty(*pos));
        match open {
            Some(pos) if held == 2 => Some(pos),
            _ => None,
        }
    })
}

/// Picks the computer's move.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    bot: Symbol,
    opponent: Symbol,
    rng: &mut R,
) -> Option<Turn> {
    let pool = empty_cells(board);
    if pool.is_empty() {
        warn!("No empty cell left for the computer");
        return None;
    }

    let winning = match difficulty {
        Difficulty::Hard => find_best_move(board, bot),
        Difficulty::Easy | Difficulty::Medium => None,
    };
    let blocking = match difficulty {
        Difficulty::Medium | Difficulty::Hard => find_best_move(board, opponent),
        Difficulty::Easy => None,
    };

    let position = if let Some(pos) = winning {
        debug!(%pos, "Completing own line");
        pos
    } else if let Some(pos) = blocking {
        debug!(%pos, "Blocking opponent line");
        pos
    } else {
        let pos = *pool.choose(rng)?;
        debug!(%pos, candidates = pool.len(), "Random empty cell");
        pos
    };

    Some(Turn::new(position, bot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Symbol::X);
    const O: Cell = Cell::Occupied(Symbol::O);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Difficulty::parse_lenient("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient(" medium "), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Easy);
    }

    #[test]
    fn test_find_best_move_completes_line() {
        let board = Board::from_rows([[X, E, X], [E, O, E], [E, E, E]]);
        assert_eq!(find_best_move(&board, Symbol::X), Position::new(0, 1));
        assert_eq!(find_best_move(&board, Symbol::O), None);
    }

    #[test]
    fn test_find_best_move_ignores_blocked_line() {
        let board = Board::from_rows([[X, O, X], [E, E, E], [E, E, E]]);
        assert_eq!(find_best_move(&board, Symbol::X), None);
    }

    #[test]
    fn test_find_best_move_prefers_earlier_line() {
        // Row 0 and column 0 both open for X; rows come first.
        let board = Board::from_rows([[X, X, E], [X, E, E], [E, E, E]]);
        assert_eq!(find_best_move(&board, Symbol::X), Position::new(0, 2));

        // Row 2 beats the main diagonal.
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, X, X]]);
        assert_eq!(find_best_move(&board, Symbol::X), Position::new(2, 0));
    }

    #[test]
    fn test_medium_blocks() {
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let turn = choose_move(&board, Difficulty::Medium, Symbol::O, Symbol::X, &mut rng);
            assert_eq!(turn, Some(Turn::new(Position::new(0, 2).unwrap(), Symbol::O)));
        }
    }

    /// O can complete row 1 at (1,2); X threatens row 0 at (0,2).
    fn win_or_block_board() -> Board {
        Board::from_rows([[X, X, E], [O, O, E], [X, E, E]])
    }

    #[test]
    fn test_medium_blocks_instead_of_winning() {
        let turn = choose_move(
            &win_or_block_board(),
            Difficulty::Medium,
            Symbol::O,
            Symbol::X,
            &mut rng(),
        );
        assert_eq!(turn.map(|t| t.position()), Position::new(0, 2));
    }

    #[test]
    fn test_hard_prefers_win_over_block() {
        let turn = choose_move(
            &win_or_block_board(),
            Difficulty::Hard,
            Symbol::O,
            Symbol::X,
            &mut rng(),
        );
        assert_eq!(turn, Some(Turn::new(Position::new(1, 2).unwrap(), Symbol::O)));
    }

    #[test]
    fn test_hard_blocks_without_own_win() {
        let board = Board::from_rows([[O, E, E], [X, X, E], [E, E, E]]);
        let turn = choose_move(&board, Difficulty::Hard, Symbol::O, Symbol::X, &mut rng());
        assert_eq!(turn.map(|t| t.position()), Position::new(1, 2));
    }

    #[test]
    fn test_easy_picks_an_empty_cell() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [E, X, E]]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let turn = choose_move(&board, Difficulty::Easy, Symbol::O, Symbol::X, &mut rng)
                .expect("empty cells remain");
            assert!(board.is_empty(turn.position()));
            assert_eq!(turn.player(), Symbol::O);
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                choose_move(&board, difficulty, Symbol::O, Symbol::X, &mut rng()),
                None
            );
        }
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let cells = empty_cells(&board);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells.first().copied(), Position::new(0, 1));
        assert_eq!(cells.last().copied(), Position::new(2, 1));
    }
}
