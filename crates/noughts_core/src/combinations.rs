//! The fixed table of winning lines.

use crate::position::Position;

/// Three positions that win the game when held by one player.
pub type WinningCombination = [Position; 3];

/// All 8 winning lines: rows, then columns, then diagonals.
///
/// The order matters. Winner detection reports the last matching line
/// and the bot takes the first completable one.
pub const WINNING_COMBINATIONS: [WinningCombination; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];
