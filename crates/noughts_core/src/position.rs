//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate on the 3x3 board.
///
/// Both indices are always in `0..3`; the only public constructor
/// checks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Center square.
    pub const CENTER: Position = Position::at(1, 1);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, or `None` if either index is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
