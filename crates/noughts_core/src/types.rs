//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// X always belongs to the human and moves first. O is the second
/// human or the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 grid of cells, indexed `[row][col]`.
///
/// Boards are produced by [`derive_board`](crate::derive_board) and are
/// never edited after the fact; the only mutator is crate-private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// Useful for evaluating arbitrary positions that were not reached
    /// through a turn log.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Returns the grid as rows, for rendering.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their `row,col` coordinates so a console user
    /// can see what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!("{row},{col}"),
                    Cell::Occupied(symbol) => format!(" {symbol} "),
                })
                .collect();
            result.push_str(&line.join("|"));
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_parses_case_insensitively() {
        assert_eq!("x".parse::<Symbol>(), Ok(Symbol::X));
        assert_eq!("O".parse::<Symbol>(), Ok(Symbol::O));
        assert!("z".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|pos| board.is_empty(*pos)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_display_marks_and_coordinates() {
        let mut board = Board::new();
        board.set(Position::CENTER, Cell::Occupied(Symbol::X));
        let text = board.display();
        assert!(text.starts_with("0,0|0,1|0,2"));
        assert!(text.contains("1,0| X |1,2"));
    }
}
