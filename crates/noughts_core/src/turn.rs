//! The move record stored in the turn log.

use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// One move: a player placing their mark at a position.
///
/// Turns are immutable once recorded. The log never contains two turns
/// targeting the same position; the session checks occupancy before
/// recording and the derivation code does not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Turn {
    /// Where the mark was placed.
    position: Position,
    /// Who placed it.
    player: Symbol,
}

impl Turn {
    /// Returns the position of this turn.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player who made this turn.
    pub fn player(&self) -> Symbol {
        self.player
    }
}

/// History line, e.g. `X selected 1,2`.
impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} selected {}", self.player, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_history_line() {
        let turn = Turn::new(Position::CENTER, Symbol::O);
        assert_eq!(turn.to_string(), "O selected 1,1");
    }
}
