//! Display names for the two symbols.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Maps each symbol to the name shown in the UI.
///
/// Renaming is independent of game state: it never touches the turn log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Default name for X.
    pub const DEFAULT_X: &'static str = "Player 1";
    /// Default name for O.
    pub const DEFAULT_O: &'static str = "Player 2";

    /// Creates a registry with explicit names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Returns the display name bound to `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Replaces the display name bound to `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: impl Into<String>) {
        let name = name.into();
        info!(%symbol, %name, "Renaming player");
        match symbol {
            Symbol::X => self.x = name,
            Symbol::O => self.o = name,
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_X, Self::DEFAULT_O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let players = PlayerRegistry::default();
        assert_eq!(players.name(Symbol::X), "Player 1");
        assert_eq!(players.name(Symbol::O), "Player 2");
    }

    #[test]
    fn test_rename_only_touches_one_symbol() {
        let mut players = PlayerRegistry::default();
        players.rename(Symbol::O, "Ada");
        assert_eq!(players.name(Symbol::O), "Ada");
        assert_eq!(players.name(Symbol::X), "Player 1");
    }
}
