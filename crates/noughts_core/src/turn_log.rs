//! Append-only move history.

use crate::turn::Turn;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// Ordered record of every turn played in the current game.
///
/// Storage is newest-first: [`record`](Self::record) pushes to the
/// front, so [`latest`](Self::latest) is O(1) and
/// [`newest_first`](Self::newest_first) is the history display order.
/// Board painting must replay oldest-first; use
/// [`chronological`](Self::chronological) for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLog {
    turns: VecDeque<Turn>,
}

impl TurnLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from turns given in play order (oldest first).
    pub fn from_chronological(turns: impl IntoIterator<Item = Turn>) -> Self {
        let mut log = Self::new();
        for turn in turns {
            log.record(turn);
        }
        log
    }

    /// Appends a turn as the most recent entry.
    #[instrument(skip(self), fields(len = self.turns.len()))]
    pub fn record(&mut self, turn: Turn) {
        self.turns.push_front(turn);
    }

    /// Returns the most recently recorded turn.
    pub fn latest(&self) -> Option<&Turn> {
        self.turns.front()
    }

    /// Iterates turns from most recent to oldest.
    pub fn newest_first(&self) -> impl DoubleEndedIterator<Item = &Turn> + ExactSizeIterator {
        self.turns.iter()
    }

    /// Iterates turns in the order they were played.
    pub fn chronological(&self) -> impl DoubleEndedIterator<Item = &Turn> + ExactSizeIterator {
        self.turns.iter().rev()
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Checks if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drops every turn.
    #[instrument(skip(self), fields(len = self.turns.len()))]
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
