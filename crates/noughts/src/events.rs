//! Notifications published to front ends.

use noughts_core::{Difficulty, Symbol, Turn};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Something changed in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A turn was recorded.
    MoveMade(Turn),
    /// The computer's reply has been scheduled.
    ComputerThinking,
    /// The game ended.
    GameOver {
        /// Winner's display name, `None` for a draw.
        winner: Option<String>,
    },
    /// The log was cleared.
    Restarted,
    /// A display name changed.
    PlayerRenamed {
        /// Whose name changed.
        symbol: Symbol,
        /// The new name.
        name: String,
    },
    /// Difficulty for future computer moves changed.
    DifficultyChanged(Difficulty),
}

/// Sends an event, tolerating a front end that has gone away.
pub(crate) fn publish(events: &mpsc::UnboundedSender<SessionEvent>, event: SessionEvent) {
    if let Err(err) = events.send(event) {
        debug!(event = ?err.0, "No listener for session event");
    }
}
