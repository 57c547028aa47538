//! Noughts - tic-tac-toe sessions with a computer opponent
//!
//! This crate orchestrates the pure rules in [`noughts_core`].
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the turn log and validates moves
//! - **Handle**: [`SessionHandle`] schedules the computer's delayed reply on tokio
//! - **View**: [`SessionView`] snapshots everything a front end draws
//! - **Config**: [`SessionConfig`] loads names, opponent and difficulty from TOML
//! - **Console**: a line-oriented terminal front end
//!
//! # Example
//!
//! ```no_run
//! use noughts::{SessionConfig, SessionHandle};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SessionConfig::default();
//! let (mut handle, _events) = SessionHandle::new(config.build_session(), config.bot_delay());
//! handle.submit_move(1, 1)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod error;
mod events;
mod handle;
mod session;
mod view;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::SessionConfig;
pub use error::ConfigError;

// Crate-level exports - Console front end
pub use console::{ConsoleCommand, help_text, render, run_console};

// Crate-level exports - Session management
pub use events::SessionEvent;
pub use handle::{DEFAULT_BOT_DELAY, SessionHandle};
pub use session::{BotTicket, GameSession, MoveRejected, Opponent};
pub use view::SessionView;

// Crate-level exports - Game types
pub use noughts_core::{
    Board, Cell, Difficulty, GameStatus, PlayerRegistry, Position, Symbol, Turn, TurnLog,
};
