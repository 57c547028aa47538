//! Pure tic-tac-toe game logic.
//!
//! Every piece of game state is derived from a single append-only
//! [`TurnLog`]. Nothing here is cached: the board, the player to move,
//! the winner and the draw flag are recomputed from the log on each read.
//!
//! # Architecture
//!
//! - **Types**: [`Symbol`], [`Cell`], [`Board`], [`Position`], [`Turn`]
//! - **Log**: [`TurnLog`], newest-first storage with chronological replay
//! - **Rules**: board derivation, active player, winner and draw evaluation
//! - **Bot**: [`Difficulty`]-driven move selection for the computer player
//!
//! # Example
//!
//! ```
//! use noughts_core::{Position, Symbol, Turn, TurnLog, derive_board, active_player};
//!
//! let mut log = TurnLog::new();
//! let center = Position::new(1, 1).unwrap();
//! log.record(Turn::new(center, active_player(&log)));
//!
//! assert_eq!(active_player(&log), Symbol::O);
//! assert!(!derive_board(&log).is_empty(center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod combinations;
mod players;
mod position;
mod rules;
mod turn;
mod turn_log;
mod types;

pub use bot::{Difficulty, choose_move, empty_cells, find_best_move};
pub use combinations::{WINNING_COMBINATIONS, WinningCombination};
pub use players::PlayerRegistry;
pub use position::Position;
pub use rules::{
    GameStatus, active_player, derive_board, derive_status, is_draw, winner_name, winning_symbol,
};
pub use turn::Turn;
pub use turn_log::TurnLog;
pub use types::{Board, Cell, Symbol};
