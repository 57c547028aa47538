//! Game rules for tic-tac-toe.
//!
//! Pure functions over the turn log. Nothing is cached between calls:
//! every query replays or inspects the log from scratch.

pub mod board;
pub mod draw;
pub mod status;
pub mod turn_order;
pub mod win;

pub use board::derive_board;
pub use draw::is_draw;
pub use status::{GameStatus, derive_status};
pub use turn_order::active_player;
pub use win::{winner_name, winning_symbol};
