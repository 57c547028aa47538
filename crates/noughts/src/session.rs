//! Game session: the single owner of the turn log.

use crate::view::SessionView;
use noughts_core::{
    Board, Difficulty, GameStatus, PlayerRegistry, Position, Symbol, Turn, TurnLog, active_player,
    choose_move, derive_board, derive_status, is_draw, winner_name, winning_symbol,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Opponent {
    /// Two people share the board.
    Human,
    /// The computer plays O.
    #[default]
    Computer,
}

/// Why a move was not applied.
///
/// Rejections never touch the turn log; front ends may ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// Row or column outside `0..3`.
    #[display("Position {row},{col} is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// It is the computer's turn.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,
}

impl std::error::Error for MoveRejected {}

/// Permission for one deferred computer move.
///
/// Captures the session generation and the difficulty at the moment the
/// move was scheduled. A ticket whose generation no longer matches the
/// session is stale and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTicket {
    generation: u64,
    difficulty: Difficulty,
}

impl BotTicket {
    /// Session generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Difficulty captured when the move was scheduled.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A tic-tac-toe session.
///
/// Board, active player, winner and draw are never stored; each accessor
/// derives them from the turn log. The `generation` counter increases on
/// every change to the log, including restarts.
#[derive(Debug, Clone)]
pub struct GameSession {
    turns: TurnLog,
    players: PlayerRegistry,
    difficulty: Difficulty,
    opponent: Opponent,
    generation: u64,
}

impl GameSession {
    /// Creates a session with an empty log.
    #[instrument(skip(players))]
    pub fn new(players: PlayerRegistry, difficulty: Difficulty, opponent: Opponent) -> Self {
        info!("Creating new game session");
        Self {
            turns: TurnLog::new(),
            players,
            difficulty,
            opponent,
            generation: 0,
        }
    }

    /// Returns the turn log, newest first.
    pub fn turns(&self) -> &TurnLog {
        &self.turns
    }

    /// Returns the player names.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Difficulty used for computer moves scheduled from now on.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Who plays O.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Counter bumped on every log change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Symbol played by the computer, if any.
    pub fn bot_symbol(&self) -> Option<Symbol> {
        match self.opponent {
            Opponent::Computer => Some(Symbol::O),
            Opponent::Human => None,
        }
    }

    /// Current board.
    pub fn board(&self) -> Board {
        derive_board(&self.turns)
    }

    /// Symbol to move next.
    pub fn active_player(&self) -> Symbol {
        active_player(&self.turns)
    }

    /// Display name of the winner, if the game is won.
    pub fn winner(&self) -> Option<&str> {
        winner_name(&self.board(), &self.players)
    }

    /// Checks for a draw.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.turns, winning_symbol(&self.board()))
    }

    /// Overall status.
    pub fn status(&self) -> GameStatus {
        derive_status(&self.turns)
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// On success returns a [`BotTicket`] when the computer should answer.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] if the square is off the board or taken,
    /// the game is over, or the computer is due to move.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn submit_move(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<BotTicket>, MoveRejected> {
        let position = Position::new(row, col).ok_or_else(|| {
            warn!("Move off the board");
            MoveRejected::OutOfBounds { row, col }
        })?;

        if self.status().is_over() {
            debug!("Move after game over ignored");
            return Err(MoveRejected::GameOver);
        }

        let player = self.active_player();
        if self.bot_symbol() == Some(player) {
            debug!("Move during computer's turn ignored");
            return Err(MoveRejected::AwaitingComputer);
        }

        if !self.board().is_empty(position) {
            debug!(%position, "Move on occupied square ignored");
            return Err(MoveRejected::SquareOccupied(position));
        }

        self.record(Turn::new(position, player));

        let ticket = match self.bot_symbol() {
            Some(bot) if bot == self.active_player() && !self.status().is_over() => {
                debug!(difficulty = %self.difficulty, "Computer move due");
                Some(BotTicket {
                    generation: self.generation,
                    difficulty: self.difficulty,
                })
            }
            _ => None,
        };
        Ok(ticket)
    }

    /// Applies a deferred computer move if its ticket is still valid.
    ///
    /// Returns the turn played, or `None` when the ticket is stale, the
    /// game has ended, or it is not the computer's turn.
    #[instrument(skip(self, rng), fields(generation = self.generation))]
    pub fn play_bot_turn<R: Rng + ?Sized>(
        &mut self,
        ticket: BotTicket,
        rng: &mut R,
    ) -> Option<Turn> {
        if ticket.generation != self.generation {
            debug!(ticket = ticket.generation, "Discarding stale computer move");
            return None;
        }
        let bot = self.bot_symbol()?;
        if self.active_player() != bot || self.status().is_over() {
            debug!("Computer move no longer due");
            return None;
        }

        let turn = choose_move(&self.board(), ticket.difficulty, bot, bot.opponent(), rng)?;
        self.record(turn);
        Some(turn)
    }

    /// Clears the log and starts a fresh game.
    #[instrument(skip(self), fields(turns = self.turns.len()))]
    pub fn restart(&mut self) {
        self.turns.clear();
        self.generation += 1;
        info!(generation = self.generation, "Game restarted");
    }

    /// Changes the name shown for `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, symbol: Symbol, name: impl Into<String>) {
        self.players.rename(symbol, name);
    }

    /// Changes the difficulty for future computer moves.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Snapshot of everything a front end renders.
    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }

    fn record(&mut self, turn: Turn) {
        self.turns.record(turn);
        self.generation += 1;
        match self.status() {
            GameStatus::Won(symbol) => {
                info!(%turn, winner = %self.players.name(symbol), "Game won")
            }
            GameStatus::Draw => info!(%turn, "Game drawn"),
            GameStatus::InProgress => info!(%turn, "Move applied"),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(PlayerRegistry::default(), Difficulty::default(), Opponent::default())
    }
}
