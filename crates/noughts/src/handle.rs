//! Async wrapper that schedules the computer's delayed reply.

use crate::events::{SessionEvent, publish};
use crate::session::{BotTicket, GameSession, MoveRejected};
use crate::view::SessionView;
use noughts_core::{Difficulty, Symbol, Turn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Delay before the computer answers, unless configured otherwise.
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_secs(1);

/// Drives a [`GameSession`] for an interactive front end.
///
/// Every call runs to completion before returning. The only deferred work
/// is the computer's reply, which runs on a tokio task after `bot_delay`.
/// That task re-checks its [`BotTicket`] against the session when it
/// wakes, and is aborted outright on restart or when the handle drops.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct SessionHandle {
    session: Arc<Mutex<GameSession>>,
    rng: Arc<Mutex<StdRng>>,
    events: mpsc::UnboundedSender<SessionEvent>,
    bot_delay: Duration,
    pending: Option<JoinHandle<()>>,
}

fn lock<T>(shared: &Mutex<T>) -> MutexGuard<'_, T> {
    // Every mutation completes before the guard drops, so poisoned state
    // is still consistent.
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Publishes the events that follow a recorded turn.
fn announce_turn(
    session: &GameSession,
    events: &mpsc::UnboundedSender<SessionEvent>,
    turn: Turn,
) {
    publish(events, SessionEvent::MoveMade(turn));
    if session.status().is_over() {
        publish(
            events,
            SessionEvent::GameOver {
                winner: session.winner().map(str::to_string),
            },
        );
    }
}

/// Body of the deferred computer move, run after the delay.
#[instrument(skip(session, rng, events))]
fn apply_bot_turn(
    session: &Mutex<GameSession>,
    rng: &Mutex<StdRng>,
    events: &mpsc::UnboundedSender<SessionEvent>,
    ticket: BotTicket,
) {
    let mut session = lock(session);
    let mut rng = lock(rng);
    match session.play_bot_turn(ticket, &mut *rng) {
        Some(turn) => announce_turn(&session, events, turn),
        None => debug!("Computer move skipped"),
    }
}

impl SessionHandle {
    /// Wraps `session` and returns the receiving end of its event stream.
    ///
    /// The computer draws its random moves from an entropy-seeded RNG.
    #[instrument(skip(session))]
    pub fn new(
        session: GameSession,
        bot_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        Self::with_rng(session, bot_delay, StdRng::from_entropy())
    }

    /// Like [`SessionHandle::new`], with a seeded RNG for reproducible
    /// computer moves.
    #[instrument(skip(session))]
    pub fn with_seed(
        session: GameSession,
        bot_delay: Duration,
        seed: u64,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        Self::with_rng(session, bot_delay, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        session: GameSession,
        bot_delay: Duration,
        rng: StdRng,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let handle = Self {
            session: Arc::new(Mutex::new(session)),
            rng: Arc::new(Mutex::new(rng)),
            events,
            bot_delay,
            pending: None,
        };
        (handle, rx)
    }

    /// Snapshot of the current state.
    pub fn view(&self) -> SessionView {
        lock(&self.session).view()
    }

    /// Checks if a computer move is scheduled and has not run yet.
    pub fn has_pending_bot_move(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Plays the active player's mark and schedules the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] when the move is not allowed; the session
    /// is left untouched.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), MoveRejected> {
        let ticket = {
            let mut session = lock(&self.session);
            let ticket = session.submit_move(row, col)?;
            if let Some(turn) = session.turns().latest().copied() {
                announce_turn(&session, &self.events, turn);
            }
            ticket
        };

        if let Some(ticket) = ticket {
            self.schedule(ticket);
        }
        Ok(())
    }

    /// Clears the board, dropping any pending computer move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.cancel_pending();
        lock(&self.session).restart();
        publish(&self.events, SessionEvent::Restarted);
    }

    /// Changes the name shown for `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename_player(&self, symbol: Symbol, name: impl Into<String>) {
        let name = name.into();
        lock(&self.session).rename_player(symbol, name.clone());
        publish(&self.events, SessionEvent::PlayerRenamed { symbol, name });
    }

    /// Changes the difficulty for computer moves scheduled from now on.
    #[instrument(skip(self))]
    pub fn set_difficulty(&self, difficulty: Difficulty) {
        lock(&self.session).set_difficulty(difficulty);
        publish(&self.events, SessionEvent::DifficultyChanged(difficulty));
    }

    fn schedule(&mut self, ticket: BotTicket) {
        self.cancel_pending();
        info!(
            delay_ms = self.bot_delay.as_millis() as u64,
            "Scheduling computer move"
        );
        publish(&self.events, SessionEvent::ComputerThinking);

        let session = Arc::clone(&self.session);
        let rng = Arc::clone(&self.rng);
        let events = self.events.clone();
        let delay = self.bot_delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            apply_bot_turn(&session, &rng, &events, ticket);
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take()
            && !task.is_finished()
        {
            debug!("Cancelling pending computer move");
            task.abort();
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
