//! Session configuration loaded from TOML.

use crate::handle::DEFAULT_BOT_DELAY;
use crate::session::{GameSession, Opponent};
use crate::error::ConfigError;
use derive_getters::Getters;
use noughts_core::{Difficulty, PlayerRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a new game session.
///
/// Every field is optional in the file; missing fields take the defaults
/// below. An unrecognized `difficulty` falls back to easy.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name shown for X.
    player_x: String,

    /// Name shown for O.
    player_o: String,

    /// Whether O is the computer or a second person.
    opponent: Opponent,

    /// Starting difficulty for the computer.
    difficulty: Difficulty,

    /// Milliseconds the computer waits before answering.
    bot_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_x: PlayerRegistry::DEFAULT_X.to_string(),
            player_o: PlayerRegistry::DEFAULT_O.to_string(),
            opponent: Opponent::default(),
            difficulty: Difficulty::default(),
            bot_delay_ms: DEFAULT_BOT_DELAY.as_millis() as u64,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;

        let config = Self::from_toml(&content)?;
        info!(
            opponent = %config.opponent,
            difficulty = %config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Overrides the opponent.
    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.opponent = opponent;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the computer's delay.
    pub fn with_bot_delay_ms(mut self, bot_delay_ms: u64) -> Self {
        self.bot_delay_ms = bot_delay_ms;
        self
    }

    /// Delay before the computer answers.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Builds a fresh session from these settings.
    #[instrument(skip(self))]
    pub fn build_session(&self) -> GameSession {
        GameSession::new(
            PlayerRegistry::new(self.player_x.clone(), self.player_o.clone()),
            self.difficulty,
            self.opponent,
        )
    }
}
