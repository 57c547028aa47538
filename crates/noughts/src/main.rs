//! Noughts - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Difficulty, SessionConfig, SessionHandle, run_console};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            opponent,
            bot_delay_ms,
            json,
            log_file,
        } => {
            init_logging(&log_file)?;
            let mut settings = load_config(config.as_deref())?;
            if let Some(level) = difficulty {
                settings = settings.with_difficulty(Difficulty::parse_lenient(&level));
            }
            if let Some(opponent) = opponent {
                settings = settings.with_opponent(opponent);
            }
            if let Some(ms) = bot_delay_ms {
                settings = settings.with_bot_delay_ms(ms);
            }
            play(settings, json).await
        }
        Command::Config { config } => {
            let settings = load_config(config.as_deref())?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

/// Writes logs to a file so they do not interleave with the board.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => Ok(SessionConfig::from_file(path)?),
        None => Ok(SessionConfig::default()),
    }
}

async fn play(settings: SessionConfig, json: bool) -> Result<()> {
    info!(?settings, "Starting game");
    let (handle, events) = SessionHandle::new(settings.build_session(), settings.bot_delay());
    run_console(handle, events, json).await
}
