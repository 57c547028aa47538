//! Command-line interface for noughts.

use crate::session::Opponent;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a session config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Computer difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Who plays O (human, computer)
        #[arg(short, long)]
        opponent: Option<Opponent>,

        /// Milliseconds the computer waits before answering
        #[arg(long)]
        bot_delay_ms: Option<u64>,

        /// Print each frame as a JSON snapshot instead of a drawn board
        #[arg(long)]
        json: bool,

        /// File to write logs to
        #[arg(long, default_value = "noughts.log")]
        log_file: PathBuf,
    },

    /// Print the effective session config as TOML
    Config {
        /// Path to a session config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
