//! Line-oriented terminal front end.

use crate::events::SessionEvent;
use crate::handle::SessionHandle;
use crate::view::SessionView;
use anyhow::{Context, Result};
use noughts_core::{Difficulty, GameStatus, Symbol};
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Command summary printed at start and on `help`.
pub fn help_text() -> String {
    let levels: Vec<String> = Difficulty::iter()
        .map(|level| level.to_string().to_lowercase())
        .collect();
    format!(
        "\
Commands:
  <row> <col>            place your mark, e.g. `1 1`
  restart                start a new game
  rename <X|O> <name>    change a player's name
  difficulty <level>     {}
  show                   redraw the board
  help                   this text
  quit                   leave",
        levels.join(" | ")
    )
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a mark.
    Move {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Clear the board.
    Restart,
    /// Change a display name.
    Rename {
        /// Whose name.
        symbol: Symbol,
        /// New name.
        name: String,
    },
    /// Change difficulty.
    Difficulty(Difficulty),
    /// Redraw.
    Show,
    /// Print help.
    Help,
    /// Exit.
    Quit,
}

impl ConsoleCommand {
    /// Parses a line; `None` for input that matches no command.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match head.to_ascii_lowercase().as_str() {
            "restart" | "rematch" => Some(Self::Restart),
            "show" => Some(Self::Show),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            "difficulty" => Some(Self::Difficulty(Difficulty::parse_lenient(rest))),
            "rename" => {
                let (symbol, name) = rest.split_once(char::is_whitespace)?;
                Some(Self::Rename {
                    symbol: symbol.parse().ok()?,
                    name: name.trim().to_string(),
                })
            }
            _ => {
                let row = head.parse().ok()?;
                let col = rest.parse().ok()?;
                Some(Self::Move { row, col })
            }
        }
    }
}

/// Draws one frame: players, board, banner and history.
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();
    for symbol in Symbol::iter() {
        let marker = if *view.active_player() == symbol && !view.status().is_over() {
            ">"
        } else {
            " "
        };
        out.push_str(&format!("{marker} {} ({symbol})\n", view.name(symbol)));
    }
    out.push('\n');

    out.push_str(&view.board().display());
    out.push('\n');

    match view.status() {
        GameStatus::Won(_) => {
            let winner = view.winner().as_deref().unwrap_or_default();
            out.push_str(&format!("\nGame Over! {winner} won!\n"));
        }
        GameStatus::Draw => out.push_str("\nGame Over! It's a draw!\n"),
        GameStatus::InProgress => {}
    }

    if !view.turns().is_empty() {
        out.push('\n');
        for turn in view.turns() {
            out.push_str(&format!("{turn}\n"));
        }
    }
    out
}

async fn draw<W: AsyncWrite + Unpin>(out: &mut W, view: &SessionView, json: bool) -> Result<()> {
    let frame = if json {
        format!("{}\n", serde_json::to_string(view).context("Failed to encode view")?)
    } else {
        format!("\n{}", render(view))
    };
    out.write_all(frame.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// Runs the console loop until `quit` or end of input.
#[instrument(skip_all, fields(json))]
pub async fn run_console(
    mut handle: SessionHandle,
    mut events: mpsc::UnboundedReceiver<SessionEvent>,
    json: bool,
) -> Result<()> {
    info!("Starting console front end");
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !json {
        stdout.write_all(format!("{}\n", help_text()).as_bytes()).await?;
    }
    draw(&mut stdout, &handle.view(), json).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("End of input");
                    break;
                };
                let Some(command) = ConsoleCommand::parse(&line) else {
                    stdout.write_all(b"Unrecognized command; type `help`.\n").await?;
                    continue;
                };
                match command {
                    ConsoleCommand::Move { row, col } => {
                        if let Err(rejected) = handle.submit_move(row, col) {
                            stdout.write_all(format!("{rejected}\n").as_bytes()).await?;
                        }
                    }
                    ConsoleCommand::Restart => handle.restart(),
                    ConsoleCommand::Rename { symbol, name } => handle.rename_player(symbol, name),
                    ConsoleCommand::Difficulty(level) => handle.set_difficulty(level),
                    ConsoleCommand::Show => draw(&mut stdout, &handle.view(), json).await?,
                    ConsoleCommand::Help => {
                        stdout.write_all(format!("{}\n", help_text()).as_bytes()).await?
                    }
                    ConsoleCommand::Quit => break,
                }
            }
            Some(event) = events.recv() => {
                debug!(?event, "Session event");
                match event {
                    SessionEvent::ComputerThinking if !json => {
                        stdout.write_all(b"Computer is thinking...\n").await?;
                    }
                    SessionEvent::ComputerThinking => {}
                    _ => draw(&mut stdout, &handle.view(), json).await?,
                }
            }
        }
    }

    info!("Console front end finished");
    Ok(())
}
