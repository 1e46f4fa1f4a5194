//! Tic-tac-toe console front end.
//!
//! Wires terminal input, rendering and announcements to the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use std::io::{self, Write};
use std::path::Path;
use terminal::{BoardView, LineInput, Palette, TerminalAnnouncer};
use tictactoe_core::{GameLoop, ScriptedMoves};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config.as_deref()),
        Command::Replay { moves, config } => run_replay(&moves, config.as_deref()),
        Command::PrintConfig => print_config(),
    }
}

/// Builds a game and its terminal collaborators from configuration.
fn setup(config: &GameConfig) -> (GameLoop, BoardView<io::Stdout>, TerminalAnnouncer<io::Stdout>) {
    let game = GameLoop::new(config.player_one().profile(), config.player_two().profile());
    let palette = Palette::from_config(config);
    (
        game,
        BoardView::new(io::stdout(), palette.clone()),
        TerminalAnnouncer::new(io::stdout(), palette),
    )
}

/// Play an interactive game on stdin/stdout
#[instrument]
fn run_play(config_path: Option<&Path>) -> Result<()> {
    let config = GameConfig::load(config_path).context("Failed to load configuration")?;
    let (mut game, mut renderer, mut announcer) = setup(&config);
    let mut input = LineInput::new(io::stdin().lock(), io::stdout());

    let outcome = game
        .run(&mut input, &mut renderer, &mut announcer)
        .context("Game ended abnormally")?;
    info!(%outcome, "Interactive game finished");
    Ok(())
}

/// Play a scripted game and print every board
#[instrument]
fn run_replay(moves: &str, config_path: Option<&Path>) -> Result<()> {
    let config = GameConfig::load(config_path).context("Failed to load configuration")?;
    let mut input = ScriptedMoves::parse(moves).context("Failed to parse move list")?;
    let (mut game, mut renderer, mut announcer) = setup(&config);

    let outcome = game
        .run(&mut input, &mut renderer, &mut announcer)
        .context("Replay did not finish the game")?;

    let mut stdout = io::stdout();
    for (request, error) in input.rejections() {
        writeln!(stdout, "  skipped {}: {}", request, error)?;
    }
    if input.remaining() > 0 {
        writeln!(stdout, "  {} move(s) left unplayed", input.remaining())?;
    }
    info!(%outcome, "Replay finished");
    Ok(())
}

/// Print the default configuration as TOML
fn print_config() -> Result<()> {
    let text = GameConfig::default().to_toml()?;
    print!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_finishing_game_succeeds() {
        assert!(run_replay("A1 B1 A2 B2 A3", None).is_ok());
    }

    #[test]
    fn test_replay_fails_when_moves_run_out() {
        let err = run_replay("A1 B1", None).unwrap_err();
        assert!(format!("{:#}", err).contains("Replay did not finish the game"));
    }

    #[test]
    fn test_replay_rejects_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(run_replay("A1 B1 A2 B2 A3", Some(missing.as_path())).is_err());
    }
}
