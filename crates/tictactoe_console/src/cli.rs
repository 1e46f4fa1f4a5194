//! Command-line interface for the console game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML config file (defaults are used if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a scripted game and print every board
    Replay {
        /// Moves in play order, e.g. "A1 B1 A2 B2 A3"
        #[arg(short, long)]
        moves: String,

        /// Path to a TOML config file (defaults are used if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    PrintConfig,
}
