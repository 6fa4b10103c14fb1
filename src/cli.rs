//! Command-line interface for unbeatable_tictactoe.

use crate::console::Keymap;
use crate::games::tictactoe::{Board, GameMode, Player};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unbeatable Tic-Tac-Toe - play against a minimax opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe with a perfect computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Start in this mode (`single` or `two`) instead of asking
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer reply delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Slot layout (`row-major` or `numpad`)
        #[arg(long)]
        keymap: Option<Keymap>,
    },

    /// Print the computer's choice for a position
    BestMove {
        /// Nine squares in row-major order: X, O, and `.` for empty
        board: Board,

        /// Seat to move (`x` or `o`)
        #[arg(long, default_value = "o")]
        seat: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play every X strategy against the computer and tally the results
    Audit {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
