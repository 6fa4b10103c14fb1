//! Unbeatable Tic-Tac-Toe - CLI
//!
//! Play in the terminal, ask for the computer's move on a given board, or
//! audit the computer against every possible opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::cli::{Cli, Command};
use unbeatable_tictactoe::console::{self, Keymap};
use unbeatable_tictactoe::{
    AppConfig, Board, GameMode, GameSession, Player, audit, minimax,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    init_tracing(&config);

    match cli.command {
        Command::Play {
            mode,
            delay_ms,
            keymap,
        } => run_play(config, mode, delay_ms, keymap).await,
        Command::BestMove { board, seat, json } => run_best_move(board, seat, json),
        Command::Audit { json } => run_audit(json),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the console game
#[instrument(skip(config))]
async fn run_play(
    config: AppConfig,
    mode: Option<GameMode>,
    delay_ms: Option<u64>,
    keymap: Option<Keymap>,
) -> Result<()> {
    let mut config = config;
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if let Some(mode) = mode {
        config = config.with_default_mode(mode);
    }
    if let Some(keymap) = keymap {
        config = config.with_keymap(keymap);
    }

    let mut session = GameSession::new(config.computer_delay());
    if let Some(mode) = config.default_mode() {
        session.request_mode_change(*mode);
    }

    info!("Starting console game");
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    console::run(&mut session, *config.keymap(), input, &mut output).await
}

/// Print the computer's choice for a board
#[instrument]
fn run_best_move(board: Board, seat: Player, json: bool) -> Result<()> {
    if unbeatable_tictactoe::rules::check_winner(&board).is_some()
        || unbeatable_tictactoe::rules::is_full(&board)
    {
        anyhow::bail!("Board {} is already finished", board);
    }

    let scores = minimax::score_moves(board, seat);
    let choice = minimax::best_move(&scores, seat).map(|best| best.position);
    let mut stdout = std::io::stdout();

    if json {
        let report = serde_json::json!({
            "board": board.to_string(),
            "seat": seat,
            "choice": choice.map(|pos| pos.to_index()),
            "scores": scores,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for scored in &scores {
            writeln!(
                stdout,
                "{} ({}): {}",
                scored.position.to_index(),
                scored.position,
                scored.score
            )?;
        }
        if let Some(pos) = choice {
            writeln!(stdout, "{} plays {} ({})", seat, pos.to_index(), pos)?;
        }
    }
    Ok(())
}

/// Run the exhaustive audit
#[instrument]
fn run_audit(json: bool) -> Result<()> {
    let report = audit::exhaustive_audit();
    let mut stdout = std::io::stdout();

    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(
            stdout,
            "games: {}, draws: {}, computer wins: {}, human wins: {}, invalid replies: {}",
            report.games(),
            report.draws(),
            report.computer_wins(),
            report.human_wins(),
            report.invalid_replies()
        )?;
    }

    if !report.computer_never_lost() {
        anyhow::bail!(
            "Computer lost {} game(s) and made {} invalid reply(ies)",
            report.human_wins(),
            report.invalid_replies()
        );
    }
    Ok(())
}
