//! Unbeatable Tic-Tac-Toe library
//!
//! A tic-tac-toe engine whose computer opponent searches the whole game
//! tree and never loses.
//!
//! # Architecture
//!
//! - **Games**: board model, rules, the turn state machine and the minimax
//!   move selector
//! - **Session**: the single owner of a live game; takes UI requests and
//!   schedules the computer reply
//! - **Console**: a line-based terminal driver on top of the session
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameMode, GameSession};
//!
//! let mut session = GameSession::default();
//! session.request_mode_change(GameMode::SinglePlayer);
//! session.request_move(4).expect("center is free");
//! let snapshot = session.play_computer_move().expect("computer owes a move");
//! assert!(*snapshot.active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod cli;
pub mod console;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Session management
pub use session::{GameSession, Snapshot};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Evaluation, Game, GameMode, GameState, MoveError, MoveOrigin,
    Outcome, Player, Position, Square, audit, minimax, rules,
};
