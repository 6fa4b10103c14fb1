//! Tic-tac-toe: board model, rules, state machine and minimax opponent.

mod action;
pub mod audit;
mod game;
pub mod minimax;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOrigin};
pub use game::Game;
pub use phases::{Evaluation, Outcome};
pub use position::Position;
pub use types::{Board, BoardParseError, GameMode, GameState, Player, Square};
