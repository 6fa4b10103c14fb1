//! Terminal results and per-move evaluation.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// A line was completed by this player; the game is over.
    Won(Player),
    /// The board filled up with no line; the game is over.
    Draw,
    /// The game goes on with the other player to move.
    Continuing,
}

impl Evaluation {
    /// Whether this evaluation ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::Continuing)
    }
}

impl From<Outcome> for Evaluation {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => Evaluation::Won(player),
            Outcome::Draw => Evaluation::Draw,
        }
    }
}
