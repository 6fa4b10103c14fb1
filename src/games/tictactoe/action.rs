//! Move requests and the reasons they get rejected.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Where a move request came from.
///
/// In single-player mode a human may only move for X, and only the
/// computer path may move for O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOrigin {
    /// A human input event.
    Human,
    /// The computer reply path.
    Computer,
}

/// Error that can occur when validating or applying a move.
///
/// Every variant leaves the game untouched; callers treat it as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// No game is in progress (not started yet, or already over).
    #[display("Game is not active")]
    GameInactive,

    /// The requester does not control the seat to move.
    #[display("{:?} cannot be moved from this origin right now", _0)]
    WrongSeat(Player),

    /// The previous move has not been evaluated yet.
    #[display("Previous move has not been evaluated")]
    EvaluationPending,
}

impl std::error::Error for MoveError {}
