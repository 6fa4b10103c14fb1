//! Exhaustive minimax move selection.
//!
//! Scores are from O's point of view: a line held by X is -10, a line
//! held by O is +10, a full board is 0. There is no depth discount, so a
//! quick win and a slow win score the same. Among equal scores the lowest
//! index wins.

use super::{Board, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Leaf score for a line completed by O.
pub const WIN_SCORE: i32 = 10;
/// Leaf score for a line completed by X.
pub const LOSS_SCORE: i32 = -10;
/// Leaf score for a full board with no line.
pub const DRAW_SCORE: i32 = 0;

/// A legal move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// Where the mark goes.
    pub position: Position,
    /// Value of the position after the move, with optimal play from both sides.
    pub score: i32,
}

/// Picks the optimal move for `seat`.
///
/// O maximizes and X minimizes. Ties go to the lowest index. Returns
/// `None` when the board is full or already won; callers only ask on a
/// live board.
#[instrument(skip(board), fields(board = %board))]
pub fn select_move(board: Board, seat: Player) -> Option<Position> {
    let best = best_move(&score_moves(board, seat), seat)?;
    debug!(position = best.position.to_index(), score = best.score, "Selected move");
    Some(best.position)
}

/// Scores every empty square for `seat`, in index order.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(mut board: Board, seat: Player) -> Vec<ScoredMove> {
    debug_assert!(
        terminal_score(&board).is_none(),
        "search called on a finished board: {}",
        board
    );
    if terminal_score(&board).is_some() {
        return Vec::new();
    }

    Position::ALL
        .into_iter()
        .filter_map(|pos| {
            if !board.is_empty(pos) {
                return None;
            }
            board.set(pos, Square::Occupied(seat));
            let score = minimax(&mut board, seat.opponent());
            board.set(pos, Square::Empty);
            Some(ScoredMove::new(pos, score))
        })
        .collect()
}

/// First move with the best score for `seat`, as [`select_move`] picks it.
pub fn best_move(moves: &[ScoredMove], seat: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in moves {
        let improves = match best {
            None => true,
            Some(current) => match seat {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(*candidate);
        }
    }
    best
}

fn terminal_score(board: &Board) -> Option<i32> {
    if rules::has_won(board, Player::X) {
        Some(LOSS_SCORE)
    } else if rules::has_won(board, Player::O) {
        Some(WIN_SCORE)
    } else if rules::is_full(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Value of `board` with `to_move` about to play. The board is restored
/// before returning.
fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best = match to_move {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent());
        board.set(pos, Square::Empty);

        best = match to_move {
            Player::O => best.max(score),
            Player::X => best.min(score),
        };
    }
    best
}
