//! Full-board and draw checks.

use super::super::Board;
use super::win::check_winner;

/// No empty square remains.
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().next().is_none()
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
