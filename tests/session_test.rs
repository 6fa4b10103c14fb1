//! Tests for the play session controller.

use std::time::Duration;
use unbeatable_tictactoe::{GameMode, GameSession, MoveError, Outcome, Player, Position, Square};

#[test]
fn test_requests_rejected_before_mode_selected() {
    let mut session = GameSession::default();
    assert!(!*session.snapshot().active());
    assert_eq!(session.request_move(4), Err(MoveError::GameInactive));
}

#[test]
fn test_out_of_bounds_cell() {
    let mut session = GameSession::default();
    session.request_mode_change(GameMode::TwoPlayer);
    assert_eq!(session.request_move(9), Err(MoveError::OutOfBounds(9)));
}

#[test]
fn test_two_player_has_no_computer_turn() {
    let mut session = GameSession::default();
    session.request_mode_change(GameMode::TwoPlayer);
    let snapshot = session.request_move(4).unwrap();
    assert_eq!(*snapshot.current_player(), Player::O);
    assert!(!session.computer_turn_pending());
    assert_eq!(session.play_computer_move(), None);

    // The second human plays O.
    let snapshot = session.request_move(0).unwrap();
    assert_eq!(snapshot.board().get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_single_player_human_cannot_move_for_computer() {
    let mut session = GameSession::default();
    session.request_mode_change(GameMode::SinglePlayer);
    session.request_move(4).unwrap();
    assert!(session.computer_turn_pending());

    let before = session.snapshot();
    assert_eq!(session.request_move(0), Err(MoveError::WrongSeat(Player::O)));
    assert_eq!(session.snapshot(), before);
}

#[tokio::test]
async fn test_computer_replies_once_per_human_move() {
    let mut session = GameSession::new(Duration::ZERO);
    session.request_mode_change(GameMode::SinglePlayer);
    assert_eq!(session.computer_reply().await, None);

    session.request_move(4).unwrap();
    let snapshot = session.computer_reply().await.expect("computer owes a move");
    assert_eq!(*snapshot.current_player(), Player::X);
    assert_eq!(
        snapshot.board().squares().iter().filter(|s| **s == Square::Occupied(Player::O)).count(),
        1
    );
    assert_eq!(session.computer_reply().await, None);
}

#[tokio::test]
async fn test_computer_reply_waits_for_delay() {
    let delay = Duration::from_millis(20);
    let mut session = GameSession::new(delay);
    session.request_mode_change(GameMode::SinglePlayer);
    session.request_move(0).unwrap();

    let start = tokio::time::Instant::now();
    let snapshot = session.computer_reply().await.expect("computer owes a move");
    assert!(start.elapsed() >= delay);
    assert!(*snapshot.active());
}

#[tokio::test]
async fn test_naive_opponent_never_wins() {
    let mut session = GameSession::default();
    let mut snapshot = session.request_mode_change(GameMode::SinglePlayer);

    // X always takes the first open square.
    while *snapshot.active() {
        let pos = snapshot.board().empty_positions().next().expect("live board has room");
        snapshot = session.request_move(pos.to_index()).unwrap();
        if let Some(reply) = session.computer_reply().await {
            snapshot = reply;
        }
    }
    assert_ne!(*snapshot.outcome(), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_reset_keeps_mode_and_clears_board() {
    let mut session = GameSession::default();
    session.request_mode_change(GameMode::SinglePlayer);
    session.request_move(4).unwrap();
    session.play_computer_move().unwrap();

    let first = session.request_reset();
    let second = session.request_reset();
    assert_eq!(first, second);
    assert_eq!(*first.mode(), GameMode::SinglePlayer);
    assert_eq!(*first.current_player(), Player::X);
    assert!(*first.active());
    assert_eq!(*first.outcome(), None);
    assert!(first.board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_snapshot_serializes_for_ui() {
    let mut session = GameSession::default();
    session.request_mode_change(GameMode::SinglePlayer);
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["active"], true);
    assert_eq!(json["mode"], "single-player");
    assert_eq!(json["current_player"], "X");
}

#[test]
fn test_delay_beyond_u64_millis_is_accepted() {
    let mut session = GameSession::new(Duration::MAX);
    session.request_mode_change(GameMode::SinglePlayer);
    session.request_move(4).unwrap();
    // The immediate path ignores the delay entirely.
    let snapshot = session.play_computer_move().expect("computer owes a move");
    assert_eq!(*snapshot.current_player(), Player::X);
}
