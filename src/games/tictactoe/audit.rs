//! Exhaustive audit of the computer seat.
//!
//! Plays every possible sequence of legal X moves against the minimax
//! reply for O, through the same state machine a live session uses.

use super::action::MoveOrigin;
use super::game::Game;
use super::minimax::select_move;
use super::phases::Evaluation;
use super::types::GameMode;
use super::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Tally of finished games, one per distinct X line of play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AuditReport {
    /// Games that ended in a draw.
    draws: u32,
    /// Games the computer (O) won.
    computer_wins: u32,
    /// Games X won. Anything but zero is a bug in the search.
    human_wins: u32,
    /// Live boards where the computer produced no legal reply.
    invalid_replies: u32,
}

impl AuditReport {
    /// Total number of games played.
    pub fn games(&self) -> u32 {
        self.draws + self.computer_wins + self.human_wins
    }

    /// True when the computer lost no game and always had a legal reply.
    pub fn computer_never_lost(&self) -> bool {
        self.human_wins == 0 && self.invalid_replies == 0
    }

    fn record(&mut self, evaluation: Evaluation) {
        match evaluation {
            Evaluation::Won(Player::X) => self.human_wins += 1,
            Evaluation::Won(Player::O) => self.computer_wins += 1,
            Evaluation::Draw => self.draws += 1,
            Evaluation::Continuing => {}
        }
    }
}

/// Runs every X strategy to the end against the computer.
#[instrument]
pub fn exhaustive_audit() -> AuditReport {
    let mut game = Game::new();
    game.reset(GameMode::SinglePlayer);

    let mut report = AuditReport::default();
    explore(&game, &mut report);

    if report.computer_never_lost() {
        info!(
            games = report.games(),
            draws = report.draws,
            computer_wins = report.computer_wins,
            "Audit passed"
        );
    } else {
        warn!(
            human_wins = report.human_wins,
            invalid_replies = report.invalid_replies,
            "Audit found games the computer lost"
        );
    }
    report
}

/// X to move in `game`; branches over every empty square.
fn explore(game: &Game, report: &mut AuditReport) {
    for pos in game.state().board().empty_positions() {
        let mut branch = game.clone();
        let Ok(evaluation) = branch.play(pos, MoveOrigin::Human) else {
            continue;
        };
        if evaluation.is_terminal() {
            report.record(evaluation);
            continue;
        }

        let reply = select_move(*branch.state().board(), Player::O);
        match reply.map(|reply: Position| branch.play(reply, MoveOrigin::Computer)) {
            Some(Ok(Evaluation::Continuing)) => explore(&branch, report),
            Some(Ok(evaluation)) => report.record(evaluation),
            Some(Err(err)) => {
                warn!(%err, board = %branch.state().board(), "Computer reply rejected");
                report.invalid_replies += 1;
            }
            None => {
                warn!(board = %branch.state().board(), "Computer found no move on a live board");
                report.invalid_replies += 1;
            }
        }
    }
}
