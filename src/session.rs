//! Play session: the single owner of the live game.
//!
//! Inbound requests from a UI go through [`GameSession`]; every change
//! hands back a [`Snapshot`] for rendering. In single-player mode the
//! computer reply is requested separately, after the human move has been
//! applied and evaluated.

use crate::games::tictactoe::{
    Board, Game, GameMode, MoveError, MoveOrigin, Outcome, Player, Position,
    minimax,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Everything a UI needs to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The 9 squares.
    board: Board,
    /// Whose turn it is (meaningful while active).
    current_player: Player,
    /// Whether moves are accepted.
    active: bool,
    /// Seat assignment.
    mode: GameMode,
    /// Winner or draw, once the game has ended.
    outcome: Option<Outcome>,
}

/// A play session with one live game.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    computer_delay: Duration,
}

impl GameSession {
    /// Creates a session with no game started yet.
    #[instrument]
    pub fn new(computer_delay: Duration) -> Self {
        info!(?computer_delay, "Creating game session");
        Self {
            game: Game::new(),
            computer_delay,
        }
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.game.state();
        Snapshot {
            board: *state.board(),
            current_player: state.current_player(),
            active: state.is_active(),
            mode: state.mode(),
            outcome: state.outcome(),
        }
    }

    /// Places a mark for the human seat at `cell_index` (0-8).
    #[instrument(skip(self))]
    pub fn request_move(&mut self, cell_index: usize) -> Result<Snapshot, MoveError> {
        let pos = Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;
        match self.game.play(pos, MoveOrigin::Human) {
            Ok(evaluation) => {
                debug!(?evaluation, "Human move accepted");
                Ok(self.snapshot())
            }
            Err(err) => {
                debug!(%err, "Human move ignored");
                Err(err)
            }
        }
    }

    /// Restarts with the current mode.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> Snapshot {
        let mode = self.game.state().mode();
        self.game.reset(mode);
        self.snapshot()
    }

    /// Switches mode; this is a restart with the new mode.
    #[instrument(skip(self))]
    pub fn request_mode_change(&mut self, mode: GameMode) -> Snapshot {
        self.game.reset(mode);
        self.snapshot()
    }

    /// Whether the computer owes a move.
    pub fn computer_turn_pending(&self) -> bool {
        self.game.is_computer_turn()
    }

    /// Waits the configured delay, then plays the computer's move.
    ///
    /// Returns `None` when it is not the computer's turn.
    #[instrument(skip(self))]
    pub async fn computer_reply(&mut self) -> Option<Snapshot> {
        if !self.computer_turn_pending() {
            return None;
        }
        if !self.computer_delay.is_zero() {
            tokio::time::sleep(self.computer_delay).await;
        }
        self.play_computer_move()
    }

    /// Plays the computer's move immediately.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Option<Snapshot> {
        if !self.computer_turn_pending() {
            debug!("No computer move owed");
            return None;
        }

        let seat = self.game.state().current_player();
        let board = *self.game.state().board();
        let Some(pos) = minimax::select_move(board, seat) else {
            warn!(%board, "Search returned no move on a live board");
            return None;
        };

        match self.game.play(pos, MoveOrigin::Computer) {
            Ok(evaluation) => {
                info!(position = pos.to_index(), ?evaluation, "Computer moved");
                Some(self.snapshot())
            }
            Err(err) => {
                warn!(%err, "Computer move rejected");
                None
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
