//! Authoritative game state machine for tic-tac-toe.
//!
//! States are Inactive, Active with X to move, and Active with O to move.
//! `reset` is the only way out of Inactive. A move is applied, then
//! evaluated; evaluation either ends the game or hands the turn over.

use super::action::{MoveError, MoveOrigin};
use super::phases::{Evaluation, Outcome};
use super::types::{GameMode, GameState};
use super::{Player, Position, rules};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    /// A move was applied and not yet evaluated.
    pending: bool,
}

impl Game {
    /// Creates a game that is inactive until a mode is chosen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clears the board and starts a fresh game with X to move.
    ///
    /// Used for both restart and mode change; nothing carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        info!(%mode, "Resetting game");
        self.state = GameState::fresh(mode);
        self.pending = false;
    }

    /// Places the current player's mark at `pos`.
    ///
    /// The turn does not change here; call [`Game::evaluate_and_advance`]
    /// next. On error nothing is modified.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, pos: Position, origin: MoveOrigin) -> Result<(), MoveError> {
        if !self.state.is_active() {
            debug!("Rejected: game inactive");
            return Err(MoveError::GameInactive);
        }

        if self.pending {
            debug!("Rejected: previous move not evaluated");
            return Err(MoveError::EvaluationPending);
        }

        let player = self.state.current_player();
        if !self.origin_controls(player, origin) {
            debug!(?origin, "Rejected: wrong seat");
            return Err(MoveError::WrongSeat(player));
        }

        if !self.state.board().is_empty(pos) {
            debug!("Rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.state.place(pos);
        self.pending = true;
        debug!(position = pos.to_index(), "Move applied");
        Ok(())
    }

    /// Checks for a win or a draw after a move, otherwise switches player.
    ///
    /// Without a pending move this only reports the current standing.
    #[instrument(skip(self))]
    pub fn evaluate_and_advance(&mut self) -> Evaluation {
        if !self.pending {
            return self
                .state
                .outcome()
                .map(Evaluation::from)
                .unwrap_or(Evaluation::Continuing);
        }
        self.pending = false;

        let board = *self.state.board();
        if let Some(winner) = rules::check_winner(&board) {
            info!(%winner, "Game won");
            self.state.finish(Outcome::Winner(winner));
            return Evaluation::Won(winner);
        }

        if rules::is_full(&board) {
            info!("Game drawn");
            self.state.finish(Outcome::Draw);
            return Evaluation::Draw;
        }

        self.state.switch_player();
        debug!(next = %self.state.current_player(), "Turn passes");
        Evaluation::Continuing
    }

    /// Applies a move and evaluates it in one step.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position, origin: MoveOrigin) -> Result<Evaluation, MoveError> {
        self.apply_move(pos, origin)?;
        Ok(self.evaluate_and_advance())
    }

    /// Whether the computer seat is the one to move.
    pub fn is_computer_turn(&self) -> bool {
        self.state.is_active()
            && !self.pending
            && self.state.mode().computer_seat() == Some(self.state.current_player())
    }

    fn origin_controls(&self, player: Player, origin: MoveOrigin) -> bool {
        match (self.state.mode().computer_seat(), origin) {
            (Some(computer), MoveOrigin::Computer) => player == computer,
            (Some(computer), MoveOrigin::Human) => player != computer,
            (None, MoveOrigin::Human) => true,
            (None, MoveOrigin::Computer) => false,
        }
    }
}
