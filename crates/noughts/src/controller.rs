//! Turn-order state machine for a single game.
//!
//! The controller owns the live board. Each handle is an independent game;
//! nothing is shared between handles.

use crate::error::MoveError;
use crate::rules::{GameResult, classify, completes_line};
use crate::search::best_move;
use crate::types::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    /// Waiting for `Side` to move.
    AwaitingMove(Side),
    /// No further moves are accepted.
    Finished(GameResult),
}

/// Owns one game: the board, whose turn it is, and the moves played.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    state: ControllerState,
    history: Vec<usize>,
}

impl GameController {
    /// Starts a game on an empty board with `first` to move.
    #[instrument]
    pub fn new(first: Side) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            state: ControllerState::AwaitingMove(first),
            history: Vec::new(),
        }
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Current phase.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Side to move, or `None` once finished.
    pub fn to_move(&self) -> Option<Side> {
        match self.state {
            ControllerState::AwaitingMove(side) => Some(side),
            ControllerState::Finished(_) => None,
        }
    }

    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.state, ControllerState::Finished(_))
    }

    /// Result recomputed from the board.
    pub fn current_result(&self) -> GameResult {
        let result = classify(&self.board);
        if let ControllerState::Finished(cached) = self.state {
            debug_assert_eq!(cached, result, "cached result diverged from board");
        }
        result
    }

    /// Cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The most recent cell played.
    pub fn last_move(&self) -> Option<usize> {
        self.history.last().copied()
    }

    /// Applies a requested move for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::IndexOutOfRange`] or [`MoveError::CellOccupied`] for a bad
    /// request, [`MoveError::GameOver`] once finished. The game is unchanged
    /// on error.
    #[instrument(skip(self), fields(to_move = ?self.to_move()))]
    pub fn request_move(&mut self, index: usize) -> Result<Board, MoveError> {
        let side = self.awaiting()?;
        self.apply(index, side).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        Ok(self.board)
    }

    /// Searches for and applies the best move for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once finished.
    #[instrument(skip(self), fields(to_move = ?self.to_move()))]
    pub fn auto_move(&mut self) -> Result<Board, MoveError> {
        let side = self.awaiting()?;
        let outcome = best_move(&self.board, side);
        let index = outcome
            .best_move
            .expect("search on an unfinished game must choose a move");
        debug!(index, score = outcome.score, "Search chose move");
        self.apply(index, side)?;
        Ok(self.board)
    }

    /// Clears the board and starts a new game on this handle.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Side) {
        info!("Resetting game");
        self.board.reset();
        self.history.clear();
        self.state = ControllerState::AwaitingMove(first);
    }

    fn awaiting(&self) -> Result<Side, MoveError> {
        self.to_move().ok_or(MoveError::GameOver)
    }

    fn apply(&mut self, index: usize, side: Side) -> Result<(), MoveError> {
        self.board.place(index, side)?;
        self.history.push(index);

        let result = classify(&self.board);
        let quick = completes_line(&self.board, index, side);
        assert_eq!(
            quick,
            result == GameResult::Win(side),
            "invariant violation: line check through cell {index} disagrees with {result:?}\n{}",
            self.board
        );

        debug!(%side, index, ?result, "Move applied");
        self.state = if result.is_terminal() {
            info!(%result, moves = self.history.len(), "Game finished");
            ControllerState::Finished(result)
        } else {
            ControllerState::AwaitingMove(side.opponent())
        };
        Ok(())
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Side::FIRST)
    }
}
