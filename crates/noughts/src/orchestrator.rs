//! Game orchestration between players.

use crate::controller::GameController;
use crate::error::MoveError;
use crate::players::Player;
use crate::rules::GameResult;
use crate::types::{Board, Side};
use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

/// Notifications emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// Player name.
        player: String,
        /// Mark placed.
        side: Side,
        /// Cell played.
        index: usize,
        /// Board after the move.
        board: Board,
        /// True when the move came from the search.
        automated: bool,
    },
    /// A requested move was refused; the same player is asked again.
    MoveRejected {
        /// Side whose request failed.
        side: Side,
        /// Why it failed.
        error: MoveError,
    },
    /// Game ended.
    GameOver(GameResult),
}

/// Runs one game at a time between two players.
pub struct Orchestrator {
    game: GameController,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator; X moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: GameController::new(Side::FIRST),
            player_x,
            player_o,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Plays until the game finishes, reporting progress to `on_event`.
    ///
    /// Rejected requests from a human player are reported and asked for
    /// again. A rejected move from an automated player is an error.
    pub fn run(&mut self, on_event: &mut dyn FnMut(&GameEvent)) -> Result<GameResult> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );

        while let Some(side) = self.game.to_move() {
            let player = match side {
                Side::X => &mut self.player_x,
                Side::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %side, "Waiting for move");
            let index = player
                .choose_move(&self.game.board(), side)
                .with_context(|| format!("{} could not choose a move", player.name()))?;

            match self.game.request_move(index) {
                Ok(board) => on_event(&GameEvent::MoveMade {
                    player: player.name().to_string(),
                    side,
                    index,
                    board,
                    automated: player.is_automated(),
                }),
                Err(error) if error.is_retryable() && !player.is_automated() => {
                    warn!(player = %player.name(), %error, "Asking again");
                    on_event(&GameEvent::MoveRejected { side, error });
                }
                Err(error) => bail!("{} made an illegal move: {}", player.name(), error),
            }
        }

        let result = self.game.current_result();
        info!(%result, "Game over");
        on_event(&GameEvent::GameOver(result));
        Ok(result)
    }

    /// Starts a fresh game with the same players.
    pub fn restart(&mut self) {
        self.game.reset(Side::FIRST);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::MinimaxPlayer;
    use std::collections::VecDeque;

    /// Plays a fixed list of cells.
    struct Scripted {
        moves: VecDeque<usize>,
    }

    impl Scripted {
        fn new(moves: &[usize]) -> Self {
            Self {
                moves: moves.iter().copied().collect(),
            }
        }
    }

    impl Player for Scripted {
        fn choose_move(&mut self, _board: &Board, _side: Side) -> Result<usize> {
            self.moves
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_rejected_moves_are_retried() {
        // Human X tries an occupied cell and an out-of-range cell on its
        // second turn before playing 8.
        let human = Scripted::new(&[4, 4, 12, 8, 1, 2, 3, 5, 6, 7]);
        let mut orchestrator =
            Orchestrator::new(Box::new(human), Box::new(MinimaxPlayer::new("AI")));

        let mut events = Vec::new();
        let result = orchestrator.run(&mut |e| events.push(e.clone())).unwrap();

        let rejected: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::MoveRejected { error, .. } => Some(*error),
                _ => None,
            })
            .collect();
        assert_eq!(
            rejected[..2],
            [MoveError::CellOccupied(4), MoveError::IndexOutOfRange(12)]
        );
        assert_ne!(result, GameResult::Win(Side::X));
        assert_eq!(events.last(), Some(&GameEvent::GameOver(result)));
    }

    #[test]
    fn test_computer_against_itself_ties() {
        let mut orchestrator = Orchestrator::new(
            Box::new(MinimaxPlayer::new("AI 1")),
            Box::new(MinimaxPlayer::new("AI 2")),
        );
        let mut moves = 0;
        let result = orchestrator
            .run(&mut |e| {
                if matches!(e, GameEvent::MoveMade { automated: true, .. }) {
                    moves += 1;
                }
            })
            .unwrap();
        assert_eq!(result, GameResult::Tie);
        assert_eq!(moves, 9);
    }

    #[test]
    fn test_player_error_propagates() {
        let mut orchestrator = Orchestrator::new(
            Box::new(Scripted::new(&[])),
            Box::new(MinimaxPlayer::new("AI")),
        );
        assert!(orchestrator.run(&mut |_| {}).is_err());
    }

    #[test]
    fn test_restart_clears_board() {
        let mut orchestrator = Orchestrator::new(
            Box::new(MinimaxPlayer::new("AI 1")),
            Box::new(MinimaxPlayer::new("AI 2")),
        );
        orchestrator.run(&mut |_| {}).unwrap();
        orchestrator.restart();
        assert_eq!(orchestrator.game().board(), Board::new());
        assert_eq!(orchestrator.game().to_move(), Some(Side::X));
    }
}
