//! Player backed by the exhaustive search.

use super::Player;
use crate::search::best_move_with_stats;
use crate::types::{Board, Side};
use anyhow::Result;
use tracing::debug;

/// Unbeatable player that always plays the minimax move.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        let (outcome, stats) = best_move_with_stats(board, side);
        debug!(player = %self.name, nodes = stats.nodes, ?outcome, "Computer chose move");
        outcome
            .best_move
            .ok_or_else(|| anyhow::anyhow!("No legal moves available"))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_winning_cell() {
        let mut player = MinimaxPlayer::new("AI");
        let board: Board = "XX OO    ".parse().unwrap();
        assert_eq!(player.choose_move(&board, Side::X).unwrap(), 2);
    }

    #[test]
    fn test_finished_board_is_an_error() {
        let mut player = MinimaxPlayer::new("AI");
        let board: Board = "XXXOO    ".parse().unwrap();
        assert!(player.choose_move(&board, Side::O).is_err());
    }
}
