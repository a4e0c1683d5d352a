//! Classification of a board snapshot.

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Result of classifying a board.
///
/// Always derived from a board, never stored as the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line completed and empty cells remain.
    InProgress,
    /// A side completed a line.
    Win(Side),
    /// The board is full with no completed line.
    Tie,
}

impl GameResult {
    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Win(side) => Some(*side),
            GameResult::InProgress | GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(side) => write!(f, "{} wins!", side),
            GameResult::Tie => write!(f, "It's a tie!"),
        }
    }
}
