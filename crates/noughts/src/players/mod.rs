//! Player trait and implementations.

mod minimax;

pub use minimax::MinimaxPlayer;

use crate::types::{Board, Side};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Source of moves for one side of a game.
pub trait Player {
    /// Chooses a cell (0-8) for `side` on `board`.
    ///
    /// The value is not validated here; the controller rejects bad cells and
    /// the orchestrator asks again.
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<usize>;

    /// Display name.
    fn name(&self) -> &str;

    /// True for players that pick moves by search rather than by input.
    fn is_automated(&self) -> bool {
        false
    }
}

/// Who sits in a seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Moves come from a person.
    Human,
    /// Moves come from the search.
    Computer,
}

/// Assignment of seats to marks.
///
/// The seat that goes first always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// Seat playing X.
    pub x: Seat,
    /// Seat playing O.
    pub o: Seat,
}

impl Lineup {
    /// Human against computer, with `first` playing X.
    pub fn from_first(first: Seat) -> Self {
        match first {
            Seat::Human => Self {
                x: Seat::Human,
                o: Seat::Computer,
            },
            Seat::Computer => Self {
                x: Seat::Computer,
                o: Seat::Human,
            },
        }
    }

    /// Mark played by `seat`, if it plays at all.
    pub fn side_of(&self, seat: Seat) -> Option<Side> {
        if self.x == seat {
            Some(Side::X)
        } else if self.o == seat {
            Some(Side::O)
        } else {
            None
        }
    }

    /// Seat playing `side`.
    pub fn seat(&self, side: Side) -> Seat {
        match side {
            Side::X => self.x,
            Side::O => self.o,
        }
    }
}
