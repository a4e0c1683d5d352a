//! Error types for move submission and board parsing.

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True for errors caused by a bad human request, which are answered by
    /// asking for another move.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::IndexOutOfRange(_) | MoveError::CellOccupied(_))
    }
}

impl std::error::Error for MoveError {}

/// Error produced when a textual board cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Board must have exactly 9 cells, got {}", len)]
    Length {
        /// Number of cells supplied.
        len: usize,
    },

    /// A character that is neither a mark nor an empty placeholder.
    #[display("Invalid character '{}' at position {}", character, position)]
    Character {
        /// The offending character.
        character: char,
        /// Cell index of the character.
        position: usize,
    },
}

impl std::error::Error for BoardParseError {}
