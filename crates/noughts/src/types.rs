//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the two competing marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// Side X (always opens the game).
    X,
    /// Side O.
    O,
}

impl Side {
    /// The side that makes the first move of every game.
    pub const FIRST: Side = Side::X;

    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Single-character symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Side::X),
            "o" | "O" => Ok(Side::O),
            other => Err(format!("unknown side '{}' (expected X or O)", other)),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns the owning side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    fn symbol(self) -> char {
        self.side().map_or(' ', Side::symbol)
    }
}

/// 3x3 board with cells in row-major order (row = index / 3, column = index % 3).
///
/// The board is a plain value: copying it yields an independent hypothetical
/// board, which is how the search explores positions without touching the
/// live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks whether the cell at `index` is on the board and empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `side` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IndexOutOfRange`] for an index past 8 and
    /// [`MoveError::CellOccupied`] when the cell already holds a mark. The
    /// board is left untouched on failure.
    pub fn place(&mut self, index: usize, side: Side) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::IndexOutOfRange(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(side);
                Ok(())
            }
        }
    }

    /// Returns a copy of this board with `side` placed at `index`.
    pub fn with_mark(&self, index: usize, side: Side) -> Result<Board, MoveError> {
        let mut next = *self;
        next.place(index, side)?;
        Ok(next)
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        rules::available_moves(self)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    /// True when at least one empty cell remains.
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// Number of marks placed so far.
    pub fn mark_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "| {} | {} | {} |",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells such as `"XX OO    "` or `"XX_OO____"`.
    ///
    /// `X` and `O` are accepted in either case; space, `.`, `_` and `-` mark
    /// an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardParseError::Length { len: chars.len() });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, (cell, character)) in cells.iter_mut().zip(chars).enumerate() {
            *cell = match character {
                'x' | 'X' => Cell::Occupied(Side::X),
                'o' | 'O' => Cell::Occupied(Side::O),
                ' ' | '.' | '_' | '-' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::Character {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(Self { cells })
    }
}
