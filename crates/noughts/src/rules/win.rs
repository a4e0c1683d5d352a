//! Win and tie detection.

use super::result::GameResult;
use crate::types::{Board, Cell, Side};

/// The eight winning lines, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Returns the side owning the first completed line, if any.
///
/// When several lines are complete (only possible on injected boards), the
/// first in [`WINNING_LINES`] order wins.
pub fn winner(board: &Board) -> Option<Side> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(side) if cells[b] == cells[a] && cells[c] == cells[a] => Some(side),
        _ => None,
    })
}

/// Classifies any board snapshot.
pub fn classify(board: &Board) -> GameResult {
    match winner(board) {
        Some(side) => GameResult::Win(side),
        None if board.is_full() => GameResult::Tie,
        None => GameResult::InProgress,
    }
}

/// Checks only the lines through `index` for three marks of `side`.
///
/// The row and column of the cell are always checked; the diagonals only for
/// even indices, which are the corners and the center. On any board reached
/// by legal play this agrees with [`classify`] for the move just made.
pub fn completes_line(board: &Board, index: usize, side: Side) -> bool {
    if index >= board.cells().len() {
        return false;
    }
    let owned = |i: usize| board.get(i) == Some(Cell::Occupied(side));

    let row = index / 3 * 3;
    if (row..row + 3).all(owned) {
        return true;
    }

    let col = index % 3;
    if (0..3).map(|i| col + i * 3).all(owned) {
        return true;
    }

    index % 2 == 0 && ([0, 4, 8].into_iter().all(owned) || [2, 4, 6].into_iter().all(owned))
}
