//! Move generation.

use crate::types::{Board, Cell};

/// Indices of the empty cells in ascending order.
pub fn available_moves(board: &Board) -> Vec<usize> {
    empty_cells(board).collect()
}

/// Iterator form of [`available_moves`], used by the search to avoid an
/// allocation per node.
pub(crate) fn empty_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
}
