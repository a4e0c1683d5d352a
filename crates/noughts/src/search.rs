//! Exhaustive minimax search.
//!
//! Plain minimax with no pruning or caching. Every node is a fresh copy of
//! the parent board, so no branch can observe another branch's moves.
//!
//! Scores are always from the perspective of the side asked to move at the
//! root: +1 it wins, 0 tie, -1 it loses. Among equally scored moves the
//! lowest index is kept.

use crate::rules::{GameResult, classify, moves::empty_cells};
use crate::types::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score and chosen move produced by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Game-theoretic value: 1, 0 or -1.
    pub score: i8,
    /// Chosen cell, `None` when the board is already terminal.
    pub best_move: Option<usize>,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Visited boards that were terminal.
    pub terminal_nodes: u64,
}

/// Terminal score of `result` for `maximizer`, or `None` while in progress.
pub fn score_for(result: GameResult, maximizer: Side) -> Option<i8> {
    match result {
        GameResult::InProgress => None,
        GameResult::Tie => Some(0),
        GameResult::Win(side) if side == maximizer => Some(1),
        GameResult::Win(_) => Some(-1),
    }
}

/// Finds the best move for `side`, which is to act on `board`.
///
/// A terminal board yields its score with no move.
pub fn best_move(board: &Board, side: Side) -> SearchOutcome {
    best_move_with_stats(board, side).0
}

/// [`best_move`] together with node counts.
#[instrument(skip(board), fields(marks = board.mark_count()))]
pub fn best_move_with_stats(board: &Board, side: Side) -> (SearchOutcome, SearchStats) {
    let mut stats = SearchStats::default();
    let outcome = minimax(board, side, side, &mut stats);
    debug!(
        score = outcome.score,
        best_move = ?outcome.best_move,
        nodes = stats.nodes,
        terminal_nodes = stats.terminal_nodes,
        "Search complete"
    );
    (outcome, stats)
}

fn minimax(board: &Board, to_act: Side, maximizer: Side, stats: &mut SearchStats) -> SearchOutcome {
    stats.nodes += 1;

    if let Some(score) = score_for(classify(board), maximizer) {
        stats.terminal_nodes += 1;
        return SearchOutcome {
            score,
            best_move: None,
        };
    }

    let maximizing = to_act == maximizer;
    let mut best: Option<(i8, usize)> = None;

    for index in empty_cells(board) {
        let child = board
            .with_mark(index, to_act)
            .expect("empty cell must accept a mark");
        let score = minimax(&child, to_act.opponent(), maximizer, stats).score;

        let improves = match best {
            None => true,
            Some((kept, _)) if maximizing => score > kept,
            Some((kept, _)) => score < kept,
        };
        if improves {
            best = Some((score, index));
        }
    }

    match best {
        Some((score, index)) => SearchOutcome {
            score,
            best_move: Some(index),
        },
        None => panic!("invariant violation: board in progress with no legal moves\n{board}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let outcome = best_move(&board("XX OO    "), Side::X);
        assert_eq!(outcome.best_move, Some(2));
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let outcome = best_move(&board("XX OO X  "), Side::O);
        assert_eq!(outcome.best_move, Some(5));
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_blocks_open_row() {
        let outcome = best_move(&board("OO  X    "), Side::X);
        assert_eq!(outcome.best_move, Some(2));
        assert!(outcome.score >= 0);
    }

    #[test]
    fn test_answers_center_with_corner() {
        let outcome = best_move(&board("    X    "), Side::O);
        assert_eq!(outcome.best_move, Some(0));
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_lost_position_keeps_lowest_index() {
        // X threatens both 2 and 6.
        let outcome = best_move(&board("XX XO   O"), Side::O);
        assert_eq!(outcome.score, -1);
        assert_eq!(outcome.best_move, Some(2));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let (outcome, stats) = best_move_with_stats(&Board::new(), Side::X);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.best_move, Some(0));
        assert_eq!(stats.nodes, 549_946);
    }

    #[test]
    fn test_terminal_board_returns_score_without_move() {
        let won = board("XXXOO    ");
        let (outcome, stats) = best_move_with_stats(&won, Side::O);
        assert_eq!(
            outcome,
            SearchOutcome {
                score: -1,
                best_move: None
            }
        );
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.terminal_nodes, 1);

        let tied = board("XOXXOOOXX");
        assert_eq!(best_move(&tied, Side::X).score, 0);
        assert_eq!(best_move(&tied, Side::X).best_move, None);
    }

    #[test]
    fn test_score_for() {
        assert_eq!(score_for(GameResult::InProgress, Side::X), None);
        assert_eq!(score_for(GameResult::Tie, Side::O), Some(0));
        assert_eq!(score_for(GameResult::Win(Side::O), Side::O), Some(1));
        assert_eq!(score_for(GameResult::Win(Side::X), Side::O), Some(-1));
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let b = board("X   O    ");
        let copy = b;
        best_move(&b, Side::X);
        assert_eq!(b, copy);
    }
}
