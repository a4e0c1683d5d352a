//! Properties checked across every reachable game.

use noughts::{
    Board, Cell, GameController, GameResult, Side, available_moves, best_move, classify,
    completes_line,
};

/// Visits every board reachable by legal play from `board`, calling `visit`
/// with the board, the side that just moved and the cell it played.
fn walk(board: &Board, to_move: Side, visit: &mut dyn FnMut(&Board, Side, usize)) {
    if classify(board).is_terminal() {
        return;
    }
    for index in available_moves(board) {
        let child = board.with_mark(index, to_move).unwrap();
        visit(&child, to_move, index);
        walk(&child, to_move.opponent(), visit);
    }
}

#[test]
fn test_line_check_agrees_with_classifier_on_every_reachable_board() {
    let mut checked = 0u64;
    walk(&Board::new(), Side::X, &mut |board, side, index| {
        assert_eq!(
            completes_line(board, index, side),
            classify(board) == GameResult::Win(side),
            "disagreement after {side} played {index}:\n{board}"
        );
        checked += 1;
    });
    assert_eq!(checked, 549_945);
}

#[test]
fn test_legal_moves_are_the_empty_cells() {
    walk(&Board::new(), Side::X, &mut |board, _, _| {
        if classify(board).is_terminal() {
            return;
        }
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9 - board.mark_count());
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|&i| board.get(i) == Some(Cell::Empty)));
    });
}

#[test]
fn test_perfect_play_from_empty_board_ties() {
    let mut game = GameController::new(Side::X);
    while !game.is_over() {
        game.auto_move().unwrap();
    }
    assert_eq!(game.current_result(), GameResult::Tie);
    assert_eq!(game.history().len(), 9);
}

/// Plays every possible opponent reply against the search and fails if the
/// opponent ever wins.
fn assert_never_loses(game: &GameController, computer: Side) {
    let Some(side) = game.to_move() else {
        assert_ne!(
            game.current_result(),
            GameResult::Win(computer.opponent()),
            "computer lost:\n{}",
            game.board()
        );
        return;
    };

    if side == computer {
        let mut next = game.clone();
        next.auto_move().unwrap();
        assert_never_loses(&next, computer);
    } else {
        for index in game.board().legal_moves() {
            let mut next = game.clone();
            next.request_move(index).unwrap();
            assert_never_loses(&next, computer);
        }
    }
}

#[test]
fn test_computer_never_loses_moving_first() {
    assert_never_loses(&GameController::new(Side::X), Side::X);
}

#[test]
fn test_computer_never_loses_moving_second() {
    assert_never_loses(&GameController::new(Side::X), Side::O);
}

#[test]
fn test_reference_positions() {
    let winning: Board = "XX OO    ".parse().unwrap();
    assert_eq!(best_move(&winning, Side::X).best_move, Some(2));

    let center: Board = "    X    ".parse().unwrap();
    let reply = best_move(&center, Side::O).best_move.unwrap();
    assert!([0, 2, 6, 8].contains(&reply));

    let tie: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(classify(&tie), GameResult::Tie);
}

#[test]
fn test_reset_after_finished_game() {
    let mut game = GameController::new(Side::X);
    while !game.is_over() {
        game.auto_move().unwrap();
    }
    game.reset(Side::X);
    assert_eq!(game.board(), Board::new());
    assert_eq!(classify(&game.board()), GameResult::InProgress);
}
