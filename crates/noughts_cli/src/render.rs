//! Text rendering of boards and game events.

use noughts::{GameEvent, GameResult, Lineup, MoveError, Seat, Side};

/// The numbered layout shown before play.
pub fn board_guide() -> String {
    [
        "",
        "Board Layout (Enter the number to place your mark):",
        " 0 | 1 | 2 ",
        "---+---+---",
        " 3 | 4 | 5 ",
        "---+---+---",
        " 6 | 7 | 8 ",
        "",
        "Example: Enter '4' to place your mark in the center square",
        "",
    ]
    .join("\n")
}

/// Announces which mark each participant plays.
pub fn mark_announcement(lineup: &Lineup) -> String {
    let human = lineup.side_of(Seat::Human).unwrap_or(Side::X);
    format!("You are '{}', the AI is '{}'", human, human.opponent())
}

/// Message shown for a rejected move.
pub fn rejection(error: &MoveError) -> String {
    match error {
        MoveError::IndexOutOfRange(_) => "Please enter a number between 0-8".to_string(),
        MoveError::CellOccupied(_) => "Invalid move. Try again.".to_string(),
        MoveError::GameOver => error.to_string(),
    }
}

/// Final message for a result.
pub fn result_line(result: &GameResult) -> String {
    result.to_string()
}

/// Lines to print for an event.
pub fn describe(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::MoveMade {
            index,
            board,
            automated,
            ..
        } => {
            let mut lines = Vec::new();
            if *automated {
                lines.push(format!("AI chose square {}", index));
            }
            lines.push(board.to_string());
            lines
        }
        GameEvent::MoveRejected { error, .. } => vec![rejection(error)],
        GameEvent::GameOver(result) => vec![result_line(result)],
    }
}
