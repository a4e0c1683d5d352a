//! Command implementations.

use crate::config::GameConfig;
use crate::console::{ConsolePlayer, MenuChoice, choose_first, welcome};
use crate::render::{describe, mark_announcement, result_line};
use anyhow::{Context, Result};
use noughts::{
    Board, GameController, GameResult, Lineup, MinimaxPlayer, Orchestrator, Player, Seat, Side,
    best_move_with_stats, classify,
};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{info, instrument};

/// Best move for a position, as printed by `solve --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Side to move.
    pub side: Side,
    /// Classification of the input board.
    pub result: GameResult,
    /// Score for `side`: 1, 0 or -1.
    pub score: i8,
    /// Chosen cell, absent when the board is finished.
    pub best_move: Option<usize>,
    /// Boards visited by the search.
    pub nodes: u64,
}

/// Record of a computer-vs-computer game.
#[derive(Debug, Clone, Serialize)]
pub struct SelfplayReport {
    /// Cells played, X first.
    pub moves: Vec<usize>,
    /// Final result.
    pub result: GameResult,
}

/// Interactive play on stdin/stdout.
///
/// With `first` configured a single game is played; otherwise the start
/// menu is shown before each game until the player exits.
#[instrument(skip(config))]
pub fn play(config: &GameConfig) -> Result<()> {
    welcome(&mut io::stdout(), *config.show_guide())?;

    loop {
        let first = match config.first() {
            Some(seat) => *seat,
            None => match choose_first(&mut io::stdin().lock(), &mut io::stdout())? {
                MenuChoice::Play(seat) => seat,
                MenuChoice::Exit => {
                    println!("Thanks for playing!");
                    return Ok(());
                }
            },
        };

        let lineup = Lineup::from_first(first);
        // The stdin lock is released when the player is dropped at the end
        // of the game, before the menu reads again.
        let human = ConsolePlayer::new(config.player_name(), io::stdin().lock(), io::stdout());
        let computer = MinimaxPlayer::new(config.computer_name());
        run_game(lineup, Box::new(human), Box::new(computer), &mut io::stdout())?;

        if config.first().is_some() {
            return Ok(());
        }
    }
}

/// Plays one human-vs-computer game, writing progress to `out`.
pub fn run_game(
    lineup: Lineup,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    out: &mut dyn Write,
) -> Result<GameResult> {
    writeln!(out, "{}", mark_announcement(&lineup))?;
    writeln!(out, "{}", Board::new())?;

    let (player_x, player_o) = match lineup.seat(Side::X) {
        Seat::Human => (human, computer),
        Seat::Computer => (computer, human),
    };
    let mut orchestrator = Orchestrator::new(player_x, player_o);

    let mut write_error = None;
    let result = orchestrator.run(&mut |event| {
        for line in describe(event) {
            if let Err(e) = writeln!(out, "{}", line) {
                write_error.get_or_insert(e);
            }
        }
    })?;

    if let Some(e) = write_error {
        return Err(e).context("Failed to write game output");
    }
    info!(%result, "Game finished");
    Ok(result)
}

/// Computes the best move for a textual board.
#[instrument(skip(out))]
pub fn solve(board: &str, side: Side, json: bool, out: &mut dyn Write) -> Result<SolveReport> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let (outcome, stats) = best_move_with_stats(&board, side);

    let report = SolveReport {
        side,
        result: classify(&board),
        score: outcome.score,
        best_move: outcome.best_move,
        nodes: stats.nodes,
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", board)?;
        match report.best_move {
            Some(index) => writeln!(
                out,
                "Best move for {}: {} (score {}, {} positions searched)",
                side, index, report.score, report.nodes
            )?,
            None => writeln!(out, "Game already over: {}", result_line(&report.result))?,
        }
    }
    Ok(report)
}

/// Plays the computer against itself from an empty board.
#[instrument(skip(out))]
pub fn selfplay(json: bool, out: &mut dyn Write) -> Result<SelfplayReport> {
    let mut game = GameController::new(Side::FIRST);
    while !game.is_over() {
        let board = game.auto_move()?;
        if !json {
            if let Some(index) = game.last_move() {
                writeln!(out, "AI chose square {}", index)?;
            }
            writeln!(out, "{}", board)?;
        }
    }

    let report = SelfplayReport {
        moves: game.history().to_vec(),
        result: game.current_result(),
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", result_line(&report.result))?;
    }
    Ok(report)
}
