//! Noughts - tic-tac-toe rules with an unbeatable opponent
//!
//! This library provides the game core used by the `noughts` terminal client.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid with move legality
//! - **Rules**: win/tie classification and move generation over any board
//! - **Search**: exhaustive minimax choosing the best move for a side
//! - **Controller**: turn order and terminal detection for one game
//! - **Orchestrator**: drives a game between two [`Player`]s
//!
//! # Example
//!
//! ```
//! use noughts::{GameController, GameResult, Side};
//!
//! let mut game = GameController::new(Side::X);
//! game.request_move(4).unwrap();
//! while !game.is_over() {
//!     game.auto_move().unwrap();
//! }
//! assert_ne!(game.current_result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod orchestrator;
mod players;
mod position;
pub mod rules;
mod search;
mod types;

pub use controller::{ControllerState, GameController};
pub use error::{BoardParseError, MoveError};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Lineup, MinimaxPlayer, Player, Seat};
pub use position::Position;
pub use rules::{GameResult, WINNING_LINES, available_moves, classify, completes_line, winner};
pub use search::{SearchOutcome, SearchStats, best_move, best_move_with_stats, score_for};
pub use types::{Board, CELL_COUNT, Cell, Side};
