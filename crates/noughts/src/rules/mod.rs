//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. They never hold on to the board they
//! are given, so they apply equally to the live game and to the hypothetical
//! boards explored by the search.

pub mod moves;
pub mod result;
pub mod win;

pub use moves::available_moves;
pub use result::GameResult;
pub use win::{WINNING_LINES, classify, completes_line, winner};
