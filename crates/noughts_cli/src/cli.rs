//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::{Seat, Side};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the computer
    Play {
        /// Who moves first (and plays X). Without it, a menu is shown.
        #[arg(long, value_enum)]
        first: Option<FirstMover>,

        /// Path to a TOML config file (falls back to $NOUGHTS_CONFIG, then ./noughts.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the best move for a position
    Solve {
        /// Nine cells in row-major order, e.g. "XX_OO____"
        board: String,

        /// Side to move
        #[arg(short, long, default_value = "X")]
        side: Side,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides from an empty board
    Selfplay {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Who takes the first move.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMover {
    /// You move first and play X
    Human,
    /// The computer moves first and plays X
    Computer,
}

impl From<FirstMover> for Seat {
    fn from(first: FirstMover) -> Self {
        match first {
            FirstMover::Human => Seat::Human,
            FirstMover::Computer => Seat::Computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_first() {
        let cli = Cli::try_parse_from(["noughts", "play", "--first", "human"]).unwrap();
        match cli.command {
            Command::Play { first, config } => {
                assert_eq!(first, Some(FirstMover::Human));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_solve_side() {
        let cli = Cli::try_parse_from(["noughts", "solve", "XX_OO____", "--side", "o"]).unwrap();
        match cli.command {
            Command::Solve { board, side, json } => {
                assert_eq!(board, "XX_OO____");
                assert_eq!(side, Side::O);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_side() {
        assert!(Cli::try_parse_from(["noughts", "solve", "XX_OO____", "--side", "Z"]).is_err());
    }
}
