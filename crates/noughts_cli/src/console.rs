//! Human player reading moves from a line-oriented input.

use crate::render::board_guide;
use anyhow::{Result, bail};
use noughts::{Board, Player, Position, Seat, Side};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player that reads one move per line.
///
/// Lines that are neither a number nor a position label are answered with a
/// hint and read again. Numbers are passed through unchecked so that the
/// controller decides whether the cell is playable.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a new console player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn choose_move(&mut self, _board: &Board, side: Side) -> Result<usize> {
        loop {
            write!(self.output, "Enter your move (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed");
            }

            match Position::parse_index(&line) {
                Some(index) => {
                    debug!(player = %self.name, %side, index, "Human chose move");
                    return Ok(index);
                }
                None => writeln!(self.output, "Please enter a number between 0-8")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a game with this seat moving first.
    Play(Seat),
    /// Leave the program.
    Exit,
}

/// Shows the start menu until a valid choice is entered.
///
/// End of input counts as exit.
pub fn choose_first<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<MenuChoice> {
    loop {
        writeln!(output, "\nChoose who goes first:")?;
        writeln!(output, "1. AI goes first")?;
        writeln!(output, "2. You go first")?;
        writeln!(output, "3. Exit")?;
        write!(output, "Enter your choice (1/2/3): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Exit);
        }

        match line.trim() {
            "1" => return Ok(MenuChoice::Play(Seat::Computer)),
            "2" => return Ok(MenuChoice::Play(Seat::Human)),
            "3" => return Ok(MenuChoice::Exit),
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

/// Writes the welcome banner and optional guide.
pub fn welcome<W: Write>(output: &mut W, show_guide: bool) -> Result<()> {
    writeln!(output, "Welcome to Tic Tac Toe!")?;
    if show_guide {
        writeln!(output, "{}", board_guide())?;
    }
    Ok(())
}
