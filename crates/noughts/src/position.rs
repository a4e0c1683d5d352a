//! Named board positions for parsing human input.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a cell index ("0"-"8") or a case-insensitive label.
    ///
    /// Numbers are returned as raw indices so that out-of-range values reach
    /// the controller and are rejected there. Labels must match exactly, with
    /// `-`, `_` and spaces treated alike ("top left", "TOP_LEFT").
    #[instrument]
    pub fn parse_index(input: &str) -> Option<usize> {
        let input = input.trim();
        if let Ok(num) = input.parse::<usize>() {
            return Some(num);
        }

        let wanted = normalize(input);
        Position::iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .map(Position::to_index)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_index() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
    }

    #[test]
    fn test_position_from_index() {
        assert_eq!(Position::from_index(0), Some(Position::TopLeft));
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_index_numbers() {
        assert_eq!(Position::parse_index("4"), Some(4));
        assert_eq!(Position::parse_index(" 0 "), Some(0));
        // Range checking belongs to the controller.
        assert_eq!(Position::parse_index("12"), Some(12));
    }

    #[test]
    fn test_parse_index_labels() {
        assert_eq!(Position::parse_index("center"), Some(4));
        assert_eq!(Position::parse_index("Top left"), Some(0));
        assert_eq!(Position::parse_index("BOTTOM_RIGHT"), Some(8));
        assert_eq!(Position::parse_index("middle"), None);
        assert_eq!(Position::parse_index("banana"), None);
    }
}
