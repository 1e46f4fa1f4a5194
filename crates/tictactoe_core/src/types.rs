//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Seat at the table. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PlayerId {
    /// First player.
    #[strum(to_string = "Player 1")]
    One,
    /// Second player.
    #[strum(to_string = "Player 2")]
    Two,
}

impl PlayerId {
    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Position of this player in a `[_; 2]` seat array.
    pub fn seat(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A cell on the board. Written at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet played.
    #[default]
    Empty,
    /// Claimed by a player.
    Occupied(PlayerId),
}

impl Cell {
    /// True once a player has claimed the cell.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// The player holding the cell, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Board column, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Column {
    /// Leftmost column.
    A,
    /// Middle column.
    B,
    /// Rightmost column.
    C,
}

impl Column {
    /// Offset of the column within a row.
    pub fn offset(self) -> usize {
        match self {
            Column::A => 0,
            Column::B => 1,
            Column::C => 2,
        }
    }

    /// Column at a row offset (0-2).
    pub fn from_offset(offset: usize) -> Option<Self> {
        match offset {
            0 => Some(Column::A),
            1 => Some(Column::B),
            2 => Some(Column::C),
            _ => None,
        }
    }

    /// Column named by an uppercase letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Column::A),
            'B' => Some(Column::B),
            'C' => Some(Column::C),
            _ => None,
        }
    }
}

/// A raw, unvalidated coordinate as supplied by an input source.
///
/// Nothing here guarantees the pair names a cell; [`crate::Board::translate`]
/// decides that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveRequest {
    /// Row number, 1-based.
    pub row: u32,
    /// Column letter.
    pub column: char,
}

impl MoveRequest {
    /// Parses console syntax: a column letter followed by a row number.
    ///
    /// Case-insensitive and whitespace-tolerant (`"A2"`, `" c3 "`). Values with
    /// the right shape but off the board (`"A4"`, `"D1"`) parse successfully.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCoordinate` when the text is not a letter
    /// followed by digits.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let trimmed = text.trim();
        let invalid = || GameError::InvalidCoordinate {
            coordinate: trimmed.to_string(),
        };

        let mut chars = trimmed.chars();
        let column = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(invalid)?
            .to_ascii_uppercase();

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let row = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { row, column })
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_alternates() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(PlayerId::One.other().other(), PlayerId::One);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert!(!Cell::Empty.is_occupied());
        assert_eq!(Cell::Occupied(PlayerId::Two).owner(), Some(PlayerId::Two));
        assert!(Cell::Occupied(PlayerId::Two).is_occupied());
    }

    #[test]
    fn test_parse_accepts_console_syntax() {
        assert_eq!(MoveRequest::parse("A2"), Ok(MoveRequest::new(2, 'A')));
        assert_eq!(MoveRequest::parse(" c3 \n"), Ok(MoveRequest::new(3, 'C')));
    }

    #[test]
    fn test_parse_keeps_off_board_values() {
        assert_eq!(MoveRequest::parse("a4"), Ok(MoveRequest::new(4, 'A')));
        assert_eq!(MoveRequest::parse("D1"), Ok(MoveRequest::new(1, 'D')));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "A", "3C", "22", "A-1", "AB1", "A1x"] {
            assert!(
                matches!(
                    MoveRequest::parse(text),
                    Err(GameError::InvalidCoordinate { .. })
                ),
                "{text:?} should not parse"
            );
        }
    }
}
