//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised by the board or the game loop.
///
/// Only [`GameError::InvalidCoordinate`] and [`GameError::CellAlreadyOccupied`]
/// are game-rule rejections. Every other variant means a caller broke an
/// internal contract and the game cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The coordinate does not name a cell on the board.
    #[display("Invalid column and row index: {coordinate}")]
    InvalidCoordinate {
        /// The coordinate as the player typed it (or as rebuilt from its parts).
        coordinate: String,
    },

    /// The target cell was already played.
    #[display("Cell {index} was already played")]
    CellAlreadyOccupied {
        /// Linear index of the occupied cell.
        index: usize,
    },

    /// A linear index outside `0..9` reached the board.
    #[display("Cell index {index} is out of range (must be 0-8)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// A move was submitted after the game ended.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A post-move invariant check failed.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Descriptions of every failed invariant, joined.
        description: String,
    },

    /// The move source could not supply another move.
    #[display("{_0}")]
    Input(InputError),
}

impl GameError {
    /// Returns true for rejections the player can fix by choosing another cell.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCoordinate { .. } | GameError::CellAlreadyOccupied { .. }
        )
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        GameError::Input(err)
    }
}

/// Failure to obtain a move from a [`crate::MoveSource`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rule_rejections_are_recoverable() {
        assert!(GameError::InvalidCoordinate { coordinate: "D1".into() }.is_recoverable());
        assert!(GameError::CellAlreadyOccupied { index: 4 }.is_recoverable());
        assert!(!GameError::IndexOutOfRange { index: 9 }.is_recoverable());
        assert!(!GameError::GameAlreadyOver.is_recoverable());
        assert!(!GameError::from(InputError::new("closed")).is_recoverable());
    }

    #[test]
    fn test_input_error_tracks_caller() {
        let err = InputError::new("stdin closed");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("stdin closed"));
    }
}
