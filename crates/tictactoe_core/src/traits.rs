//! Collaborators the game loop drives: input, rendering and result notification.

use crate::error::{GameError, InputError};
use crate::game::Outcome;
use crate::player::Player;
use crate::types::{Cell, MoveRequest};

/// Supplies moves for the player whose turn it is.
pub trait MoveSource {
    /// Blocks until a coordinate is available for `player`.
    ///
    /// Called again after every rejected move.
    fn request_move(&mut self, player: &Player) -> Result<MoveRequest, InputError>;

    /// Told why the last move was refused, before the next request.
    fn rejected(&mut self, _player: &Player, _error: &GameError) {}
}

/// Draws the board.
pub trait Renderer {
    /// Called with the initial board and after every applied move.
    ///
    /// `highlight` carries the winning triple when the move just won.
    fn render(&mut self, cells: &[Cell; 9], highlight: Option<[usize; 3]>);
}

/// Reports how the game ended. Called exactly once per game.
pub trait Announcer {
    /// Announces the final outcome.
    fn announce(&mut self, outcome: Outcome);
}
