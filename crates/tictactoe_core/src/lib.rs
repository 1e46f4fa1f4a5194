//! Tic-tac-toe engine: board state, move validation, win detection and
//! turn sequencing.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, coordinate mapping and line detection
//! - **GameLoop**: turn order, validation of raw input, terminal detection
//! - **Collaborators**: [`MoveSource`], [`Renderer`] and [`Announcer`] are
//!   supplied by the front end
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameLoop, GameStatus, MoveRequest, PlayerId};
//!
//! let mut game = GameLoop::default();
//! for (row, column) in [(1, 'A'), (1, 'B'), (2, 'A'), (2, 'B'), (3, 'A')] {
//!     game.submit(MoveRequest::new(row, column))?;
//! }
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Won { player: PlayerId::One, line: [0, 3, 6] }
//! );
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
mod script;
mod traits;
mod types;

pub mod invariants;

pub use board::{Board, CELL_COUNT, WINNING_LINES};
pub use error::{GameError, InputError};
pub use game::{GameLoop, GameStatus, Outcome};
pub use player::{Player, PlayerProfile};
pub use script::ScriptedMoves;
pub use traits::{Announcer, MoveSource, Renderer};
pub use types::{Cell, Column, MoveRequest, PlayerId};
