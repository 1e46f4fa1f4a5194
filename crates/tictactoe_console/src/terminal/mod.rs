//! Terminal implementations of the game collaborators.

mod input;
mod render;

pub use input::LineInput;
pub use render::{BoardView, Palette, TerminalAnnouncer};
