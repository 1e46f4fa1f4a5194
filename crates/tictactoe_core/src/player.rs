//! Players and their display profiles.

use crate::types::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How a player is shown: the mark they leave and the name they go by.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerProfile {
    /// Mark drawn in claimed cells, e.g. `"X"`.
    symbol: String,
    /// Display name, e.g. `"Player 1"`.
    label: String,
}

impl PlayerProfile {
    /// Default profile for a seat: `X` for player one, `O` for player two.
    pub fn default_for(id: PlayerId) -> Self {
        let symbol = match id {
            PlayerId::One => "X",
            PlayerId::Two => "O",
        };
        Self::new(symbol.to_string(), id.to_string())
    }
}

/// A seated player and the cells they have claimed, in move order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    id: PlayerId,
    /// Display profile.
    profile: PlayerProfile,
    /// Claimed cell indices, oldest first.
    played_cells: Vec<usize>,
}

impl Player {
    /// Seats a player with no moves yet.
    pub fn new(id: PlayerId, profile: PlayerProfile) -> Self {
        Self {
            id,
            profile,
            played_cells: Vec::new(),
        }
    }

    /// Mark drawn in this player's cells.
    pub fn symbol(&self) -> &str {
        self.profile.symbol()
    }

    /// Display name.
    pub fn label(&self) -> &str {
        self.profile.label()
    }

    /// Records a confirmed move.
    pub(crate) fn record(&mut self, index: usize) {
        self.played_cells.push(index);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}'s)", self.label(), self.symbol())
    }
}
