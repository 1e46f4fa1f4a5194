//! Pre-recorded move sources.

use crate::error::{GameError, InputError};
use crate::player::Player;
use crate::traits::MoveSource;
use crate::types::MoveRequest;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Feeds a fixed list of moves to the game loop, in order.
///
/// Rejected moves are recorded and skipped; the next scripted move is
/// offered instead. Running out of moves is an [`InputError`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    pending: VecDeque<MoveRequest>,
    rejections: Vec<(MoveRequest, GameError)>,
    last: Option<MoveRequest>,
}

impl ScriptedMoves {
    /// Creates a script from moves in play order.
    pub fn new(moves: impl IntoIterator<Item = MoveRequest>) -> Self {
        Self {
            pending: moves.into_iter().collect(),
            rejections: Vec::new(),
            last: None,
        }
    }

    /// Parses console coordinates separated by whitespace or commas,
    /// e.g. `"A1 B1, a2"`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCoordinate` for the first token that is not
    /// a column letter followed by a row number.
    #[instrument]
    pub fn parse(script: &str) -> Result<Self, GameError> {
        let moves = script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(MoveRequest::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(moves))
    }

    /// Moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Every move the game loop refused, with the reason.
    pub fn rejections(&self) -> &[(MoveRequest, GameError)] {
        &self.rejections
    }
}

impl MoveSource for ScriptedMoves {
    fn request_move(&mut self, player: &Player) -> Result<MoveRequest, InputError> {
        let next = self
            .pending
            .pop_front()
            .ok_or_else(|| InputError::new(format!("script ran out of moves for {}", player)))?;
        debug!(%next, player = %player.label(), "Scripted move");
        self.last = Some(next);
        Ok(next)
    }

    fn rejected(&mut self, _player: &Player, error: &GameError) {
        if let Some(request) = self.last.take() {
            self.rejections.push((request, error.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerProfile;
    use crate::types::PlayerId;

    #[test]
    fn test_parse_mixed_separators() {
        let script = ScriptedMoves::parse(" A1 b2,C3\n").unwrap();
        assert_eq!(script.remaining(), 3);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ScriptedMoves::parse("A1 middle"),
            Err(GameError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_exhausted_script_is_input_error() {
        let player = Player::new(PlayerId::One, PlayerProfile::default_for(PlayerId::One));
        let mut script = ScriptedMoves::new([MoveRequest::new(1, 'A')]);

        assert_eq!(script.request_move(&player), Ok(MoveRequest::new(1, 'A')));
        let err = script.request_move(&player).unwrap_err();
        assert!(err.message.contains("ran out of moves"));
    }
}
