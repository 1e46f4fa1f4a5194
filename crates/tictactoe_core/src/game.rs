//! Turn sequencing for tic-tac-toe.
//!
//! [`GameLoop`] owns the board, both players and the game status. It takes
//! raw coordinates, validates them against the board, applies them and
//! decides when the game is over.

use crate::board::Board;
use crate::error::GameError;
use crate::player::{Player, PlayerProfile};
use crate::traits::{Announcer, MoveSource, Renderer};
use crate::types::{MoveRequest, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};

// ─────────────────────────────────────────────────────────────
//  Status and outcome
// ─────────────────────────────────────────────────────────────

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given player to move.
    AwaitingMove(PlayerId),
    /// A player completed a line. Terminal.
    Won {
        /// The winner.
        player: PlayerId,
        /// The completed triple.
        line: [usize; 3],
    },
    /// Board full with no line. Terminal.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// The outcome, once terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::Won { player, .. } => Some(Outcome::Won(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player won.
    Won(PlayerId),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game loop
// ─────────────────────────────────────────────────────────────

/// Two players taking turns on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLoop {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) status: GameStatus,
}

impl GameLoop {
    /// Starts a game with player one to move.
    #[instrument]
    pub fn new(one: PlayerProfile, two: PlayerProfile) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(PlayerId::One, one),
                Player::new(PlayerId::Two, two),
            ],
            status: GameStatus::AwaitingMove(PlayerId::One),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns a player by seat.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.seat()]
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player being waited on, or `None` once the game is over.
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::AwaitingMove(id) => Some(self.player(id)),
            _ => None,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Applies one move for the current player and returns the new status.
    ///
    /// A rejected move leaves the game exactly as it was.
    ///
    /// # Errors
    ///
    /// - `InvalidCoordinate` if the request does not name a cell.
    /// - `CellAlreadyOccupied` if the cell was already played.
    /// - `GameAlreadyOver` if the game has ended.
    /// - `InvariantViolation` (debug builds) if the move left the game inconsistent.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn submit(&mut self, request: MoveRequest) -> Result<GameStatus, GameError> {
        let GameStatus::AwaitingMove(mover) = self.status else {
            return Err(GameError::GameAlreadyOver);
        };

        let index = Board::translate(request.row, request.column)?;
        if self.board.is_occupied(index)? {
            return Err(GameError::CellAlreadyOccupied { index });
        }

        self.board.place(index, mover)?;
        self.players[mover.seat()].record(index);
        debug!(?mover, index, %request, "Move applied");

        self.status = if let Some(line) =
            Board::winning_line_for(self.players[mover.seat()].played_cells())
        {
            info!(?mover, ?line, "Line completed");
            GameStatus::Won { player: mover, line }
        } else if self.board.is_full() {
            info!("Board full, game drawn");
            GameStatus::Draw
        } else {
            GameStatus::AwaitingMove(mover.other())
        };

        #[cfg(debug_assertions)]
        GameInvariants::check_all(self).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Invariant check failed");
            GameError::InvariantViolation { description }
        })?;

        Ok(self.status)
    }

    /// Plays the game to the end.
    ///
    /// Renders the starting board, then keeps asking `input` for moves.
    /// Rejected moves are handed back to `input` and asked for again; every
    /// applied move is rendered. The outcome is announced once and returned.
    ///
    /// # Errors
    ///
    /// Any non-recoverable [`GameError`], including input failures. Nothing is
    /// announced in that case.
    #[instrument(skip_all)]
    pub fn run<I, R, A>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        announcer: &mut A,
    ) -> Result<Outcome, GameError>
    where
        I: MoveSource + ?Sized,
        R: Renderer + ?Sized,
        A: Announcer + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        info!("Starting game");
        renderer.render(self.board.cells(), None);

        loop {
            let mover = match self.status {
                GameStatus::AwaitingMove(id) => id,
                _ => break,
            };

            let request = input.request_move(self.player(mover))?;
            match self.submit(request) {
                Ok(status) => {
                    let highlight = match status {
                        GameStatus::Won { line, .. } => Some(line),
                        _ => None,
                    };
                    renderer.render(self.board.cells(), highlight);
                }
                Err(err) if err.is_recoverable() => {
                    warn!(?mover, %request, error = %err, "Move rejected");
                    input.rejected(self.player(mover), &err);
                }
                Err(err) => return Err(err),
            }
        }

        let outcome = self.outcome().ok_or_else(|| GameError::InvariantViolation {
            description: "game loop exited without an outcome".to_string(),
        })?;
        info!(%outcome, "Game over");
        announcer.announce(outcome);
        Ok(outcome)
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(
            PlayerProfile::default_for(PlayerId::One),
            PlayerProfile::default_for(PlayerId::Two),
        )
    }
}
