//! First-class invariants for the game loop.
//!
//! Invariants are logical properties that must hold after every applied move.
//! The game loop checks them in debug builds; they are also testable on their own.

use crate::board::Board;
use crate::game::{GameLoop, GameStatus};
use crate::types::{Cell, PlayerId};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: every cell is written once, by the player who claimed it.
///
/// Replays both players' `played_cells` onto an empty board. No index may be
/// claimed twice and the replay must equal the live board.
pub struct WriteOnceBoard;

impl Invariant<GameLoop> for WriteOnceBoard {
    fn holds(game: &GameLoop) -> bool {
        let mut replayed = Board::new();
        for player in game.players() {
            for &index in player.played_cells() {
                if replayed.place(index, *player.id()).is_err() {
                    return false;
                }
            }
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are written once, by their owner"
    }
}

/// Invariant: players alternate, player one first.
pub struct AlternatingTurns;

impl Invariant<GameLoop> for AlternatingTurns {
    fn holds(game: &GameLoop) -> bool {
        let one = game.player(PlayerId::One).played_cells().len();
        let two = game.player(PlayerId::Two).played_cells().len();

        let counts_ok = one == two || one == two + 1;
        let turn_ok = match game.status() {
            GameStatus::AwaitingMove(PlayerId::One) => one == two,
            GameStatus::AwaitingMove(PlayerId::Two) => one == two + 1,
            _ => true,
        };
        counts_ok && turn_ok
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}

/// Invariant: the status agrees with the board.
///
/// A win names a line the winner fully holds; a draw is a full board with no
/// line; an ongoing game has an open cell and no line.
pub struct StatusConsistent;

impl Invariant<GameLoop> for StatusConsistent {
    fn holds(game: &GameLoop) -> bool {
        let anyone_has_line = game
            .players()
            .iter()
            .any(|p| Board::winning_line_for(p.played_cells()).is_some());

        match game.status() {
            GameStatus::Won { player, line } => line.iter().all(|&index| {
                game.player(player).played_cells().contains(&index)
                    && game.board().cell(index) == Ok(Cell::Occupied(player))
            }),
            GameStatus::Draw => game.board().is_full() && !anyone_has_line,
            GameStatus::AwaitingMove(_) => !game.board().is_full() && !anyone_has_line,
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

/// All game loop invariants as a composable set.
pub type GameInvariants = (WriteOnceBoard, AlternatingTurns, StatusConsistent);
