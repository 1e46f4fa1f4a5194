//! Line-based move input.

use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use tictactoe_core::{GameError, InputError, MoveRequest, MoveSource, Player};
use tracing::{debug, instrument};

/// Reads coordinates like `A2` / `c3`, one per line.
///
/// Unreadable lines are answered with an error and the prompt repeats;
/// end of input is an [`InputError`].
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates an input reading from `reader` and prompting on `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn complain(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "\n{}", message.red())?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for LineInput<R, W> {
    #[instrument(skip_all, fields(player = %player.label()))]
    fn request_move(&mut self, player: &Player) -> Result<MoveRequest, InputError> {
        loop {
            write!(
                self.writer,
                "\n{}, enter the column and row of your cell (e.g. 'A2' / 'c3')\n => ",
                player
            )?;
            self.writer.flush()?;

            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(InputError::new("input closed before the game ended"));
            }
            let line = String::from_utf8_lossy(&raw);

            match MoveRequest::parse(&line) {
                Ok(request) => {
                    debug!(%request, "Read move");
                    return Ok(request);
                }
                Err(err) => {
                    debug!(error = %err, "Unreadable move");
                    self.complain(&err.to_string())?;
                }
            }
        }
    }

    fn rejected(&mut self, _player: &Player, error: &GameError) {
        let message = match error {
            GameError::CellAlreadyOccupied { .. } => {
                "That cell was already played. Pick another!".to_string()
            }
            other => format!("{}. Try again!", other),
        };
        if let Err(err) = self.complain(&message) {
            debug!(error = %err, "Could not report rejected move");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{PlayerId, PlayerProfile};

    fn player_one() -> Player {
        Player::new(PlayerId::One, PlayerProfile::default_for(PlayerId::One))
    }

    #[test]
    fn test_reads_a_move() {
        let mut input = LineInput::new("b3\n".as_bytes(), Vec::new());
        assert_eq!(input.request_move(&player_one()), Ok(MoveRequest::new(3, 'B')));

        let prompt = String::from_utf8(input.into_writer()).unwrap();
        assert!(prompt.contains("Player 1 (X's), enter the column and row"));
    }

    #[test]
    fn test_reprompts_on_unreadable_line() {
        let mut input = LineInput::new("hello\n\nC1\n".as_bytes(), Vec::new());
        assert_eq!(input.request_move(&player_one()), Ok(MoveRequest::new(1, 'C')));

        let output = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(output.matches("enter the column and row").count(), 3);
        assert!(output.contains("Invalid column and row index: hello"));
    }

    #[test]
    fn test_reprompts_on_non_utf8_line() {
        let mut input = LineInput::new(&b"\xff\xfe\nA1\n"[..], Vec::new());
        assert_eq!(input.request_move(&player_one()), Ok(MoveRequest::new(1, 'A')));

        let output = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(output.matches("enter the column and row").count(), 2);
        assert!(output.contains("Invalid column and row index"));
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut input = LineInput::new("".as_bytes(), Vec::new());
        let err = input.request_move(&player_one()).unwrap_err();
        assert!(err.message.contains("input closed"));
    }

    #[test]
    fn test_rejection_is_reported() {
        let mut input = LineInput::new("".as_bytes(), Vec::new());
        input.rejected(&player_one(), &GameError::CellAlreadyOccupied { index: 0 });

        let output = String::from_utf8(input.into_writer()).unwrap();
        assert!(output.contains("That cell was already played"));
    }
}
