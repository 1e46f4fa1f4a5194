//! Board drawing and result announcement.

use crate::config::GameConfig;
use crossterm::style::{Color, Stylize};
use std::io::Write;
use tictactoe_core::{Announcer, Board, Cell, Outcome, PlayerId, Renderer};
use tracing::{instrument, warn};

/// Symbol, label and colour of both seats.
#[derive(Debug, Clone)]
pub struct Palette {
    seats: [(String, String, Color); 2],
}

impl Palette {
    /// Builds the palette from configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let seat = |id: PlayerId| {
            let player = config.player(id);
            (
                player.symbol().clone(),
                player.label().clone(),
                player.color().to_terminal(),
            )
        };
        Self {
            seats: [seat(PlayerId::One), seat(PlayerId::Two)],
        }
    }

    fn symbol(&self, id: PlayerId) -> &str {
        &self.seats[id.seat()].0
    }

    fn label(&self, id: PlayerId) -> &str {
        &self.seats[id.seat()].1
    }

    fn color(&self, id: PlayerId) -> Color {
        self.seats[id.seat()].2
    }
}

/// Draws the board as a lettered grid, followed by the open cells.
pub struct BoardView<W> {
    writer: W,
    palette: Palette,
}

impl<W: Write> BoardView<W> {
    /// Creates a view writing to `writer`.
    pub fn new(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    /// Gives back the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn cell_text(&self, index: usize, cell: Cell, highlight: Option<[usize; 3]>) -> String {
        let Some(owner) = cell.owner() else {
            return format!("{}", format!("{:^3}", "-").dark_grey());
        };
        let padded = format!("{:^3}", self.palette.symbol(owner));
        let color = self.palette.color(owner);

        if highlight.is_some_and(|line| line.contains(&index)) {
            format!("{}", padded.bold().black().on(color))
        } else {
            format!("{}", padded.with(color))
        }
    }

    fn draw(&mut self, cells: &[Cell; 9], highlight: Option<[usize; 3]>) -> std::io::Result<()> {
        let border = "    +---+---+---+";
        writeln!(self.writer, "\n      A   B   C")?;
        writeln!(self.writer, "{}", border)?;

        for (row, chunk) in cells.chunks(3).enumerate() {
            let texts: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| self.cell_text(row * 3 + col, *cell, highlight))
                .collect();
            writeln!(self.writer, "  {} |{}|", row + 1, texts.join("|"))?;
            writeln!(self.writer, "{}", border)?;
        }

        let open: Vec<String> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_occupied())
            .filter_map(|(index, _)| Board::label_of(index).ok())
            .collect();
        if !open.is_empty() {
            writeln!(self.writer, "  Open: {}", open.join(" "))?;
        }
        self.writer.flush()
    }
}

impl<W: Write> Renderer for BoardView<W> {
    #[instrument(skip_all, fields(highlight = ?highlight))]
    fn render(&mut self, cells: &[Cell; 9], highlight: Option<[usize; 3]>) {
        if let Err(err) = self.draw(cells, highlight) {
            warn!(error = %err, "Failed to draw board");
        }
    }
}

/// Prints the final result.
pub struct TerminalAnnouncer<W> {
    writer: W,
    palette: Palette,
}

impl<W: Write> TerminalAnnouncer<W> {
    /// Creates an announcer writing to `writer`.
    pub fn new(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    /// Gives back the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Announcer for TerminalAnnouncer<W> {
    #[instrument(skip(self))]
    fn announce(&mut self, outcome: Outcome) {
        let result = match outcome.winner() {
            Some(player) => {
                let text = format!("{} WINS!", self.palette.label(player));
                writeln!(
                    self.writer,
                    "{} Thanks for playing!",
                    text.bold().with(self.palette.color(player))
                )
            }
            None => writeln!(self.writer, "{}", "It's a DRAW".bold()),
        };
        if let Err(err) = result.and_then(|()| self.writer.flush()) {
            warn!(error = %err, "Failed to announce result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::from_config(&GameConfig::default())
    }

    #[test]
    fn test_renders_grid_and_open_cells() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Occupied(PlayerId::One);
        cells[4] = Cell::Occupied(PlayerId::Two);

        let mut view = BoardView::new(Vec::new(), palette());
        view.render(&cells, None);
        let output = String::from_utf8(view.into_writer()).unwrap();

        assert!(output.contains("A   B   C"));
        assert!(output.contains("  3 |"));
        assert!(output.contains(" X "));
        assert!(output.contains(" O "));
        assert!(output.contains("Open: B1 C1 A2 C2 A3 B3 C3"));
    }

    #[test]
    fn test_full_board_has_no_open_line() {
        let cells = [Cell::Occupied(PlayerId::One); 9];
        let mut view = BoardView::new(Vec::new(), palette());
        view.render(&cells, Some([0, 1, 2]));
        let output = String::from_utf8(view.into_writer()).unwrap();
        assert!(!output.contains("Open:"));
    }

    #[test]
    fn test_winning_line_is_styled_apart() {
        let mut cells = [Cell::Empty; 9];
        for index in [0, 3, 6] {
            cells[index] = Cell::Occupied(PlayerId::One);
        }
        cells[1] = Cell::Occupied(PlayerId::Two);
        cells[4] = Cell::Occupied(PlayerId::Two);

        let draw = |highlight| {
            let mut view = BoardView::new(Vec::new(), palette());
            view.render(&cells, highlight);
            String::from_utf8(view.into_writer()).unwrap()
        };
        let plain = draw(None);
        let highlighted = draw(Some([0, 3, 6]));

        let marked = format!("{}", " X ".bold().black().on(Color::Blue));
        assert_ne!(plain, highlighted);
        assert_eq!(highlighted.matches(&marked).count(), 3);
        assert!(!plain.contains(&marked));
        // Cells outside the line keep their normal styling.
        let other = format!("{}", " O ".with(Color::Yellow));
        assert_eq!(highlighted.matches(&other).count(), 2);
        assert_eq!(plain.matches(&other).count(), 2);
    }

    #[test]
    fn test_announces_winner_by_label() {
        let mut announcer = TerminalAnnouncer::new(Vec::new(), palette());
        announcer.announce(Outcome::Won(PlayerId::Two));
        let output = String::from_utf8(announcer.into_writer()).unwrap();
        assert!(output.contains("Player 2 WINS!"));
    }

    #[test]
    fn test_announces_draw() {
        let mut announcer = TerminalAnnouncer::new(Vec::new(), palette());
        announcer.announce(Outcome::Draw);
        let output = String::from_utf8(announcer.into_writer()).unwrap();
        assert!(output.contains("It's a DRAW"));
    }
}
