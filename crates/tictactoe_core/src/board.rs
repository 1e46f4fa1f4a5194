//! The 3x3 board: cell occupancy, coordinate mapping and line detection.

use crate::error::GameError;
use crate::types::{Cell, Column, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning triples, in tie-break order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a row (1-3) and column letter (A-C) to a linear index.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCoordinate` if either part is off the board.
    /// Only uppercase column letters are accepted.
    #[instrument]
    pub fn translate(row: u32, column: char) -> Result<usize, GameError> {
        let column_offset = Column::from_letter(column).map(Column::offset);
        match (row, column_offset) {
            (1..=3, Some(offset)) => Ok((row as usize - 1) * 3 + offset),
            _ => Err(GameError::InvalidCoordinate {
                coordinate: format!("{}{}", column, row),
            }),
        }
    }

    /// Maps a linear index back to its row (1-3) and column.
    pub fn coordinate_of(index: usize) -> Result<(u32, Column), GameError> {
        let column = Column::from_offset(index % 3)
            .filter(|_| index < CELL_COUNT)
            .ok_or(GameError::IndexOutOfRange { index })?;
        Ok((index as u32 / 3 + 1, column))
    }

    /// Console label of a cell, e.g. `"B3"`.
    pub fn label_of(index: usize) -> Result<String, GameError> {
        let (row, column) = Self::coordinate_of(index)?;
        Ok(format!("{}{}", column, row))
    }

    /// Claims a cell for a player.
    ///
    /// Must be called at most once per index.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IndexOutOfRange` for an index past 8 and
    /// `GameError::CellAlreadyOccupied` if the cell was already claimed.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: PlayerId) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index })?;

        if cell.is_occupied() {
            return Err(GameError::CellAlreadyOccupied { index });
        }

        *cell = Cell::Occupied(player);
        debug!(index, ?player, "Cell claimed");
        Ok(())
    }

    /// Checks whether a cell has been claimed.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IndexOutOfRange` for an index past 8.
    pub fn is_occupied(&self, index: usize) -> Result<bool, GameError> {
        self.cell(index).map(Cell::is_occupied)
    }

    /// Returns the cell at a linear index.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange { index })
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of cells nobody has claimed, ascending.
    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_occupied())
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_occupied())
    }

    /// First winning triple fully contained in `played_cells`.
    ///
    /// Rows are tried before columns, columns before diagonals. Only one
    /// triple is returned even if several are complete.
    pub fn winning_line_for(played_cells: &[usize]) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|index| played_cells.contains(index)))
            .copied()
    }

    #[cfg(test)]
    pub(crate) fn cells_mut_for_test(&mut self) -> &mut [Cell; CELL_COUNT] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_translate_is_a_bijection() {
        let mut seen = Vec::new();
        for row in 1..=3 {
            for column in Column::iter() {
                let letter = column.to_string().chars().next().unwrap_or_default();
                let index = Board::translate(row, letter).unwrap();
                assert!(!seen.contains(&index), "{letter}{row} aliases {index}");
                seen.push(index);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_translate_canonical_mapping() {
        assert_eq!(Board::translate(1, 'A'), Ok(0));
        assert_eq!(Board::translate(1, 'C'), Ok(2));
        assert_eq!(Board::translate(2, 'A'), Ok(3));
        assert_eq!(Board::translate(3, 'B'), Ok(7));
        assert_eq!(Board::translate(3, 'C'), Ok(8));
    }

    #[test]
    fn test_translate_rejects_off_board() {
        for (row, column) in [(0, 'A'), (4, 'A'), (1, 'D'), (2, 'a'), (u32::MAX, 'B')] {
            assert!(matches!(
                Board::translate(row, column),
                Err(GameError::InvalidCoordinate { .. })
            ));
        }
    }

    #[test]
    fn test_coordinate_round_trip_through_label() {
        assert_eq!(Board::label_of(0), Ok("A1".to_string()));
        assert_eq!(Board::label_of(5), Ok("C2".to_string()));
        assert_eq!(Board::coordinate_of(7), Ok((3, Column::B)));
        assert_eq!(
            Board::coordinate_of(9),
            Err(GameError::IndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_place_writes_once() {
        let mut board = Board::new();
        board.place(4, PlayerId::One).unwrap();
        assert_eq!(
            board.place(4, PlayerId::Two),
            Err(GameError::CellAlreadyOccupied { index: 4 })
        );
        assert_eq!(board.cell(4), Ok(Cell::Occupied(PlayerId::One)));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, PlayerId::One),
            Err(GameError::IndexOutOfRange { index: 9 })
        );
        assert_eq!(
            board.is_occupied(12),
            Err(GameError::IndexOutOfRange { index: 12 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full_and_open_cells() {
        let mut board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.open_cells().len(), 9);

        for index in 0..CELL_COUNT {
            let player = if index % 2 == 0 { PlayerId::One } else { PlayerId::Two };
            board.place(index, player).unwrap();
        }
        assert!(board.is_full());
        assert!(board.open_cells().is_empty());
    }

    #[test]
    fn test_winning_line_requires_all_three() {
        assert_eq!(Board::winning_line_for(&[]), None);
        assert_eq!(Board::winning_line_for(&[0, 1]), None);
        assert_eq!(Board::winning_line_for(&[0, 4, 1, 8]), Some([0, 4, 8]));
        assert_eq!(Board::winning_line_for(&[2, 6, 4]), Some([2, 4, 6]));
    }

    #[test]
    fn test_winning_line_prefers_rows_then_columns() {
        // Row 1 and column A are both complete.
        assert_eq!(Board::winning_line_for(&[0, 1, 2, 3, 6]), Some([0, 1, 2]));
        // Column B and the main diagonal are both complete.
        assert_eq!(Board::winning_line_for(&[0, 1, 4, 7, 8]), Some([1, 4, 7]));
    }
}
