use std::fmt;

use super::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows, top to bottom. Does not check that the
    /// marks could have come from a real game.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn contains(position: Position) -> bool {
        position.row < BOARD_SIZE && position.col < BOARD_SIZE
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.get(Position::new(row, col))
    }

    pub(crate) fn place(&mut self, position: Position, player: Player) {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = player.mark();
        }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Self::positions()
            .filter(|&position| self.get(position) == Some(Cell::Empty))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
