//! Board storage and cell-level queries.
//!
//! The board is a square `Vec<Vec<u32>>` indexed `[row][col]`. A zero is
//! an empty cell; any other value is a power-of-two tile >= 2.

use crate::config::game::{MAX_TILE, MIN_GRID_SIZE};
use crate::error::EngineError;
use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<u32>>,
}

/// A tile is a power of two between 2 and `MAX_TILE`.
pub fn is_valid_tile(value: u32) -> bool {
    value >= 2 && value <= MAX_TILE && value.is_power_of_two()
}

/// Tile produced by merging two `value` tiles, or `None` when `value` is
/// empty or already at `MAX_TILE`.
pub fn merged_tile(value: u32) -> Option<u32> {
    value.checked_mul(2).filter(|&merged| is_valid_tile(merged))
}

impl Board {
    /// Create an all-empty `size x size` board.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_GRID_SIZE {
            return Err(EngineError::InvalidSize { size, min: MIN_GRID_SIZE });
        }
        Ok(Self { cells: vec![vec![0; size]; size] })
    }

    #[cfg(test)]
    /// Build a board from explicit rows. Rows must form a square and every
    /// non-zero value must be a valid tile.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, EngineError> {
        let size = rows.len();
        if size < MIN_GRID_SIZE {
            return Err(EngineError::InvalidSize { size, min: MIN_GRID_SIZE });
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(EngineError::OutOfBounds {
                    pos: Position::new(row, values.len().saturating_sub(1)),
                    size,
                });
            }
            if let Some(&bad) = values.iter().find(|&&v| v != 0 && !is_valid_tile(v)) {
                return Err(EngineError::InvalidTile(bad));
            }
        }
        Ok(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Value at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Unchecked-by-contract write used by the movement systems, which only
    /// address cells produced by `Direction::line`.
    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Locate one empty cell, scanning from the bottom-right corner
    /// backwards (last row first, last column first).
    pub fn find_empty_cell(&self) -> Option<Position> {
        let size = self.size();
        (0..size)
            .rev()
            .flat_map(|row| (0..size).rev().map(move |col| Position::new(row, col)))
            .find(|&pos| self.cells[pos.row][pos.col] == 0)
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells.iter().enumerate()
            .flat_map(|(row, values)| {
                values.iter().enumerate().filter_map(move |(col, &v)| {
                    if v == 0 { Some(Position::new(row, col)) } else { None }
                })
            })
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Write a new tile into an empty cell.
    pub fn spawn_tile(&mut self, pos: Position, value: u32) -> Result<(), EngineError> {
        if !is_valid_tile(value) {
            return Err(EngineError::InvalidTile(value));
        }
        match self.get(pos) {
            None => Err(EngineError::OutOfBounds { pos, size: self.size() }),
            Some(0) => {
                self.set(pos, value);
                Ok(())
            }
            Some(existing) => Err(EngineError::OccupiedCell { pos, value: existing }),
        }
    }
}
