//! Tile movement system.
//!
//! This module consolidates tiles toward the edge named by a direction,
//! closing gaps without merging anything.

use crate::game::grid::Board;
use crate::game::types::Direction;

/// Compact every line of the board toward `direction`'s near edge,
/// preserving the relative order of tiles. Returns true if any cell moved.
pub fn shift(board: &mut Board, direction: Direction) -> bool {
    let size = board.size();
    let mut moved = false;

    for index in 0..size {
        let line = direction.line(size, index);
        // Next free slot, counted from the near edge.
        let mut target = 0;

        for i in 0..size {
            let value = board.rows()[line[i].row][line[i].col];
            if value == 0 {
                continue;
            }
            if i != target {
                board.set(line[target], value);
                board.set(line[i], 0);
                moved = true;
            }
            target += 1;
        }
    }

    moved
}
