//! Game rules: when the game ends and where the next tile appears.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::FOUR_TILE_PROBABILITY;
use crate::game::grid::{merged_tile, Board};
use crate::game::types::{Position, SpawnPolicy};

/// True when a further move can still change the board: some cell is
/// empty, or two horizontally or vertically adjacent cells are equal.
pub fn has_possible_move(board: &Board) -> bool {
    board.find_empty_cell().is_some() || has_mergeable_pair(board)
}

/// Board full and no adjacent equal pair anywhere.
pub fn is_terminal(board: &Board) -> bool {
    !has_possible_move(board)
}

/// Any adjacent pair of equal cells that can still merge, including the
/// pairs along the last row and the last column.
pub fn has_mergeable_pair(board: &Board) -> bool {
    let rows = board.rows();
    let size = board.size();

    for row in 0..size {
        for col in 0..size {
            let value = rows[row][col];
            if merged_tile(value).is_none() {
                continue;
            }
            if col + 1 < size && rows[row][col + 1] == value {
                return true;
            }
            if row + 1 < size && rows[row + 1][col] == value {
                return true;
            }
        }
    }
    false
}

/// Pick the cell and value of the next tile, or `None` on a full board.
pub fn choose_spawn<R: Rng + ?Sized>(board: &Board, policy: SpawnPolicy, rng: &mut R) -> Option<(Position, u32)> {
    match policy {
        SpawnPolicy::RowParity => {
            let pos = board.find_empty_cell()?;
            let value = if pos.row % 2 == 0 { 4 } else { 2 };
            Some((pos, value))
        }
        SpawnPolicy::Weighted => {
            let pos = board.empty_cells().into_iter().choose(rng)?;
            let value = if rng.random_bool(FOUR_TILE_PROBABILITY) { 4 } else { 2 };
            Some((pos, value))
        }
    }
}
