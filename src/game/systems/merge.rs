//! Tile merge system.
//!
//! A single forward pass per line, near edge to far edge. When two
//! adjacent cells hold the same tile, the near cell doubles and the far
//! cell is cleared. The pass does not repack the line, so a cell that was
//! just cleared cannot pair with its next neighbour and no cell merges
//! twice in one move. Run `shift` before and after to close gaps.

use log::debug;

use crate::game::grid::{merged_tile, Board};
use crate::game::types::{Direction, MergeOutcome};

pub fn merge(board: &mut Board, direction: Direction) -> MergeOutcome {
    let size = board.size();
    let mut outcome = MergeOutcome::default();

    for index in 0..size {
        let line = direction.line(size, index);

        for pair in line.windows(2) {
            let (near, far) = (pair[0], pair[1]);
            let near_value = board.rows()[near.row][near.col];
            let far_value = board.rows()[far.row][far.col];

            if near_value != far_value {
                continue;
            }
            if let Some(merged) = merged_tile(near_value) {
                board.set(near, merged);
                board.set(far, 0);
                outcome.merges += 1;
                outcome.points += u64::from(merged);
                debug!("[Engine] Merged {} + {} into {} at ({}, {})", near_value, far_value, merged, near.row, near.col);
            }
        }
    }

    outcome
}
