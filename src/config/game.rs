//! Game configuration constants.
//! 
//! This module defines the main gameplay parameters such as the grid
//! dimension, the tile spawn policy and the rendered cell width.
use serde::{Serialize, Deserialize};

use crate::game::types::SpawnPolicy;

/// Number of rows and columns of the (square) game grid.
pub const GRID_SIZE: usize = 4;

/// Smallest grid that still has adjacent pairs in both axes.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest tile a cell may hold. Two of these never merge, so doubling
/// a tile always fits in a `u32` cell.
pub const MAX_TILE: u32 = 1 << 30;

/// Policy used to place new tiles at the start of each turn.
pub const SPAWN_POLICY: SpawnPolicy = SpawnPolicy::RowParity;

/// Probability of a 4 tile under the weighted spawn policy.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Width (in characters) of a rendered grid cell, borders excluded.
pub const CELL_WIDTH: usize = 6;

/// Runtime view of the constants above, handed to the game session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub spawn_policy: SpawnPolicy,
    /// Seed for the weighted spawn policy. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            spawn_policy: SPAWN_POLICY,
            seed: None,
        }
    }
}
