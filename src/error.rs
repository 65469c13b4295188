//! Error types for the engine and the binary boundary.
//!
//! Player input never produces an error: unrecognised keys are a quit
//! signal. These variants only cover broken engine preconditions and
//! terminal I/O failures.

use std::io;

use crate::game::types::Position;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({}, {}) is outside a {size}x{size} grid", .pos.row, .pos.col)]
    OutOfBounds { pos: Position, size: usize },
    #[error("cell ({}, {}) already holds tile {value}", .pos.row, .pos.col)]
    OccupiedCell { pos: Position, value: u32 },
    #[error("tile value {0} is not a power of two >= 2")]
    InvalidTile(u32),
    #[error("grid size {size} is below the minimum of {min}")]
    InvalidSize { size: usize, min: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
