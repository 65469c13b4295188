use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction of a move. Tiles travel toward the edge the direction names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Legend order: up, left, down, right.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }

    /// Cells of line `index`, ordered from the near edge (where tiles
    /// gather) to the far edge. Up/Down lines are columns, Left/Right
    /// lines are rows.
    pub fn line(self, size: usize, index: usize) -> Vec<Position> {
        match self {
            Direction::Up => (0..size).map(|row| Position::new(row, index)).collect(),
            Direction::Down => (0..size).rev().map(|row| Position::new(row, index)).collect(),
            Direction::Left => (0..size).map(|col| Position::new(index, col)).collect(),
            Direction::Right => (0..size).rev().map(|col| Position::new(index, col)).collect(),
        }
    }
}

/// How the next tile is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Last empty cell scanning back from the bottom-right corner;
    /// 4 on even rows, 2 on odd rows.
    RowParity,
    /// Uniformly random empty cell; 2 or 4 weighted by
    /// `FOUR_TILE_PROBABILITY`.
    Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingStart,
    Playing,
    GameOver,
}

/// Result of one merge pass over the whole board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub merges: usize,
    pub points: u64,
}

/// Result of a full Shift -> Merge -> Shift move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub merges: usize,
    pub points: u64,
    /// Whether any cell changed.
    pub changed: bool,
}
