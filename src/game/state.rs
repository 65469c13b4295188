use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::grid::Board;
use crate::game::systems::{choose_spawn, is_terminal, merge, shift};
use crate::game::types::{Direction, MoveOutcome, Phase, Position, SpawnPolicy};

/// One game session: the board plus everything shown around it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub score: u64,
    pub phase: Phase,
    /// Cell filled at the start of the current turn, if any.
    pub last_spawn: Option<Position>,
    pub last_move: Option<Direction>,
    pub turn: u32,
    spawn_policy: SpawnPolicy,
    rng: StdRng,
}

/// Serializable summary of a session, logged when it ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<u32>>,
    pub score: u64,
    pub turn: u32,
    pub phase: Phase,
    pub max_tile: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            board: Board::new(config.grid_size)?,
            score: 0,
            phase: Phase::AwaitingStart,
            last_spawn: None,
            last_move: None,
            turn: 0,
            spawn_policy: config.spawn_policy,
            rng,
        })
    }

    /// Awaiting-Start -> Playing.
    pub fn start(&mut self) {
        if self.phase == Phase::AwaitingStart {
            info!("[Session] Game started on a {0}x{0} grid ({1:?})", self.board.size(), self.spawn_policy);
            self.phase = Phase::Playing;
        }
    }

    /// Open a new turn: end the game if no move is possible, otherwise
    /// fill one empty cell when there is one.
    pub fn begin_turn(&mut self) -> Result<Phase, EngineError> {
        if self.phase != Phase::Playing {
            return Ok(self.phase);
        }
        if is_terminal(&self.board) {
            info!("[Session] No more moves after {} turns, score {}", self.turn, self.score);
            self.phase = Phase::GameOver;
            self.last_spawn = None;
            return Ok(self.phase);
        }

        self.turn += 1;
        self.last_spawn = None;
        if let Some((pos, value)) = choose_spawn(&self.board, self.spawn_policy, &mut self.rng) {
            self.board.spawn_tile(pos, value)?;
            self.last_spawn = Some(pos);
            debug!(
                "[Engine] Turn {}: spawned {} at ({}, {}), {} tiles on board",
                self.turn, value, pos.row, pos.col, self.board.tile_count()
            );
        }
        Ok(self.phase)
    }

    /// Shift -> Merge -> Shift toward `direction`, adding merge points to
    /// the score. A move that changes nothing still counts as the turn.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.board.clone();

        shift(&mut self.board, direction);
        let merged = merge(&mut self.board, direction);
        shift(&mut self.board, direction);

        self.score += merged.points;
        self.last_move = Some(direction);

        let outcome = MoveOutcome {
            merges: merged.merges,
            points: merged.points,
            changed: self.board != before,
        };
        debug!(
            "[Engine] Move {:?}: {} merges, +{} points, changed={}",
            direction, outcome.merges, outcome.points, outcome.changed
        );
        outcome
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows().to_vec(),
            score: self.score,
            turn: self.turn,
            phase: self.phase,
            max_tile: self.board.max_tile(),
        }
    }
}
