//! Session loop: welcome, start prompt, then render -> input -> move until
//! the player quits or no move is left.

use log::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::frontend::{Frontend, Input};
use crate::game::state::{GameSnapshot, GameState};
use crate::game::types::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The start prompt was not confirmed.
    Declined,
    /// A non-direction key was pressed during play.
    Quit,
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub snapshot: GameSnapshot,
}

/// Run one game session against `frontend`.
pub fn run_game_loop<F: Frontend>(frontend: &mut F, config: &GameConfig) -> Result<SessionSummary, GameError> {
    let mut game_state = GameState::new(config)?;

    frontend.show_welcome()?;
    if !frontend.confirm_start()? {
        info!("[Session] Start declined");
        return Ok(finish(&game_state, SessionOutcome::Declined));
    }
    game_state.start();

    loop {
        if game_state.begin_turn()? == Phase::GameOver {
            frontend.show_game_over(&game_state)?;
            return Ok(finish(&game_state, SessionOutcome::GameOver));
        }

        frontend.render(&game_state)?;

        match frontend.read_input()? {
            Input::Move(direction) => {
                if !game_state.apply_move(direction).changed {
                    debug!("[Session] Move {:?} left the board unchanged", direction);
                }
            }
            Input::Quit => {
                info!("[Session] Player quit on turn {}", game_state.turn);
                return Ok(finish(&game_state, SessionOutcome::Quit));
            }
        }
    }
}

fn finish(game_state: &GameState, outcome: SessionOutcome) -> SessionSummary {
    SessionSummary { outcome, snapshot: game_state.snapshot() }
}
