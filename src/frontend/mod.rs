//! Front ends drive the screen and the keyboard for a game session.
//!
//! The engine never talks to a terminal directly; the game loop only sees
//! the `Frontend` trait.

pub mod keys;
pub mod terminal;

use std::io;

use crate::game::state::GameState;
use crate::game::types::Direction;

/// Decoded key press during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    /// Any key that is not a direction.
    Quit,
}

pub trait Frontend {
    /// Show the welcome screen and start prompt.
    fn show_welcome(&mut self) -> io::Result<()>;

    /// Block for the start prompt answer. True only for the start key.
    fn confirm_start(&mut self) -> io::Result<bool>;

    /// Draw the board, score and legend for the current turn.
    fn render(&mut self, state: &GameState) -> io::Result<()>;

    /// Block for one key press.
    fn read_input(&mut self) -> io::Result<Input>;

    /// Show the final board and wait for a last key press.
    fn show_game_over(&mut self, state: &GameState) -> io::Result<()>;
}
