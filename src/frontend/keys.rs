//! Key decoding.

use crossterm::event::KeyCode;

use crate::config::controls::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_START, KEY_UP};
use crate::frontend::Input;
use crate::game::types::Direction;

/// Direction bound to a letter, case-insensitive.
pub fn direction_for_char(c: char) -> Option<Direction> {
    match c.to_ascii_lowercase() {
        KEY_UP => Some(Direction::Up),
        KEY_LEFT => Some(Direction::Left),
        KEY_DOWN => Some(Direction::Down),
        KEY_RIGHT => Some(Direction::Right),
        _ => None,
    }
}

pub fn decode_input(code: KeyCode) -> Input {
    let direction = match code {
        KeyCode::Char(c) => direction_for_char(c),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    };
    direction.map_or(Input::Quit, Input::Move)
}

pub fn is_start_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(c) if c.to_ascii_lowercase() == KEY_START)
}
