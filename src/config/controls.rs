//! Keyboard bindings.
//!
//! Letters are matched case-insensitively; arrow keys are accepted as well.
use crate::game::types::Direction;

pub const KEY_UP: char = 'w';
pub const KEY_LEFT: char = 'a';
pub const KEY_DOWN: char = 's';
pub const KEY_RIGHT: char = 'd';

/// Key that confirms the start prompt.
pub const KEY_START: char = 'y';

/// Key bound to `direction`, as shown in the legend.
pub fn key_for(direction: Direction) -> char {
    match direction {
        Direction::Up => KEY_UP,
        Direction::Left => KEY_LEFT,
        Direction::Down => KEY_DOWN,
        Direction::Right => KEY_RIGHT,
    }
}
