//! Game rendering system (text).
//!
//! Builds the screens as plain strings; the front end decides how to put
//! them on a terminal. Lines are separated by `\n`.

use crate::config::controls::{key_for, KEY_START};
use crate::config::game::CELL_WIDTH;
use crate::game::grid::Board;
use crate::game::types::{Direction, Position};

const ARTWORK: [&str; 7] = [
    "   2222         0000           444        8888   ",
    " 22    22     00    00        4 44      88    88 ",
    "      22     00      00      4  44       88  88  ",
    "    22       00      00     4   44         88    ",
    "  22         00      00    444444444     88  88  ",
    "22            00    00          44      88    88 ",
    "222222222       0000            44        8888   ",
];

/// Marker appended to the most recently spawned tile.
pub const NEW_TILE_MARKER: char = '*';

pub fn render_welcome() -> String {
    let mut out = String::from("Welcome to\n\n");
    for line in ARTWORK {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n\nPress {} to start or any other key to quit the game\n",
        KEY_START.to_ascii_uppercase()
    ));
    out
}

/// Bordered grid. Empty cells are blank; `marker` flags the newest tile.
pub fn render_grid(board: &Board, marker: Option<Position>) -> String {
    let size = board.size();
    // Two spaces of padding, the digits, the marker, one trailing space.
    let digits = board.max_tile().to_string().len();
    let width = CELL_WIDTH.max(digits + 4);

    let border = format!("+{}\n", format!("{}+", "-".repeat(width)).repeat(size));
    let mut out = border.clone();

    for (row, values) in board.rows().iter().enumerate() {
        out.push('|');
        for (col, &value) in values.iter().enumerate() {
            if value == 0 {
                out.push_str(&" ".repeat(width));
            } else {
                let mut text = value.to_string();
                if marker == Some(Position::new(row, col)) {
                    text.push(NEW_TILE_MARKER);
                }
                out.push_str(&format!("  {:<w$}", text, w = width - 2));
            }
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

/// Score, key legend (with the previous move highlighted) and hints.
pub fn render_status(score: u64, previous: Option<Direction>) -> String {
    let mut out = format!("\nScore: {}\n\nPress one of the keys to merge and move the numbers\n", score);
    for direction in Direction::ALL {
        out.push_str(&format!("{} = {}", key_for(direction), direction.label()));
        if previous == Some(direction) {
            out.push_str("  <= previous move");
        }
        out.push('\n');
    }
    out.push_str(&format!("\n{} indicates newly filled cell\n", NEW_TILE_MARKER));
    out.push_str("\nPress any other key to quit\n");
    out
}

pub fn render_game_over(board: &Board, score: u64) -> String {
    let mut out = render_grid(board, None);
    out.push_str(&format!("\nScore: {}\n", score));
    out.push_str("\nNo more possible moves.. Game Over!\n");
    out.push_str("Press any key to quit\n");
    out
}
