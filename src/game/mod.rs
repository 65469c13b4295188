pub mod types;
pub mod grid;
pub mod state;
pub mod game_loop;

pub mod systems;
