/// Main configuration module.
/// 
/// Re-exports submodules for game rules and keyboard controls.
pub mod game;
pub mod controls;

pub use game::GameConfig;
