//! Main entry point for the terminal tile-merge game.
//!
//! Sets up logging and the terminal, runs a single game session and
//! restores the terminal before reporting the result.

use log::info;

use config::GameConfig;
use error::GameError;
use frontend::terminal::TerminalFrontend;
use game::game_loop::run_game_loop;

mod config;
mod error;
mod frontend;
mod game;
#[cfg(test)]
mod tests;

fn main() -> Result<(), GameError> {
    // Initialize logger from environment variable (silent unless RUST_LOG is set).
    env_logger::init();

    let config = GameConfig::default();

    // The frontend restores the terminal when dropped, before any error is printed.
    let summary = {
        let mut frontend = TerminalFrontend::new()?;
        run_game_loop(&mut frontend, &config)?
    };

    info!(
        "[Session] Finished ({:?}): {}",
        summary.outcome,
        serde_json::to_string(&summary.snapshot)?
    );
    Ok(())
}
