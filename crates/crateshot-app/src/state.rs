//! Shared state between the frontend side and the game loop thread.

use std::sync::{Arc, Mutex};

use crateshot_core::commands::PlayerCommand;
use crateshot_core::state::GameStateSnapshot;

/// Commands sent from the frontend to the game loop thread.
#[derive(Debug)]
pub enum SessionCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot, updated by the loop thread after each tick and
/// polled synchronously by the frontend.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;
