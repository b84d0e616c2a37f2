//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Vec3};

/// Camera pose captured at the moment of a fire trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera world position.
    pub position: Position,
    /// Camera world view direction. Normalized defensively by the engine;
    /// a degenerate direction makes the fire a no-op.
    pub direction: Vec3,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session from the menu (or restart after game over).
    StartGame,
    /// Fire a projectile from the given camera pose. Unlimited rate.
    Fire { pose: CameraPose },
    /// Return to the main menu, aborting a running session if any.
    ReturnToMenu,
}
