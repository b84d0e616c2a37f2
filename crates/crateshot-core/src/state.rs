//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Vec3};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    /// Remaining session time in whole seconds.
    pub time_left_secs: u32,
    /// `time_left / duration * 100`, for the HUD countdown bar.
    pub time_fill_percent: f64,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    /// Audio events produced since the previous snapshot.
    pub audio_events: Vec<AudioEvent>,
}

/// A visible target for the render surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Position,
}

/// A visible projectile for the render surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    /// Per-tick displacement (direction * step).
    pub velocity: Vec3,
}
