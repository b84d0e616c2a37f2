//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Audio events for the frontend sound system. Fire-and-forget; the core
/// never awaits acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Looping ambient music cue, emitted once at session start.
    MusicStart,
    /// A projectile was fired.
    ShotFired,
    /// A target was destroyed by a projectile.
    TargetDestroyed { target_id: u32 },
}

/// Game-over notification, delivered exactly once per session when the
/// countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    /// Score frozen at the moment the clock hit zero.
    pub final_score: u32,
}
