//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks an entity as a destructible target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Stable id for snapshots and destroy notifications.
    pub id: u32,
}

/// Projectile state. Position lives in the separate `Position` component;
/// the per-tick displacement is fixed at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id for snapshots.
    pub id: u32,
    /// Tick at which this projectile was fired.
    pub spawned_at_tick: u64,
}

// Position and Vec3 are defined in types.rs and used as ECS components:
// every entity carries a Position, every projectile a Vec3 displacement.
