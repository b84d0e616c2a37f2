//! Projectile integration system.
//!
//! Fixed-step update: position += velocity once per tick, where velocity is
//! the per-tick displacement set at fire time. No wall-time correction.

use hecs::World;

use crateshot_core::types::{Position, Vec3};

/// Advance every entity carrying a per-tick displacement (projectiles;
/// targets have no Vec3 component and are untouched).
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Vec3)>() {
        pos.x += vel.x;
        pos.y += vel.y;
        pos.z += vel.z;
    }
}
