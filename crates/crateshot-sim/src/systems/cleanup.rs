//! Cleanup system: lifetime culling plus deferred despawns.

use hecs::{Entity, World};

use crateshot_core::components::Projectile;
use crateshot_core::constants::PROJECTILE_LIFETIME_TICKS;

/// Remove projectiles whose age reached the lifetime bound, then drain the
/// despawn buffer accumulated by the collision system. The buffer may hold
/// duplicates (a hit-consumed projectile can also expire this tick); the
/// second despawn is a no-op.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, current_tick: u64) {
    for (entity, proj) in world.query_mut::<&Projectile>() {
        if current_tick.saturating_sub(proj.spawned_at_tick) >= PROJECTILE_LIFETIME_TICKS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
