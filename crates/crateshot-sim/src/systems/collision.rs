//! Collision resolution system — runs immediately after movement.
//!
//! Per projectile, in id order:
//! 1. Out-of-bounds culling: beyond PROJECTILE_MAX_RANGE from the origin the
//!    projectile is removed with no score effect and tests no targets.
//! 2. Hit testing: every live target strictly within HIT_RADIUS is destroyed
//!    and scored independently in the same tick. A projectile that scored at
//!    least once is consumed.
//!
//! Entities are despawned later by the cleanup system via the shared buffer.

use hecs::{Entity, World};

use crateshot_core::components::{Projectile, Target};
use crateshot_core::constants::{HIT_RADIUS, PROJECTILE_MAX_RANGE, TARGET_SCORE};
use crateshot_core::events::AudioEvent;
use crateshot_core::types::Position;

struct TargetSlot {
    entity: Entity,
    id: u32,
    position: Position,
    destroyed: bool,
}

/// Resolve projectile/target overlaps and out-of-range projectiles.
pub fn run(
    world: &mut World,
    score: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    // Materialize both sets in id order so resolution is deterministic
    // regardless of archetype iteration order.
    let mut projectiles: Vec<(Entity, u32, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (proj, pos))| (entity, proj.id, *pos))
        .collect();
    projectiles.sort_by_key(|&(_, id, _)| id);

    let mut targets: Vec<TargetSlot> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(entity, (target, pos))| TargetSlot {
            entity,
            id: target.id,
            position: *pos,
            destroyed: false,
        })
        .collect();
    targets.sort_by_key(|t| t.id);

    for (proj_entity, _proj_id, proj_pos) in projectiles {
        if proj_pos.range_from_origin() > PROJECTILE_MAX_RANGE {
            despawn_buffer.push(proj_entity);
            continue;
        }

        let mut scored = false;
        for target in targets.iter_mut() {
            if target.destroyed {
                continue;
            }
            // Strict inequality: exactly HIT_RADIUS is not a hit.
            if proj_pos.range_to(&target.position) < HIT_RADIUS {
                target.destroyed = true;
                despawn_buffer.push(target.entity);
                *score += TARGET_SCORE;
                audio_events.push(AudioEvent::TargetDestroyed { target_id: target.id });
                scored = true;
            }
        }

        if scored {
            despawn_buffer.push(proj_entity);
        }
    }
}
