//! Entity spawn factories for the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crateshot_core::components::{Projectile, Target};
use crateshot_core::constants::*;
use crateshot_core::types::{Position, Vec3};

/// Random target position, uniform per axis within the spawn volume.
/// Upper bounds are exclusive.
pub fn random_target_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX),
        rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX),
        rng.gen_range(SPAWN_Z_MIN..SPAWN_Z_MAX),
    )
}

/// Spawn a single target at a random position.
pub fn spawn_target(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;
    let position = random_target_position(rng);
    world.spawn((Target { id }, position))
}

/// Spawn a target at a fixed position (tests need known geometry).
#[cfg(test)]
pub fn spawn_target_at(world: &mut World, next_id: &mut u32, position: Position) -> u32 {
    let id = *next_id;
    *next_id += 1;
    world.spawn((Target { id }, position));
    id
}

/// Spawn a projectile from a validated camera pose.
///
/// `direction` must already be a unit vector; the spawn point sits
/// `MUZZLE_OFFSET` units ahead of the camera and the stored displacement
/// is `direction * PROJECTILE_STEP` per tick.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    camera_position: Position,
    direction: Vec3,
    current_tick: u64,
) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;

    let position = camera_position.offset_by(&direction.scaled(MUZZLE_OFFSET));
    let velocity = direction.scaled(PROJECTILE_STEP);

    world.spawn((
        Projectile {
            id,
            spawned_at_tick: current_tick,
        },
        position,
        velocity,
    ))
}

/// Spawn a projectile with an explicit position and displacement,
/// bypassing the muzzle-offset math (for lifetime and threshold tests).
#[cfg(test)]
pub fn spawn_projectile_raw(
    world: &mut World,
    next_id: &mut u32,
    position: Position,
    velocity: Vec3,
    current_tick: u64,
) -> u32 {
    let id = *next_id;
    *next_id += 1;
    world.spawn((
        Projectile {
            id,
            spawned_at_tick: current_tick,
        },
        position,
        velocity,
    ));
    id
}
