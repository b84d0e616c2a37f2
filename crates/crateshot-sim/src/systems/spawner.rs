//! Target spawning system — one spawn window per second of simulation time.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use crateshot_core::components::Target;
use crateshot_core::constants::{MAX_TARGETS, TARGET_SPAWN_INTERVAL_TICKS};

use crate::world_setup;

/// Tick-scheduled spawn windows. Reset at session start.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    /// Tick at which the next spawn window opens.
    pub next_spawn_tick: u64,
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        // First window opens one full interval after session start.
        Self {
            next_spawn_tick: TARGET_SPAWN_INTERVAL_TICKS,
        }
    }
}

/// Spawn at most one target when a window is due and the population is
/// below the cap. A full population consumes the window; there is no
/// catch-up spawning.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    next_id: &mut u32,
    current_tick: u64,
) {
    if current_tick < schedule.next_spawn_tick {
        return;
    }
    schedule.next_spawn_tick = current_tick + TARGET_SPAWN_INTERVAL_TICKS;

    let count = {
        let mut query = world.query::<&Target>();
        query.iter().count()
    };
    if count < MAX_TARGETS {
        world_setup::spawn_target(world, rng, next_id);
    }
}
