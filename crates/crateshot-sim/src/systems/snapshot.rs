//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use crateshot_core::components::{Projectile, Target};
use crateshot_core::enums::GamePhase;
use crateshot_core::events::AudioEvent;
use crateshot_core::state::{GameStateSnapshot, ProjectileView, TargetView};
use crateshot_core::types::{Position, SimTime, Vec3};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    time_left_secs: u32,
    session_secs: u32,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        time_left_secs,
        time_fill_percent: fill_percent(time_left_secs, session_secs),
        targets: build_targets(world),
        projectiles: build_projectiles(world),
        audio_events,
    }
}

/// Countdown bar fill: time_left / duration * 100.
fn fill_percent(time_left_secs: u32, session_secs: u32) -> f64 {
    if session_secs == 0 {
        return 0.0;
    }
    f64::from(time_left_secs) / f64::from(session_secs) * 100.0
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(_, (target, pos))| TargetView {
            id: target.id,
            position: *pos,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Vec3)>()
        .iter()
        .map(|(_, (proj, pos, vel))| ProjectileView {
            id: proj.id,
            position: *pos,
            velocity: *vel,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
