//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs all
//! systems, and produces `GameStateSnapshot`s. Completely headless (no
//! windowing or audio dependency), enabling deterministic testing.
//!
//! Two operations drive mutation from uncorrelated cadences: `tick()` for
//! the render-frame domain (movement, collisions, spawning) and
//! `advance_clock()` for the 1 Hz session countdown. Neither assumes a fixed
//! ratio to the other.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crateshot_core::commands::{CameraPose, PlayerCommand};
use crateshot_core::constants::SESSION_DURATION_SECS;
use crateshot_core::enums::GamePhase;
use crateshot_core::events::{AudioEvent, GameOver};
use crateshot_core::state::GameStateSnapshot;
use crateshot_core::types::SimTime;

use crate::systems;
use crate::systems::spawner::SpawnSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// Session length in seconds.
    pub session_secs: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            session_secs: SESSION_DURATION_SECS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: u32,
    time_left_secs: u32,
    session_secs: u32,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    spawn_schedule: SpawnSchedule,
}

impl GameEngine {
    /// Create a new engine in the main menu with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            time_left_secs: config.session_secs,
            session_secs: config.session_secs,
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            spawn_schedule: SpawnSchedule::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Commands queued since the previous tick are applied first, so a
    /// snapshot never observes a partially applied update.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.time_left_secs,
            self.session_secs,
            audio_events,
        )
    }

    /// Advance the 1 Hz session countdown by one second.
    ///
    /// Returns the game-over notification exactly once per session, on the
    /// call that brings the countdown to zero. Calls outside the `Running`
    /// phase are no-ops, so repeated ticking after expiry cannot
    /// double-report.
    pub fn advance_clock(&mut self) -> Option<GameOver> {
        if self.phase != GamePhase::Running {
            return None;
        }

        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs == 0 {
            self.phase = GamePhase::Over;
            return Some(GameOver {
                final_score: self.score,
            });
        }
        None
    }

    /// Read-only snapshot of the current state. Unlike `tick`, this neither
    /// advances the simulation nor drains pending audio events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.time_left_secs,
            self.session_secs,
            Vec::new(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the remaining session seconds.
    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a target at a fixed position (for tests needing known geometry).
    #[cfg(test)]
    pub fn spawn_target_at(&mut self, position: crateshot_core::types::Position) -> u32 {
        world_setup::spawn_target_at(&mut self.world, &mut self.next_entity_id, position)
    }

    /// Spawn a projectile with explicit position and displacement (for
    /// lifetime and threshold tests).
    #[cfg(test)]
    pub fn spawn_projectile_raw(
        &mut self,
        position: crateshot_core::types::Position,
        velocity: crateshot_core::types::Vec3,
    ) -> u32 {
        world_setup::spawn_projectile_raw(
            &mut self.world,
            &mut self.next_entity_id,
            position,
            velocity,
            self.time.tick,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::Over) {
                    self.world.clear();
                    self.time = SimTime::default();
                    self.score = 0;
                    self.time_left_secs = self.session_secs;
                    self.spawn_schedule = SpawnSchedule::default();
                    self.phase = GamePhase::Running;
                    self.audio_events.push(AudioEvent::MusicStart);
                }
            }
            PlayerCommand::Fire { pose } => {
                if self.phase == GamePhase::Running {
                    self.fire(pose);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.world.clear();
                    self.time = SimTime::default();
                    self.score = 0;
                    self.time_left_secs = self.session_secs;
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Spawn a projectile from the captured camera pose. A degenerate view
    /// direction (missing camera) makes the trigger a no-op, not an error.
    fn fire(&mut self, pose: CameraPose) {
        let Some(direction) = pose.direction.normalized() else {
            return;
        };

        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_entity_id,
            pose.position,
            direction,
            self.time.tick,
        );
        self.audio_events.push(AudioEvent::ShotFired);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Target spawning (tick-scheduled, capped population)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            &mut self.next_entity_id,
            self.time.tick,
        );
        // 2. Projectile integration
        systems::movement::run(&mut self.world);
        // 3. Collision resolution (OOB cull + hit scoring)
        systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 4. Lifetime culling + deferred despawns
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.time.tick);
    }
}
