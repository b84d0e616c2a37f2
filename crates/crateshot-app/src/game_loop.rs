//! Game loop thread — drives the engine's two timing domains.
//!
//! Simulation ticks run at the nominal frame rate; the session clock
//! advances once per wall-clock second. The two schedules are independent
//! `Instant` deadlines with no fixed ratio assumed between them.
//!
//! The loop, its channel, and the snapshot slot are all scoped to the
//! returned `SessionHandle`: dropping it shuts the thread down and joins it,
//! on every exit path.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crateshot_core::commands::PlayerCommand;
use crateshot_core::constants::TICK_RATE;
use crateshot_core::events::GameOver;
use crateshot_sim::engine::{GameEngine, SimConfig};

use crate::state::{SessionCommand, SharedSnapshot};

/// Nominal duration of one simulation tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Session clock period.
const CLOCK_DURATION: Duration = Duration::from_secs(1);

/// Owning handle for a running session loop.
///
/// Dropping the handle sends `Shutdown` and joins the thread, releasing all
/// periodic work deterministically regardless of how the session ended.
pub struct SessionHandle {
    cmd_tx: mpsc::Sender<SessionCommand>,
    latest_snapshot: SharedSnapshot,
    join: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) {
        let _ = self.cmd_tx.send(SessionCommand::Player(command));
    }

    /// Poll the most recent snapshot, if any tick has completed yet.
    pub fn latest_snapshot(&self) -> Option<crateshot_core::state::GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(SessionCommand::Shutdown);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawn the game loop in a new thread.
///
/// `on_game_over` is invoked from the loop thread, exactly once per session,
/// when the countdown reaches zero.
pub fn spawn_session(
    config: SimConfig,
    on_game_over: impl FnMut(GameOver) + Send + 'static,
) -> SessionHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

    let snapshot_slot = Arc::clone(&latest_snapshot);
    let join = std::thread::Builder::new()
        .name("crateshot-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &snapshot_slot, on_game_over);
        })
        .expect("Failed to spawn game loop thread");

    SessionHandle {
        cmd_tx,
        latest_snapshot,
        join: Some(join),
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<SessionCommand>,
    latest_snapshot: &Mutex<Option<crateshot_core::state::GameStateSnapshot>>,
    mut on_game_over: impl FnMut(GameOver),
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut next_clock_time = Instant::now() + CLOCK_DURATION;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(SessionCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(SessionCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance the session clock when its deadline passes. The engine
        //    makes expiry idempotent, so a late burst cannot double-report.
        let now = Instant::now();
        if now >= next_clock_time {
            if let Some(over) = engine.advance_clock() {
                on_game_over(over);
            }
            next_clock_time += CLOCK_DURATION;
            if now.saturating_duration_since(next_clock_time) > CLOCK_DURATION * 2 {
                // Too far behind (e.g. suspend) — resync instead of catching up.
                next_clock_time = now + CLOCK_DURATION;
            }
        }

        // 3. Advance one simulation tick and publish the snapshot
        let snapshot = engine.tick();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick deadline
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crateshot_core::commands::CameraPose;
    use crateshot_core::enums::GamePhase;
    use crateshot_core::types::{Position, Vec3};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_handle_drop_tears_down_loop() {
        let session = spawn_session(SimConfig::default(), |_| {});
        // Give the loop a moment to publish at least one snapshot.
        std::thread::sleep(Duration::from_millis(100));
        assert!(session.latest_snapshot().is_some());
        // Drop joins the thread; hanging here would fail the test by timeout.
        drop(session);
    }

    #[test]
    fn test_short_session_reports_game_over_once() {
        let reports = Arc::new(AtomicU32::new(0));
        let reports_in_loop = Arc::clone(&reports);

        let session = spawn_session(
            SimConfig {
                seed: 1,
                session_secs: 2,
            },
            move |over| {
                assert_eq!(over.final_score, 0);
                reports_in_loop.fetch_add(1, Ordering::SeqCst);
            },
        );
        session.send(PlayerCommand::StartGame);

        // 2-second session plus slack for scheduling.
        std::thread::sleep(Duration::from_millis(3500));

        let snap = session.latest_snapshot().unwrap();
        assert_eq!(snap.phase, GamePhase::Over);
        assert_eq!(reports.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fire_command_reaches_engine() {
        let session = spawn_session(
            SimConfig {
                seed: 2,
                session_secs: 30,
            },
            |_| {},
        );
        session.send(PlayerCommand::StartGame);
        session.send(PlayerCommand::Fire {
            pose: CameraPose {
                position: Position::new(0.0, 2.0, 8.0),
                direction: Vec3::new(0.0, 0.0, -1.0),
            },
        });

        std::thread::sleep(Duration::from_millis(200));
        let snap = session.latest_snapshot().unwrap();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.projectiles.len(), 1);
    }
}
