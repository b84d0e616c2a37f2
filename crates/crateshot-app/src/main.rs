//! Headless demo: runs a short scripted session and prints HUD lines.
//!
//! Useful for eyeballing the engine without a render surface: fires a
//! rotating spread of shots at the spawn volume and reports score/time
//! once per second, then the final score on game over.

use std::sync::mpsc;
use std::time::Duration;

use crateshot_app::game_loop::spawn_session;
use crateshot_core::commands::{CameraPose, PlayerCommand};
use crateshot_core::types::{Position, Vec3};
use crateshot_sim::engine::SimConfig;

fn main() {
    let config = SimConfig {
        seed: 42,
        session_secs: 15,
    };

    let (over_tx, over_rx) = mpsc::channel();
    let session = spawn_session(config, move |over| {
        let _ = over_tx.send(over);
    });

    session.send(PlayerCommand::StartGame);

    let mut shot = 0u32;
    let mut last_second = u32::MAX;
    loop {
        if let Ok(over) = over_rx.try_recv() {
            println!("game over — final score {}", over.final_score);
            break;
        }

        // Four shots per second, sweeping across the spawn volume.
        let angle = f64::from(shot) * 0.7;
        session.send(PlayerCommand::Fire {
            pose: CameraPose {
                position: Position::new(0.0, 2.0, 8.0),
                direction: Vec3::new(angle.sin() * 0.5, 0.1 * angle.cos(), -1.0),
            },
        });
        shot += 1;

        if let Some(snap) = session.latest_snapshot() {
            if snap.time_left_secs != last_second {
                last_second = snap.time_left_secs;
                println!(
                    "t={:2}s score={:4} targets={} projectiles={}",
                    snap.time_left_secs,
                    snap.score,
                    snap.targets.len(),
                    snap.projectiles.len()
                );
            }
        }

        std::thread::sleep(Duration::from_millis(250));
    }

    if let Some(snap) = session.latest_snapshot() {
        match serde_json::to_string_pretty(&snap) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("snapshot serialization failed: {err}"),
        }
    }
}
