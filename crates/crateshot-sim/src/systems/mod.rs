//! Simulation systems, run in a fixed order each tick.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
