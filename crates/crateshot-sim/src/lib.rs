//! Simulation engine for CRATESHOT.
//!
//! Owns the hecs ECS world, runs systems once per tick, and produces
//! GameStateSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use crateshot_core as core;
pub use engine::GameEngine;
