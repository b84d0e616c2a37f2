//! Session runner for CRATESHOT.
//!
//! Drives the headless engine from a dedicated thread: simulation ticks at
//! the nominal frame rate, the session clock at 1 Hz. A frontend talks to it
//! through a command channel and a polled snapshot slot.

pub mod game_loop;
pub mod state;
