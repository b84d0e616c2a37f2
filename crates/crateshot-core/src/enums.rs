//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `Running -> Over` happens exactly once per session, triggered only by the
/// session clock reaching zero. `Over` is terminal except for an explicit
/// return to the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Running,
    Over,
}
