//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Nominal render-frame cadence.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Targets ---

/// Maximum number of live targets at any time.
pub const MAX_TARGETS: usize = 5;

/// Ticks between spawn windows (one window per second of sim time).
pub const TARGET_SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64;

/// Points awarded per destroyed target.
pub const TARGET_SCORE: u32 = 100;

// --- Target spawn bounds (uniform per axis, max exclusive) ---

pub const SPAWN_X_MIN: f64 = -5.0;
pub const SPAWN_X_MAX: f64 = 5.0;
pub const SPAWN_Y_MIN: f64 = 0.0;
pub const SPAWN_Y_MAX: f64 = 5.0;
pub const SPAWN_Z_MIN: f64 = -5.0;
pub const SPAWN_Z_MAX: f64 = 5.0;

// --- Projectiles ---

/// Displacement per tick along the fire direction (units/tick).
/// Fixed-step: projectile speed is tied to tick cadence, not wall time.
pub const PROJECTILE_STEP: f64 = 0.2;

/// Distance ahead of the camera at which a projectile spawns.
pub const MUZZLE_OFFSET: f64 = 2.0;

/// Distance from the origin beyond which a projectile is culled.
pub const PROJECTILE_MAX_RANGE: f64 = 30.0;

/// Projectile lifetime in seconds of simulation time.
pub const PROJECTILE_LIFETIME_SECS: f64 = 5.0;

/// Projectile lifetime in ticks at the nominal rate.
pub const PROJECTILE_LIFETIME_TICKS: u64 =
    (PROJECTILE_LIFETIME_SECS * TICK_RATE as f64) as u64;

/// Distance below which a projectile hits a target (strict inequality).
pub const HIT_RADIUS: f64 = 1.0;

// --- Session ---

/// Default session length in seconds.
pub const SESSION_DURATION_SECS: u32 = 60;
