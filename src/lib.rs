//! Table Strike - a table-confined guided-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Data-driven table layout and rules
//!
//! Rendering, window plumbing, and raw input dispatch are external. A host
//! maps its input events to [`sim::TickInput`], calls [`sim::tick`] once per
//! frame with the elapsed time, and reads back world transforms and the HUD
//! snapshot after the tick completes.

pub mod config;
pub mod sim;

pub use config::{ConfigError, TableBounds, TableConfig};

/// Engine constants that are not part of the tunable table configuration.
pub mod consts {
    /// Scale applied to `velocity * dt` when integrating ball motion.
    pub const TIME_SCALE: f32 = 3.3;
    /// At or below this speed on both axes a ball is considered stopped.
    pub const STOP_EPSILON: f32 = 0.01;
    /// Extra gap left between a deflected ball and the wall face.
    pub const CONTACT_CLEARANCE: f32 = 0.05;
    /// Destroyed targets are parked this far below the table plane.
    pub const SENTINEL_DEPTH: f32 = -500.0;
    /// Points awarded per destroyed target.
    pub const SCORE_PER_TARGET: u32 = 10;
    /// Number of target balls in the rack.
    pub const TARGET_COUNT: usize = 20;
    /// Aim feedback velocity is `aim_step * AIM_FEEDBACK_FACTOR`.
    pub const AIM_FEEDBACK_FACTOR: f32 = 5.0;
}
