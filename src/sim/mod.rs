//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is single-threaded and
//! frame-driven: every entity is exclusively owned by [`GameState`], each
//! [`tick`] completes fully within the frame that triggers it, and there are
//! no rendering or platform dependencies.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::resolve_ball_impact;
pub use state::{
    Ball, BallRole, GamePhase, GameState, HudSnapshot, Orientation, TARGET_GRID, Wall,
};
pub use tick::{TickInput, tick};
