//! Table layout and rule configuration
//!
//! Tunables live here; fixed engine constants live in [`crate::consts`].
//! Validation happens once at setup, so the simulation never has to cope
//! with ill-formed geometry at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CONTACT_CLEARANCE;

/// Setup-time configuration defects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("extent must be positive, got {0}")]
    NonPositiveExtent(f32),
    #[error("wall thickness must be positive, got {0}")]
    NonPositiveThickness(f32),
    #[error("wall at ({x}, {z}) is {side} x {side}; a square wall has no blocking axis")]
    SquareWall { x: f32, z: f32, side: f32 },
    #[error("win score must be positive")]
    ZeroWinScore,
    #[error("starting lives must be positive")]
    ZeroLives,
}

/// Tunable table layout and game rules.
///
/// `Default` is the classic 6x9 table with a 20-ball rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Table extent along x.
    pub width: f32,
    /// Table extent along z.
    pub depth: f32,
    pub wall_thickness: f32,
    pub ball_radius: f32,
    /// Velocity set on both axes by the launch input.
    pub launch_speed: f32,
    /// Score at which the table is cleared and the game ends.
    pub win_score: u32,
    pub starting_lives: u8,
    /// X step applied per aim-left/aim-right input.
    pub aim_step: f32,
    /// The cue ball crossing this z line is a miss and costs a life.
    pub foul_line_z: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            depth: 9.0,
            wall_thickness: 0.12,
            ball_radius: 0.21,
            launch_speed: 30.0,
            win_score: 200,
            starting_lives: 5,
            aim_step: 0.1,
            foul_line_z: -4.0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.ball_radius));
        }
        if self.width <= 0.0 {
            return Err(ConfigError::NonPositiveExtent(self.width));
        }
        if self.depth <= 0.0 {
            return Err(ConfigError::NonPositiveExtent(self.depth));
        }
        if self.wall_thickness <= 0.0 {
            return Err(ConfigError::NonPositiveThickness(self.wall_thickness));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }

    /// Playable rectangle the integrator clamps into (wall center planes).
    pub fn bounds(&self) -> TableBounds {
        TableBounds {
            half_width: self.width / 2.0 - self.wall_thickness / 2.0,
            half_depth: self.depth / 2.0 - self.wall_thickness / 2.0,
        }
    }

    /// Aim ball rest position, just ahead of the foul line.
    pub fn aim_start_z(&self) -> f32 {
        self.foul_line_z + self.ball_radius + CONTACT_CLEARANCE
    }

    /// Cue ball rest position, one ball ahead of the aim ball.
    pub fn cue_start_z(&self) -> f32 {
        self.aim_start_z() + self.ball_radius * 2.0 + CONTACT_CLEARANCE
    }
}

/// Half extents of the playable rectangle, measured to the rail center lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableBounds {
    pub half_width: f32,
    pub half_depth: f32,
}
