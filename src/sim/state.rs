//! Entities and game state
//!
//! Score, lives, and the round phase are explicit fields of [`GameState`],
//! owned and mutated only by the frame step; nothing here is process-global.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, TableBounds, TableConfig};
use crate::consts::*;

/// Collision semantics of a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallRole {
    /// Destroyed when struck by the cue ball; awards score.
    Target,
    /// The player-launched ball; never destroyed.
    Cue,
    /// Aim pointer; repositioned by input, never integrated.
    Aim,
}

/// A ball on the table plane.
///
/// `vel` lives in the x/z plane (`vel.y` is the z component). `pos.y` stays
/// at `radius` while the ball is live and drops to [`SENTINEL_DEPTH`] when a
/// target is destroyed; `alive` is the authoritative liveness flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec2,
    pub radius: f32,
    pub role: BallRole,
    pub alive: bool,
}

impl Ball {
    pub fn new(role: BallRole, x: f32, z: f32, radius: f32) -> Self {
        Self {
            pos: Vec3::new(x, radius, z),
            vel: Vec2::ZERO,
            radius,
            role,
            alive: true,
        }
    }

    /// Unconstrained velocity assignment; callers clamp if they need to.
    pub fn set_velocity(&mut self, vx: f32, vz: f32) {
        self.vel = Vec2::new(vx, vz);
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.pos = Vec3::new(x, y, z);
    }

    /// Park the ball far below the plane and mark it dead.
    pub fn destroy(&mut self) {
        self.alive = false;
        self.pos.y = SENTINEL_DEPTH;
        self.vel = Vec2::ZERO;
    }

    /// World transform for draw calls.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.pos)
    }

    /// Advance the ball on the x/z plane by `dt`, clamped to the playable
    /// rectangle. No friction is modeled; balls coast until a collision or
    /// the stop threshold.
    ///
    /// Speeds at or below [`STOP_EPSILON`] on both axes zero the velocity
    /// without moving the ball. The clamp is an else-if chain, so at most one
    /// axis is corrected per step; rail deflection owns the velocity response.
    pub fn integrate(&mut self, dt: f32, bounds: &TableBounds) {
        if self.vel.x.abs() <= STOP_EPSILON && self.vel.y.abs() <= STOP_EPSILON {
            self.vel = Vec2::ZERO;
            return;
        }
        let mut x = self.pos.x + TIME_SCALE * dt * self.vel.x;
        let mut z = self.pos.z + TIME_SCALE * dt * self.vel.y;
        let x_max = bounds.half_width - self.radius;
        let z_max = bounds.half_depth - self.radius;
        if x >= x_max {
            x = x_max;
        } else if x <= -x_max {
            x = -x_max;
        } else if z <= -z_max {
            z = -z_max;
        } else if z >= z_max {
            z = z_max;
        }
        self.pos.x = x;
        self.pos.z = z;
    }
}

/// Blocking axis of a wall, derived from its extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Wider than deep; blocks motion along z.
    Wide,
    /// Deeper than wide; blocks motion along x.
    Tall,
}

/// An axis-aligned static box on the table. Immutable after setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    x: f32,
    z: f32,
    width: f32,
    depth: f32,
    height: f32,
    orientation: Orientation,
}

impl Wall {
    /// Build a wall, deriving its blocking axis from the extents.
    ///
    /// A square footprint has no blocking axis and is rejected here rather
    /// than left undefined at collision time.
    pub fn new(x: f32, z: f32, width: f32, height: f32, depth: f32) -> Result<Self, ConfigError> {
        if width <= 0.0 || depth <= 0.0 {
            return Err(ConfigError::NonPositiveExtent(width.min(depth)));
        }
        let orientation = if width > depth {
            Orientation::Wide
        } else if depth > width {
            Orientation::Tall
        } else {
            return Err(ConfigError::SquareWall { x, z, side: width });
        };
        Ok(Self {
            x,
            z,
            width,
            depth,
            height,
            orientation,
        })
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// World transform for draw calls.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.x, self.height / 2.0, self.z))
    }
}

/// Round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a launch; cue and aim balls sit on the start line.
    Idle,
    /// Cue ball in flight.
    Active,
    /// Lives exhausted or win score reached. Terminal until `restart`.
    Ended,
}

/// Rack layout: four rows of five targets.
pub const TARGET_GRID: [[f32; 2]; TARGET_COUNT] = [
    [-2.0, 4.0],
    [-1.5, 4.0],
    [0.0, 4.0],
    [1.5, 4.0],
    [2.0, 4.0],
    [-2.0, 3.0],
    [-1.0, 3.0],
    [0.0, 3.0],
    [1.0, 3.0],
    [2.0, 3.0],
    [-2.0, 2.0],
    [-1.0, 2.0],
    [0.0, 2.0],
    [1.0, 2.0],
    [2.0, 2.0],
    [-2.0, 1.0],
    [-1.5, 1.0],
    [0.0, 1.0],
    [1.5, 1.0],
    [2.0, 1.0],
];

/// HUD-facing snapshot; text rendering owns the formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u8,
    pub round_active: bool,
    pub game_ended: bool,
}

/// Complete game state.
///
/// Exclusively owned and mutated by [`tick`](super::tick::tick) during its
/// single-threaded pass; rendering reads positions only after the tick
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: TableConfig,
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
    pub targets: Vec<Ball>,
    pub cue: Ball,
    pub aim: Ball,
    /// Far rail plus the two side rails, in collision order.
    pub rails: [Wall; 3],
    /// Decorative: the table surface.
    pub floor: Wall,
    /// Decorative: the start-line marker.
    pub foul_line: Wall,
}

impl GameState {
    /// Build the initial layout from a validated configuration.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let r = config.ball_radius;
        let t = config.wall_thickness;

        let floor = Wall::new(0.0, 0.0, config.width, 0.03, config.depth)?;
        let foul_line = Wall::new(0.0, config.aim_start_z(), config.width, 0.1, 0.1)?;
        let rails = [
            Wall::new(0.0, config.depth / 2.0, config.width, 0.3, t)?,
            Wall::new(config.width / 2.0, 0.0, t, 0.3, config.depth)?,
            Wall::new(-config.width / 2.0, 0.0, t, 0.3, config.depth)?,
        ];

        let targets = TARGET_GRID
            .iter()
            .map(|&[x, z]| Ball::new(BallRole::Target, x, z, r))
            .collect();
        let cue = Ball::new(BallRole::Cue, 0.0, config.cue_start_z(), r);
        let aim = Ball::new(BallRole::Aim, 0.0, config.aim_start_z(), r);

        Ok(Self {
            score: 0,
            lives: config.starting_lives,
            phase: GamePhase::Idle,
            targets,
            cue,
            aim,
            rails,
            floor,
            foul_line,
            config,
        })
    }

    /// Put every ball back on its initial spot with zero velocity.
    ///
    /// Idempotent: applying it twice yields the same state as applying it
    /// once.
    pub fn reset_layout(&mut self) {
        let r = self.config.ball_radius;
        for (ball, &[x, z]) in self.targets.iter_mut().zip(TARGET_GRID.iter()) {
            *ball = Ball::new(BallRole::Target, x, z, r);
        }
        self.reset_launch_pair();
    }

    /// Re-rack only the cue and aim balls (between rounds).
    pub fn reset_launch_pair(&mut self) {
        let r = self.config.ball_radius;
        self.cue = Ball::new(BallRole::Cue, 0.0, self.config.cue_start_z(), r);
        self.aim = Ball::new(BallRole::Aim, 0.0, self.config.aim_start_z(), r);
    }

    /// Full restart: layout, score, lives, and phase. The only way out of
    /// [`GamePhase::Ended`].
    pub fn restart(&mut self) {
        self.reset_layout();
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.phase = GamePhase::Idle;
        log::info!("restart: {} lives", self.lives);
    }

    /// Launch the cue ball if a round can start.
    pub fn launch(&mut self) {
        if self.phase == GamePhase::Idle && self.lives > 0 {
            let speed = self.config.launch_speed;
            self.cue.set_velocity(speed, speed);
            self.phase = GamePhase::Active;
            log::debug!("launch at speed {speed}");
        }
    }

    /// Nudge the aim ball along x, keeping it strictly between the side rail
    /// inner faces. The x-velocity is visual feedback only; the aim ball is
    /// never integrated.
    pub fn nudge_aim(&mut self, dir: f32) {
        let x = self.aim.pos.x + dir * self.config.aim_step;
        let inner = self.config.width / 2.0 - self.config.wall_thickness / 2.0;
        if x > -inner && x < inner {
            self.aim.pos.x = x;
            self.aim.vel.x = dir * self.config.aim_step * AIM_FEEDBACK_FACTOR;
        }
    }

    pub fn round_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn game_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            round_active: self.round_active(),
            game_ended: self.game_ended(),
        }
    }

    /// Targets still on the table.
    pub fn live_targets(&self) -> usize {
        self.targets.iter().filter(|t| t.alive).count()
    }
}
