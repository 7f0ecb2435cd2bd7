//! Per-frame orchestrator
//!
//! One tick per rendered frame, driven synchronously by the host loop with a
//! host-supplied variable `dt`. Every collision and integration step
//! completes within the tick that triggers it; rendering reads positions
//! afterwards.

use glam::Vec2;

use super::collision::resolve_ball_impact;
use super::state::{GamePhase, GameState};

/// Input events for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Launch the cue ball (honored only while idle with lives left).
    pub launch: bool,
    /// Nudge the aim ball one step toward -x.
    pub aim_left: bool,
    /// Nudge the aim ball one step toward +x.
    pub aim_right: bool,
}

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Ended {
        // Terminal: hold the initial layout until the host restarts.
        state.reset_layout();
        return;
    }

    if input.aim_left {
        state.nudge_aim(-1.0);
    }
    if input.aim_right {
        state.nudge_aim(1.0);
    }
    if input.launch {
        state.launch();
    }

    let bounds = state.config.bounds();
    state.cue.integrate(dt, &bounds);

    // The cue ball back across the foul line is a miss.
    if state.cue.pos.z <= state.config.foul_line_z + state.cue.radius {
        state.cue.vel = Vec2::ZERO;
        state.lives = state.lives.saturating_sub(1);
        state.phase = GamePhase::Idle;
        if state.lives == 0 {
            log::info!("out of lives at score {}", state.score);
            state.reset_layout();
            state.phase = GamePhase::Ended;
        } else {
            log::info!("miss: {} lives left", state.lives);
            state.reset_launch_pair();
        }
        return;
    }

    // Rails first (wall-major order): live targets, then the cue ball.
    for rail in &state.rails {
        for target in state.targets.iter_mut().filter(|t| t.alive) {
            if rail.collides_with(target) {
                rail.resolve_collision(target);
            }
        }
        if rail.collides_with(&state.cue) {
            rail.resolve_collision(&mut state.cue);
        }
    }

    // Targets vs the cue ball, index ascending. A target dies on its first
    // hit, so at most one resolution per target is meaningful.
    for target in state.targets.iter_mut() {
        if !target.alive || !target.collides_with(&state.cue) {
            continue;
        }
        state.score += resolve_ball_impact(target, &mut state.cue);
        log::debug!("target down, score {}", state.score);
        if state.score >= state.config.win_score {
            state.cue.vel = Vec2::ZERO;
            state.phase = GamePhase::Ended;
            log::info!("table cleared at score {}", state.score);
        }
    }

    // The aim ball interacts only while a round is live, and only as a
    // cosmetic bounce.
    if state.phase == GamePhase::Active && state.aim.collides_with(&state.cue) {
        resolve_ball_impact(&mut state.aim, &mut state.cue);
    }
}
