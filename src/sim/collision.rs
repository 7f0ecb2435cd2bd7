//! Collision detection and response
//!
//! Sphere-sphere tests are plain center-distance overlap checks. Detection is
//! discrete, not swept, so a fast ball can tunnel through a thin obstacle in
//! one large `dt` step. The ball-ball impulse is deliberately the lopsided
//! transfer the game was tuned around, not a momentum-conserving exchange.

use super::state::{Ball, BallRole, Orientation, Wall};
use crate::consts::{CONTACT_CLEARANCE, SCORE_PER_TARGET};

impl Ball {
    /// Euclidean distance between ball centers (y included).
    pub fn distance_to(&self, other: &Ball) -> f32 {
        (self.pos - other.pos).length()
    }

    /// Sphere-overlap test; symmetric in its arguments.
    pub fn collides_with(&self, other: &Ball) -> bool {
        self.distance_to(other) <= self.radius + other.radius
    }
}

/// Resolve an impact between `receiver` and the ball that struck it, and
/// return the score awarded.
///
/// The transfer scales the summed x-velocities by the striker's vx/vz ratio
/// and negates both components on the survivor. A target on either side is
/// destroyed for [`SCORE_PER_TARGET`] points; between two non-targets only a
/// cue striker reacts, bouncing straight back along z.
pub fn resolve_ball_impact(receiver: &mut Ball, striker: &mut Ball) -> u32 {
    let vx_after = (striker.vel.x + receiver.vel.x) * striker.vel.x / striker.vel.y;
    let vz_after = striker.vel.y + receiver.vel.y;

    match (receiver.role, striker.role) {
        (BallRole::Target, _) => {
            striker.set_velocity(-vx_after, -vz_after);
            receiver.destroy();
            SCORE_PER_TARGET
        }
        (_, BallRole::Target) => {
            receiver.set_velocity(-vx_after, -vz_after);
            striker.destroy();
            SCORE_PER_TARGET
        }
        _ => {
            if striker.role == BallRole::Cue {
                striker.vel.y = -striker.vel.y;
            }
            0
        }
    }
}

impl Wall {
    /// Slab test along the wall's blocking axis.
    pub fn collides_with(&self, ball: &Ball) -> bool {
        match self.orientation() {
            Orientation::Wide => (ball.pos.z - self.z()).abs() <= ball.radius + self.depth() / 2.0,
            Orientation::Tall => (ball.pos.x - self.x()).abs() <= ball.radius + self.width() / 2.0,
        }
    }

    /// Reflect the ball: invert the blocked axis and reposition the ball just
    /// clear of the face so it cannot stick inside the wall.
    ///
    /// A wide wall's near face is on its -z side (the far rail sits at
    /// positive z); tall walls pick the clearance side from the sign of their
    /// x position.
    pub fn resolve_collision(&self, ball: &mut Ball) {
        match self.orientation() {
            Orientation::Wide => {
                ball.vel.y = -ball.vel.y;
                ball.pos.z = self.z() - self.depth() - ball.radius - CONTACT_CLEARANCE;
            }
            Orientation::Tall => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = if self.x() > 0.0 {
                    self.x() - self.width() / 2.0 - ball.radius - CONTACT_CLEARANCE
                } else {
                    self.x() + self.width() / 2.0 + ball.radius + CONTACT_CLEARANCE
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const R: f32 = 0.21;

    fn ball(role: BallRole, x: f32, z: f32) -> Ball {
        Ball::new(role, x, z, R)
    }

    #[test]
    fn overlap_threshold_is_sum_of_radii() {
        let a = ball(BallRole::Cue, 0.0, 0.0);
        let touching = ball(BallRole::Target, 0.42, 0.0);
        let clear = ball(BallRole::Target, 0.43, 0.0);
        assert!(a.collides_with(&touching));
        assert!(!a.collides_with(&clear));
    }

    #[test]
    fn collision_test_is_symmetric() {
        let a = ball(BallRole::Cue, 0.1, 0.2);
        let b = ball(BallRole::Target, 0.3, 0.4);
        assert_eq!(a.collides_with(&b), b.collides_with(&a));
    }

    #[test]
    fn target_receiver_dies_and_striker_rebounds() {
        let mut target = ball(BallRole::Target, 0.0, 4.0);
        let mut cue = ball(BallRole::Cue, 0.0, 3.6);
        cue.set_velocity(30.0, 30.0);

        let awarded = resolve_ball_impact(&mut target, &mut cue);
        assert_eq!(awarded, SCORE_PER_TARGET);
        assert!(!target.alive);
        assert_eq!(target.pos.y, crate::consts::SENTINEL_DEPTH);
        // vx' = (30 + 0) * 30 / 30 = 30, vz' = 30; the striker gets both
        // negated.
        assert_eq!(cue.vel, Vec2::new(-30.0, -30.0));
    }

    #[test]
    fn target_striker_dies_symmetrically() {
        let mut receiver = ball(BallRole::Cue, 0.0, 3.6);
        let mut target = ball(BallRole::Target, 0.0, 4.0);
        target.set_velocity(10.0, -20.0);

        let awarded = resolve_ball_impact(&mut receiver, &mut target);
        assert_eq!(awarded, SCORE_PER_TARGET);
        assert!(!target.alive);
        // vx' = (10 + 0) * 10 / -20 = -5, vz' = -20.
        assert_eq!(receiver.vel, Vec2::new(5.0, 20.0));
    }

    #[test]
    fn cue_bounces_back_off_aim_ball() {
        let mut aim = ball(BallRole::Aim, 0.0, -3.74);
        let mut cue = ball(BallRole::Cue, 0.0, -3.4);
        cue.set_velocity(5.0, -10.0);

        let awarded = resolve_ball_impact(&mut aim, &mut cue);
        assert_eq!(awarded, 0);
        assert!(aim.alive);
        assert_eq!(cue.vel, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn wide_wall_slab_test() {
        let far = Wall::new(0.0, 4.5, 6.0, 0.3, 0.12).unwrap();
        let near = ball(BallRole::Cue, 0.0, 4.23);
        let clear = ball(BallRole::Cue, 0.0, 4.0);
        assert!(far.collides_with(&near));
        assert!(!far.collides_with(&clear));
    }

    #[test]
    fn tall_wall_slab_test() {
        let side = Wall::new(3.0, 0.0, 0.12, 0.3, 9.0).unwrap();
        let near = ball(BallRole::Cue, 2.74, 0.0);
        let clear = ball(BallRole::Cue, 2.5, 0.0);
        assert!(side.collides_with(&near));
        assert!(!side.collides_with(&clear));
    }

    #[test]
    fn wide_wall_inverts_z_and_repositions() {
        let far = Wall::new(0.0, 4.5, 6.0, 0.3, 0.12).unwrap();
        let mut cue = ball(BallRole::Cue, 1.0, 4.25);
        cue.set_velocity(2.0, 7.0);

        far.resolve_collision(&mut cue);
        assert_eq!(cue.vel, Vec2::new(2.0, -7.0));
        assert!((cue.pos.z - 4.12).abs() < 1e-5);
        // The ball ends no closer to the wall center than
        // radius + thickness/2 + clearance.
        assert!(far.z() - cue.pos.z >= R + far.depth() / 2.0 + CONTACT_CLEARANCE - 1e-5);
    }

    #[test]
    fn tall_wall_picks_clearance_side_by_sign() {
        let right = Wall::new(3.0, 0.0, 0.12, 0.3, 9.0).unwrap();
        let mut cue = ball(BallRole::Cue, 2.8, 0.0);
        cue.set_velocity(4.0, 1.0);
        right.resolve_collision(&mut cue);
        assert_eq!(cue.vel, Vec2::new(-4.0, 1.0));
        assert!((cue.pos.x - (3.0 - 0.06 - R - CONTACT_CLEARANCE)).abs() < 1e-5);

        let left = Wall::new(-3.0, 0.0, 0.12, 0.3, 9.0).unwrap();
        let mut cue = ball(BallRole::Cue, -2.8, 0.0);
        cue.set_velocity(-4.0, 1.0);
        left.resolve_collision(&mut cue);
        assert_eq!(cue.vel, Vec2::new(4.0, 1.0));
        assert!((cue.pos.x - (-3.0 + 0.06 + R + CONTACT_CLEARANCE)).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn collides_with_symmetric_for_all_positions(
            ax in -10.0f32..10.0, az in -10.0f32..10.0,
            bx in -10.0f32..10.0, bz in -10.0f32..10.0,
        ) {
            let a = ball(BallRole::Cue, ax, az);
            let b = ball(BallRole::Target, bx, bz);
            prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }
    }
}
