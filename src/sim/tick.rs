//! Single simulation step
//!
//! Explicit Euler with a unit timestep, matching the page's one-step-per-frame
//! cadence. Order matters: integrate, then gravity, then wall response, so a
//! floor bounce damps the velocity gravity just produced.

use super::state::{Ball, Bounds, Tuning};

/// Which walls the ball contacted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub floor: bool,
    pub ceiling: bool,
}

impl WallHits {
    pub fn any(self) -> bool {
        self.left || self.right || self.floor || self.ceiling
    }
}

/// Advance the ball by one tick.
///
/// Post-condition: the ball is fully inside `bounds`, i.e.
/// `radius <= pos.x <= width - radius` and likewise for `pos.y` (assuming the
/// surface is at least one diameter wide in each axis). Positions past a wall
/// are clamped onto it and the corresponding velocity component is reflected
/// with the damping factor for that wall.
pub fn tick(ball: &mut Ball, bounds: Bounds, tuning: &Tuning) -> WallHits {
    let mut hits = WallHits::default();

    ball.pos += ball.vel;
    ball.vel.y += tuning.gravity;

    if ball.pos.x + ball.radius > bounds.width {
        ball.pos.x = bounds.width - ball.radius;
        ball.vel.x *= -tuning.wall_damping;
        hits.right = true;
    } else if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x *= -tuning.wall_damping;
        hits.left = true;
    }

    if ball.pos.y + ball.radius > bounds.height {
        ball.pos.y = bounds.height - ball.radius;
        ball.vel.y *= -tuning.floor_damping;
        hits.floor = true;
    } else if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y *= -tuning.ceiling_damping;
        hits.ceiling = true;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn test_free_flight_step() {
        // Canonical spawn on a 400x300 surface: no wall is near, so the tick
        // is pure integration plus gravity.
        let mut ball = Ball::spawn(BOUNDS);
        let hits = tick(&mut ball, BOUNDS, &Tuning::default());

        assert!(!hits.any());
        assert!((ball.pos.x - 203.2).abs() < 1e-4);
        assert!((ball.pos.y - 77.6).abs() < 1e-4);
        assert!((ball.vel.y - 2.72).abs() < 1e-6);
        assert_eq!(ball.vel.x, 3.2);
    }

    #[test]
    fn test_gravity_accumulates_while_airborne() {
        let mut ball = Ball {
            pos: Vec2::new(200.0, 50.0),
            vel: Vec2::new(0.0, 1.0),
            radius: 18.0,
        };
        let tuning = Tuning::default();

        let mut prev_vy = ball.vel.y;
        for _ in 0..20 {
            let hits = tick(&mut ball, BOUNDS, &tuning);
            if hits.any() {
                break;
            }
            assert!((ball.vel.y - (prev_vy + tuning.gravity)).abs() < 1e-6);
            prev_vy = ball.vel.y;
        }
    }

    #[test]
    fn test_right_wall_bounce() {
        // One pixel from the right wall, moving right at 5 px/tick: the tick
        // must clamp onto the wall and reflect with wall damping.
        let mut ball = Ball {
            pos: Vec2::new(BOUNDS.width - 18.0 - 1.0, 150.0),
            vel: Vec2::new(5.0, 0.0),
            radius: 18.0,
        };
        let hits = tick(&mut ball, BOUNDS, &Tuning::default());

        assert!(hits.right);
        assert_eq!(ball.pos.x, BOUNDS.width - 18.0);
        assert!((ball.vel.x - (-4.3)).abs() < 1e-6);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = Ball {
            pos: Vec2::new(20.0, 150.0),
            vel: Vec2::new(-6.0, 0.0),
            radius: 18.0,
        };
        let hits = tick(&mut ball, BOUNDS, &Tuning::default());

        assert!(hits.left);
        assert_eq!(ball.pos.x, 18.0);
        assert!((ball.vel.x - 5.16).abs() < 1e-6);
    }

    #[test]
    fn test_floor_bounce_damps_post_gravity_velocity() {
        let mut ball = Ball {
            pos: Vec2::new(200.0, BOUNDS.height - 18.0 - 1.0),
            vel: Vec2::new(0.0, 4.0),
            radius: 18.0,
        };
        let tuning = Tuning::default();
        let vy_at_impact = ball.vel.y + tuning.gravity;

        let hits = tick(&mut ball, BOUNDS, &tuning);

        assert!(hits.floor);
        assert_eq!(ball.pos.y, BOUNDS.height - 18.0);
        // Sign flips, magnitude is exactly floor_damping * the pre-bounce
        // (post-gravity) speed.
        assert!(ball.vel.y < 0.0);
        assert!((ball.vel.y.abs() - tuning.floor_damping * vy_at_impact).abs() < 1e-6);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut ball = Ball {
            pos: Vec2::new(200.0, 20.0),
            vel: Vec2::new(0.0, -8.0),
            radius: 18.0,
        };
        let tuning = Tuning::default();
        let vy_at_impact = ball.vel.y + tuning.gravity;

        let hits = tick(&mut ball, BOUNDS, &tuning);

        assert!(hits.ceiling);
        assert_eq!(ball.pos.y, 18.0);
        assert!(ball.vel.y > 0.0);
        assert!((ball.vel.y - tuning.ceiling_damping * vy_at_impact.abs()).abs() < 1e-6);
    }

    #[test]
    fn test_corner_hit_reports_both_walls() {
        let mut ball = Ball {
            pos: Vec2::new(BOUNDS.width - 19.0, BOUNDS.height - 19.0),
            vel: Vec2::new(10.0, 10.0),
            radius: 18.0,
        };
        let hits = tick(&mut ball, BOUNDS, &Tuning::default());
        assert!(hits.right && hits.floor);
    }

    proptest! {
        /// The clamp invariant holds after every tick, for any in-bounds
        /// start and any plausible velocity.
        #[test]
        fn prop_ball_stays_inside_bounds(
            x in 18.0f32..382.0,
            y in 18.0f32..282.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            ticks in 1usize..200,
        ) {
            let mut ball = Ball {
                pos: Vec2::new(x, y),
                vel: Vec2::new(vx, vy),
                radius: 18.0,
            };
            let tuning = Tuning::default();

            for _ in 0..ticks {
                tick(&mut ball, BOUNDS, &tuning);
                prop_assert!(ball.pos.x >= ball.radius);
                prop_assert!(ball.pos.x <= BOUNDS.width - ball.radius);
                prop_assert!(ball.pos.y >= ball.radius);
                prop_assert!(ball.pos.y <= BOUNDS.height - ball.radius);
            }
        }
    }
}
