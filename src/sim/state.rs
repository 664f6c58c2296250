//! Ball state and simulation tuning
//!
//! Coordinates are screen space: origin top-left, y increasing downward,
//! units are pixels and pixels/tick.

use glam::Vec2;

use crate::consts::*;

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn at the page's canonical start: horizontally centered, a quarter
    /// of the way down, drifting right and downward.
    pub fn spawn(bounds: Bounds) -> Self {
        Self {
            pos: Vec2::new(bounds.width / 2.0, bounds.height / 4.0),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
            radius: BALL_RADIUS,
        }
    }
}

/// Fixed extent of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Physics tuning. The three damping factors are intentionally distinct
/// (inelastic floor, near-elastic ceiling); they are configuration, not
/// derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity retained after a left/right wall bounce
    pub wall_damping: f32,
    /// Velocity retained after a floor bounce
    pub floor_damping: f32,
    /// Velocity retained after a ceiling bounce
    pub ceiling_damping: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wall_damping: WALL_DAMPING,
            floor_damping: FLOOR_DAMPING,
            ceiling_damping: CEILING_DAMPING,
        }
    }
}

/// Whether the demo is advancing or frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    /// The state after one toggle (a click on the canvas)
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let ball = Ball::spawn(Bounds::new(400.0, 300.0));
        assert_eq!(ball.pos, Vec2::new(200.0, 75.0));
        assert_eq!(ball.vel, Vec2::new(3.2, 2.6));
        assert_eq!(ball.radius, 18.0);
    }

    #[test]
    fn test_toggle_round_trip() {
        let state = RunState::Running;
        assert_eq!(state.toggled(), RunState::Paused);
        assert_eq!(state.toggled().toggled(), state);
        assert!(!state.toggled().is_running());
    }
}
