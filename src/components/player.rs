//! Player controller: gravity, run, jump, animation choice and death.
//!
//! The per-frame rules live in [`PlayerController::step`] so they can be
//! exercised without a world; [`crate::systems::player`] feeds it the input
//! snapshot and the body's contacts.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const GRAVITY: f32 = 750.0;
pub const RUN_ACCELERATION: f32 = 1850.0;
pub const JUMP_VELOCITY: f32 = -350.0;
/// Below this line the player is dead.
pub const DEATH_Y: f32 = 500.0;
/// Horizontal speed above which a grounded player runs.
pub const RUN_THRESHOLD: f32 = 50.0;

/// Movement intent sampled from the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    Idle,
    Run,
    Jump,
}

impl PlayerPose {
    /// Pick the pose from ground contact and horizontal speed.
    pub fn select(grounded: bool, vx: f32) -> Self {
        if !grounded {
            PlayerPose::Jump
        } else if vx.abs() > RUN_THRESHOLD {
            PlayerPose::Run
        } else {
            PlayerPose::Idle
        }
    }

    pub fn animation_key(self) -> &'static str {
        match self {
            PlayerPose::Idle => "idle",
            PlayerPose::Run => "run",
            PlayerPose::Jump => "jump",
        }
    }
}

/// What the player does when it falls out of the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeathAction {
    #[default]
    RestartLevel,
}

/// Outcome of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStep {
    pub pose: PlayerPose,
    /// `Some(true)` faces left, `Some(false)` faces right, `None` keeps it.
    pub facing_left: Option<bool>,
    pub dead: bool,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerController {
    pub death: DeathAction,
}

impl PlayerController {
    /// Apply one frame of player rules to `velocity`.
    ///
    /// `grounded` is whether the body had a bottom contact on the last
    /// physics step, `y` is the current body centre height.
    pub fn step(
        &self,
        intent: PlayerIntent,
        grounded: bool,
        y: f32,
        velocity: &mut Vector2,
        dt: f32,
    ) -> PlayerStep {
        velocity.y += GRAVITY * dt;

        let mut facing_left = None;
        if intent.right {
            velocity.x += RUN_ACCELERATION * dt;
            facing_left = Some(false);
        }
        if intent.left {
            velocity.x -= RUN_ACCELERATION * dt;
            facing_left = Some(true);
        }

        if grounded && intent.jump {
            velocity.y = JUMP_VELOCITY;
        }

        PlayerStep {
            pose: PlayerPose::select(grounded, velocity.x),
            facing_left,
            dead: y > DEATH_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== POSE TESTS ====================

    #[test]
    fn test_pose_airborne_is_jump() {
        assert_eq!(PlayerPose::select(false, 0.0), PlayerPose::Jump);
        assert_eq!(PlayerPose::select(false, 300.0), PlayerPose::Jump);
    }

    #[test]
    fn test_pose_grounded_run_threshold() {
        assert_eq!(PlayerPose::select(true, 50.0), PlayerPose::Idle);
        assert_eq!(PlayerPose::select(true, 50.1), PlayerPose::Run);
        assert_eq!(PlayerPose::select(true, -51.0), PlayerPose::Run);
        assert_eq!(PlayerPose::select(true, 10.0), PlayerPose::Idle);
    }

    // ==================== STEP TESTS ====================

    #[test]
    fn test_gravity_accumulates() {
        let pc = PlayerController::default();
        let mut v = Vector2::zero();
        pc.step(PlayerIntent::default(), false, 0.0, &mut v, 0.5);
        assert!(approx_eq(v.y, 375.0));
    }

    #[test]
    fn test_right_and_left_accelerate_and_flip() {
        let pc = PlayerController::default();
        let mut v = Vector2::zero();
        let intent = PlayerIntent {
            right: true,
            ..Default::default()
        };
        let s = pc.step(intent, true, 0.0, &mut v, 0.1);
        assert!(approx_eq(v.x, 185.0));
        assert_eq!(s.facing_left, Some(false));
        assert_eq!(s.pose, PlayerPose::Run);

        let intent = PlayerIntent {
            left: true,
            ..Default::default()
        };
        let s = pc.step(intent, true, 0.0, &mut v, 0.1);
        assert!(approx_eq(v.x, 0.0));
        assert_eq!(s.facing_left, Some(true));
    }

    #[test]
    fn test_jump_needs_ground() {
        let pc = PlayerController::default();
        let intent = PlayerIntent {
            jump: true,
            ..Default::default()
        };
        let mut v = Vector2::zero();
        pc.step(intent, false, 0.0, &mut v, 0.016);
        assert!(v.y > 0.0);

        let mut v = Vector2::zero();
        let s = pc.step(intent, true, 0.0, &mut v, 0.016);
        assert!(approx_eq(v.y, JUMP_VELOCITY));
        assert_eq!(s.pose, PlayerPose::Idle);
    }

    #[test]
    fn test_death_below_line() {
        let pc = PlayerController::default();
        let mut v = Vector2::zero();
        assert!(!pc.step(PlayerIntent::default(), false, 500.0, &mut v, 0.0).dead);
        assert!(pc.step(PlayerIntent::default(), false, 500.5, &mut v, 0.0).dead);
    }
}
