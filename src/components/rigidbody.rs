//! Kinematic body component.
//!
//! The [`RigidBody`] stores velocity, per-axis friction and an optional mass.
//! Bodies with a mass are dynamic: the collision pass pushes them out of the
//! static bodies they overlap. Bodies without a mass never get pushed but can
//! still move through their velocity (slider handles) or a tween (menus).
//!
//! Friction is the fraction of velocity lost per 1/60 s step and is applied
//! frame-rate independently as `(1 - f)^(dt * 60)`.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Reference step the friction fractions are expressed in.
const FRICTION_STEP_RATE: f32 = 60.0;

/// Kinematic body storing velocity, friction and mass.
///
/// # Example
/// ```ignore
/// let rb = RigidBody::dynamic(1.0).with_friction(0.08, 0.01);
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Per-axis friction, fraction of velocity lost per 1/60 s.
    pub friction: Vector2,
    /// Mass of a dynamic body. `None` marks a static body.
    pub mass: Option<f32>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::fixed()
    }
}

impl RigidBody {
    /// A body that is never pushed by collision resolution.
    pub fn fixed() -> Self {
        Self {
            velocity: Vector2::zero(),
            friction: Vector2::zero(),
            mass: None,
        }
    }

    /// A body that collision resolution pushes out of what it overlaps.
    pub fn dynamic(mass: f32) -> Self {
        Self {
            mass: Some(mass),
            ..Self::fixed()
        }
    }

    pub fn with_friction(mut self, x: f32, y: f32) -> Self {
        self.friction = Vector2::new(x, y);
        self
    }

    pub fn is_dynamic(&self) -> bool {
        self.mass.is_some()
    }

    /// Damp the velocity for a step of `dt` seconds.
    pub fn apply_friction(&mut self, dt: f32) {
        let steps = dt * FRICTION_STEP_RATE;
        self.velocity.x *= (1.0 - self.friction.x).clamp(0.0, 1.0).powf(steps);
        self.velocity.y *= (1.0 - self.friction.y).clamp(0.0, 1.0).powf(steps);
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }
}

/// Follow-bottom flag: the body inherits the displacement of whatever it
/// stands on.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RidesOnTop;

/// The body is detached from the entity position: velocity integrates into
/// the [`BoxCollider`](super::boxcollider::BoxCollider) offset instead of the
/// [`MapPosition`](super::mapposition::MapPosition). Used for slider handles,
/// which travel along the track while the track itself stays put.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DetachedBody;

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== CONSTRUCTOR TESTS ====================

    #[test]
    fn test_fixed_has_no_mass() {
        let rb = RigidBody::fixed();
        assert!(!rb.is_dynamic());
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn test_dynamic_with_friction() {
        let rb = RigidBody::dynamic(1.0).with_friction(0.08, 0.01);
        assert!(rb.is_dynamic());
        assert_eq!(rb.mass, Some(1.0));
        assert!(approx_eq(rb.friction.x, 0.08));
        assert!(approx_eq(rb.friction.y, 0.01));
    }

    // ==================== FRICTION TESTS ====================

    #[test]
    fn test_friction_one_reference_step() {
        let mut rb = RigidBody::dynamic(1.0).with_friction(0.1, 0.0);
        rb.velocity = Vector2::new(100.0, 100.0);
        rb.apply_friction(1.0 / 60.0);
        assert!(approx_eq(rb.velocity.x, 90.0));
        assert!(approx_eq(rb.velocity.y, 100.0));
    }

    #[test]
    fn test_friction_is_frame_rate_independent() {
        let mut a = RigidBody::dynamic(1.0).with_friction(0.08, 0.0);
        let mut b = a.clone();
        a.velocity = Vector2::new(200.0, 0.0);
        b.velocity = Vector2::new(200.0, 0.0);
        a.apply_friction(1.0 / 30.0);
        b.apply_friction(1.0 / 60.0);
        b.apply_friction(1.0 / 60.0);
        assert!(approx_eq(a.velocity.x, b.velocity.x));
    }

    #[test]
    fn test_zero_dt_keeps_velocity() {
        let mut rb = RigidBody::dynamic(1.0).with_friction(0.5, 0.5);
        rb.velocity = Vector2::new(10.0, -10.0);
        rb.apply_friction(0.0);
        assert!(approx_eq(rb.velocity.x, 10.0));
        assert!(approx_eq(rb.velocity.y, -10.0));
    }

    #[test]
    fn test_stop() {
        let mut rb = RigidBody::dynamic(1.0);
        rb.velocity = Vector2::new(3.0, 4.0);
        rb.stop();
        assert!(approx_eq(rb.velocity.length(), 0.0));
    }
}
