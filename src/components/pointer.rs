//! Pointer controller: pulls the pointer body towards the mouse.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Debug, Clone, Copy)]
pub struct PointerController {
    /// Last known mouse position, offset by half the pointer size.
    pub target: Vector2,
}

impl PointerController {
    pub fn new(target: Vector2) -> Self {
        Self { target }
    }

    /// Velocity that pulls a body at `from` towards the target.
    pub fn velocity_from(&self, from: Vector2) -> Vector2 {
        pull_velocity(self.target - from)
    }
}

/// Piecewise pull: below 1 px nothing, below 5 px a linear x100 boost,
/// below 50 px `(d*20)^2` and beyond that `(d*10)^3` along the direction.
pub fn pull_velocity(delta: Vector2) -> Vector2 {
    let d = delta.length();
    if d < 1.0 {
        Vector2::zero()
    } else if d < 5.0 {
        delta * 100.0
    } else if d < 50.0 {
        delta.normalized() * (d * 20.0).powi(2)
    } else {
        delta.normalized() * (d * 10.0).powi(3)
    }
}
