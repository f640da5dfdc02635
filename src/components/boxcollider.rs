//! Axis-aligned box hitbox.
//!
//! The box is centred on the entity position plus `offset`. Detached bodies
//! (slider handles) move by changing `offset`.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    pub fn from_size(size: Vector2) -> Self {
        Self::new(size.x, size.y)
    }

    /// Centre of the box for a given entity position.
    pub fn center(&self, position: Vector2) -> Vector2 {
        position + self.offset
    }

    /// Returns (min, max) of the box for a given entity position.
    /// Negative sizes are normalized.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let c = self.center(position);
        let hw = self.size.x.abs() * 0.5;
        let hh = self.size.y.abs() * 0.5;
        (
            Vector2::new(c.x - hw, c.y - hh),
            Vector2::new(c.x + hw, c.y + hh),
        )
    }

    /// (x, y, w, h) of the box, handy for drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Strict overlap test: touching edges do not count.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
