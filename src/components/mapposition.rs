//! World-space position of an entity.
//!
//! Positions are the centre of the entity: bodies, drawables and sprites are
//! all laid out around this point.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Centre of the entity in world coordinates.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

/// Body centre recorded at the start of the frame.
///
/// The riding pass compares it with the post-physics centre to carry any body
/// standing on top.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PreviousPosition(pub Vector2);

impl Default for PreviousPosition {
    fn default() -> Self {
        Self(Vector2::zero())
    }
}
