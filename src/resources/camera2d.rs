//! Shared 2D camera resource.
//!
//! Wraps raylib's [`Camera2D`] so that systems agree on a single world/screen
//! transform. The camera target follows the entity named "Player" when the
//! level has one and stays at the origin otherwise.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at the world origin, centred on a canvas of
    /// `width` x `height`.
    pub fn centered(width: f32, height: f32) -> Self {
        Self(Camera2D {
            target: Vector2::zero(),
            offset: Vector2::new(width * 0.5, height * 0.5),
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    pub fn look_at(&mut self, target: Vector2) {
        self.0.target = target;
    }

    /// World position under a canvas-space point.
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let cam = &self.0;
        Vector2::new(
            (screen.x - cam.offset.x) / cam.zoom + cam.target.x,
            (screen.y - cam.offset.y) / cam.zoom + cam.target.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_centered() {
        let mut cam = Camera2DRes::centered(720.0, 720.0);
        let w = cam.screen_to_world(Vector2::new(360.0, 360.0));
        assert_eq!(w, Vector2::zero());
        cam.look_at(Vector2::new(100.0, -50.0));
        let w = cam.screen_to_world(Vector2::new(0.0, 0.0));
        assert_eq!(w, Vector2::new(-260.0, -410.0));
    }
}
