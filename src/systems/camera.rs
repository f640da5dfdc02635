//! Camera follow.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::sceneindex::{PLAYER, SceneIndex};

/// Keep the camera on the player; levels without one look at the origin.
pub fn camera_follow(
    scene: Res<SceneIndex>,
    mut camera: ResMut<Camera2DRes>,
    positions: Query<&MapPosition>,
) {
    let target = scene
        .named(PLAYER)
        .and_then(|e| positions.get(e).ok())
        .map(|p| p.pos)
        .unwrap_or_else(Vector2::zero);
    if camera.0.target != target {
        camera.look_at(target);
    }
}
