//! Debug toggle resource.
//!
//! The mere presence of this resource enables the hitbox overlay and the
//! FPS/level text. Inserted by the `--debug` flag.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
