//! Canvas size resource.
//!
//! The fixed internal render resolution (720x720 by default). Camera offset,
//! glitch blocks and the ending text are laid out against it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vec(&self) -> Vector2 {
        Vector2::new(self.w as f32, self.h as f32)
    }
}
