use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite-sheet frame drawn centred on the entity position.
///
/// `offset` selects the frame inside the sheet (pixels), `frame_size` is the
/// size of one frame in the sheet and `width`/`height` the drawn size in
/// world units.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub frame_size: Vector2,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, frame_size: f32, drawn_size: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame_size: Vector2::new(frame_size, frame_size),
            width: drawn_size,
            height: drawn_size,
            offset: Vector2::zero(),
            flip_h: false,
        }
    }

    /// Select the frame at grid cell (`col`, `row`).
    pub fn set_frame(&mut self, col: u32, row: u32) {
        self.offset = Vector2::new(
            col as f32 * self.frame_size.x,
            row as f32 * self.frame_size.y,
        );
    }
}
