//! Render target resource for fixed-resolution rendering.
//!
//! The level is drawn into a canvas texture at the configured render size,
//! then scaled to fit the window with letterboxing. A second texture of the
//! same size keeps the frame snapshot the glitch overlay copies blocks from.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Canvas and glitch snapshot textures.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` holds GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub snapshot: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        let snapshot = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create snapshot texture: {}", e))?;

        let target = Self {
            texture,
            snapshot,
            game_width: width,
            game_height: height,
        };
        target.apply_point_filter();
        Ok(target)
    }

    fn apply_point_filter(&self) {
        let filter = TextureFilter::TEXTURE_FILTER_POINT as i32;
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter);
            ffi::SetTextureFilter(self.snapshot.texture, filter);
        }
    }

    /// Source rectangle covering the whole canvas texture.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Source rectangle for a block given in canvas (top-left origin)
    /// coordinates, flipped like [`Self::source_rect`].
    pub fn block_source(&self, x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle {
            x,
            y: self.game_height as f32 - y - h,
            width: w,
            height: -h,
        }
    }
}
