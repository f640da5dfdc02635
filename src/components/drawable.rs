//! Shapes painted by the render pass.
//!
//! Each entity carries at most one [`Drawable`]. Sizes reported here are the
//! unrotated base sizes; [`Drawable::size`] applies the entity's quarter turns
//! and is what the level builder uses for hitboxes.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::rotation::QuarterTurns;

pub const BUTTON_HEIGHT: f32 = 40.0;
/// Depth of the raised face of a button that is not pressed.
pub const BUTTON_RAISE: f32 = 6.0;
pub const BUTTON_FONT_SIZE: f32 = 24.0;
pub const MENU_WIDTH: f32 = 80.0;
pub const MENU_HEIGHT: f32 = 40.0;
pub const RANGE_WIDTH: f32 = 140.0;
pub const RANGE_HEIGHT: f32 = 36.0;
pub const HANDLE_WIDTH: f32 = 16.0;
pub const POINTER_WIDTH: f32 = 24.0;
pub const POINTER_HEIGHT: f32 = 32.0;
pub const TITLE_FONT_SIZE: f32 = 64.0;

#[derive(Component, Clone, Debug, PartialEq)]
pub enum Drawable {
    /// Raised button with an optional label.
    Button {
        width: f32,
        text: String,
        pressed: bool,
    },
    /// Crosses icon that slides out of a quit button.
    ButtonMenu,
    /// Track of the volume slider. The handle is a separate [`Handle`].
    MusicRange,
    /// Arrow cursor.
    Pointer,
    /// Multi-line title text.
    Title { text: String, font_size: f32 },
}

impl Drawable {
    pub fn button(width: f32, text: impl Into<String>) -> Self {
        Drawable::Button {
            width,
            text: text.into(),
            pressed: false,
        }
    }

    pub fn base_size(&self) -> Vector2 {
        match self {
            Drawable::Button { width, .. } => Vector2::new(*width, BUTTON_HEIGHT),
            Drawable::ButtonMenu => Vector2::new(MENU_WIDTH, MENU_HEIGHT),
            Drawable::MusicRange => Vector2::new(RANGE_WIDTH, RANGE_HEIGHT),
            Drawable::Pointer => Vector2::new(POINTER_WIDTH, POINTER_HEIGHT),
            Drawable::Title { .. } => Vector2::zero(),
        }
    }

    /// Axis-aligned size after applying `turns`.
    pub fn size(&self, turns: QuarterTurns) -> Vector2 {
        turns.rotate_size(self.base_size())
    }

    /// Mirror a pressed state onto a button drawable. Other shapes ignore it.
    pub fn set_pressed(&mut self, value: bool) {
        if let Drawable::Button { pressed, .. } = self {
            *pressed = value;
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Drawable::Button { pressed: true, .. })
    }
}

/// Slider handle, painted at the body centre of its entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Handle {
    /// Rotated size.
    pub size: Vector2,
    pub z: i32,
}
