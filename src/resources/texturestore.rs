//! Texture store resource.
//!
//! Non-send map of loaded textures keyed by string IDs, filled during setup.
//! Entities whose texture is missing are drawn as plain rectangles.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub const PLAYER_TEXTURE: &str = "player";

#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }
}
