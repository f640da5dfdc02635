//! Animation resource registry.
//!
//! Stores sprite-sheet animation definitions keyed by name. Frames are grid
//! cells (`col`, `row`) of the sheet; timing and looping are part of the
//! definition.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Grid cells shown in order.
    pub frames: Vec<(u32, u32)>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// The player sheet: six animations over a 16x16 grid.
pub fn player_animations(tex_key: &str) -> AnimationStore {
    let tex: Arc<str> = Arc::from(tex_key);
    let def = |frames: &[(u32, u32)], ms: f32, looped: bool| AnimationResource {
        tex_key: tex.clone(),
        frames: frames.to_vec(),
        frame_duration: ms / 1000.0,
        looped,
    };
    let mut store = AnimationStore::default();
    store.insert("idle", def(&[(1, 1)], 100.0, false));
    store.insert("run", def(&[(0, 0), (1, 0), (2, 0), (1, 0)], 120.0, true));
    store.insert("jump", def(&[(0, 1)], 100.0, false));
    store.insert("ledder", def(&[(4, 0), (4, 1)], 100.0, true));
    store.insert("shoot", def(&[(3, 0)], 100.0, false));
    store.insert("die", def(&[(3, 1)], 100.0, false));
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_table() {
        let store = player_animations("player");
        assert_eq!(store.animations.len(), 6);
        let run = store.get("run").unwrap();
        assert!(run.looped);
        assert_eq!(run.frames.len(), 4);
        assert!((run.frame_duration - 0.12).abs() < 1e-6);
        let jump = store.get("jump").unwrap();
        assert!(!jump.looped);
        assert_eq!(jump.frames, vec![(0, 1)]);
        assert_eq!(&*jump.tex_key, "player");
    }
}
