use bevy_ecs::prelude::Component;

/// Playback state of a sprite-sheet animation.
///
/// The key points into [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to `key`, restarting playback only when the key changes.
    pub fn play(&mut self, key: &str) {
        if self.animation_key != key {
            self.animation_key = key.to_string();
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_same_key_keeps_progress() {
        let mut a = Animation::new("run");
        a.frame_index = 2;
        a.elapsed_time = 0.05;
        a.play("run");
        assert_eq!(a.frame_index, 2);
    }

    #[test]
    fn test_play_new_key_restarts() {
        let mut a = Animation::new("run");
        a.frame_index = 2;
        a.play("jump");
        assert_eq!(a.animation_key, "jump");
        assert_eq!(a.frame_index, 0);
        assert_eq!(a.elapsed_time, 0.0);
    }
}
