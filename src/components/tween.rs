//! Position tween, the animator used by sliding menus.
//!
//! A [`TweenPosition`] interpolates an entity's
//! [`MapPosition`](super::mapposition::MapPosition) from `from` to `to` over
//! `duration` seconds with a quadratic ease-in and then stops. Menu entities
//! carry an idle tween from build time on, so "is the menu busy" is simply
//! [`TweenPosition::playing`].
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting position.
    pub from: Vector2,
    /// Ending position.
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    /// Whether the tween is currently moving.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            playing: true,
            time: 0.0,
        }
    }

    /// A stopped tween resting at `at`.
    pub fn idle(at: Vector2) -> Self {
        TweenPosition {
            playing: false,
            ..Self::new(at, at, 0.0)
        }
    }

    /// Start a new run from `from` to `to`, replacing whatever was set.
    pub fn restart(&mut self, from: Vector2, to: Vector2, duration: f32) {
        self.from = from;
        self.to = to;
        self.duration = duration;
        self.time = 0.0;
        self.playing = true;
    }
}
