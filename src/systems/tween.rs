//! Position tweening.
//!
//! [`tween_mapposition_system`] moves entities carrying a playing
//! [`TweenPosition`] from `from` to `to` over `duration` seconds, starting
//! slow and accelerating. Tweens play once and stop on the target; a stopped
//! tween marks the entity as idle.

use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Quadratic ease-in of a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0].
pub(crate) fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance tween time, stopping at `duration`.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) {
    *time += dt;
    if *time >= duration {
        *time = duration.max(0.0);
        *playing = false;
    }
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut mp, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;
        let progress = if duration > 0.0 { t / duration } else { 1.0 };
        mp.pos = lerp_v2(tw.from, tw.to, ease_in(progress));
    }
}
