//! Per-frame state of the visual effects.
//!
//! Painting happens in [`crate::systems::render`]; these systems only move
//! the effect state forward once per frame.

use bevy_ecs::prelude::*;

use crate::components::glitcher::Glitcher;
use crate::components::mapposition::MapPosition;
use crate::components::trail::Trail;
use crate::resources::screensize::ScreenSize;

pub fn trail_system(mut trails: Query<(&MapPosition, &mut Trail)>) {
    for (position, mut trail) in trails.iter_mut() {
        trail.record(position.pos);
    }
}

/// Advance every active glitch and reshuffle its blocks when due.
pub fn glitch_system(
    screen: Res<ScreenSize>,
    mut rng: Local<fastrand::Rng>,
    mut glitchers: Query<&mut Glitcher>,
) {
    let canvas = screen.as_vec();
    for mut glitcher in glitchers.iter_mut() {
        if glitcher.active || glitcher.capture_pending {
            glitcher.advance(&mut rng, canvas);
        }
    }
}
