//! Volume slider handle motion.
//!
//! Each frame the handle of every [`MusicRangeController`] gets the velocity
//! its intent asks for, clamped so the handle stops on the track ends. The
//! handle is a [`DetachedBody`](crate::components::rigidbody::DetachedBody):
//! its collider offset is the handle's distance from the track centre.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::drawable::RANGE_WIDTH;
use crate::components::musicrange::MusicRangeController;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn music_range_controller(
    time: Res<WorldTime>,
    mut ranges: Query<(&MusicRangeController, &BoxCollider, &mut RigidBody)>,
) {
    for (range, collider, mut body) in ranges.iter_mut() {
        body.velocity = range.handle_velocity(collider.offset, RANGE_WIDTH, time.delta);
    }
}
