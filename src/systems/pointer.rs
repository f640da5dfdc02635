//! Pointer follow.
//!
//! The pointer body chases its target with [`PointerController::velocity_from`].
//! The piecewise pull is assigned as is; far targets snap across in a frame.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::pointer::PointerController;
use crate::components::rigidbody::RigidBody;

pub fn pointer_controller(mut pointers: Query<(&PointerController, &MapPosition, &mut RigidBody)>) {
    for (controller, position, mut body) in pointers.iter_mut() {
        body.velocity = controller.velocity_from(position.pos);
    }
}
