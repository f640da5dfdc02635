//! Platformer controller.
//!
//! Turns the keyboard snapshot into velocity changes for every
//! [`PlayerController`] entity, selects the sprite animation from the
//! resulting motion and asks for a level restart when the player falls past
//! the death line.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::Animation;
use crate::components::contacts::Contacts;
use crate::components::mapposition::MapPosition;
use crate::components::player::{DeathAction, PlayerController, PlayerIntent};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::level::LevelState;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut level: ResMut<LevelState>,
    mut players: Query<(
        &PlayerController,
        &MapPosition,
        &mut RigidBody,
        &Contacts,
        Option<&mut Sprite>,
        Option<&mut Animation>,
    )>,
) {
    let intent = PlayerIntent {
        left: input.left.active,
        right: input.right.active,
        jump: input.jump.active,
    };

    for (controller, position, mut body, contacts, sprite, animation) in players.iter_mut() {
        let step = controller.step(
            intent,
            contacts.on_ground(),
            position.pos.y,
            &mut body.velocity,
            time.delta,
        );

        if let (Some(mut sprite), Some(facing_left)) = (sprite, step.facing_left) {
            sprite.flip_h = facing_left;
        }
        if let Some(mut animation) = animation {
            animation.play(step.pose.animation_key());
        }

        if step.dead {
            match controller.death {
                DeathAction::RestartLevel => {
                    if level.pending().is_none() {
                        info!("Player fell at y={:.0}, replaying level {}", position.pos.y, level.current());
                    }
                    level.request_restart();
                }
            }
        }
    }
}
