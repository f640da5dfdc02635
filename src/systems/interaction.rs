//! Mouse interaction with buttons, sliders and the pointer.
//!
//! The mouse never touches gameplay entities directly. It moves the target of
//! the [`PointerController`], and a press only counts for an entity whose box
//! holds the mouse and whose body overlaps the pointer's body at the moment of
//! the press. Releasing the button anywhere releases everything.
//!
//! Dragging a volume slider recomputes its intent from the mouse position
//! and copies that intent to every slider in group "m", so all bars in the
//! level move together.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::ButtonController;
use crate::components::drawable::RANGE_WIDTH;
use crate::components::group::MUSIC_BARS;
use crate::components::mapposition::MapPosition;
use crate::components::musicrange::MusicRangeController;
use crate::components::pointer::PointerController;
use crate::resources::input::InputState;
use crate::resources::sceneindex::{POINTER, SceneIndex};

pub fn pointer_interaction(
    input: Res<InputState>,
    scene: Res<SceneIndex>,
    bodies: Query<(&MapPosition, &BoxCollider)>,
    mut pointers: Query<(&mut PointerController, &BoxCollider)>,
    mut buttons: Query<(Entity, &mut ButtonController)>,
    mut ranges: Query<(Entity, &MapPosition, &mut MusicRangeController)>,
) {
    let mouse = input.pointer;

    if mouse.moved || mouse.button.just_pressed {
        for (mut pointer, collider) in pointers.iter_mut() {
            // glyph tip sits on the mouse
            pointer.target = mouse.world + collider.size * 0.5;
        }
    }

    if mouse.button.just_pressed {
        let pointer_body = scene
            .named(POINTER)
            .and_then(|e| bodies.get(e).ok())
            .map(|(p, c)| (p.pos, *c));
        if let Some((pointer_pos, pointer_box)) = pointer_body {
            let touches = |e: Entity| {
                bodies
                    .get(e)
                    .is_ok_and(|(p, c)| {
                        c.contains_point(p.pos, mouse.world)
                            && c.overlaps(p.pos, &pointer_box, pointer_pos)
                    })
            };
            for (entity, mut button) in buttons.iter_mut() {
                if touches(entity) {
                    debug!("Button {:?} pressed by mouse", entity);
                    button.pressed_by_mouse = true;
                }
            }
            for (entity, _, mut range) in ranges.iter_mut() {
                if touches(entity) {
                    range.pressed = true;
                }
            }
        } else {
            debug!("Mouse press with no '{}' in the scene", POINTER);
        }
    }

    if mouse.moved {
        let mut intent = None;
        for (_, track, mut range) in ranges.iter_mut() {
            if range.pressed {
                range.on_input(mouse.world, track.pos, RANGE_WIDTH);
                intent = Some(range.moving);
            }
        }
        if let Some(moving) = intent {
            mirror_intent(&scene, &mut ranges, moving);
        }
    }

    if mouse.button.just_released {
        for (_, mut button) in buttons.iter_mut() {
            button.pressed_by_mouse = false;
        }
        for (_, _, mut range) in ranges.iter_mut() {
            range.release();
        }
    }
}

fn mirror_intent(
    scene: &SceneIndex,
    ranges: &mut Query<(Entity, &MapPosition, &mut MusicRangeController)>,
    moving: i8,
) {
    for &bar in scene.group(MUSIC_BARS) {
        if let Ok((_, _, mut range)) = ranges.get_mut(bar) {
            range.moving = moving;
        }
    }
}

