//! Sprite-sheet animation playback.
//!
//! [`animation`] advances every [`Animation`] by the frame delta, following
//! the frame list and timing stored in [`AnimationStore`], and points the
//! [`Sprite`] at the current grid cell. Looped animations wrap; the others
//! hold their last frame.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(def) = animation_store.get(&anim.animation_key) else {
            continue;
        };
        if def.frames.is_empty() {
            continue;
        }

        anim.elapsed_time += time.delta;
        if def.frame_duration > 0.0 {
            while anim.elapsed_time >= def.frame_duration {
                anim.elapsed_time -= def.frame_duration;
                anim.frame_index += 1;
            }
        }
        if anim.frame_index >= def.frames.len() {
            anim.frame_index = if def.looped {
                anim.frame_index % def.frames.len()
            } else {
                def.frames.len() - 1
            };
        }

        let (col, row) = def.frames[anim.frame_index];
        sprite.set_frame(col, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::player_animations;

    fn run(world: &mut World, dt: f32) {
        world.resource_mut::<WorldTime>().advance(dt);
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(world);
    }

    fn setup(key: &str) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(player_animations("player"));
        let e = world
            .spawn((Animation::new(key), Sprite::new("player", 16.0, 32.0)))
            .id();
        (world, e)
    }

    #[test]
    fn test_run_cycles_and_wraps() {
        let (mut world, e) = setup("run");
        run(&mut world, 0.0);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 0.0);

        run(&mut world, 0.125);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 1);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 16.0);

        // three more frames wrap back to the first
        for _ in 0..3 {
            run(&mut world, 0.12);
        }
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let (mut world, e) = setup("idle");
        run(&mut world, 1.0);
        let anim = world.get::<Animation>(e).unwrap();
        assert_eq!(anim.frame_index, 0);
        let sprite = world.get::<Sprite>(e).unwrap();
        assert_eq!(sprite.offset.x, 16.0);
        assert_eq!(sprite.offset.y, 16.0);
    }

    #[test]
    fn test_unknown_key_leaves_sprite_alone() {
        let (mut world, e) = setup("nope");
        run(&mut world, 0.5);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 0.0);
    }
}
