//! Velocity integration.
//!
//! [`remember_positions`] stores where every body started the frame so the
//! ride pass can measure how far a supporter moved. [`movement_system`]
//! applies friction and integrates velocity; a [`DetachedBody`] moves its
//! collider offset instead of the entity.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::{MapPosition, PreviousPosition};
use crate::components::rigidbody::{DetachedBody, RigidBody};
use crate::resources::worldtime::WorldTime;

pub fn remember_positions(mut query: Query<(&MapPosition, &mut PreviousPosition)>) {
    for (position, mut previous) in query.iter_mut() {
        previous.0 = position.pos;
    }
}

pub fn movement_system(
    mut query: Query<(
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut BoxCollider>,
        Has<DetachedBody>,
    )>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, collider, detached) in query.iter_mut() {
        rigidbody.apply_friction(dt);
        let delta = rigidbody.velocity * dt;
        match collider {
            Some(mut collider) if detached => collider.offset = collider.offset + delta,
            _ => position.pos = position.pos + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    fn step(world: &mut World, dt: f32) {
        world.resource_mut::<WorldTime>().advance(dt);
        let mut schedule = Schedule::default();
        schedule.add_systems((remember_positions, movement_system).chain());
        schedule.run(world);
    }

    #[test]
    fn test_velocity_moves_position() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let mut body = RigidBody::dynamic(1.0);
        body.velocity = Vector2::new(100.0, -50.0);
        let e = world
            .spawn((MapPosition::new(0.0, 0.0), PreviousPosition::default(), body))
            .id();

        step(&mut world, 0.5);

        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert_eq!(pos, Vector2::new(50.0, -25.0));
        assert_eq!(world.get::<PreviousPosition>(e).unwrap().0, Vector2::zero());
    }

    #[test]
    fn test_detached_body_moves_offset_only() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let mut body = RigidBody::fixed();
        body.velocity = Vector2::new(10.0, 0.0);
        let e = world
            .spawn((
                MapPosition::new(3.0, 4.0),
                body,
                BoxCollider::new(16.0, 36.0),
                DetachedBody,
            ))
            .id();

        step(&mut world, 1.0);

        assert_eq!(world.get::<MapPosition>(e).unwrap().pos, Vector2::new(3.0, 4.0));
        assert_eq!(
            world.get::<BoxCollider>(e).unwrap().offset,
            Vector2::new(10.0, 0.0)
        );
    }

    #[test]
    fn test_friction_slows_body() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let mut body = RigidBody::dynamic(1.0).with_friction(0.5, 0.0);
        body.velocity = Vector2::new(100.0, 0.0);
        let e = world.spawn((MapPosition::new(0.0, 0.0), body)).id();

        step(&mut world, 1.0 / 60.0);

        let v = world.get::<RigidBody>(e).unwrap().velocity;
        assert!((v.x - 50.0).abs() < 1e-3);
    }
}
