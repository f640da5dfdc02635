//! AABB contact step.
//!
//! Every frame [`collision_system`] clears all [`Contacts`], rebuilds the
//! [`SpatialGrid`] and then resolves each *resolver* (a dynamic body with a
//! [`CollisionLayer`]) against the bodies whose [`Groups`] carry that layer's
//! tag. A resolver is pushed out along the axis of least penetration, loses
//! the velocity component pointing into the other body, and both bodies
//! record the contact on the touching sides.
//!
//! [`ride_system`] then carries [`RidesOnTop`] bodies along with whatever
//! they stand on.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::contacts::{CollisionLayer, Contacts, Side};
use crate::components::group::Groups;
use crate::components::mapposition::{MapPosition, PreviousPosition};
use crate::components::rigidbody::{RidesOnTop, RigidBody};
use crate::resources::spatialgrid::SpatialGrid;

/// How to separate box `a` from box `b`.
///
/// Returns the displacement to apply to `a` and the side of `a` that ends up
/// touching `b`, or `None` when the boxes do not overlap.
pub fn resolve_overlap(
    a_min: Vector2,
    a_max: Vector2,
    b_min: Vector2,
    b_max: Vector2,
) -> Option<(Vector2, Side)> {
    let overlap_x = a_max.x.min(b_max.x) - a_min.x.max(b_min.x);
    let overlap_y = a_max.y.min(b_max.y) - a_min.y.max(b_min.y);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let a_center = (a_min + a_max) * 0.5;
    let b_center = (b_min + b_max) * 0.5;

    if overlap_x < overlap_y {
        if a_center.x < b_center.x {
            Some((Vector2::new(-overlap_x, 0.0), Side::Right))
        } else {
            Some((Vector2::new(overlap_x, 0.0), Side::Left))
        }
    } else if a_center.y < b_center.y {
        Some((Vector2::new(0.0, -overlap_y), Side::Bottom))
    } else {
        Some((Vector2::new(0.0, overlap_y), Side::Top))
    }
}

/// Drop the velocity component that points through `side`.
fn stop_into(velocity: &mut Vector2, side: Side) {
    match side {
        Side::Bottom if velocity.y > 0.0 => velocity.y = 0.0,
        Side::Top if velocity.y < 0.0 => velocity.y = 0.0,
        Side::Right if velocity.x > 0.0 => velocity.x = 0.0,
        Side::Left if velocity.x < 0.0 => velocity.x = 0.0,
        _ => {}
    }
}

pub fn collision_system(
    mut grid: ResMut<SpatialGrid>,
    mut bodies: Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        &BoxCollider,
        Option<&CollisionLayer>,
        Option<&Groups>,
        &mut Contacts,
    )>,
) {
    grid.clear();
    let mut resolvers: Vec<(Entity, String)> = Vec::new();
    for (entity, position, body, collider, layer, _, mut contacts) in bodies.iter_mut() {
        contacts.clear();
        let (min, max) = collider.aabb(position.pos);
        grid.insert(entity, min, max);
        if let Some(layer) = layer
            && body.is_dynamic()
        {
            resolvers.push((entity, layer.0.clone()));
        }
    }
    resolvers.sort_by_key(|(e, _)| *e);

    for (resolver, tag) in resolvers {
        let Ok((_, position, _, collider, _, _, _)) = bodies.get(resolver) else {
            continue;
        };
        let (min, max) = collider.aabb(position.pos);

        for other in grid.query(min, max) {
            if other == resolver {
                continue;
            }
            let Ok((_, other_pos, _, other_collider, _, groups, _)) = bodies.get(other) else {
                continue;
            };
            if !groups.is_some_and(|g| g.contains(&tag)) {
                continue;
            }
            let (b_min, b_max) = other_collider.aabb(other_pos.pos);

            let Ok((_, mut position, mut body, collider, _, _, mut contacts)) =
                bodies.get_mut(resolver)
            else {
                break;
            };
            let (a_min, a_max) = collider.aabb(position.pos);
            let Some((push, side)) = resolve_overlap(a_min, a_max, b_min, b_max) else {
                continue;
            };
            position.pos = position.pos + push;
            stop_into(&mut body.velocity, side);
            contacts.add(side, other);

            if let Ok((_, _, _, _, _, _, mut other_contacts)) = bodies.get_mut(other) {
                other_contacts.add(side.opposite(), resolver);
            }
        }
    }
}

/// Move riders by the displacement of the body under them this frame.
pub fn ride_system(
    mut riders: Query<(&mut MapPosition, &Contacts), With<RidesOnTop>>,
    supporters: Query<(&MapPosition, &PreviousPosition), Without<RidesOnTop>>,
) {
    for (mut position, contacts) in riders.iter_mut() {
        let Some(&below) = contacts.bottom.first() else {
            continue;
        };
        if let Ok((now, before)) = supporters.get(below) {
            position.pos = position.pos + (now.pos - before.0);
        }
    }
}
