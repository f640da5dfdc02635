//! Per-side contact record written by the collision pass.
//!
//! Controllers read contacts, they never write them. The record is rebuilt
//! from scratch on every physics step.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Side of a body that touches another body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct Contacts {
    pub top: SmallVec<[Entity; 2]>,
    pub bottom: SmallVec<[Entity; 2]>,
    pub left: SmallVec<[Entity; 2]>,
    pub right: SmallVec<[Entity; 2]>,
}

impl Contacts {
    pub fn clear(&mut self) {
        self.top.clear();
        self.bottom.clear();
        self.left.clear();
        self.right.clear();
    }

    pub fn side(&self, side: Side) -> &[Entity] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn add(&mut self, side: Side, other: Entity) {
        let list = match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if !list.contains(&other) {
            list.push(other);
        }
    }

    /// True when anything touches any side.
    pub fn any(&self) -> bool {
        !(self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty())
    }

    pub fn on_ground(&self) -> bool {
        !self.bottom.is_empty()
    }
}

/// Group tag this body resolves against ("p1" for the player, "p2" for the
/// pointer). Only bodies carrying that tag push it back and get contacts.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct CollisionLayer(pub String);

impl CollisionLayer {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_add_and_any() {
        let mut world = World::new();
        let mut c = Contacts::default();
        assert!(!c.any());
        let e = world.spawn_empty().id();
        c.add(Side::Left, e);
        c.add(Side::Left, e);
        assert!(c.any());
        assert_eq!(c.side(Side::Left).len(), 1);
        assert!(!c.on_ground());
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        let mut c = Contacts::default();
        c.add(Side::Bottom, world.spawn_empty().id());
        assert!(c.on_ground());
        c.clear();
        assert!(!c.any());
    }

    #[test]
    fn test_opposite_sides() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
