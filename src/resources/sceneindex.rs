//! Name and group lookup for the running level.
//!
//! Filled by the level builder and cleared on teardown. Named entities are the
//! singletons controllers need ("Player", "Pointer", "Glitcher"); groups map a
//! tag to its members in build order.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::components::group::Groups;

pub const PLAYER: &str = "Player";
pub const POINTER: &str = "Pointer";
pub const GLITCHER: &str = "Glitcher";

#[derive(Resource, Debug, Default)]
pub struct SceneIndex {
    /// Scene label, e.g. "Level3".
    pub scene: String,
    named: FxHashMap<String, Entity>,
    groups: FxHashMap<String, Vec<Entity>>,
}

impl SceneIndex {
    pub fn set_name(&mut self, name: impl Into<String>, entity: Entity) {
        self.named.insert(name.into(), entity);
    }

    pub fn named(&self, name: &str) -> Option<Entity> {
        self.named.get(name).copied()
    }

    pub fn add_to_group(&mut self, tag: impl Into<String>, entity: Entity) {
        let members = self.groups.entry(tag.into()).or_default();
        if !members.contains(&entity) {
            members.push(entity);
        }
    }

    /// Register every tag of `groups` for `entity`.
    pub fn add_groups(&mut self, groups: &Groups, entity: Entity) {
        for tag in groups.iter() {
            self.add_to_group(tag, entity);
        }
    }

    /// Members of `tag`, empty when nobody carries it.
    pub fn group(&self, tag: &str) -> &[Entity] {
        self.groups.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.scene.clear();
        self.named.clear();
        self.groups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_groups_keep_build_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut idx = SceneIndex::default();
        idx.add_groups(&Groups::parse("q p1"), b);
        idx.add_groups(&Groups::parse("q"), a);
        idx.add_to_group("q", b);
        assert_eq!(idx.group("q"), &[b, a]);
        assert_eq!(idx.group("p1"), &[b]);
        assert!(idx.group("m").is_empty());
    }

    #[test]
    fn test_names_and_clear() {
        let mut world = World::new();
        let p = world.spawn_empty().id();
        let mut idx = SceneIndex::default();
        idx.set_name(PLAYER, p);
        idx.scene = "Level1".into();
        assert_eq!(idx.named(PLAYER), Some(p));
        idx.clear();
        assert_eq!(idx.named(PLAYER), None);
        assert!(idx.scene.is_empty());
    }
}
