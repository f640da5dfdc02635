//! Registry for dynamically addressable systems.
//!
//! State enter hooks ("setup", "enter_play", "enter_ending", "quit_game")
//! are registered under string keys and run by the game state observer via
//! their [`SystemId`].

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::components::persistent::Persistent;

#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}

/// Register `system` in `world`, mark it [`Persistent`] so level teardown
/// leaves it alone, and store it under `name`.
///
/// In bevy_ecs 0.18 registered systems are entities, hence the marker.
pub fn register_named_system<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) -> SystemId {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
    id
}
