//! Level switching.
//!
//! [`apply_level_request`] runs once per frame, after the controllers. When
//! [`LevelState`] holds a pending request it tears the running level down,
//! opens a new epoch and either builds the requested layout or, past the last
//! level, switches the game to the ending.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::persistent::Persistent;
use crate::components::zindex::ZIndex;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::level::LevelState;
use crate::resources::leveltable::LevelTable;
use crate::resources::sceneindex::SceneIndex;
use crate::systems::levelbuilder::build_level;

/// Despawn every entity the level built and forget its names and groups.
pub fn teardown_level(world: &mut World) {
    let doomed: Vec<Entity> = world
        .query_filtered::<Entity, (With<ZIndex>, Without<Persistent>)>()
        .iter(world)
        .collect();
    for entity in doomed {
        world.despawn(entity);
    }
    world.resource_mut::<SceneIndex>().clear();
}

pub fn apply_level_request(world: &mut World) {
    let Some(index) = world.resource_mut::<LevelState>().begin_pending() else {
        return;
    };
    teardown_level(world);

    if LevelState::is_past_last(index) {
        info!("Level {} is past the last one, game complete", index);
        world.resource_mut::<NextGameState>().set(GameStates::Ending);
        return;
    }

    let Some(layout) = world.resource::<LevelTable>().get(index).cloned() else {
        warn!("Level {} missing from the level table, ending the game", index);
        world.resource_mut::<NextGameState>().set(GameStates::Ending);
        return;
    };
    let built = build_level(world, &layout);
    info!(
        "Built level {} ({} placements, epoch {})",
        index,
        built,
        world.resource::<LevelState>().epoch()
    );
}
