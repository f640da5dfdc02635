//! Time update and deferred callbacks.
//!
//! [`update_world_time`] advances the shared clock once per frame.
//! [`update_timeouts`] counts down [`Timeouts`] in simulated time and triggers
//! a [`TimeoutEvent`] for each expired entry; [`timeout_observer`] applies it
//! unless the level it was scheduled in has been rebuilt since.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::glitcher::Glitcher;
use crate::events::timer::TimeoutEvent;
use crate::resources::level::LevelState;
use crate::resources::sceneindex::{GLITCHER, SceneIndex};
use crate::resources::timeouts::{TimeoutAction, Timeouts};
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}

/// Count down pending timeouts and fire the expired ones.
pub fn update_timeouts(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut timeouts: ResMut<Timeouts>,
) {
    for fired in timeouts.advance(time.delta) {
        commands.trigger(TimeoutEvent {
            epoch: fired.epoch,
            action: fired.action,
        });
    }
}

pub fn timeout_observer(
    trigger: On<TimeoutEvent>,
    mut level: ResMut<LevelState>,
    scene: Option<Res<SceneIndex>>,
    mut glitchers: Query<&mut Glitcher>,
) {
    let event = trigger.event();
    if event.epoch != level.epoch() {
        debug!(
            "Dropping stale timeout {:?} (epoch {} != {})",
            event.action,
            event.epoch,
            level.epoch()
        );
        return;
    }

    match event.action {
        TimeoutAction::AdvanceLevel => {
            match scene.as_deref().and_then(|s| s.named(GLITCHER)) {
                Some(entity) => {
                    if let Ok(mut glitcher) = glitchers.get_mut(entity) {
                        glitcher.deactivate();
                    }
                }
                None => warn!("No '{}' entity to deactivate", GLITCHER),
            }
            level.advance();
            info!("Level complete, advancing to {}", level.current());
        }
    }
}
