//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] through
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter system stored in
//! [`crate::resources::systemsstore::SystemsStore`] for the new state.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets the request
///   and runs the enter hook of the new state.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!("GameState or NextGameState missing in observe_gamestate_change_event");
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            match systems_store.as_deref() {
                Some(store) => on_state_enter(&new_state, &mut commands, store),
                None => warn!("SystemsStore missing, no enter hook for {:?}", new_state),
            }
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Name of the system run when entering `state`, if any.
pub fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Ending => Some("enter_ending"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = enter_hook(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("System '{}' not found in SystemsStore", hook),
    }
}
