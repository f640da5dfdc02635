//! Level flow integration tests.
//!
//! Build levels from the embedded table, fire start buttons, run timeouts and
//! state transitions on a headless world.

use bevy_ecs::prelude::*;

use memoryleak::components::button::{ButtonAction, ButtonController};
use memoryleak::components::buttonmenu::ButtonMenuController;
use memoryleak::components::glitcher::Glitcher;
use memoryleak::components::group::{Groups, OPTIONS, PLAYER_LAYER, QUIT, START};
use memoryleak::components::persistent::Persistent;
use memoryleak::components::player::PlayerController;
use memoryleak::components::pointer::PointerController;
use memoryleak::components::zindex::ZIndex;
use memoryleak::events::button::ButtonActionEvent;
use memoryleak::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use memoryleak::game;
use memoryleak::resources::audio::init_audio_messages;
use memoryleak::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use memoryleak::resources::level::LevelState;
use memoryleak::resources::leveltable::LevelTable;
use memoryleak::resources::sceneindex::{GLITCHER, SceneIndex};
use memoryleak::resources::systemsstore::{SystemsStore, register_named_system};
use memoryleak::resources::timeouts::Timeouts;
use memoryleak::resources::worldtime::WorldTime;
use memoryleak::systems::button::{ADVANCE_DELAY, button_action_observer};
use memoryleak::systems::level::apply_level_request;
use memoryleak::systems::time::{timeout_observer, update_timeouts, update_world_time};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(SceneIndex::default());
    world.insert_resource(LevelState::default());
    world.insert_resource(Timeouts::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(LevelTable::embedded().unwrap());
    init_audio_messages(&mut world);
    world.add_observer(button_action_observer);
    world.add_observer(timeout_observer);
    world.flush();
    world
}

fn load_level(world: &mut World, index: u32) {
    world.resource_mut::<LevelState>().request(index);
    apply_level_request(world);
    world.flush();
}

fn tick_timeouts(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(update_timeouts);
    schedule.run(world);
}

fn buttons_tagged(world: &mut World, tags: &[&str]) -> usize {
    world
        .query::<(&ButtonController, &Groups)>()
        .iter(world)
        .filter(|(_, g)| tags.iter().all(|t| g.contains(t)))
        .count()
}

fn glitcher(world: &World) -> &Glitcher {
    let entity = world.resource::<SceneIndex>().named(GLITCHER).unwrap();
    world.get::<Glitcher>(entity).unwrap()
}

// ==================== LEVEL BUILDER ====================

#[test]
fn level_zero_is_the_title_screen() {
    let mut world = make_world();
    load_level(&mut world, 0);

    assert_eq!(world.query::<&PointerController>().iter(&world).count(), 1);
    assert_eq!(world.query::<&PlayerController>().iter(&world).count(), 0);
    assert_eq!(buttons_tagged(&mut world, &[START, PLAYER_LAYER]), 1);
    assert_eq!(buttons_tagged(&mut world, &[OPTIONS, PLAYER_LAYER]), 1);
    assert_eq!(buttons_tagged(&mut world, &[QUIT, PLAYER_LAYER]), 1);
    assert_eq!(world.resource::<SceneIndex>().scene, "Level0");
}

#[test]
fn every_playable_level_builds() {
    let mut world = make_world();
    for index in 1..=6 {
        load_level(&mut world, index);
        assert_eq!(
            world.query::<&PlayerController>().iter(&world).count(),
            1,
            "level {index}"
        );
        assert_eq!(buttons_tagged(&mut world, &[START]), 1, "level {index}");
    }
}

#[test]
fn level_seven_ends_the_game() {
    let mut world = make_world();
    load_level(&mut world, 7);

    assert_eq!(world.query::<&ZIndex>().iter(&world).count(), 0);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Ending)
    );
}

#[test]
fn rebuild_replaces_level_and_keeps_persistent() {
    let mut world = make_world();
    let keeper = world.spawn((Persistent, ZIndex(0))).id();

    load_level(&mut world, 1);
    let first = world.query::<&ZIndex>().iter(&world).count();
    let epoch = world.resource::<LevelState>().epoch();

    world.resource_mut::<LevelState>().request_restart();
    apply_level_request(&mut world);

    assert_eq!(world.query::<&ZIndex>().iter(&world).count(), first);
    assert_eq!(world.resource::<LevelState>().epoch(), epoch + 1);
    assert!(world.get_entity(keeper).is_ok());
}

#[test]
fn level_five_opens_its_quit_menu_on_build() {
    let mut world = make_world();
    load_level(&mut world, 5);

    let opened = world
        .query::<&ButtonMenuController>()
        .iter(&world)
        .filter(|m| m.opened)
        .count();
    assert_eq!(opened, 1);
}

// ==================== START BUTTON AND TIMEOUTS ====================

#[test]
fn start_glitches_then_advances() {
    let mut world = make_world();
    load_level(&mut world, 1);

    world.trigger(ButtonActionEvent {
        button: None,
        action: ButtonAction::AdvanceLevel,
    });
    world.flush();
    assert!(glitcher(&world).active);
    assert_eq!(world.resource::<Timeouts>().len(), 1);

    tick_timeouts(&mut world, ADVANCE_DELAY * 0.5);
    assert_eq!(world.resource::<LevelState>().pending(), None);

    tick_timeouts(&mut world, ADVANCE_DELAY * 0.6);
    world.flush();
    assert!(!glitcher(&world).active);
    assert_eq!(world.resource::<LevelState>().pending(), Some(2));

    apply_level_request(&mut world);
    assert_eq!(world.resource::<LevelState>().current(), 2);
}

#[test]
fn timeout_from_previous_level_is_dropped() {
    let mut world = make_world();
    load_level(&mut world, 2);

    world.trigger(ButtonActionEvent {
        button: None,
        action: ButtonAction::AdvanceLevel,
    });
    world.flush();

    // player died: same level, new epoch
    load_level(&mut world, 2);
    tick_timeouts(&mut world, ADVANCE_DELAY + 0.1);
    world.flush();

    assert_eq!(world.resource::<LevelState>().pending(), None);
    assert_eq!(world.resource::<LevelState>().current(), 2);
    assert!(world.resource::<Timeouts>().is_empty());
}

#[test]
fn start_button_fires_only_once_per_build() {
    let mut world = make_world();
    load_level(&mut world, 1);

    let mut starts = world.query::<(&mut ButtonController, &Groups)>();
    let mut fired = 0;
    for (mut button, groups) in starts.iter_mut(&mut world) {
        if groups.contains(START) {
            fired += [button.fire(), button.fire()].iter().flatten().count();
        }
    }
    assert_eq!(fired, 1);
}

// ==================== GAME STATE ====================

#[test]
fn state_change_runs_enter_hook() {
    let mut world = make_world();
    world.add_observer(observe_gamestate_change_event);
    let mut store = SystemsStore::new();
    register_named_system(&mut world, &mut store, "enter_ending", game::enter_ending);
    world.insert_resource(store);
    world.flush();

    load_level(&mut world, 7);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Ending);
    assert_eq!(world.resource::<NextGameState>().get(), &NextGameStates::Unchanged);
}

#[test]
fn enter_play_requests_start_level() {
    let mut world = make_world();
    world.insert_resource(LevelState::new(4));
    let id = world.register_system(game::enter_play);
    world.run_system(id).unwrap();

    assert_eq!(world.resource::<LevelState>().pending(), Some(4));
}
