//! Controller integration tests.
//!
//! Drive the button, menu, pointer and player systems on a headless
//! `bevy_ecs::World` (no window, no audio thread).

use bevy_ecs::prelude::*;
use bevy_ecs::system::ScheduleSystem;
use raylib::prelude::Vector2;

use memoryleak::components::button::{ButtonAction, ButtonController};
use memoryleak::components::buttonmenu::ButtonMenuController;
use memoryleak::components::contacts::Contacts;
use memoryleak::components::drawable::Drawable;
use memoryleak::components::group::{Groups, MUSIC_BARS, QUIT};
use memoryleak::components::mapposition::MapPosition;
use memoryleak::components::musicrange::MusicRangeController;
use memoryleak::components::rigidbody::RigidBody;
use memoryleak::components::tween::TweenPosition;
use memoryleak::events::audio::AudioCmd;
use memoryleak::events::button::ButtonActionEvent;
use memoryleak::resources::audio::init_audio_messages;
use memoryleak::resources::input::InputState;
use memoryleak::resources::level::LevelState;
use memoryleak::resources::leveltable::MenuSide;
use memoryleak::resources::sceneindex::SceneIndex;
use memoryleak::resources::timeouts::Timeouts;
use memoryleak::resources::worldtime::WorldTime;
use memoryleak::systems::button::{button_action_observer, button_controller};
use memoryleak::systems::interaction::pointer_interaction;
use memoryleak::systems::levelbuilder::{
    spawn_button, spawn_options_button, spawn_player, spawn_pointer, spawn_quit_button,
};
use memoryleak::systems::movement::movement_system;
use memoryleak::systems::player::player_controller;
use memoryleak::systems::pointer::pointer_controller;
use memoryleak::systems::tween::tween_mapposition_system;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct Fired(Vec<ButtonAction>);

fn record_actions(trigger: On<ButtonActionEvent>, mut fired: ResMut<Fired>) {
    fired.0.push(trigger.event().action.clone());
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    let mut time = WorldTime::default();
    time.delta = delta;
    world.insert_resource(time);
    world.insert_resource(SceneIndex::default());
    world.insert_resource(LevelState::default());
    world.insert_resource(Timeouts::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Fired::default());
    init_audio_messages(&mut world);
    world.add_observer(record_actions);
    world.add_observer(button_action_observer);
    world.flush();
    world
}

fn run<M>(world: &mut World, systems: impl IntoScheduleConfigs<ScheduleSystem, M>) {
    let mut schedule = Schedule::default();
    schedule.add_systems(systems);
    schedule.run(world);
}

fn set_contact(world: &mut World, entity: Entity, touching: bool) {
    let mut contacts = world.get_mut::<Contacts>(entity).unwrap();
    contacts.clear();
    if touching {
        contacts.bottom.push(Entity::PLACEHOLDER);
    }
}

fn click_count(world: &World) -> usize {
    world.resource::<Messages<AudioCmd>>().len()
}

// ==================== BUTTON CONTROLLER ====================

#[test]
fn button_fires_once_per_contiguous_press() {
    let mut world = make_world(1.0 / 60.0);
    let button = spawn_button(&mut world, 0.0, 0.0, 100.0, 0, Groups::parse("p1"), "");
    world.get_mut::<ButtonController>(button).unwrap().action = ButtonAction::toggle("nobody");

    for touching in [true, true, true, false, false, true, true] {
        set_contact(&mut world, button, touching);
        run(&mut world, button_controller);
    }

    assert_eq!(world.resource::<Fired>().0.len(), 2);
    assert_eq!(click_count(&world), 2);
}

#[test]
fn button_pressed_by_mouse_or_contact() {
    let mut world = make_world(1.0 / 60.0);
    let button = spawn_button(&mut world, 0.0, 0.0, 100.0, 0, Groups::parse("p1"), "");

    for (mouse, body) in [(false, false), (true, false), (false, true), (true, true)] {
        world.get_mut::<ButtonController>(button).unwrap().pressed_by_mouse = mouse;
        set_contact(&mut world, button, body);
        run(&mut world, button_controller);

        let controller = world.get::<ButtonController>(button).unwrap();
        let drawable = world.get::<Drawable>(button).unwrap();
        assert_eq!(controller.is_pressed(), mouse || body, "mouse={mouse} body={body}");
        assert_eq!(drawable.is_pressed(), mouse || body, "mouse={mouse} body={body}");
    }
}

#[test]
fn button_none_action_clicks_but_fires_nothing() {
    let mut world = make_world(1.0 / 60.0);
    let button = spawn_button(&mut world, 0.0, 0.0, 100.0, 0, Groups::default(), "");

    set_contact(&mut world, button, true);
    run(&mut world, button_controller);

    assert!(world.resource::<Fired>().0.is_empty());
    assert_eq!(click_count(&world), 1);
}

// ==================== MENU TOGGLE ====================

#[test]
fn double_toggle_within_animation_flips_once() {
    let mut world = make_world(1.0 / 60.0);
    let quit = spawn_quit_button(&mut world, 0.0, 0.0, 0, "p1", MenuSide::Right);
    let menu = world.get::<ButtonMenuController>(quit).unwrap().menu;
    let rest = world.get::<MapPosition>(menu).unwrap().pos;

    for _ in 0..2 {
        world.trigger(ButtonActionEvent {
            button: Some(quit),
            action: ButtonAction::toggle(QUIT),
        });
        world.flush();
    }

    let controller = world.get::<ButtonMenuController>(quit).unwrap();
    assert!(controller.opened);
    let tween = world.get::<TweenPosition>(menu).unwrap();
    assert!(tween.playing);
    assert!(approx_eq(tween.to.x, rest.x + controller.offset.x));
    assert!(approx_eq(tween.to.y, rest.y + controller.offset.y));
}

#[test]
fn toggle_after_animation_closes_menu() {
    let mut world = make_world(0.5);
    let quit = spawn_quit_button(&mut world, 0.0, 0.0, 0, "p1", MenuSide::Right);
    let menu = world.get::<ButtonMenuController>(quit).unwrap().menu;
    let rest = world.get::<MapPosition>(menu).unwrap().pos;

    let toggle = ButtonActionEvent {
        button: Some(quit),
        action: ButtonAction::toggle(QUIT),
    };
    world.trigger(toggle.clone());
    world.flush();
    for _ in 0..3 {
        run(&mut world, tween_mapposition_system);
    }
    assert!(!world.get::<TweenPosition>(menu).unwrap().playing);

    world.trigger(toggle);
    world.flush();
    for _ in 0..3 {
        run(&mut world, tween_mapposition_system);
    }

    assert!(!world.get::<ButtonMenuController>(quit).unwrap().opened);
    let pos = world.get::<MapPosition>(menu).unwrap().pos;
    assert!(approx_eq(pos.x, rest.x) && approx_eq(pos.y, rest.y));
}

#[test]
fn toggle_of_empty_group_is_noop() {
    let mut world = make_world(1.0 / 60.0);
    world.trigger(ButtonActionEvent {
        button: None,
        action: ButtonAction::toggle(QUIT),
    });
    world.flush();
    assert_eq!(world.resource::<Fired>().0.len(), 1);
}

// ==================== MOUSE INTERACTION ====================

fn press_mouse(world: &mut World, at: Vector2, down: bool) {
    world
        .resource_mut::<InputState>()
        .sample_pointer(at, at, down);
}

#[test]
fn mouse_press_needs_pointer_over_button() {
    let mut world = make_world(1.0 / 60.0);
    let near = spawn_button(&mut world, 0.0, 0.0, 100.0, 0, Groups::default(), "");
    let far = spawn_button(&mut world, 400.0, 0.0, 100.0, 0, Groups::default(), "");
    spawn_pointer(&mut world, 0.0, 0.0);

    press_mouse(&mut world, Vector2::new(1.0, 1.0), true);
    run(&mut world, pointer_interaction);

    assert!(world.get::<ButtonController>(near).unwrap().pressed_by_mouse);
    assert!(!world.get::<ButtonController>(far).unwrap().pressed_by_mouse);

    press_mouse(&mut world, Vector2::new(1.0, 1.0), false);
    run(&mut world, pointer_interaction);
    assert!(!world.get::<ButtonController>(near).unwrap().pressed_by_mouse);
}

#[test]
fn mouse_move_retargets_pointer() {
    let mut world = make_world(1.0 / 60.0);
    let pointer = spawn_pointer(&mut world, 0.0, 0.0);

    press_mouse(&mut world, Vector2::new(50.0, 20.0), false);
    run(&mut world, pointer_interaction);

    let target = world
        .get::<memoryleak::components::pointer::PointerController>(pointer)
        .unwrap()
        .target;
    let size = world
        .get::<memoryleak::components::boxcollider::BoxCollider>(pointer)
        .unwrap()
        .size;
    assert!(approx_eq(target.x, 50.0 + size.x * 0.5));
    assert!(approx_eq(target.y, 20.0 + size.y * 0.5));
}

#[test]
fn mouse_press_needs_mouse_inside_button() {
    let mut world = make_world(1.0 / 60.0);
    let button = spawn_button(&mut world, 0.0, 0.0, 100.0, 0, Groups::default(), "");
    spawn_pointer(&mut world, 40.0, 0.0);

    // the pointer body reaches the button, the mouse is past its right edge
    press_mouse(&mut world, Vector2::new(60.0, 0.0), true);
    run(&mut world, pointer_interaction);

    assert!(!world.get::<ButtonController>(button).unwrap().pressed_by_mouse);
}

// ==================== VOLUME SLIDERS ====================

fn slider_of(world: &World, options: Entity) -> Entity {
    world.get::<ButtonMenuController>(options).unwrap().menu
}

fn moving(world: &World, slider: Entity) -> i8 {
    world.get::<MusicRangeController>(slider).unwrap().moving
}

#[test]
fn dragging_one_slider_moves_every_bar() {
    let mut world = make_world(1.0 / 60.0);
    let top = spawn_options_button(&mut world, 0.0, 0.0, 0, "", MenuSide::Right);
    let bottom = spawn_options_button(&mut world, 0.0, 300.0, 0, "", MenuSide::Right);
    let dragged = slider_of(&world, top);
    let mirrored = slider_of(&world, bottom);
    assert_eq!(world.resource::<SceneIndex>().group(MUSIC_BARS).len(), 2);

    let handle = world.get::<MapPosition>(dragged).unwrap().pos;
    spawn_pointer(&mut world, handle.x, handle.y);

    press_mouse(&mut world, handle, true);
    run(&mut world, pointer_interaction);
    assert!(world.get::<MusicRangeController>(dragged).unwrap().pressed);
    assert!(!world.get::<MusicRangeController>(mirrored).unwrap().pressed);

    // past the right end of the track
    press_mouse(&mut world, handle + Vector2::new(150.0, 0.0), true);
    run(&mut world, pointer_interaction);
    assert_eq!(moving(&world, dragged), 1);
    assert_eq!(moving(&world, mirrored), 1);

    press_mouse(&mut world, handle + Vector2::new(150.0, 0.0), false);
    run(&mut world, pointer_interaction);
    assert_eq!(moving(&world, dragged), 0);
    assert_eq!(moving(&world, mirrored), 0);
    assert!(!world.get::<MusicRangeController>(dragged).unwrap().pressed);
}

#[test]
fn slider_press_off_handle_is_ignored() {
    let mut world = make_world(1.0 / 60.0);
    let options = spawn_options_button(&mut world, 0.0, 0.0, 0, "", MenuSide::Right);
    let slider = slider_of(&world, options);
    let handle = world.get::<MapPosition>(slider).unwrap().pos;
    spawn_pointer(&mut world, handle.x, handle.y);

    // on the track, clear of the handle
    press_mouse(&mut world, handle + Vector2::new(50.0, 0.0), true);
    run(&mut world, pointer_interaction);
    assert!(!world.get::<MusicRangeController>(slider).unwrap().pressed);

    press_mouse(&mut world, handle + Vector2::new(150.0, 0.0), true);
    run(&mut world, pointer_interaction);
    assert_eq!(moving(&world, slider), 0);
}

// ==================== POINTER FOLLOW ====================

fn pull_speed_at(distance: f32) -> f32 {
    let mut world = make_world(1.0 / 60.0);
    let pointer = spawn_pointer(&mut world, 0.0, 0.0);
    world
        .get_mut::<memoryleak::components::pointer::PointerController>(pointer)
        .unwrap()
        .target = Vector2::new(distance, 0.0);

    run(&mut world, pointer_controller);

    world.get::<RigidBody>(pointer).unwrap().velocity.length()
}

fn rel_close(a: f32, b: f32) -> bool {
    (a - b).abs() <= b.abs() * 1e-4 + 1e-4
}

#[test]
fn pointer_pull_is_assigned_uncapped() {
    assert!(rel_close(pull_speed_at(0.0), 0.0));
    assert!(rel_close(pull_speed_at(3.0), 300.0));
    assert!(rel_close(pull_speed_at(30.0), 360_000.0));
    assert!(rel_close(pull_speed_at(100.0), 1.0e9));
}

#[test]
fn pointer_at_target_rests() {
    let mut world = make_world(1.0 / 60.0);
    let pointer = spawn_pointer(&mut world, 10.0, 10.0);

    run(&mut world, (pointer_controller, movement_system).chain());

    let body = world.get::<RigidBody>(pointer).unwrap();
    assert!(approx_eq(body.velocity.length(), 0.0));
}

// ==================== PLAYER ====================

#[test]
fn player_falls_without_ground() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, 0.0, 0.0);

    run(&mut world, (player_controller, movement_system).chain());

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(pos.y > 0.0);
}

#[test]
fn player_jumps_only_when_grounded() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, 0.0, 0.0);
    world.resource_mut::<InputState>().jump.update(true);

    run(&mut world, player_controller);
    assert!(world.get::<RigidBody>(player).unwrap().velocity.y > 0.0);

    set_contact(&mut world, player, true);
    run(&mut world, player_controller);
    assert!(world.get::<RigidBody>(player).unwrap().velocity.y < 0.0);
}

#[test]
fn player_below_death_line_requests_restart() {
    let mut world = make_world(1.0 / 60.0);
    world.insert_resource(LevelState::new(3));
    spawn_player(&mut world, 0.0, 900.0);

    run(&mut world, player_controller);

    assert_eq!(world.resource::<LevelState>().pending(), Some(3));
}
