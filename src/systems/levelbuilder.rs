//! Level assembly.
//!
//! [`build_level`] walks a [`LevelLayout`] and calls one factory per
//! placement. Factories spawn fully wired entities directly into the
//! [`World`], register names and group tags in the [`SceneIndex`] and size
//! every body from its drawable's rotated size.
//!
//! Quit and options buttons come with a companion menu (crosses icon or
//! volume slider). The companion rests half the size difference away from the
//! button centre, toward the side the placement names, and slides out by its
//! own base width in that same direction.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::{Color, Vector2};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::button::{ButtonAction, ButtonController};
use crate::components::buttonmenu::ButtonMenuController;
use crate::components::contacts::{CollisionLayer, Contacts};
use crate::components::drawable::{
    Drawable, HANDLE_WIDTH, Handle, MENU_WIDTH, RANGE_WIDTH, TITLE_FONT_SIZE,
};
use crate::components::glitcher::Glitcher;
use crate::components::group::{
    Groups, MUSIC_BARS, OPTIONS, PLAYER_LAYER, POINTER_LAYER, QUIT, START,
};
use crate::components::mapposition::{MapPosition, PreviousPosition};
use crate::components::musicrange::MusicRangeController;
use crate::components::player::PlayerController;
use crate::components::pointer::PointerController;
use crate::components::rigidbody::{DetachedBody, RidesOnTop, RigidBody};
use crate::components::rotation::QuarterTurns;
use crate::components::sprite::Sprite;
use crate::components::trail::Trail;
use crate::components::tween::TweenPosition;
use crate::components::zindex::ZIndex;
use crate::events::button::ButtonActionEvent;
use crate::resources::leveltable::{LevelLayout, MenuSide, Placement};
use crate::resources::sceneindex::{GLITCHER, PLAYER, POINTER, SceneIndex};
use crate::resources::texturestore::PLAYER_TEXTURE;

/// Width of start, quit and options buttons.
pub const MENU_BUTTON_WIDTH: f32 = 140.0;
pub const TITLE_TEXT: &str = "MEMORY\nLEAK";

const PLAYER_FRAME: f32 = 16.0;
const PLAYER_SIZE: f32 = 32.0;
const PLAYER_BODY_WIDTH: f32 = PLAYER_SIZE * 0.74;
const PLAYER_BODY_HEIGHT: f32 = PLAYER_SIZE * 0.98;
const PLAYER_FRICTION: (f32, f32) = (0.08, 0.01);
const TRAIL_COUNT: usize = 30;
const TRAIL_WIDTH: f32 = 7.0;

const Z_TITLE: i32 = -99;
const Z_RANGE: i32 = -1;
const Z_MENU: i32 = 5;
const Z_HANDLE: i32 = 6;
const Z_BUTTON: i32 = 10;
const Z_TRAIL: i32 = 19;
const Z_PLAYER: i32 = 20;
const Z_POINTER: i32 = 99;
const Z_GLITCH: i32 = 999;

fn index_groups(world: &mut World, entity: Entity, groups: &Groups) {
    world.resource_mut::<SceneIndex>().add_groups(groups, entity);
}

fn static_body(size: Vector2) -> (RigidBody, BoxCollider, Contacts) {
    (
        RigidBody::fixed(),
        BoxCollider::from_size(size),
        Contacts::default(),
    )
}

pub fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let pos = MapPosition::new(x, y);
    let entity = world
        .spawn((
            pos,
            PreviousPosition(pos.pos),
            RigidBody::dynamic(1.0).with_friction(PLAYER_FRICTION.0, PLAYER_FRICTION.1),
            BoxCollider::new(PLAYER_BODY_WIDTH, PLAYER_BODY_HEIGHT),
            Contacts::default(),
            CollisionLayer::new(PLAYER_LAYER),
            RidesOnTop,
            PlayerController::default(),
            Sprite::new(PLAYER_TEXTURE, PLAYER_FRAME, PLAYER_SIZE),
            Animation::new("idle"),
            Trail::new(TRAIL_COUNT, TRAIL_WIDTH, Color::WHITE, Z_TRAIL),
            ZIndex(Z_PLAYER),
        ))
        .id();
    world.resource_mut::<SceneIndex>().set_name(PLAYER, entity);
    entity
}

/// Plain button. `groups` are the tags the button answers to.
pub fn spawn_button(
    world: &mut World,
    x: f32,
    y: f32,
    width: f32,
    rotation: u8,
    groups: Groups,
    text: &str,
) -> Entity {
    let turns = QuarterTurns::new(rotation);
    let drawable = Drawable::button(width, text);
    let size = drawable.size(turns);
    let pos = MapPosition::new(x, y);
    let entity = world
        .spawn((
            pos,
            PreviousPosition(pos.pos),
            turns,
            drawable,
            static_body(size),
            ButtonController::default(),
            ZIndex(Z_BUTTON),
        ))
        .id();
    index_groups(world, entity, &groups);
    world.entity_mut(entity).insert(groups);
    entity
}

/// Pressing it turns on the glitch and moves to the next level shortly
/// after. Fires once per build.
pub fn spawn_start_button(world: &mut World, x: f32, y: f32, rotation: u8, groups: &str) -> Entity {
    let groups = Groups::parse(groups).with(START);
    let entity = spawn_button(world, x, y, MENU_BUTTON_WIDTH, rotation, groups, "START");
    if let Some(mut button) = world.get_mut::<ButtonController>(entity) {
        button.action = ButtonAction::AdvanceLevel;
    }
    entity
}

/// Rest position of a companion menu and the direction it slides out.
pub fn menu_anchor(
    x: f32,
    y: f32,
    rotation: u8,
    side: MenuSide,
    menu_width: f32,
) -> (Vector2, u8) {
    let direction = side.direction(rotation);
    let shift = QuarterTurns::unit(direction) * ((MENU_BUTTON_WIDTH - menu_width) / 2.0);
    (Vector2::new(x, y) + shift, direction)
}

fn attach_menu(
    world: &mut World,
    button: Entity,
    menu: Entity,
    rest: Vector2,
    direction: u8,
    menu_width: f32,
    group: &str,
) {
    world.entity_mut(button).insert(ButtonMenuController::new(
        menu, rest, direction, menu_width,
    ));
    if let Some(mut controller) = world.get_mut::<ButtonController>(button) {
        controller.action = ButtonAction::toggle(group);
    }
}

/// Quit button with its crosses menu. Pressing it toggles every quit menu in
/// the level.
pub fn spawn_quit_button(
    world: &mut World,
    x: f32,
    y: f32,
    rotation: u8,
    groups: &str,
    side: MenuSide,
) -> Entity {
    let tags = Groups::parse(groups);
    let button = spawn_button(world, x, y, MENU_BUTTON_WIDTH, rotation, tags.clone().with(QUIT), "QUIT");

    let turns = QuarterTurns::new(rotation);
    let (rest, direction) = menu_anchor(x, y, rotation, side, MENU_WIDTH);
    let drawable = Drawable::ButtonMenu;
    let size = drawable.size(turns);
    let menu = world
        .spawn((
            MapPosition { pos: rest },
            PreviousPosition(rest),
            turns,
            drawable,
            static_body(size),
            TweenPosition::idle(rest),
            ZIndex(Z_MENU),
        ))
        .id();
    index_groups(world, menu, &tags);
    world.entity_mut(menu).insert(tags);

    attach_menu(world, button, menu, rest, direction, MENU_WIDTH, QUIT);
    button
}

/// Options button with its volume slider. Every slider joins group "m" so
/// dragging one moves them all.
pub fn spawn_options_button(
    world: &mut World,
    x: f32,
    y: f32,
    rotation: u8,
    groups: &str,
    side: MenuSide,
) -> Entity {
    let tags = Groups::parse(groups);
    let button = spawn_button(
        world,
        x,
        y,
        MENU_BUTTON_WIDTH,
        rotation,
        tags.clone().with(OPTIONS),
        "OPTIONS",
    );

    let turns = QuarterTurns::new(rotation);
    let (rest, direction) = menu_anchor(x, y, rotation, side, RANGE_WIDTH);
    let drawable = Drawable::MusicRange;
    let handle = turns.rotate_size(Vector2::new(HANDLE_WIDTH, drawable.base_size().y));
    let range_tags = tags.with(MUSIC_BARS);
    let range = world
        .spawn((
            MapPosition { pos: rest },
            PreviousPosition(rest),
            turns,
            drawable,
            Handle {
                size: handle,
                z: Z_HANDLE,
            },
            static_body(handle),
            DetachedBody,
            MusicRangeController::new(rotation),
            TweenPosition::idle(rest),
            ZIndex(Z_RANGE),
        ))
        .id();
    index_groups(world, range, &range_tags);
    world.entity_mut(range).insert(range_tags);

    attach_menu(world, button, range, rest, direction, RANGE_WIDTH, OPTIONS);
    button
}

/// The mouse-driven body. It starts at rest on its spawn point.
pub fn spawn_pointer(world: &mut World, x: f32, y: f32) -> Entity {
    let drawable = Drawable::Pointer;
    let size = drawable.size(QuarterTurns::default());
    let pos = MapPosition::new(x, y);
    let entity = world
        .spawn((
            pos,
            PreviousPosition(pos.pos),
            drawable,
            RigidBody::dynamic(1.0),
            BoxCollider::from_size(size),
            Contacts::default(),
            CollisionLayer::new(POINTER_LAYER),
            PointerController::new(pos.pos),
            ZIndex(Z_POINTER),
        ))
        .id();
    world.resource_mut::<SceneIndex>().set_name(POINTER, entity);
    entity
}

pub fn spawn_title(world: &mut World, x: f32, y: f32, text: &str) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            Drawable::Title {
                text: text.to_string(),
                font_size: TITLE_FONT_SIZE,
            },
            ZIndex(Z_TITLE),
        ))
        .id()
}

/// Full-screen glitch overlay, idle until a start button fires.
pub fn spawn_glitcher(world: &mut World) -> Entity {
    let entity = world.spawn((Glitcher::default(), ZIndex(Z_GLITCH))).id();
    world.resource_mut::<SceneIndex>().set_name(GLITCHER, entity);
    entity
}

/// Spawn every placement of `layout` plus the glitch overlay. Returns the
/// number of placements built, the glitcher included; companion menus are
/// not counted.
pub fn build_level(world: &mut World, layout: &LevelLayout) -> usize {
    world.resource_mut::<SceneIndex>().scene = format!("Level{}", layout.index);
    let mut spawned = vec![spawn_glitcher(world)];

    for placement in &layout.placements {
        match placement {
            Placement::Title { x, y, text } => {
                spawned.push(spawn_title(world, *x, *y, text.as_deref().unwrap_or(TITLE_TEXT)));
            }
            Placement::Player { x, y } => spawned.push(spawn_player(world, *x, *y)),
            Placement::Pointer { x, y } => spawned.push(spawn_pointer(world, *x, *y)),
            Placement::Button {
                x,
                y,
                width,
                rotation,
                groups,
                text,
            } => spawned.push(spawn_button(
                world,
                *x,
                *y,
                *width,
                *rotation,
                Groups::parse(groups),
                text.as_deref().unwrap_or(""),
            )),
            Placement::Start {
                x,
                y,
                rotation,
                groups,
            } => spawned.push(spawn_start_button(world, *x, *y, *rotation, groups)),
            Placement::Quit {
                x,
                y,
                rotation,
                groups,
                side,
                open_ms,
            } => {
                let button = spawn_quit_button(world, *x, *y, *rotation, groups, *side);
                spawned.push(button);
                if let Some(ms) = open_ms {
                    debug!("Opening quit menus of {:?} over {} ms", button, ms);
                    world.trigger(ButtonActionEvent {
                        button: Some(button),
                        action: ButtonAction::toggle(QUIT).with_duration(*ms),
                    });
                }
            }
            Placement::Options {
                x,
                y,
                rotation,
                groups,
                side,
            } => spawned.push(spawn_options_button(world, *x, *y, *rotation, groups, *side)),
        }
    }

    spawned.len()
}
