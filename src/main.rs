//! MEMORY LEAK main entry point.
//!
//! A small puzzle platformer built on:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Levels are placements read from `assets/levels.json` (embedded at build
//! time). The player walks over rotated buttons, the mouse drags a pointer
//! body that presses them, and start buttons glitch the screen before moving
//! on to the next level.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world and resources
//! 2. Enter `Setup` (asset loads), then `Playing` (music, start level)
//! 3. Each frame: input, physics, controllers, effects, level switching,
//!    audio forwarding, rendering
//! 4. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level 3 --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::level::LevelState;
use crate::resources::leveltable::LevelTable;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::sceneindex::SceneIndex;
use crate::resources::screensize::ScreenSize;
use crate::resources::spatialgrid::SpatialGrid;
use crate::resources::systemsstore::{SystemsStore, register_named_system};
use crate::resources::texturestore::TextureStore;
use crate::resources::timeouts::Timeouts;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::button::{button_action_observer, button_controller};
use crate::systems::camera::camera_follow;
use crate::systems::collision::{collision_system, ride_system};
use crate::systems::effects::{glitch_system, trail_system};
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::{update_input_state, update_window_size};
use crate::systems::interaction::pointer_interaction;
use crate::systems::level::apply_level_request;
use crate::systems::movement::{movement_system, remember_positions};
use crate::systems::musicrange::music_range_controller;
use crate::systems::player::player_controller;
use crate::systems::pointer::pointer_controller;
use crate::systems::render::render_system;
use crate::systems::time::{timeout_observer, update_timeouts, update_world_time};
use crate::systems::tween::tween_mapposition_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// MEMORY LEAK
#[derive(Parser)]
#[command(version, about = "MEMORY LEAK, a tiny puzzle platformer")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Level to start at (0-6; anything higher goes straight to the ending).
    #[arg(long, value_name = "N", default_value_t = 0)]
    level: u32,

    /// Draw hitboxes and the FPS/level overlay.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let levels = match LevelTable::embedded() {
        Ok(table) => table,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Level table holds {} levels", levels.len());

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("MEMORY LEAK");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_width = config.render_width;
    let render_height = config.render_height;
    let render_target = RenderTarget::new(&mut rl, &thread, render_width, render_height)
        .expect("Failed to create render target");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    // ScreenSize is the game's internal render resolution
    world.insert_resource(ScreenSize {
        w: render_width as i32,
        h: render_height as i32,
    });
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(Camera2DRes::centered(
        render_width as f32,
        render_height as f32,
    ));
    world.insert_resource(InputState::default());
    world.insert_resource(SpatialGrid::default());
    world.insert_resource(SceneIndex::default());
    world.insert_resource(Timeouts::default());
    world.insert_resource(LevelState::new(cli.level));
    world.insert_resource(levels);
    world.insert_resource(AnimationStore::default());
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(render_target);

    // Init audio
    setup_audio(&mut world); // it must go before the game setup

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(TextureStore::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(button_action_observer), Persistent));
    world.spawn((Observer::new(timeout_observer), Persistent));

    // Game state hooks
    let mut systems_store = SystemsStore::new();
    register_named_system(&mut world, &mut systems_store, "setup", game::setup);
    register_named_system(&mut world, &mut systems_store, "enter_play", game::enter_play);
    register_named_system(&mut world, &mut systems_store, "enter_ending", game::enter_ending);
    register_named_system(&mut world, &mut systems_store, "quit_game", game::quit_game);
    world.insert_resource(systems_store);

    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // Call inmediatly to enter Setup state
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            (update_window_size, update_input_state).chain(),
            (
                (
                    remember_positions,
                    tween_mapposition_system,
                    movement_system,
                    collision_system,
                    ride_system,
                )
                    .chain(),
                (
                    pointer_interaction,
                    player_controller,
                    pointer_controller,
                    music_range_controller,
                    button_controller,
                )
                    .chain(),
                (
                    trail_system,
                    glitch_system,
                    camera_follow,
                    animation,
                    update_timeouts,
                )
                    .chain(),
            )
                .chain()
                .run_if(state_is_playing),
            apply_level_request,
            check_pending_state,
            // audio systems must be together
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                update_bevy_audio_messages,
            )
                .chain(),
            render_system,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !matches!(world.resource::<GameState>().get(), GameStates::Quitting) {
        if world
            .non_send_resource::<raylib::RaylibHandle>()
            .window_should_close()
        {
            world.resource_mut::<NextGameState>().set(GameStates::Quitting);
        }

        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
