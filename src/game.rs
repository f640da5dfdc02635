//! Game state hooks.
//!
//! These systems are registered in [`crate::resources::systemsstore::SystemsStore`]
//! under the names returned by [`crate::events::gamestate::enter_hook`] and run
//! once when the game enters the matching state:
//!
//! - `setup` loads textures, the font, music and sound effects, then moves on
//!   to `Playing`.
//! - `enter_play` starts the main theme and requests the start level.
//! - `enter_ending` runs after the last level; the render pass draws the
//!   ending message from then on.
//! - `quit_game` stops the music before the main loop exits.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::events::audio::{AudioCmd, CLICK_SOUND, MAIN_THEME};
use crate::resources::animationstore::player_animations;
use crate::resources::fontstore::{FontStore, MAIN_FONT};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::level::LevelState;
use crate::resources::texturestore::{PLAYER_TEXTURE, TextureStore};

pub const PLAYER_TEXTURE_PATH: &str = "./assets/player.png";
pub const MAIN_FONT_PATH: &str = "./assets/fonts/slkscre.ttf";
pub const MAIN_THEME_PATH: &str = "./assets/audio/journey-awaits.mp3";
pub const CLICK_SOUND_PATH: &str = "./assets/audio/mouse-click.mp3";

/// Queue the audio loads. Replies arrive later through `Messages<AudioMessage>`.
pub fn load_audio(audio: &mut MessageWriter<AudioCmd>) {
    audio.write(AudioCmd::LoadMusic {
        id: MAIN_THEME.into(),
        path: MAIN_THEME_PATH.into(),
    });
    audio.write(AudioCmd::LoadFx {
        id: CLICK_SOUND.into(),
        path: CLICK_SOUND_PATH.into(),
    });
}

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    mut textures: NonSendMut<TextureStore>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    match rl.load_texture(&th, PLAYER_TEXTURE_PATH) {
        Ok(tex) => {
            info!("Loaded texture '{}' from {}", PLAYER_TEXTURE, PLAYER_TEXTURE_PATH);
            textures.insert(PLAYER_TEXTURE, tex);
        }
        Err(e) => warn!(
            "Failed to load {}: {}; the player is drawn as a box",
            PLAYER_TEXTURE_PATH, e
        ),
    }

    match rl.load_font(&th, MAIN_FONT_PATH) {
        Ok(font) => {
            info!("Loaded font '{}' from {}", MAIN_FONT, MAIN_FONT_PATH);
            fonts.add(MAIN_FONT, font);
        }
        Err(e) => warn!(
            "Failed to load {}: {}; using the default font",
            MAIN_FONT_PATH, e
        ),
    }

    commands.insert_resource(player_animations(PLAYER_TEXTURE));

    load_audio(&mut audio_cmd_writer);

    next_state.set(GameStates::Playing);
    info!("Setup done, next state set to Playing");
}

pub fn enter_play(
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
    config: Option<Res<GameConfig>>,
    mut level: ResMut<LevelState>,
) {
    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: MAIN_THEME.into(),
        looped: true,
    });
    let vol = config.map_or(1.0, |c| c.music_volume);
    audio_cmd_writer.write(AudioCmd::VolumeMusic {
        id: MAIN_THEME.into(),
        vol,
    });
    let start = level.current();
    level.request(start);
    info!("Entering play at level {}", start);
}

pub fn enter_ending(level: Res<LevelState>) {
    info!("Game complete after level {}", level.current().saturating_sub(1));
}

pub fn quit_game(mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    audio_cmd_writer.write(AudioCmd::StopMusic {
        id: MAIN_THEME.into(),
    });
    info!("Quitting");
}
