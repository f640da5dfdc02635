//! Audio commands and replies exchanged with the audio thread.

use bevy_ecs::message::Message;

/// Well-known sound ids loaded at setup.
pub const MAIN_THEME: &str = "main-theme";
pub const CLICK_SOUND: &str = "click-sound";

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

impl AudioCmd {
    pub fn play_fx(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }
}

/// Replies sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    DeviceUnavailable { error: String },
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicVolumeChanged { id: String, vol: f32 },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
