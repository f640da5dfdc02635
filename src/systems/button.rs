//! Button presses and the actions they fire.
//!
//! [`button_controller`] merges mouse and body presses, plays the click on
//! the rising edge and triggers a [`ButtonActionEvent`]. The drawable's
//! pressed flag follows the button every frame.
//!
//! [`button_action_observer`] applies the action: the start button turns the
//! glitch on and schedules the level advance; quit and options buttons toggle
//! the menus of every button in their group.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::button::{ButtonAction, ButtonController};
use crate::components::buttonmenu::ButtonMenuController;
use crate::components::contacts::Contacts;
use crate::components::drawable::Drawable;
use crate::components::glitcher::Glitcher;
use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::events::audio::{AudioCmd, CLICK_SOUND};
use crate::events::button::ButtonActionEvent;
use crate::resources::level::LevelState;
use crate::resources::sceneindex::{GLITCHER, SceneIndex};
use crate::resources::timeouts::{TimeoutAction, Timeouts};

/// Seconds between pressing start and the next level.
pub const ADVANCE_DELAY: f32 = 2.0;

pub fn button_controller(
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    mut buttons: Query<(Entity, &mut ButtonController, &Contacts, &mut Drawable)>,
) {
    for (entity, mut button, contacts, mut drawable) in buttons.iter_mut() {
        if button.update(contacts.any()) {
            audio.write(AudioCmd::play_fx(CLICK_SOUND));
            if let Some(action) = button.fire() {
                commands.trigger(ButtonActionEvent {
                    button: Some(entity),
                    action,
                });
            }
        }
        let pressed = button.is_pressed();
        if drawable.is_pressed() != pressed {
            drawable.set_pressed(pressed);
        }
    }
}

pub fn button_action_observer(
    trigger: On<ButtonActionEvent>,
    scene: Res<SceneIndex>,
    level: Res<LevelState>,
    mut timeouts: ResMut<Timeouts>,
    mut glitchers: Query<&mut Glitcher>,
    mut menus: Query<&mut ButtonMenuController>,
    mut animators: Query<(&MapPosition, &mut TweenPosition)>,
) {
    let event = trigger.event();
    debug!("Button {:?} fired {:?}", event.button, event.action);

    match &event.action {
        ButtonAction::None => {}
        ButtonAction::AdvanceLevel => {
            match scene.named(GLITCHER).map(|e| glitchers.get_mut(e)) {
                Some(Ok(mut glitcher)) => glitcher.activate(),
                _ => warn!("No '{}' entity in {}", GLITCHER, scene.scene),
            }
            timeouts.schedule(ADVANCE_DELAY, level.epoch(), TimeoutAction::AdvanceLevel);
        }
        ButtonAction::ToggleGroup { group, duration_ms } => {
            let duration = *duration_ms as f32 / 1000.0;
            for &member in scene.group(group) {
                let Ok(mut menu) = menus.get_mut(member) else {
                    continue;
                };
                let Ok((position, mut animator)) = animators.get_mut(menu.menu) else {
                    warn!("Menu {:?} of {:?} has no animator", menu.menu, member);
                    continue;
                };
                let current = position.pos;
                if menu.toggle(current, &mut animator, duration) {
                    debug!("Menu {:?} opened={}", menu.menu, menu.opened);
                }
            }
        }
    }
}
