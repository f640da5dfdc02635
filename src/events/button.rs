//! Button action event.
//!
//! Triggered by the button controller on the rising edge of a press (and by
//! the level builder for menus that start open). Handled by
//! [`crate::systems::button::button_action_observer`].

use bevy_ecs::prelude::*;

use crate::components::button::ButtonAction;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ButtonActionEvent {
    /// Button that fired, if any.
    pub button: Option<Entity>,
    pub action: ButtonAction,
}
