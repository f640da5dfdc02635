//! Button controller and the actions a button can fire.
//!
//! A button is pressed while the mouse holds it down or while any body
//! touches it. The bound action fires on the rising edge only, never again
//! while the press is held.

use bevy_ecs::prelude::Component;

/// Default slide duration of the quit/options menus, in milliseconds.
pub const DEFAULT_TOGGLE_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ButtonAction {
    /// Plain platform button.
    #[default]
    None,
    /// Start the glitch and advance to the next level after a delay.
    /// Cleared after it fires once.
    AdvanceLevel,
    /// Toggle the sliding menu of every entity in `group`.
    ToggleGroup { group: String, duration_ms: u32 },
}

impl ButtonAction {
    pub fn toggle(group: impl Into<String>) -> Self {
        ButtonAction::ToggleGroup {
            group: group.into(),
            duration_ms: DEFAULT_TOGGLE_MS,
        }
    }

    /// Same action with another toggle duration. Non-toggle actions are
    /// returned unchanged.
    pub fn with_duration(self, ms: u32) -> Self {
        match self {
            ButtonAction::ToggleGroup { group, .. } => ButtonAction::ToggleGroup {
                group,
                duration_ms: ms,
            },
            other => other,
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct ButtonController {
    pub action: ButtonAction,
    pub pressed_by_mouse: bool,
    pub pressed_by_body: bool,
    /// Pressed state of the previous frame.
    pub was_pressed: bool,
}

impl ButtonController {
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_by_mouse || self.pressed_by_body
    }

    /// Refresh the body contact state and detect a rising edge.
    ///
    /// Returns true on the frame the button goes from released to pressed.
    pub fn update(&mut self, touched: bool) -> bool {
        self.pressed_by_body = touched;
        let pressed = self.is_pressed();
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        rising
    }

    /// Action to run for a rising edge. One-shot actions are consumed.
    pub fn fire(&mut self) -> Option<ButtonAction> {
        match &self.action {
            ButtonAction::None => None,
            ButtonAction::AdvanceLevel => Some(std::mem::take(&mut self.action)),
            other => Some(other.clone()),
        }
    }
}
