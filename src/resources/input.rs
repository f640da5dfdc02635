//! Per-frame input snapshot.
//!
//! Captures the keys the game reads (W jump, A left, D right) and the primary
//! mouse button and position. [`crate::systems::input::update_input_state`]
//! is the single writer; controllers read it in the same frame.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Store the new held state and derive the edges from the previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Primary mouse button and its last known world position.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// World position at the last move or press.
    pub world: Vector2,
    /// Canvas position last frame, used to detect moves.
    pub screen: Vector2,
    pub button: BoolState,
    /// The mouse moved this frame.
    pub moved: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            world: Vector2::zero(),
            screen: Vector2::zero(),
            button: BoolState::bound_to(KeyboardKey::KEY_NULL),
            moved: false,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub jump: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump: BoolState::bound_to(KeyboardKey::KEY_W),
            left: BoolState::bound_to(KeyboardKey::KEY_A),
            right: BoolState::bound_to(KeyboardKey::KEY_D),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Feed a pointer sample: canvas position, its world position and
    /// whether the primary button is held.
    pub fn sample_pointer(&mut self, screen: Vector2, world: Vector2, down: bool) {
        let p = &mut self.pointer;
        p.moved = screen != p.screen;
        p.screen = screen;
        p.button.update(down);
        if p.moved || p.button.just_pressed {
            p.world = world;
        }
    }
}
