//! Input sampling.
//!
//! [`update_input_state`] reads the keyboard and mouse from Raylib once per
//! frame and writes [`InputState`]. The mouse is mapped from window space to
//! canvas space through the letterbox, then to world space through the
//! camera.
use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;

/// Track the OS window size.
pub fn update_window_size(rl: NonSend<raylib::RaylibHandle>, mut window: ResMut<WindowSize>) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if window.w != w || window.h != h {
        window.w = w;
        window.h = h;
    }
}

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    target: NonSend<RenderTarget>,
    window: Res<WindowSize>,
    camera: Res<Camera2DRes>,
) {
    let jump = rl.is_key_down(input.jump.key_binding);
    let left = rl.is_key_down(input.left.key_binding);
    let right = rl.is_key_down(input.right.key_binding);
    input.jump.update(jump);
    input.left.update(left);
    input.right.update(right);

    let canvas = window.window_to_game_pos(
        rl.get_mouse_position(),
        target.game_width,
        target.game_height,
    );
    let world = camera.screen_to_world(canvas);
    let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    input.sample_pointer(canvas, world, down);
}
