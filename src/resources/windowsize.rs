//! Window size resource.
//!
//! Tracks the OS window in pixels, which may differ from the canvas size.
//! Updated every frame; used to letterbox the canvas and to map the mouse
//! from window space back to canvas space.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Rectangle the canvas occupies inside the window: centred, aspect
    /// preserved, black bars on the short axis.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let (gw, gh) = (game_width as f32, game_height as f32);
        let (ww, wh) = (self.w as f32, self.h as f32);
        let scale = (ww / gw).min(wh / gh);
        let (w, h) = (gw * scale, gh * scale);
        Rectangle {
            x: (ww - w) * 0.5,
            y: (wh - h) * 0.5,
            width: w,
            height: h,
        }
    }

    /// Map a window position to canvas coordinates, clamped to the canvas.
    pub fn window_to_game_pos(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let lb = self.calculate_letterbox(game_width, game_height);
        let (gw, gh) = (game_width as f32, game_height as f32);
        Vector2 {
            x: ((window_pos.x - lb.x) * gw / lb.width).clamp(0.0, gw),
            y: ((window_pos.y - lb.y) * gh / lb.height).clamp(0.0, gh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_square_canvas_in_wide_window_is_pillarboxed() {
        let ws = WindowSize { w: 1280, h: 720 };
        let r = ws.calculate_letterbox(720, 720);
        assert!(approx_eq(r.x, 280.0));
        assert!(approx_eq(r.y, 0.0));
        assert!(approx_eq(r.width, 720.0));
        assert!(approx_eq(r.height, 720.0));
    }

    #[test]
    fn test_square_canvas_in_tall_window_is_letterboxed() {
        let ws = WindowSize { w: 360, h: 800 };
        let r = ws.calculate_letterbox(720, 720);
        assert!(approx_eq(r.x, 0.0));
        assert!(approx_eq(r.y, 220.0));
        assert!(approx_eq(r.width, 360.0));
    }

    #[test]
    fn test_window_to_game_pos() {
        let ws = WindowSize { w: 1440, h: 1440 };
        let p = ws.window_to_game_pos(Vector2::new(720.0, 200.0), 720, 720);
        assert!(approx_eq(p.x, 360.0));
        assert!(approx_eq(p.y, 100.0));
        let ws = WindowSize { w: 1280, h: 720 };
        let p = ws.window_to_game_pos(Vector2::new(10.0, 10.0), 720, 720);
        assert!(approx_eq(p.x, 0.0));
    }
}
