//! Volume slider controller.
//!
//! The slider entity is the track; its body is detached and acts as the
//! handle. While the handle is dragged the controller holds a moving intent
//! of -1, 0 or +1, recomputed from the pointer position, and each frame turns
//! it into a handle velocity along the slider axis. Handle travel is bounded
//! to `[-a, +b]` around the track centre with `a = 20%` and `b = 34%` of the
//! track's base width, swapped for directions 2 and 3.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Handle speed in px/s.
pub const HANDLE_SPEED: f32 = 50.0;
const LOWER_FRACTION: f32 = 0.20;
const UPPER_FRACTION: f32 = 0.34;

#[derive(Component, Debug, Clone, Default)]
pub struct MusicRangeController {
    /// Quarter turns of the slider: 0 +x, 1 +y, 2 -x, 3 -y.
    pub direction: u8,
    pub pressed: bool,
    pub moving: i8,
}

impl MusicRangeController {
    pub fn new(direction: u8) -> Self {
        Self {
            direction: direction % 4,
            ..Default::default()
        }
    }

    fn vertical(&self) -> bool {
        self.direction % 2 == 1
    }

    fn reversed(&self) -> bool {
        self.direction > 1
    }

    /// Recompute the moving intent from a pointer position.
    ///
    /// The pointer must be more than half the track width away from the
    /// track centre along the slider axis to move the handle.
    pub fn on_input(&mut self, pointer: Vector2, track: Vector2, track_width: f32) {
        let half = track_width / 2.0;
        let (p, c) = if self.vertical() {
            (pointer.y, track.y)
        } else {
            (pointer.x, track.x)
        };
        self.moving = if p > c + half {
            1
        } else if p < c - half {
            -1
        } else {
            0
        };
        if self.reversed() {
            self.moving = -self.moving;
        }
    }

    /// Travel bounds `(lower, upper)` of the handle offset along the axis.
    pub fn bounds(&self, track_width: f32) -> (f32, f32) {
        let (a, b) = if self.reversed() {
            (UPPER_FRACTION, LOWER_FRACTION)
        } else {
            (LOWER_FRACTION, UPPER_FRACTION)
        };
        (-a * track_width, b * track_width)
    }

    /// Handle velocity for this frame given its current offset from the
    /// track centre.
    ///
    /// The velocity never carries the handle past a bound within `dt`; at a
    /// bound the velocity towards it is zero.
    pub fn handle_velocity(&self, offset: Vector2, track_width: f32, dt: f32) -> Vector2 {
        if self.moving == 0 {
            return Vector2::zero();
        }
        let mut v = if self.moving > 0 {
            HANDLE_SPEED
        } else {
            -HANDLE_SPEED
        };
        if self.reversed() {
            v = -v;
        }
        let (lower, upper) = self.bounds(track_width);
        let along = if self.vertical() { offset.y } else { offset.x };

        let v = if v > 0.0 {
            if along >= upper {
                0.0
            } else if dt > 0.0 && along + v * dt > upper {
                (upper - along) / dt
            } else {
                v
            }
        } else if along <= lower {
            0.0
        } else if dt > 0.0 && along + v * dt < lower {
            (lower - along) / dt
        } else {
            v
        };

        if self.vertical() {
            Vector2::new(0.0, v)
        } else {
            Vector2::new(v, 0.0)
        }
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.moving = 0;
    }
}
