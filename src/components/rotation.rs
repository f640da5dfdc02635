//! Quarter-turn rotation used by buttons, menus and sliders.
//!
//! Rotation is restricted to multiples of 90 degrees clockwise (screen space,
//! y grows downwards), so hitboxes stay axis aligned: an odd number of turns
//! swaps width and height.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuarterTurns(u8);

impl QuarterTurns {
    pub fn new(count: u8) -> Self {
        Self(count % 4)
    }

    pub fn count(self) -> u8 {
        self.0
    }

    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    pub fn degrees(self) -> f32 {
        self.0 as f32 * 90.0
    }

    /// Axis-aligned size after rotation.
    pub fn rotate_size(self, size: Vector2) -> Vector2 {
        if self.is_odd() {
            Vector2::new(size.y, size.x)
        } else {
            size
        }
    }

    /// Rotate a local offset around the origin.
    pub fn rotate(self, v: Vector2) -> Vector2 {
        match self.0 {
            1 => Vector2::new(-v.y, v.x),
            2 => Vector2::new(-v.x, -v.y),
            3 => Vector2::new(v.y, -v.x),
            _ => v,
        }
    }

    /// Unit vector for a direction index: 0 +x, 1 +y, 2 -x, 3 -y.
    pub fn unit(direction: u8) -> Vector2 {
        match direction % 4 {
            1 => Vector2::new(0.0, 1.0),
            2 => Vector2::new(-1.0, 0.0),
            3 => Vector2::new(0.0, -1.0),
            _ => Vector2::new(1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_new_wraps_count() {
        assert_eq!(QuarterTurns::new(5).count(), 1);
        assert_eq!(QuarterTurns::new(4).count(), 0);
    }

    #[test]
    fn test_rotate_size_swaps_on_odd_turns_only() {
        let size = Vector2::new(140.0, 40.0);
        for turns in 0..4u8 {
            let r = QuarterTurns::new(turns).rotate_size(size);
            if turns % 2 == 1 {
                assert!(vec_approx_eq(r, Vector2::new(40.0, 140.0)));
            } else {
                assert!(vec_approx_eq(r, size));
            }
        }
    }

    #[test]
    fn test_rotate_quarter_is_clockwise_on_screen() {
        // +x rotates to +y (down on screen)
        let r = QuarterTurns::new(1).rotate(Vector2::new(1.0, 0.0));
        assert!(vec_approx_eq(r, Vector2::new(0.0, 1.0)));
        let r = QuarterTurns::new(3).rotate(Vector2::new(1.0, 0.0));
        assert!(vec_approx_eq(r, Vector2::new(0.0, -1.0)));
    }

    #[test]
    fn test_unit_directions() {
        assert!(vec_approx_eq(QuarterTurns::unit(0), Vector2::new(1.0, 0.0)));
        assert!(vec_approx_eq(QuarterTurns::unit(1), Vector2::new(0.0, 1.0)));
        assert!(vec_approx_eq(QuarterTurns::unit(2), Vector2::new(-1.0, 0.0)));
        assert!(vec_approx_eq(QuarterTurns::unit(3), Vector2::new(0.0, -1.0)));
        assert!(vec_approx_eq(QuarterTurns::unit(6), Vector2::new(-1.0, 0.0)));
    }
}
