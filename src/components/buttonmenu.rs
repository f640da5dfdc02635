//! Sliding menu attached to quit and options buttons.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

use crate::components::rotation::QuarterTurns;
use crate::components::tween::TweenPosition;

/// Remembers the menu entity, where it rests and where it slides to.
#[derive(Component, Debug, Clone)]
pub struct ButtonMenuController {
    pub menu: Entity,
    pub rest: Vector2,
    /// Slide vector: the menu's base width along the direction.
    pub offset: Vector2,
    pub opened: bool,
}

impl ButtonMenuController {
    /// `direction` is 0 +x, 1 +y, 2 -x, 3 -y; `menu_width` is the menu's
    /// unrotated width.
    pub fn new(menu: Entity, rest: Vector2, direction: u8, menu_width: f32) -> Self {
        Self {
            menu,
            rest,
            offset: QuarterTurns::unit(direction) * menu_width,
            opened: false,
        }
    }

    /// Where the menu should end up after the next toggle.
    pub fn next_target(&self) -> Vector2 {
        if self.opened {
            self.rest
        } else {
            self.rest + self.offset
        }
    }

    /// Start sliding open or closed over `duration` seconds.
    ///
    /// Does nothing while `animator` is still moving. Returns whether a new
    /// slide started.
    pub fn toggle(&mut self, current: Vector2, animator: &mut TweenPosition, duration: f32) -> bool {
        if animator.playing {
            return false;
        }
        let target = self.next_target();
        animator.restart(current, target, duration);
        self.opened = !self.opened;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    fn menu_entity() -> Entity {
        let mut world = World::new();
        world.spawn_empty().id()
    }

    #[test]
    fn test_direction_vectors() {
        let e = menu_entity();
        let rest = Vector2::new(10.0, 20.0);
        let expected = [
            Vector2::new(80.0, 0.0),
            Vector2::new(0.0, 80.0),
            Vector2::new(-80.0, 0.0),
            Vector2::new(0.0, -80.0),
        ];
        for (dir, want) in expected.iter().enumerate() {
            let c = ButtonMenuController::new(e, rest, dir as u8, 80.0);
            assert!(vec_approx_eq(c.offset, *want), "direction {dir}");
        }
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let rest = Vector2::new(30.0, 0.0);
        let mut c = ButtonMenuController::new(menu_entity(), rest, 0, 80.0);
        let mut tw = TweenPosition::idle(rest);

        assert!(c.toggle(rest, &mut tw, 1.0));
        assert!(c.opened);
        assert!(vec_approx_eq(tw.to, Vector2::new(110.0, 0.0)));
        assert!(tw.playing);

        tw.playing = false;
        assert!(c.toggle(tw.to, &mut tw, 1.0));
        assert!(!c.opened);
        assert!(vec_approx_eq(tw.to, rest));
    }

    #[test]
    fn test_toggle_while_moving_is_ignored() {
        let rest = Vector2::zero();
        let mut c = ButtonMenuController::new(menu_entity(), rest, 3, 80.0);
        let mut tw = TweenPosition::idle(rest);

        assert!(c.toggle(rest, &mut tw, 1.0));
        let target = tw.to;
        assert!(!c.toggle(rest, &mut tw, 1.0));
        assert!(c.opened);
        assert!(vec_approx_eq(tw.to, target));
    }
}
