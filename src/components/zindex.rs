//! Z-index component for render ordering.
//!
//! Entities with higher values are painted later, on top of lower ones.
//! Values in use: title -99, slider track -1, menus 5, slider handle 6,
//! buttons 10, trail 19, player 20, pointer 99.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
