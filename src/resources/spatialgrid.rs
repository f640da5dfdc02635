//! Uniform grid broad phase for the collision pass.
//!
//! The world is split into square cells over fixed bounds. Boxes register in
//! every cell they overlap; queries return the sorted, deduplicated set of
//! entities sharing a cell with the query box. Boxes outside the bounds are
//! clamped into the border cells.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;
use smallvec::SmallVec;

pub const WORLD_MIN: Vector2 = Vector2 {
    x: -1000.0,
    y: -1000.0,
};
pub const WORLD_MAX: Vector2 = Vector2 { x: 2000.0, y: 500.0 };
pub const CELL_SIZE: f32 = 200.0;

#[derive(Resource, Debug, Clone)]
pub struct SpatialGrid {
    min: Vector2,
    cell: f32,
    cols: usize,
    rows: usize,
    cells: Vec<SmallVec<[Entity; 8]>>,
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self::new(WORLD_MIN, WORLD_MAX, CELL_SIZE)
    }
}

impl SpatialGrid {
    pub fn new(min: Vector2, max: Vector2, cell: f32) -> Self {
        let cols = (((max.x - min.x) / cell).ceil() as usize).max(1);
        let rows = (((max.y - min.y) / cell).ceil() as usize).max(1);
        Self {
            min,
            cell,
            cols,
            rows,
            cells: vec![SmallVec::new(); cols * rows],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear();
        }
    }

    fn cell_range(&self, min: Vector2, max: Vector2) -> (usize, usize, usize, usize) {
        let to_col = |x: f32| {
            (((x - self.min.x) / self.cell).floor().max(0.0) as usize).min(self.cols - 1)
        };
        let to_row = |y: f32| {
            (((y - self.min.y) / self.cell).floor().max(0.0) as usize).min(self.rows - 1)
        };
        (to_col(min.x), to_row(min.y), to_col(max.x), to_row(max.y))
    }

    pub fn insert(&mut self, entity: Entity, min: Vector2, max: Vector2) {
        let (c0, r0, c1, r1) = self.cell_range(min, max);
        for r in r0..=r1 {
            for c in c0..=c1 {
                self.cells[r * self.cols + c].push(entity);
            }
        }
    }

    /// Entities sharing a cell with the box, sorted and deduplicated.
    pub fn query(&self, min: Vector2, max: Vector2) -> Vec<Entity> {
        let (c0, r0, c1, r1) = self.cell_range(min, max);
        let mut out = Vec::new();
        for r in r0..=r1 {
            for c in c0..=c1 {
                out.extend_from_slice(&self.cells[r * self.cols + c]);
            }
        }
        out.sort();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_default_dimensions() {
        let g = SpatialGrid::default();
        assert_eq!(g.dimensions(), (15, 8));
    }

    #[test]
    fn test_query_finds_neighbours_once() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut g = SpatialGrid::default();
        // spans four cells
        g.insert(a, Vector2::new(-10.0, -10.0), Vector2::new(10.0, 10.0));
        g.insert(b, Vector2::new(900.0, 0.0), Vector2::new(950.0, 40.0));
        let hits = g.query(Vector2::new(-5.0, -5.0), Vector2::new(5.0, 5.0));
        assert_eq!(hits, vec![a]);
        let far = g.query(Vector2::new(910.0, 10.0), Vector2::new(911.0, 11.0));
        assert_eq!(far, vec![b]);
    }

    #[test]
    fn test_out_of_bounds_clamps_to_border() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut g = SpatialGrid::default();
        g.insert(a, Vector2::new(5000.0, 900.0), Vector2::new(5010.0, 910.0));
        let hits = g.query(Vector2::new(1990.0, 490.0), Vector2::new(1999.0, 499.0));
        assert_eq!(hits, vec![a]);
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut g = SpatialGrid::default();
        g.insert(a, Vector2::zero(), Vector2::new(1.0, 1.0));
        g.clear();
        assert!(g.query(Vector2::zero(), Vector2::new(1.0, 1.0)).is_empty());
    }
}
