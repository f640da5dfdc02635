//! Fading motion trail drawn behind an entity.

use std::collections::VecDeque;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// One polyline segment of the trail, newest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: Vector2,
    pub to: Vector2,
    /// Alpha at `from`, in `[0, 1]`.
    pub alpha: f32,
    /// Alpha at `to`.
    pub alpha_end: f32,
    pub width: f32,
}

#[derive(Component, Debug, Clone)]
pub struct Trail {
    pub count: usize,
    pub line_width: f32,
    pub color: Color,
    pub z: i32,
    history: VecDeque<Vector2>,
}

impl Trail {
    pub fn new(count: usize, line_width: f32, color: Color, z: i32) -> Self {
        Self {
            count,
            line_width,
            color,
            z,
            history: VecDeque::with_capacity(count + 1),
        }
    }

    /// Push the newest position, dropping the oldest beyond `count`.
    pub fn record(&mut self, pos: Vector2) {
        self.history.push_front(pos);
        self.history.truncate(self.count);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Segments between consecutive positions; alpha and width fade out
    /// linearly towards the oldest position.
    pub fn segments(&self) -> impl Iterator<Item = TrailSegment> + '_ {
        let n = self.count.max(1) as f32;
        self.history
            .iter()
            .zip(self.history.iter().skip(1))
            .enumerate()
            .map(move |(i, (a, b))| {
                let i = i as f32;
                TrailSegment {
                    from: *a,
                    to: *b,
                    alpha: (n - i) / n,
                    alpha_end: (n - i - 1.0) / n,
                    width: (n - i) / n * self.line_width + 1.0,
                }
            })
    }
}
