//! Screen corruption overlay shown while a level transition is pending.
//!
//! While active, a frame counter advances once per drawn frame. When it
//! reaches the current duration (uniform in `[2, 20]` frames) the counter
//! resets, a new duration is drawn and [`GLITCH_BLOCKS`] random rectangles are
//! chosen: each copies a block of the current frame to a random spot. The
//! render pass captures the frame on the reshuffle and pastes the blocks on
//! every frame until the next reshuffle.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const GLITCH_BLOCKS: usize = 20;
/// Largest block side, also the margin kept from the right/bottom edges.
pub const GLITCH_MAX_SIZE: f32 = 200.0;
const MIN_DURATION: u32 = 2;
const MAX_DURATION: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchBlock {
    /// Top-left of the copied area in canvas pixels.
    pub source: Vector2,
    pub size: Vector2,
    /// Top-left of the paste.
    pub dest: Vector2,
}

#[derive(Component, Debug, Clone)]
pub struct Glitcher {
    pub active: bool,
    pub counter: u32,
    pub duration: u32,
    pub blocks: ArrayVec<GlitchBlock, GLITCH_BLOCKS>,
    /// Set on the frame the blocks were reshuffled; the render pass snapshots
    /// the canvas then.
    pub capture_pending: bool,
}

impl Default for Glitcher {
    fn default() -> Self {
        Self {
            active: false,
            counter: 0,
            duration: MIN_DURATION,
            blocks: ArrayVec::new(),
            capture_pending: false,
        }
    }
}

impl Glitcher {
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop and forget every block.
    pub fn deactivate(&mut self) {
        *self = Self::default();
    }

    /// Advance one drawn frame on a canvas of `canvas` size.
    ///
    /// Returns true when the blocks were reshuffled this frame.
    pub fn advance(&mut self, rng: &mut fastrand::Rng, canvas: Vector2) -> bool {
        self.capture_pending = false;
        if !self.active {
            return false;
        }
        self.counter += 1;
        if self.counter < self.duration {
            return false;
        }
        self.counter = 0;
        self.duration = rng.u32(MIN_DURATION..=MAX_DURATION);

        let span_x = (canvas.x - GLITCH_MAX_SIZE).max(0.0);
        let span_y = (canvas.y - GLITCH_MAX_SIZE).max(0.0);
        let mut uniform = |lo: f32, hi: f32| lo + rng.f32() * (hi - lo);

        self.blocks.clear();
        for _ in 0..GLITCH_BLOCKS {
            let source = Vector2::new(uniform(0.0, span_x), uniform(0.0, span_y));
            let size = Vector2::new(
                uniform(1.0, GLITCH_MAX_SIZE),
                uniform(1.0, GLITCH_MAX_SIZE),
            );
            let dest = Vector2::new(uniform(0.0, span_x), uniform(0.0, span_y));
            self.blocks.push(GlitchBlock { source, size, dest });
        }
        self.capture_pending = true;
        true
    }
}
