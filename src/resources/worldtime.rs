//! Simulation clock.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    /// Frames simulated so far.
    pub frame: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    /// Advance by an unscaled frame delta.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt.max(0.0) * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
        self.frame += 1;
    }
}
