//! Fire-after-delay callbacks in simulated time.
//!
//! Every entry carries the level epoch it was scheduled in. The timeout
//! observer drops entries whose epoch no longer matches the running level.

use bevy_ecs::prelude::Resource;

/// What to do when a timeout fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutAction {
    /// Stop the glitch and move on to the next level.
    AdvanceLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeout {
    pub remaining: f32,
    pub epoch: u64,
    pub action: TimeoutAction,
}

#[derive(Resource, Debug, Default)]
pub struct Timeouts {
    entries: Vec<Timeout>,
}

impl Timeouts {
    pub fn schedule(&mut self, delay: f32, epoch: u64, action: TimeoutAction) {
        self.entries.push(Timeout {
            remaining: delay,
            epoch,
            action,
        });
    }

    /// Advance every entry by `dt` and return the ones that expired, in the
    /// order they were scheduled.
    pub fn advance(&mut self, dt: f32) -> Vec<Timeout> {
        let mut fired = Vec::new();
        self.entries.retain_mut(|t| {
            t.remaining -= dt;
            if t.remaining <= 0.0 {
                fired.push(t.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
