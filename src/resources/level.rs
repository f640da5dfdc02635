//! Level progression state.
//!
//! Tracks the current level index, a pending (re)build request and the level
//! epoch. The epoch increments on every rebuild; deferred callbacks capture it
//! when scheduled and are dropped if it changed before they fire.

use bevy_ecs::prelude::Resource;

/// Highest level index in the table; anything beyond ends the game.
pub const LAST_LEVEL: u32 = 6;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelState {
    current: u32,
    epoch: u64,
    pending: Option<u32>,
}

impl LevelState {
    pub fn new(start: u32) -> Self {
        Self {
            current: start,
            ..Default::default()
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending(&self) -> Option<u32> {
        self.pending
    }

    /// Ask for `index` to be built on the next level pass. Several requests in
    /// one frame collapse into the last one.
    pub fn request(&mut self, index: u32) {
        self.pending = Some(index);
    }

    /// Replay the current level.
    pub fn request_restart(&mut self) {
        self.request(self.current);
    }

    /// Move to the next index and request it.
    pub fn advance(&mut self) {
        self.current += 1;
        self.request(self.current);
    }

    /// Take the pending request and open a new epoch for it.
    pub fn begin_pending(&mut self) -> Option<u32> {
        let index = self.pending.take()?;
        self.current = index;
        self.epoch += 1;
        Some(index)
    }

    pub fn is_past_last(index: u32) -> bool {
        index > LAST_LEVEL
    }
}
