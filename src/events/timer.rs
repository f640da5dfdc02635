//! Timeout expiration event.
//!
//! [`crate::systems::time::update_timeouts`] triggers a [`TimeoutEvent`] for
//! each expired entry of [`Timeouts`](crate::resources::timeouts::Timeouts).
//! The observer compares `epoch` with the running level and ignores stale
//! ones.

use bevy_ecs::prelude::*;

use crate::resources::timeouts::TimeoutAction;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutEvent {
    /// Level epoch the timeout was scheduled in.
    pub epoch: u64,
    pub action: TimeoutAction,
}
