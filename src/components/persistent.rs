//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive level teardown. Observers
//! and registered systems carry it; everything a level builds does not.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that must outlive a level.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
