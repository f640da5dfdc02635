//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! a level. Plain data components (position, body, drawable) sit next to the
//! controller components whose per-frame rules are driven by
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`animation`] – playback state of a sprite-sheet animation
//! - [`boxcollider`] – centred axis-aligned hitbox
//! - [`button`] – button press detection and the actions it fires
//! - [`buttonmenu`] – sliding menu attached to quit/options buttons
//! - [`contacts`] – per-side contact record and the resolve-against tag
//! - [`drawable`] – shapes painted by the render pass
//! - [`glitcher`] – screen corruption overlay state machine
//! - [`group`] – group tags (multicast addresses)
//! - [`mapposition`] – world-space centre of an entity
//! - [`musicrange`] – volume slider handle controller
//! - [`persistent`] – marker for entities that outlive a level
//! - [`player`] – player movement, animation choice and death
//! - [`pointer`] – cursor body that chases the mouse
//! - [`rigidbody`] – velocity, friction and mass
//! - [`rotation`] – quarter-turn rotation
//! - [`sprite`] – sprite-sheet frame
//! - [`trail`] – fading motion trail
//! - [`tween`] – position animator
//! - [`zindex`] – rendering order hint

pub mod animation;
pub mod boxcollider;
pub mod button;
pub mod buttonmenu;
pub mod contacts;
pub mod drawable;
pub mod glitcher;
pub mod group;
pub mod mapposition;
pub mod musicrange;
pub mod persistent;
pub mod player;
pub mod pointer;
pub mod rigidbody;
pub mod rotation;
pub mod sprite;
pub mod trail;
pub mod tween;
pub mod zindex;
