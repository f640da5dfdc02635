//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
//! - [`button`] – button actions fired on a press
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`timer`] – expired timeouts
pub mod audio;
pub mod button;
pub mod gamestate;
pub mod timer;
