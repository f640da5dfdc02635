//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-sheet animations
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`button`] – button press edges, click sound and action dispatch
//! - [`camera`] – keep the camera on the player
//! - [`collision`] – push resolvers out of their layer and record contacts
//! - [`effects`] – trail sampling and the glitch overlay state machine
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`interaction`] – route mouse presses and drags to buttons and sliders
//! - [`level`] – teardown and rebuild of the running level
//! - [`levelbuilder`] – entity factories and the placement-driven builder
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`musicrange`] – drive the slider handle body
//! - [`player`] – apply the player controller to its body and sprite
//! - [`pointer`] – pull the pointer body towards the mouse
//! - [`render`] – draw world, glitch overlay and debug text using Raylib
//! - [`time`] – update simulation time, fire timeouts
//! - [`tween`] – animate positions over time

pub mod animation;
pub mod audio;
pub mod button;
pub mod camera;
pub mod collision;
pub mod effects;
pub mod gamestate;
pub mod input;
pub mod interaction;
pub mod level;
pub mod levelbuilder;
pub mod movement;
pub mod musicrange;
pub mod player;
pub mod pointer;
pub mod render;
pub mod time;
pub mod tween;
