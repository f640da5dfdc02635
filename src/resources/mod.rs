//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, level
//! progression, rendering handles, asset stores, and utilities.
//!
//! Overview
//! - `animationstore` – sprite-sheet animation definitions
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `fontstore` – loaded fonts (non-send)
//! - `gameconfig` – INI configuration
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard and mouse snapshot
//! - `level` – current level, pending rebuild and level epoch
//! - `leveltable` – embedded placement table for levels 0-6
//! - `rendertarget` – canvas and glitch snapshot textures (non-send)
//! - `sceneindex` – name and group lookup for the running level
//! - `screensize` – canvas dimensions
//! - `spatialgrid` – broad phase grid for the collision pass
//! - `systemsstore` – registry of state hook systems by name
//! - `texturestore` – loaded textures (non-send)
//! - `timeouts` – epoch-guarded delayed callbacks
//! - `windowsize` – OS window dimensions and letterboxing
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod leveltable;
pub mod rendertarget;
pub mod sceneindex;
pub mod screensize;
pub mod spatialgrid;
pub mod systemsstore;
pub mod texturestore;
pub mod timeouts;
pub mod windowsize;
pub mod worldtime;
