//! Hyperview application library
//!
//! Configuration, scene building, input mapping and the window/GPU systems
//! used by the `hyperview` binary. The geometry itself lives in
//! `hyperview_math`.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
