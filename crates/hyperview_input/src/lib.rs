//! Rotation Input Handling
//!
//! This crate owns the six rotation angles on behalf of the viewer and
//! maps keyboard input onto them. The math core never sees this state:
//! it receives a fresh [`hyperview_math::PlaneAngles`] on every frame.

mod angle_controller;

pub use angle_controller::{AngleController, PLANE_KEYS, wrap_degrees};
