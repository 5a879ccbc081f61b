//! Application systems
//!
//! Window, GPU and frame timing kept out of main.rs so each can be tested on its own.

mod frame_clock;
mod render;
mod window;

pub use frame_clock::FrameClock;
pub use render::RenderSystem;
pub use window::{WindowSystem, WindowError};
