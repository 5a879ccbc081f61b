//! 2D Wireframe Rendering Library
//!
//! This crate turns projected 2D points into GPU draw calls.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`viewport::Viewport`] - model units to pixels to clip space
//! - [`wireframe::WireframeGeometry`] - thick lines, markers and labels as triangles
//! - [`glyph`] - stroke letters for the axis labels
//! - [`pipeline::WireframePipeline`] - the single render pipeline
//!
//! Points that came out of the projection non-finite are dropped while
//! building geometry; nothing past [`wireframe`] ever sees them.

pub mod context;
pub mod glyph;
pub mod viewport;
pub mod wireframe;
pub mod pipeline;

pub use context::{RenderContext, RenderError};
pub use viewport::Viewport;
pub use wireframe::{LineVertex, WireframeGeometry};
pub use pipeline::WireframePipeline;

// Re-export core types for convenience
pub use hyperview_math::{Vec2, Vec4, PlaneAngles, ProjectionDistances};
