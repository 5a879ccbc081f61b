//! 4D Mathematics Library
//!
//! Pure geometry for viewing 4D objects on a 2D screen. Nothing here holds
//! state between calls: angles and distances are passed in by value and
//! every query returns fresh points.
//!
//! ## Core Types
//!
//! - [`Vec4`], [`Vec3`], [`Vec2`] - points at each stage of the pipeline
//! - [`RotationPlane`] and [`PlaneAngles`] - the six plane rotations and
//!   their canonical composition
//! - [`ProjectionDistances`] - the 4D -> 3D -> 2D perspective projection
//!
//! ## Shapes
//!
//! - [`Tesseract`] - 16 vertices, 32 edges
//! - [`AxisFrame`] - the four coordinate axes

mod vec4;
mod vec3;
pub mod rotation;
pub mod projection;
pub mod tesseract;
pub mod axes;

pub use vec4::Vec4;
pub use vec3::{Vec2, Vec3};
pub use rotation::{
    PlaneAngles, RotationPlane,
    rotate_in_plane, rotate_xy, rotate_xz, rotate_xw, rotate_yz, rotate_yw, rotate_zw,
};
pub use projection::{
    ProjectionDistances, DEFAULT_DIST_3D, DEFAULT_DIST_4D,
    project_3d_to_2d, project_4d_to_2d, project_4d_to_3d,
};
pub use tesseract::Tesseract;
pub use axes::{Axis, AxisFrame, ProjectedAxes, DEFAULT_AXIS_LENGTH};
