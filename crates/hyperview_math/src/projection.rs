//! Two-stage perspective projection, 4D -> 3D -> 2D
//!
//! Each stage is a similar-triangles divide: a camera sits at
//! `distance` along the dropped axis and every point is scaled by
//! `distance / (distance - coord)`.
//!
//! A point lying exactly on the camera hyperplane (`coord == distance`)
//! divides by zero. That is not guarded here: the result carries
//! infinite or NaN components and callers that draw must skip points
//! for which [`Vec2::is_finite`] is false.

use serde::{Serialize, Deserialize};
use crate::{Vec2, Vec3, Vec4};

/// Default camera distance along W for the 4D -> 3D stage
pub const DEFAULT_DIST_4D: f32 = 2.0;
/// Default camera distance along Z for the 3D -> 2D stage
pub const DEFAULT_DIST_3D: f32 = 3.0;

/// Perspective-project a 4D point into 3D by dividing along W
#[inline]
pub fn project_4d_to_3d(v: Vec4, distance: f32) -> Vec3 {
    let factor = distance / (distance - v.w);
    Vec3::new(v.x * factor, v.y * factor, v.z * factor)
}

/// Perspective-project a 3D point onto the image plane by dividing along Z
#[inline]
pub fn project_3d_to_2d(v: Vec3, distance: f32) -> Vec2 {
    let factor = distance / (distance - v.z);
    Vec2::new(v.x * factor, v.y * factor)
}

/// Both stages chained
#[inline]
pub fn project_4d_to_2d(v: Vec4, dist_4d: f32, dist_3d: f32) -> Vec2 {
    project_3d_to_2d(project_4d_to_3d(v, dist_4d), dist_3d)
}

/// Camera distances for the two projection stages
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDistances {
    /// Distance of the 4D camera along W
    pub dist_4d: f32,
    /// Distance of the 3D camera along Z
    pub dist_3d: f32,
}

impl Default for ProjectionDistances {
    fn default() -> Self {
        Self {
            dist_4d: DEFAULT_DIST_4D,
            dist_3d: DEFAULT_DIST_3D,
        }
    }
}

impl ProjectionDistances {
    pub const fn new(dist_4d: f32, dist_3d: f32) -> Self {
        Self { dist_4d, dist_3d }
    }

    /// Project a 4D point straight to 2D
    #[inline]
    pub fn project(&self, v: Vec4) -> Vec2 {
        project_4d_to_2d(v, self.dist_4d, self.dist_3d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_origin_stays_at_origin() {
        let p = project_4d_to_2d(Vec4::ZERO, 2.0, 3.0);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn test_w_zero_is_unscaled() {
        let p = project_4d_to_3d(Vec4::new(1.0, 2.0, 3.0, 0.0), 2.0);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_4d_to_3d_factor() {
        // factor = 2 / (2 - (-0.5)) = 0.8
        let p = project_4d_to_3d(Vec4::new(-0.5, -0.5, -0.5, -0.5), 2.0);
        assert!((p.x + 0.4).abs() < EPSILON);
        assert!((p.y + 0.4).abs() < EPSILON);
        assert!((p.z + 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_3d_to_2d_factor() {
        // factor = 3 / (3 - 1) = 1.5
        let p = project_3d_to_2d(Vec3::new(1.0, -2.0, 1.0), 3.0);
        assert!((p.x - 1.5).abs() < EPSILON);
        assert!((p.y + 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_closer_points_appear_larger() {
        let near = project_4d_to_3d(Vec4::new(1.0, 0.0, 0.0, 1.0), 2.0);
        let far = project_4d_to_3d(Vec4::new(1.0, 0.0, 0.0, -1.0), 2.0);
        assert!(near.x > far.x);
    }

    #[test]
    fn test_composition_matches_stages() {
        let v = Vec4::new(0.3, -0.7, 0.2, 0.4);
        let staged = project_3d_to_2d(project_4d_to_3d(v, 2.5), 4.0);
        assert_eq!(project_4d_to_2d(v, 2.5, 4.0), staged);
    }

    #[test]
    fn test_default_distances() {
        let d = ProjectionDistances::default();
        assert_eq!(d.dist_4d, 2.0);
        assert_eq!(d.dist_3d, 3.0);
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(d.project(v), project_4d_to_2d(v, 2.0, 3.0));
    }

    #[test]
    fn test_w_on_camera_plane_is_not_finite() {
        let p = project_4d_to_3d(Vec4::new(1.0, 1.0, 1.0, 2.0), 2.0);
        assert!(!p.is_finite());
        assert!(p.x.is_infinite());
    }

    #[test]
    fn test_z_on_camera_plane_is_not_finite() {
        let p = project_3d_to_2d(Vec3::new(0.5, -0.5, 3.0), 3.0);
        assert!(!p.is_finite());
    }

    #[test]
    fn test_zero_coordinate_on_camera_plane_is_nan() {
        // 0 * inf
        let p = project_4d_to_3d(Vec4::new(0.0, 1.0, 0.0, 2.0), 2.0);
        assert!(p.x.is_nan());
        assert!(p.y.is_infinite());
    }
}
