//! Elementary 4D plane rotations
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Each plane rotation is the ordinary 2D rotation matrix applied to the two
//! coordinates that name the plane; the other two coordinates pass through.
//! Rotations in different planes generally do not commute, so a full
//! orientation is always composed in [`RotationPlane::CANONICAL_ORDER`].

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane
    XY,
    /// XZ plane
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Order in which [`PlaneAngles::rotate`] composes the six rotations
    pub const CANONICAL_ORDER: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Short uppercase name, e.g. `"XW"`
    pub fn label(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }

    /// Position of this plane in [`Self::CANONICAL_ORDER`]
    pub fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rotate `(a, b)` by `angle`: `a' = a cos - b sin`, `b' = a sin + b cos`
#[inline]
fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

/// Rotate in the XY plane
#[inline]
pub fn rotate_xy(v: Vec4, angle: f32) -> Vec4 {
    let (x, y) = rotate_pair(v.x, v.y, angle);
    Vec4::new(x, y, v.z, v.w)
}

/// Rotate in the XZ plane
#[inline]
pub fn rotate_xz(v: Vec4, angle: f32) -> Vec4 {
    let (x, z) = rotate_pair(v.x, v.z, angle);
    Vec4::new(x, v.y, z, v.w)
}

/// Rotate in the XW plane
#[inline]
pub fn rotate_xw(v: Vec4, angle: f32) -> Vec4 {
    let (x, w) = rotate_pair(v.x, v.w, angle);
    Vec4::new(x, v.y, v.z, w)
}

/// Rotate in the YZ plane
#[inline]
pub fn rotate_yz(v: Vec4, angle: f32) -> Vec4 {
    let (y, z) = rotate_pair(v.y, v.z, angle);
    Vec4::new(v.x, y, z, v.w)
}

/// Rotate in the YW plane
#[inline]
pub fn rotate_yw(v: Vec4, angle: f32) -> Vec4 {
    let (y, w) = rotate_pair(v.y, v.w, angle);
    Vec4::new(v.x, y, v.z, w)
}

/// Rotate in the ZW plane
#[inline]
pub fn rotate_zw(v: Vec4, angle: f32) -> Vec4 {
    let (z, w) = rotate_pair(v.z, v.w, angle);
    Vec4::new(v.x, v.y, z, w)
}

/// Rotate `v` by `angle` radians in `plane`
#[inline]
pub fn rotate_in_plane(v: Vec4, plane: RotationPlane, angle: f32) -> Vec4 {
    match plane {
        RotationPlane::XY => rotate_xy(v, angle),
        RotationPlane::XZ => rotate_xz(v, angle),
        RotationPlane::XW => rotate_xw(v, angle),
        RotationPlane::YZ => rotate_yz(v, angle),
        RotationPlane::YW => rotate_yw(v, angle),
        RotationPlane::ZW => rotate_zw(v, angle),
    }
}

/// One angle (radians) per rotation plane
///
/// This is a plain value: callers own it and pass it into every query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngles {
    pub xy: f32,
    pub xz: f32,
    pub xw: f32,
    pub yz: f32,
    pub yw: f32,
    pub zw: f32,
}

impl PlaneAngles {
    /// All six angles zero
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    pub const fn new(xy: f32, xz: f32, xw: f32, yz: f32, yw: f32, zw: f32) -> Self {
        Self { xy, xz, xw, yz, yw, zw }
    }

    /// Build from angles listed in canonical order
    pub const fn from_array(a: [f32; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Angles listed in canonical order
    pub const fn to_array(self) -> [f32; 6] {
        [self.xy, self.xz, self.xw, self.yz, self.yw, self.zw]
    }

    /// Angle for one plane
    pub fn get(&self, plane: RotationPlane) -> f32 {
        self.to_array()[plane.index()]
    }

    /// Copy with one plane's angle replaced
    pub fn with(self, plane: RotationPlane, angle: f32) -> Self {
        let mut a = self.to_array();
        a[plane.index()] = angle;
        Self::from_array(a)
    }

    /// Apply all six plane rotations to `v` in canonical order
    /// (XY, XZ, XW, YZ, YW, ZW)
    pub fn rotate(&self, v: Vec4) -> Vec4 {
        RotationPlane::CANONICAL_ORDER
            .iter()
            .fold(v, |acc, &plane| rotate_in_plane(acc, plane, self.get(plane)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vec4::new(1.0, -2.0, 3.5, -4.25);
        for plane in RotationPlane::CANONICAL_ORDER {
            assert_eq!(rotate_in_plane(v, plane, 0.0), v, "plane {}", plane);
        }
    }

    #[test]
    fn test_rotate_xy_quarter_turn() {
        let r = rotate_xy(Vec4::X, FRAC_PI_2);
        assert!(approx_eq(r, Vec4::Y), "got {:?}", r);
    }

    #[test]
    fn test_each_plane_moves_first_axis_onto_second() {
        let cases = [
            (RotationPlane::XY, Vec4::X, Vec4::Y),
            (RotationPlane::XZ, Vec4::X, Vec4::Z),
            (RotationPlane::XW, Vec4::X, Vec4::W),
            (RotationPlane::YZ, Vec4::Y, Vec4::Z),
            (RotationPlane::YW, Vec4::Y, Vec4::W),
            (RotationPlane::ZW, Vec4::Z, Vec4::W),
        ];
        for (plane, from, to) in cases {
            let r = rotate_in_plane(from, plane, FRAC_PI_2);
            assert!(approx_eq(r, to), "{}: {:?}", plane, r);
        }
    }

    #[test]
    fn test_untouched_axes_pass_through() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let r = rotate_yw(v, 0.7);
        assert_eq!(r.x, 1.0);
        assert_eq!(r.z, 3.0);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec4::new(0.3, -1.2, 2.0, 0.9);
        for plane in RotationPlane::CANONICAL_ORDER {
            for angle in [-7.0, -PI, -0.4, 0.25, 1.0, PI, 12.5] {
                let r = rotate_in_plane(v, plane, angle);
                let diff = (r.length_squared() - v.length_squared()).abs();
                assert!(diff < 1e-4, "{} at {}: {}", plane, angle, diff);
            }
        }
    }

    #[test]
    fn test_negative_angle_inverts() {
        let v = Vec4::new(0.5, 1.5, -0.25, 2.0);
        for plane in RotationPlane::CANONICAL_ORDER {
            let back = rotate_in_plane(rotate_in_plane(v, plane, 1.3), plane, -1.3);
            assert!(approx_eq(back, v), "{}: {:?}", plane, back);
        }
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let r = rotate_zw(v, 2.0 * PI);
        assert!(approx_eq(r, v));
    }

    #[test]
    fn test_plane_angles_rotate_uses_canonical_order() {
        let angles = PlaneAngles::new(0.3, -0.8, 1.1, 0.5, -1.7, 2.2);
        let v = Vec4::new(0.5, -0.5, 0.5, -0.5);

        let mut expected = rotate_xy(v, 0.3);
        expected = rotate_xz(expected, -0.8);
        expected = rotate_xw(expected, 1.1);
        expected = rotate_yz(expected, 0.5);
        expected = rotate_yw(expected, -1.7);
        expected = rotate_zw(expected, 2.2);

        assert_eq!(angles.rotate(v), expected);
    }

    #[test]
    fn test_plane_order_matters() {
        // XY then XW differs from XW then XY
        let v = Vec4::X;
        let a = rotate_xw(rotate_xy(v, FRAC_PI_2), FRAC_PI_2);
        let b = rotate_xy(rotate_xw(v, FRAC_PI_2), FRAC_PI_2);
        assert!(!approx_eq(a, b));
    }

    #[test]
    fn test_plane_angles_get_with() {
        let angles = PlaneAngles::ZERO.with(RotationPlane::YW, 0.75);
        assert_eq!(angles.yw, 0.75);
        assert_eq!(angles.get(RotationPlane::YW), 0.75);
        assert_eq!(angles.get(RotationPlane::XY), 0.0);
        assert_eq!(PlaneAngles::from_array(angles.to_array()), angles);
    }

    #[test]
    fn test_zero_angles_rotate_is_identity() {
        let v = Vec4::new(-0.5, 0.5, -0.5, 0.5);
        assert_eq!(PlaneAngles::ZERO.rotate(v), v);
    }

    #[test]
    fn test_canonical_order_indices() {
        for (i, plane) in RotationPlane::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(plane.index(), i);
        }
        assert_eq!(RotationPlane::ZW.to_string(), "ZW");
    }
}
