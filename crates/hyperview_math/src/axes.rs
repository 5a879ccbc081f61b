//! The four coordinate axes of 4D space as a drawable frame
//!
//! The frame is the origin plus one endpoint per axis at `length` along
//! that axis. It is rotated and projected exactly like the tesseract.

use serde::{Serialize, Deserialize};
use crate::{PlaneAngles, ProjectionDistances, Vec2, Vec4};

/// Default distance from the origin to each axis endpoint
pub const DEFAULT_AXIS_LENGTH: f32 = 1.5;

/// One of the four coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Unit vector along this axis
    pub fn unit(self) -> Vec4 {
        match self {
            Axis::X => Vec4::X,
            Axis::Y => Vec4::Y,
            Axis::Z => Vec4::Z,
            Axis::W => Vec4::W,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::W => "W",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }
}

/// Projected axis frame, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedAxes {
    /// Where the origin lands
    pub origin: Vec2,
    /// Where each axis endpoint lands, in [`Axis::ALL`] order
    pub ends: [Vec2; 4],
}

impl ProjectedAxes {
    /// `(axis, origin, end)` for each axis
    pub fn segments(&self) -> impl Iterator<Item = (Axis, Vec2, Vec2)> + '_ {
        Axis::ALL
            .into_iter()
            .map(move |axis| (axis, self.origin, self.ends[axis.index()]))
    }
}

/// The origin and four axis endpoints
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFrame {
    length: f32,
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self::new(DEFAULT_AXIS_LENGTH)
    }
}

impl AxisFrame {
    pub fn new(length: f32) -> Self {
        Self { length }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Unrotated endpoint of `axis`
    pub fn endpoint(&self, axis: Axis) -> Vec4 {
        axis.unit() * self.length
    }

    /// Rotate the frame in canonical plane order and project it to 2D
    pub fn project(&self, angles: &PlaneAngles, distances: &ProjectionDistances) -> ProjectedAxes {
        let place = |v: Vec4| distances.project(angles.rotate(v));
        ProjectedAxes {
            origin: place(Vec4::ZERO),
            ends: Axis::ALL.map(|axis| place(self.endpoint(axis))),
        }
    }
}
