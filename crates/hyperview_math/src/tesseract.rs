//! Tesseract (4D Hypercube) wireframe geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w) and
//! 32 edges. Vertex `i` takes `+h` on axis `b` when bit `b` of `i` is set
//! (bit0 = X, bit1 = Y, bit2 = Z, bit3 = W), so two vertices share an edge
//! exactly when their indices differ in a single bit.

use crate::{PlaneAngles, ProjectionDistances, Vec2, Vec4};

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;
/// Number of edges of a tesseract
pub const EDGE_COUNT: usize = 32;

/// A tesseract centered at the origin
///
/// Topology and vertex positions are fixed at construction. Rotation and
/// projection are queries that return new points.
#[derive(Clone, Debug, PartialEq)]
pub struct Tesseract {
    /// Half the side length
    half_size: f32,
    /// The 16 vertices, indexed by sign bits
    vertices: [Vec4; VERTEX_COUNT],
    /// Vertex index pairs `(i, j)` with `i < j`
    edges: [[usize; 2]; EDGE_COUNT],
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Tesseract {
    /// Create a new tesseract centered at origin with given size
    ///
    /// # Arguments
    /// * `size` - The full side length. Zero or negative values are accepted
    ///   and give a collapsed or mirrored cube.
    pub fn new(size: f32) -> Self {
        let h = size * 0.5;
        Self {
            half_size: h,
            vertices: Self::compute_vertices(h),
            edges: Self::compute_edges(),
        }
    }

    /// Get the half-size (half the side length)
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.half_size
    }

    /// Get the full size (side length)
    #[inline]
    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    /// The unrotated vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// The edge list, each pair once with the smaller index first
    #[inline]
    pub fn edges(&self) -> &[[usize; 2]; EDGE_COUNT] {
        &self.edges
    }

    /// Number of edges touching vertex `index` (always 4 for a valid index)
    pub fn vertex_degree(&self, index: usize) -> usize {
        self.edges
            .iter()
            .filter(|[i, j]| *i == index || *j == index)
            .count()
    }

    /// Every vertex rotated by `angles` in canonical plane order
    pub fn rotated_vertices(&self, angles: &PlaneAngles) -> [Vec4; VERTEX_COUNT] {
        self.vertices.map(|v| angles.rotate(v))
    }

    /// Every vertex rotated then projected to 2D
    ///
    /// Element `k` of the result is vertex `k`, so [`Self::edges`] indexes
    /// into it directly. Points that hit the degenerate divide come back
    /// non-finite.
    pub fn projected_vertices(
        &self,
        angles: &PlaneAngles,
        distances: &ProjectionDistances,
    ) -> [Vec2; VERTEX_COUNT] {
        self.rotated_vertices(angles).map(|v| distances.project(v))
    }

    fn compute_vertices(h: f32) -> [Vec4; VERTEX_COUNT] {
        let sign = |i: usize, bit: usize| if i & (1 << bit) != 0 { h } else { -h };
        std::array::from_fn(|i| Vec4::new(sign(i, 0), sign(i, 1), sign(i, 2), sign(i, 3)))
    }

    /// Pairs whose indices differ in exactly one bit
    fn compute_edges() -> [[usize; 2]; EDGE_COUNT] {
        let mut edges = [[0usize; 2]; EDGE_COUNT];
        let mut n = 0;
        for i in 0..VERTEX_COUNT {
            for j in (i + 1)..VERTEX_COUNT {
                if (i ^ j).is_power_of_two() {
                    edges[n] = [i, j];
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, EDGE_COUNT);
        edges
    }
}
