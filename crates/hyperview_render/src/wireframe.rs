//! CPU-side wireframe geometry
//!
//! Lines and point markers are expanded into triangles in pixel space and
//! stored in clip space, so one triangle-list pipeline draws everything at
//! a fixed pixel width on every backend.

use bytemuck::{Pod, Zeroable};
use hyperview_math::Vec2;

use crate::glyph::{self, GLYPH_ASPECT};
use crate::viewport::Viewport;

/// Vertex fed to `wireframe.wgsl`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in clip space
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Triangles for one frame
pub struct WireframeGeometry {
    viewport: Viewport,
    /// Triangle list, three vertices per triangle
    pub vertices: Vec<LineVertex>,
    /// Primitives dropped because a point had no finite position
    skipped: usize,
}

impl WireframeGeometry {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            vertices: Vec::new(),
            skipped: 0,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of primitives dropped for non-finite input
    #[inline]
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Pixel position of a projected point, if it has a finite one
    ///
    /// Finite model coordinates can still overflow once scaled to pixels.
    fn pixels_of(&self, p: Vec2) -> Option<[f32; 2]> {
        let px = self.viewport.to_pixels(p);
        (p.is_finite() && px[0].is_finite() && px[1].is_finite()).then_some(px)
    }

    /// Line between two projected points
    ///
    /// Returns false (and draws nothing) if either point has no finite
    /// pixel position.
    pub fn add_segment(&mut self, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> bool {
        let (Some(pa), Some(pb)) = (self.pixels_of(a), self.pixels_of(b)) else {
            self.skipped += 1;
            return false;
        };
        self.add_pixel_segment(pa, pb, width, color)
    }

    /// Square marker centred on a projected point
    pub fn add_marker(&mut self, p: Vec2, radius: f32, color: [f32; 4]) -> bool {
        let Some([x, y]) = self.pixels_of(p) else {
            self.skipped += 1;
            return false;
        };
        self.push_quad(
            [
                [x - radius, y - radius],
                [x + radius, y - radius],
                [x + radius, y + radius],
                [x - radius, y + radius],
            ],
            color,
        )
    }

    /// Two-stroke arrowhead at `tip`, pointing away from `from`
    ///
    /// The strokes are `size` pixels long and sit 30° either side of the
    /// shaft, measured in pixel space.
    pub fn add_arrow_head(
        &mut self,
        from: Vec2,
        tip: Vec2,
        size: f32,
        width: f32,
        color: [f32; 4],
    ) -> bool {
        let (Some(o), Some(e)) = (self.pixels_of(from), self.pixels_of(tip)) else {
            self.skipped += 1;
            return false;
        };
        let angle = (e[1] - o[1]).atan2(e[0] - o[0]);
        let mut drawn = true;
        for spread in [-std::f32::consts::FRAC_PI_6, std::f32::consts::FRAC_PI_6] {
            let (sin, cos) = (angle + spread).sin_cos();
            let wing = [e[0] - size * cos, e[1] - size * sin];
            drawn &= self.add_pixel_segment(e, wing, width, color);
        }
        drawn
    }

    /// Text label `offset` pixels beyond `tip`, along the `from -> tip` direction
    ///
    /// `size` is the glyph height in pixels. Letters without a glyph leave
    /// a gap.
    #[allow(clippy::too_many_arguments)]
    pub fn add_label(
        &mut self,
        from: Vec2,
        tip: Vec2,
        text: &str,
        offset: f32,
        size: f32,
        width: f32,
        color: [f32; 4],
    ) -> bool {
        let (Some(o), Some(e)) = (self.pixels_of(from), self.pixels_of(tip)) else {
            self.skipped += 1;
            return false;
        };
        let (sin, cos) = (e[1] - o[1]).atan2(e[0] - o[0]).sin_cos();
        let centre = [e[0] + offset * cos, e[1] + offset * sin];
        self.add_pixel_text(centre, text, size, width, color)
    }

    /// Stroke text centred on a pixel position
    pub fn add_pixel_text(
        &mut self,
        centre: [f32; 2],
        text: &str,
        size: f32,
        width: f32,
        color: [f32; 4],
    ) -> bool {
        let glyph_width = size * GLYPH_ASPECT;
        let advance = glyph_width * 1.25;
        let count = text.chars().count() as f32;
        let mut x = centre[0] - advance * (count - 1.0) * 0.5;
        let mut drawn = true;

        for c in text.chars() {
            for &[s, t] in glyph::strokes(c).unwrap_or(&[]) {
                let a = [x + s[0] * glyph_width, centre[1] + s[1] * size];
                let b = [x + t[0] * glyph_width, centre[1] + t[1] * size];
                drawn &= self.add_pixel_segment(a, b, width, color);
            }
            x += advance;
        }
        drawn
    }

    /// Line between two pixel positions, thickened to `width` pixels
    ///
    /// Zero-length segments draw nothing but are not counted as skipped.
    pub fn add_pixel_segment(&mut self, a: [f32; 2], b: [f32; 2], width: f32, color: [f32; 4]) -> bool {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return true;
        }
        // Half-width normal
        let nx = -dy / len * width * 0.5;
        let ny = dx / len * width * 0.5;
        self.push_quad(
            [
                [a[0] + nx, a[1] + ny],
                [b[0] + nx, b[1] + ny],
                [b[0] - nx, b[1] - ny],
                [a[0] - nx, a[1] - ny],
            ],
            color,
        )
    }

    /// Drop all geometry, optionally for a resized surface
    pub fn clear(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.vertices.clear();
        self.skipped = 0;
    }

    /// Two triangles, unless a corner has no finite clip position
    fn push_quad(&mut self, corners: [[f32; 2]; 4], color: [f32; 4]) -> bool {
        let clip = corners.map(|c| self.viewport.pixels_to_clip(c));
        if !clip.iter().flatten().all(|v| v.is_finite()) {
            self.skipped += 1;
            return false;
        }
        let [c0, c1, c2, c3] = clip.map(|c| LineVertex::new(c, color));
        self.vertices.extend_from_slice(&[c0, c1, c2, c0, c2, c3]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn geometry() -> WireframeGeometry {
        WireframeGeometry::new(Viewport::new(800, 800, 250.0))
    }

    #[test]
    fn test_segment_is_two_triangles() {
        let mut g = geometry();
        assert!(g.add_segment(Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0), 2.0, WHITE));
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.skipped_count(), 0);
    }

    #[test]
    fn test_segment_width_in_pixels() {
        let mut g = geometry();
        g.add_pixel_segment([100.0, 400.0], [300.0, 400.0], 4.0, WHITE);
        // 4 px wide on an 800 px surface is 0.01 in clip units
        let ys: Vec<f32> = g.vertices.iter().map(|v| v.position[1]).collect();
        let max = ys.iter().cloned().fold(f32::MIN, f32::max);
        let min = ys.iter().cloned().fold(f32::MAX, f32::min);
        assert!((max - min - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_segment_is_skipped() {
        let mut g = geometry();
        assert!(!g.add_segment(Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO, 2.0, WHITE));
        assert!(!g.add_segment(Vec2::ZERO, Vec2::new(0.0, f32::NAN), 2.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 2);
    }

    #[test]
    fn test_zero_length_segment_draws_nothing() {
        let mut g = geometry();
        assert!(g.add_segment(Vec2::ZERO, Vec2::ZERO, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 0);
    }

    #[test]
    fn test_marker() {
        let mut g = geometry();
        assert!(g.add_marker(Vec2::ZERO, 6.0, WHITE));
        assert_eq!(g.vertex_count(), 6);
        assert!(!g.add_marker(Vec2::new(f32::NAN, 0.0), 6.0, WHITE));
        assert_eq!(g.skipped_count(), 1);
    }

    #[test]
    fn test_arrow_head_wings_trail_the_tip() {
        let mut g = geometry();
        // Axis pointing right: wings must end left of the tip
        assert!(g.add_arrow_head(Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 12);
        let tip_clip = g.viewport().to_clip(Vec2::new(1.0, 0.0));
        assert!(g.vertices.iter().all(|v| v.position[0] <= tip_clip[0] + 0.01));
    }

    #[test]
    fn test_point_overflowing_pixels_is_skipped() {
        let mut g = geometry();
        // Finite in model units, infinite once scaled by 250
        assert!(!g.add_segment(Vec2::new(1e37, 0.0), Vec2::ZERO, 2.0, WHITE));
        assert!(!g.add_marker(Vec2::new(0.0, -1e37), 6.0, WHITE));
        assert!(!g.add_arrow_head(Vec2::ZERO, Vec2::new(2e36, 0.0), 20.0, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 3);
    }

    #[test]
    fn test_point_overflowing_clip_space_is_skipped() {
        let mut g = WireframeGeometry::new(Viewport::new(1, 1, 1.0));
        // Finite pixel, infinite after the clip-space doubling
        assert!(!g.add_pixel_segment([0.0, 0.0], [3e38, 0.0], 1.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 1);
    }

    #[test]
    fn test_emitted_vertices_are_always_finite() {
        let mut g = geometry();
        for x in [0.5, 1e30, 1e37, f32::MAX, f32::INFINITY, f32::NAN] {
            g.add_segment(Vec2::ZERO, Vec2::new(x, x), 2.0, WHITE);
            g.add_marker(Vec2::new(x, 0.0), 6.0, WHITE);
            g.add_label(Vec2::ZERO, Vec2::new(0.0, x), "W", 30.0, 28.0, 2.0, WHITE);
        }
        assert!(g.vertex_count() > 0);
        assert!(g.vertices.iter().all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_label_sits_beyond_the_tip() {
        let mut g = geometry();
        // X has two strokes
        assert!(g.add_label(Vec2::ZERO, Vec2::new(1.0, 0.0), "X", 30.0, 28.0, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 12);
        let tip_clip = g.viewport().to_clip(Vec2::new(1.0, 0.0));
        assert!(g.vertices.iter().all(|v| v.position[0] > tip_clip[0]));
    }

    #[test]
    fn test_label_at_non_finite_tip_is_skipped() {
        let mut g = geometry();
        assert!(!g.add_label(Vec2::ZERO, Vec2::new(f32::NAN, 0.0), "Y", 30.0, 28.0, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 1);
    }

    #[test]
    fn test_text_without_glyphs_draws_nothing() {
        let mut g = geometry();
        assert!(g.add_pixel_text([400.0, 400.0], "?", 28.0, 2.0, WHITE));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut g = geometry();
        g.add_segment(Vec2::ZERO, Vec2::new(1.0, 1.0), 2.0, WHITE);
        g.add_marker(Vec2::new(f32::NAN, 0.0), 2.0, WHITE);
        g.clear(Viewport::new(400, 400, 100.0));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.skipped_count(), 0);
        assert_eq!(g.viewport().width, 400.0);
    }

    #[test]
    fn test_line_vertex_size() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }
}
