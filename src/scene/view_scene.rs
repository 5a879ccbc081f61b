//! ViewScene - builds one frame of wireframe geometry
//!
//! The geometry (tesseract, axis frame) and projection distances are fixed
//! when the scene is created; angles come in fresh on every call to
//! [`ViewScene::build`].

use hyperview_math::{AxisFrame, PlaneAngles, ProjectionDistances, Tesseract};
use hyperview_render::WireframeGeometry;

use super::SceneKind;
use crate::config::{RenderingConfig, ViewConfig};

/// Fixed 4D geometry plus which of it is currently shown
pub struct ViewScene {
    kind: SceneKind,
    tesseract: Tesseract,
    axes: AxisFrame,
    distances: ProjectionDistances,
}

impl ViewScene {
    pub fn new(kind: SceneKind, tesseract: Tesseract, axes: AxisFrame, distances: ProjectionDistances) -> Self {
        Self {
            kind,
            tesseract,
            axes,
            distances,
        }
    }

    /// Create the scene described by the `[view]` config section
    pub fn from_config(view: &ViewConfig) -> Self {
        Self::new(
            view.scene,
            Tesseract::new(view.tesseract_size),
            AxisFrame::new(view.axis_length),
            view.distances(),
        )
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Switch to the other scene, returning the new one
    pub fn toggle(&mut self) -> SceneKind {
        self.kind = self.kind.next();
        log::info!("Showing {}", self.kind.caption());
        self.kind
    }

    pub fn tesseract(&self) -> &Tesseract {
        &self.tesseract
    }

    /// Append this frame's triangles to `geometry`
    ///
    /// `pixel_ratio` converts the logical pixel sizes in `style` to the
    /// physical pixels of the surface.
    pub fn build(
        &self,
        angles: &PlaneAngles,
        style: &RenderingConfig,
        pixel_ratio: f32,
        geometry: &mut WireframeGeometry,
    ) {
        match self.kind {
            SceneKind::Tesseract => self.build_tesseract(angles, style, pixel_ratio, geometry),
            SceneKind::Axes => self.build_axes(angles, style, pixel_ratio, geometry),
        }

        if geometry.skipped_count() > 0 {
            log::debug!(
                "Skipped {} primitives with non-finite projection",
                geometry.skipped_count()
            );
        }
    }

    fn build_tesseract(
        &self,
        angles: &PlaneAngles,
        style: &RenderingConfig,
        pixel_ratio: f32,
        geometry: &mut WireframeGeometry,
    ) {
        let projected = self.tesseract.projected_vertices(angles, &self.distances);
        let width = style.line_width * pixel_ratio;

        for &[i, j] in self.tesseract.edges() {
            geometry.add_segment(projected[i], projected[j], width, style.edge_color);
        }

        let radius = style.vertex_radius * pixel_ratio;
        for &p in &projected {
            geometry.add_marker(p, radius, style.vertex_color);
        }
    }

    fn build_axes(
        &self,
        angles: &PlaneAngles,
        style: &RenderingConfig,
        pixel_ratio: f32,
        geometry: &mut WireframeGeometry,
    ) {
        let projected = self.axes.project(angles, &self.distances);
        // Axes are drawn bolder than tesseract edges
        let width = style.line_width * 2.0 * pixel_ratio;
        let arrow = style.arrow_size * pixel_ratio;
        let label_offset = style.label_offset * pixel_ratio;
        let label_size = style.label_size * pixel_ratio;

        for (axis, origin, end) in projected.segments() {
            let color = style.axis_colors[axis.index()];
            geometry.add_segment(origin, end, width, color);
            geometry.add_arrow_head(origin, end, arrow, width, color);
            geometry.add_label(origin, end, axis.label(), label_offset, label_size, width, color);
        }

        geometry.add_marker(projected.origin, style.vertex_radius * pixel_ratio, style.origin_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_math::Axis;
    use hyperview_render::{glyph, Viewport};

    fn geometry() -> WireframeGeometry {
        WireframeGeometry::new(Viewport::new(800, 800, 250.0))
    }

    #[test]
    fn test_tesseract_frame_has_every_edge_and_vertex() {
        let scene = ViewScene::from_config(&ViewConfig::default());
        let mut g = geometry();
        scene.build(&PlaneAngles::ZERO, &RenderingConfig::default(), 1.0, &mut g);
        // 32 edges + 16 markers, 6 vertices each
        assert_eq!(g.vertex_count(), (32 + 16) * 6);
        assert_eq!(g.skipped_count(), 0);
    }

    #[test]
    fn test_vertices_on_camera_plane_are_dropped() {
        let mut view = ViewConfig::default();
        // Half size 2 puts the w = +2 corners on the 4D camera
        view.tesseract_size = 4.0;
        let scene = ViewScene::from_config(&view);
        let mut g = geometry();
        scene.build(&PlaneAngles::ZERO, &RenderingConfig::default(), 1.0, &mut g);

        // 12 edges and 8 markers survive on the w = -2 cube
        assert_eq!(g.vertex_count(), (12 + 8) * 6);
        // 20 edges and 8 markers touch a w = +2 corner
        assert_eq!(g.skipped_count(), 20 + 8);
    }

    #[test]
    fn test_axes_frame() {
        let mut view = ViewConfig::default();
        view.scene = SceneKind::Axes;
        let scene = ViewScene::from_config(&view);
        let mut g = geometry();
        let angles = PlaneAngles::new(0.3, 0.5, 0.7, 0.2, 0.4, 0.6);
        scene.build(&angles, &RenderingConfig::default(), 1.0, &mut g);
        // 4 shafts + 8 arrowhead strokes + 12 label strokes + origin marker
        assert_eq!(g.vertex_count(), (4 + 8 + 12 + 1) * 6);
    }

    #[test]
    fn test_every_axis_is_labelled_in_its_color() {
        let mut view = ViewConfig::default();
        view.scene = SceneKind::Axes;
        let scene = ViewScene::from_config(&view);
        let style = RenderingConfig::default();
        let mut g = geometry();
        scene.build(&PlaneAngles::new(0.3, 0.5, 0.7, 0.2, 0.4, 0.6), &style, 1.0, &mut g);

        for axis in Axis::ALL {
            let strokes = glyph::strokes(axis.label().chars().next().unwrap()).unwrap();
            let drawn = g
                .vertices
                .iter()
                .filter(|v| v.color == style.axis_colors[axis.index()])
                .count();
            // Shaft and two arrowhead strokes, then the label
            assert_eq!(drawn, (3 + strokes.len()) * 6, "axis {}", axis.label());
        }
    }

    #[test]
    fn test_axis_colors_follow_axis_order() {
        let mut view = ViewConfig::default();
        view.scene = SceneKind::Axes;
        let scene = ViewScene::from_config(&view);
        let style = RenderingConfig::default();
        let mut g = geometry();
        scene.build(&PlaneAngles::new(0.3, 0.5, 0.7, 0.2, 0.4, 0.6), &style, 1.0, &mut g);
        // First quad is the X shaft
        assert_eq!(g.vertices[0].color, style.axis_colors[0]);
    }

    #[test]
    fn test_toggle() {
        let mut scene = ViewScene::from_config(&ViewConfig::default());
        assert_eq!(scene.toggle(), SceneKind::Axes);
        assert_eq!(scene.kind(), SceneKind::Axes);
        assert_eq!(scene.toggle(), SceneKind::Tesseract);
    }
}
