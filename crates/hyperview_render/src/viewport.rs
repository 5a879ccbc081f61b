//! Mapping from projected model coordinates to the screen
//!
//! Projected points are in model units with +y up and the origin at the
//! centre. Pixels have +y down and the origin top-left; clip space has +y
//! up and spans `[-1, 1]` on both axes.

use hyperview_math::Vec2;

/// Screen size plus the model-to-pixel scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Surface width in physical pixels
    pub width: f32,
    /// Surface height in physical pixels
    pub height: f32,
    /// Pixels per model unit
    pub scale: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
            scale,
        }
    }

    /// Centre of the surface in pixels
    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [self.width * 0.5, self.height * 0.5]
    }

    /// Model point to pixels: flip y, scale, translate to the centre
    #[inline]
    pub fn to_pixels(&self, p: Vec2) -> [f32; 2] {
        let [cx, cy] = self.center();
        [cx + p.x * self.scale, cy - p.y * self.scale]
    }

    /// Pixel position to clip space
    #[inline]
    pub fn pixels_to_clip(&self, px: [f32; 2]) -> [f32; 2] {
        [
            px[0] / self.width * 2.0 - 1.0,
            1.0 - px[1] / self.height * 2.0,
        ]
    }

    /// Model point straight to clip space
    #[inline]
    pub fn to_clip(&self, p: Vec2) -> [f32; 2] {
        self.pixels_to_clip(self.to_pixels(p))
    }
}
