//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The wireframe pipeline
//! - Per-frame geometry rebuild and draw

use std::sync::Arc;
use winit::window::Window;
use hyperview_math::PlaneAngles;
use hyperview_render::{RenderContext, RenderError, Viewport, WireframeGeometry, WireframePipeline};

use crate::config::RenderingConfig;
use crate::scene::ViewScene;

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WireframePipeline,
    geometry: WireframeGeometry,
    render_config: RenderingConfig,
    /// Logical pixels per model unit
    scale: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        scale: f32,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = WireframePipeline::new(&context.device, context.config.format);
        let geometry = WireframeGeometry::new(Viewport::new(
            context.size.width,
            context.size.height,
            scale,
        ));

        Ok(Self {
            context,
            pipeline,
            geometry,
            render_config,
            scale,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after a lost surface)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Viewport for the current surface size
    fn viewport(&self, pixel_ratio: f32) -> Viewport {
        Viewport::new(
            self.context.size.width,
            self.context.size.height,
            self.scale * pixel_ratio,
        )
    }

    /// Render a single frame
    ///
    /// Rebuilds the wireframe from `angles`, uploads it and presents.
    pub fn render_frame(
        &mut self,
        scene: &ViewScene,
        angles: &PlaneAngles,
        pixel_ratio: f32,
    ) -> Result<(), RenderError> {
        let viewport = self.viewport(pixel_ratio);
        self.geometry.clear(viewport);
        scene.build(angles, &self.render_config, pixel_ratio, &mut self.geometry);
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &self.geometry.vertices,
        );

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(
            &mut encoder,
            &view,
            clear_color(self.render_config.background_color),
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn clear_color(bg: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}
