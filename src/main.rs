//! Hyperview - interactive 4D wireframe viewer
//!
//! Shows a tesseract or the four coordinate axes, rotated in the six planes
//! of 4D space and perspective-projected down to the screen.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::input::{InputAction, InputMapper};
use hyperview::scene::ViewScene;
use hyperview::systems::{FrameClock, RenderSystem, WindowSystem};
use hyperview_input::AngleController;
use hyperview_render::RenderError;

/// Longest step a held key may advance the angles in one frame
const MAX_FRAME_DT: f32 = 1.0 / 30.0;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scene: ViewScene,
    /// Owns the six rotation angles
    controller: AngleController,
    clock: FrameClock,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = ViewScene::from_config(&config.view);
        let controller = AngleController::new()
            .with_rotation_speed(config.input.rotation_speed);

        log::info!(
            "Tesseract size {}: {} vertices, {} edges",
            scene.tesseract().size(),
            scene.tesseract().vertices().len(),
            scene.tesseract().edges().len()
        );

        Self {
            config,
            window: None,
            render: None,
            scene,
            controller,
            clock: FrameClock::new(std::time::Instant::now(), MAX_FRAME_DT),
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetAngles => self.controller.reset(),
            InputAction::NextScene => {
                self.scene.toggle();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.view.scale,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialise rendering: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render.size();
        log::info!("Surface ready at {}x{}", width, height);

        window.update_title(self.scene.kind().caption(), &self.controller.readout());
        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if !event.repeat {
                        if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                            self.handle_action(action, event_loop);
                        }
                    }
                    let was_rotating = self.controller.is_rotating();
                    self.controller.process_keyboard(key, event.state);
                    self.clock
                        .key_event(std::time::Instant::now(), was_rotating, event.repeat);
                }
                // Any input may change what is on screen
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick(std::time::Instant::now());
                self.controller.update(dt);
                let angles = self.controller.angles();

                let Some(window) = &self.window else { return };
                window.update_title(self.scene.kind().caption(), &self.controller.readout());
                let pixel_ratio = window.scale_factor();

                if let Some(render) = &mut self.render {
                    match render.render_frame(&self.scene, &angles, pixel_ratio) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            render.reconfigure();
                            window.request_redraw();
                            return;
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("{}", e);
                        }
                    }
                }

                // Keep drawing only while a rotation key is held
                if self.controller.is_rotating() {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first so its log level can seed the logger
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hyperview");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
