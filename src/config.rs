//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperview_math::{ProjectionDistances, DEFAULT_AXIS_LENGTH, DEFAULT_DIST_3D, DEFAULT_DIST_4D};
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::scene::SceneKind;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// What is drawn and how it is projected
    #[serde(default)]
    pub view: ViewConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_VIEW__SCALE=300 -> view.scale = 300
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview".to_string(),
            width: 800,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// View configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Scene shown at startup
    pub scene: SceneKind,
    /// Side length of the tesseract
    pub tesseract_size: f32,
    /// Length of each coordinate axis
    pub axis_length: f32,
    /// Camera distance along W for the 4D -> 3D projection
    pub dist_4d: f32,
    /// Camera distance along Z for the 3D -> 2D projection
    pub dist_3d: f32,
    /// Logical pixels per model unit
    pub scale: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::Tesseract,
            tesseract_size: 1.0,
            axis_length: DEFAULT_AXIS_LENGTH,
            dist_4d: DEFAULT_DIST_4D,
            dist_3d: DEFAULT_DIST_3D,
            scale: 250.0,
        }
    }
}

impl ViewConfig {
    pub fn distances(&self) -> ProjectionDistances {
        ProjectionDistances::new(self.dist_4d, self.dist_3d)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Degrees per second while a rotation key is held
    pub rotation_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 90.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Tesseract edge color
    pub edge_color: [f32; 4],
    /// Tesseract vertex color
    pub vertex_color: [f32; 4],
    /// Axis colors in X, Y, Z, W order
    pub axis_colors: [[f32; 4]; 4],
    /// Origin marker color for the axes scene
    pub origin_color: [f32; 4],
    /// Half-width of vertex markers in logical pixels
    pub vertex_radius: f32,
    /// Line width in logical pixels
    pub line_width: f32,
    /// Arrowhead stroke length in logical pixels
    pub arrow_size: f32,
    /// Axis label height in logical pixels
    pub label_size: f32,
    /// Gap between an axis tip and its label centre, in logical pixels
    pub label_offset: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.004, 0.004, 0.010, 1.0],
            edge_color: [0.073, 0.584, 0.871, 1.0],
            vertex_color: [0.930, 0.019, 0.231, 1.0],
            axis_colors: [
                [1.000, 0.147, 0.147, 1.0],
                [0.074, 0.610, 0.565, 1.0],
                [1.000, 0.791, 0.152, 1.0],
                [0.552, 0.074, 1.000, 1.0],
            ],
            origin_color: [1.0, 1.0, 1.0, 1.0],
            vertex_radius: 6.0,
            line_width: 2.0,
            arrow_size: 20.0,
            label_size: 28.0,
            label_offset: 30.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
