//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
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
        // HV_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview - 4D Wireframe Visualizer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Starting position [x, y, z, w]
    pub start_position: [f32; 4],
    /// World point the camera initially faces [x, y, z, w]
    pub facing: [f32; 4],
    /// Distance from the eye to the viewport
    pub view_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 0.0, -1000.0, 0.0],
            facing: [0.0, 0.0, 1.0, 0.0],
            view_distance: 1000.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Movement speed (units per second)
    pub move_speed: f32,
    /// W-axis movement speed (units per second)
    pub w_move_speed: f32,
    /// Rotation speed (radians per second)
    pub rotate_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            w_move_speed: 200.0,
            rotate_speed: 1.0,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Edge length of the demo hypercube
    pub hypercube_size: f32,
    /// Translation of the demo hypercube [x, y, z, w]
    pub hypercube_offset: [f32; 4],
    /// Draw the 32 edges (true) or only the 16 corner points (false)
    pub outline: bool,
    /// Optional initial orientation: a rotation plane label ("zw", "x-y", ...)
    pub rotation_plane: Option<String>,
    /// Initial rotation angle in radians, applied in `rotation_plane`
    pub rotation_angle: f32,
    /// Wireframe color as RGBA
    pub color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            hypercube_size: 100.0,
            hypercube_offset: [-50.0, -50.0, 50.0, 0.0],
            outline: true,
            rotation_plane: None,
            rotation_angle: 0.0,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Error loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Extraction/parse error from figment
    Figment(figment::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Figment(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
