//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`BRK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use breakout_math::{MathError, Viewport};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Scene transform and entities
    #[serde(default)]
    pub scene: SceneConfig,
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
    /// 3. Environment variables (`BRK_*`)
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

        // BRK_WINDOW__WIDTH=1024 -> window.width = 1024
        figment = figment.merge(Env::prefixed("BRK_").split("__"));

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
}

impl WindowConfig {
    /// Viewport covering the whole window
    pub fn viewport(&self) -> Result<Viewport, MathError> {
        Viewport::new(self.width, self.height)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Breakout".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Model transform applied to every entity, plus the entities themselves
///
/// The model matrix is `translate * rotate_z * rotate_y * rotate_x * scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Translation [x, y, z] in NDC units
    pub translation: [f32; 3],
    /// Rotation about the X, Y and Z axes in degrees
    pub rotation_degrees: [f32; 3],
    /// Scale factors [x, y, z]
    pub scale: [f32; 3],
    /// Axis-aligned quads to place
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            translation: [0.0, 0.0, 0.0],
            rotation_degrees: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            entities: vec![
                EntityConfig {
                    name: "ball".to_string(),
                    position: [0.0, -0.8],
                    size: [0.05, 0.05],
                },
                EntityConfig {
                    name: "tile".to_string(),
                    position: [-0.5, 0.8],
                    size: [0.2, 0.08],
                },
            ],
        }
    }
}

/// A named quad in NDC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    pub name: String,
    /// Center [x, y]
    pub position: [f32; 2],
    /// Full extent [width, height]
    pub size: [f32; 2],
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Print the model matrix and transformed corners to stdout
    pub dump_frame: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_frame: true,
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
