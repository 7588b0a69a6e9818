//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`RIG3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Orbit camera and its pointer controls
    #[serde(default)]
    pub camera: CameraConfig,
    /// Hand animation playback
    #[serde(default)]
    pub animation: AnimationConfig,
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
    /// 3. Environment variables (`RIG3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Missing files are skipped; every field has a default.
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

        // RIG3D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("RIG3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// The scene-facing subset of the configuration
    pub fn scene(&self) -> SceneConfig {
        SceneConfig {
            camera: self.camera.clone(),
            animation: self.animation.clone(),
            rendering: self.rendering.clone(),
        }
    }
}

/// Everything `on_scene_ready` reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub rendering: RenderingConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
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
            title: "rig3d - Rigged Humanoid".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orbit camera configuration
///
/// Angles are in radians, measured the same way as the camera's alpha and beta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Longitudinal rotation
    pub alpha: f32,
    /// Latitudinal rotation, measured from +Y
    pub beta: f32,
    /// Distance from the target
    pub radius: f32,
    /// Point the camera orbits [x, y, z]
    pub target: [f32; 3],
    pub lower_radius_limit: Option<f32>,
    pub upper_radius_limit: Option<f32>,
    pub lower_beta_limit: f32,
    pub upper_beta_limit: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Pixels of drag per radian of rotation
    pub angular_sensibility: f32,
    /// Wheel divisor for zoom; higher zooms slower
    pub wheel_precision: f32,
    /// Pixels of drag per unit of pan
    pub panning_sensibility: f32,
    /// Fraction of motion kept per 60 Hz frame (0 disables inertia)
    pub inertia: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            alpha: FRAC_PI_4,
            beta: FRAC_PI_3,
            radius: 40.0,
            target: [20.0, 15.0, 20.0],
            lower_radius_limit: Some(5.0),
            upper_radius_limit: Some(100.0),
            lower_beta_limit: FRAC_PI_6,
            upper_beta_limit: FRAC_PI_2,
            fov: 0.8,
            near: 1.0,
            far: 10000.0,
            angular_sensibility: 1000.0,
            wheel_precision: 3.0,
            panning_sensibility: 1000.0,
            inertia: 0.9,
        }
    }
}

/// Hand animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Playback speed multiplier (negative values are treated as 0)
    pub speed_ratio: f32,
    /// Start the hand animation as soon as the scene is ready
    pub autoplay: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_ratio: 1.0,
            autoplay: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Hemispheric light direction [x, y, z] (towards the sky)
    pub light_position: [f32; 3],
    /// Hemispheric light intensity
    pub light_intensity: f32,
    /// Ground extent along X and Z
    pub ground_size: [f32; 2],
    /// Ground color [r, g, b]
    pub ground_color: [f32; 3],
    /// Body part color [r, g, b]
    pub body_color: [f32; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.2, 0.2, 0.3, 1.0],
            light_position: [0.0, 100.0, 0.0],
            light_intensity: 1.0,
            ground_size: [30.0, 30.0],
            ground_color: [0.0, 0.0, 0.0],
            body_color: [1.0, 1.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
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
