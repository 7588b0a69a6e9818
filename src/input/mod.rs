//! Input handling module
//!
//! Provides input mapping from raw events to semantic actions, and builds
//! the camera controller from config.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};

use rig3d_input::CameraController;

use crate::config::CameraConfig;

/// Camera controller tuned by the camera config
pub fn camera_controller(config: &CameraConfig) -> CameraController {
    CameraController::new()
        .with_angular_sensibility(config.angular_sensibility)
        .with_wheel_precision(config.wheel_precision)
        .with_panning_sensibility(config.panning_sensibility)
        .with_inertia(config.inertia)
}
