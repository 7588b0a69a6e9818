//! Orbit Camera Input Handling
//!
//! This crate turns pointer and wheel input into orbit camera motion:
//! left drag rotates around the target, right drag pans, the wheel zooms.

mod camera_controller;

pub use camera_controller::{CameraControl, CameraController};
