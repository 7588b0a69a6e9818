//! Simulation system
//!
//! Runs one frame of scene time:
//! - Delta time calculation
//! - Pointer input → orbit camera
//! - Animation playback

use std::time::Instant;

use rig3d_input::CameraController;

use crate::scene::Stage;

/// Longest step a single frame may take, in seconds
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether geometry needs to be rebuilt and re-uploaded
    pub geometry_dirty: bool,
    /// Seconds simulated this frame
    pub dt: f32,
}

/// Manages the per-frame simulation
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(&mut self, stage: &mut Stage, controller: &mut CameraController) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        Self::step(stage, controller, raw_dt)
    }

    /// Run one frame of `dt` seconds
    ///
    /// `dt` is capped at [`MAX_FRAME_TIME`] so a stall (first frame, window
    /// drag) does not jump the animation.
    pub fn step(stage: &mut Stage, controller: &mut CameraController, dt: f32) -> SimulationResult {
        let dt = dt.clamp(0.0, MAX_FRAME_TIME);

        if let Some(camera) = stage.camera.as_mut() {
            controller.update(camera, dt);
        }

        stage.world.update(dt);

        SimulationResult {
            geometry_dirty: stage.world.has_dirty_nodes(),
            dt,
        }
    }

    /// Forget elapsed time, e.g. after the window was hidden
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
