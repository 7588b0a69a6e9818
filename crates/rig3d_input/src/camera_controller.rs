//! Orbit camera controller
//!
//! Controls:
//! - Left drag: rotate around the target (alpha/beta)
//! - Right drag: pan the target in the view plane
//! - Mouse wheel: zoom (radius)
//!
//! Input is accumulated between frames and applied in [`CameraController::update`].
//! With inertia enabled the motion eases out instead of stopping dead.

use rig3d_math::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Wheel pixels reported for one line of scrolling
const PIXELS_PER_LINE: f32 = 120.0;

/// Offsets smaller than this are snapped to zero
const INERTIA_EPSILON: f32 = 1e-4;

/// Reference frame rate that `inertia` is expressed against
const INERTIA_FPS: f32 = 60.0;

/// Camera controller for handling pointer input
pub struct CameraController {
    // Pointer state
    rotating: bool, // Left button held
    panning: bool,  // Right button held
    pending_rotate_x: f32,
    pending_rotate_y: f32,
    pending_pan_x: f32,
    pending_pan_y: f32,
    pending_wheel: f32,

    // Motion still to be applied (camera units)
    inertial_alpha: f32,
    inertial_beta: f32,
    inertial_radius: f32,
    inertial_pan_x: f32,
    inertial_pan_y: f32,

    // Configuration
    pub angular_sensibility: f32, // Pixels per radian
    pub wheel_precision: f32,
    pub panning_sensibility: f32, // Pixels per world unit
    pub inertia: f32,             // Fraction of motion kept per 60 Hz frame
    pub inertia_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            rotating: false,
            panning: false,
            pending_rotate_x: 0.0,
            pending_rotate_y: 0.0,
            pending_pan_x: 0.0,
            pending_pan_y: 0.0,
            pending_wheel: 0.0,

            inertial_alpha: 0.0,
            inertial_beta: 0.0,
            inertial_radius: 0.0,
            inertial_pan_x: 0.0,
            inertial_pan_y: 0.0,

            angular_sensibility: 1000.0,
            wheel_precision: 3.0,
            panning_sensibility: 1000.0,
            inertia: 0.9,
            inertia_enabled: true,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.rotating = pressed,
            MouseButton::Right => self.panning = pressed,
            _ => {}
        }
    }

    /// Process raw mouse movement in pixels
    ///
    /// Movement only counts while a button is held.
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.panning {
            self.pending_pan_x += delta_x as f32;
            self.pending_pan_y += delta_y as f32;
        } else if self.rotating {
            self.pending_rotate_x += delta_x as f32;
            self.pending_rotate_y += delta_y as f32;
        }
    }

    /// Process mouse wheel input
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        self.pending_wheel += pixels;
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.rotating || self.panning
    }

    /// Whether any motion is still waiting to be applied
    pub fn is_moving(&self) -> bool {
        [
            self.pending_rotate_x,
            self.pending_rotate_y,
            self.pending_pan_x,
            self.pending_pan_y,
            self.pending_wheel,
            self.inertial_alpha,
            self.inertial_beta,
            self.inertial_radius,
            self.inertial_pan_x,
            self.inertial_pan_y,
        ]
        .iter()
        .any(|v| *v != 0.0)
    }

    /// Update the camera based on accumulated input
    ///
    /// Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32) -> Vec3 {
        // Dragging right or down decreases the angle
        self.inertial_alpha -= self.pending_rotate_x / self.angular_sensibility;
        self.inertial_beta -= self.pending_rotate_y / self.angular_sensibility;
        self.inertial_radius -= self.pending_wheel / (self.wheel_precision * 40.0);
        self.inertial_pan_x -= self.pending_pan_x / self.panning_sensibility;
        self.inertial_pan_y += self.pending_pan_y / self.panning_sensibility;

        self.pending_rotate_x = 0.0;
        self.pending_rotate_y = 0.0;
        self.pending_pan_x = 0.0;
        self.pending_pan_y = 0.0;
        self.pending_wheel = 0.0;

        // Share of the outstanding motion applied this frame
        let apply = if self.inertia_enabled && dt > 0.0 {
            1.0 - self.inertia.clamp(0.0, 0.999).powf(dt * INERTIA_FPS)
        } else {
            1.0
        };

        let offsets = [
            &mut self.inertial_alpha,
            &mut self.inertial_beta,
            &mut self.inertial_radius,
            &mut self.inertial_pan_x,
            &mut self.inertial_pan_y,
        ];
        let mut step = [0.0f32; 5];
        for (offset, out) in offsets.into_iter().zip(step.iter_mut()) {
            *out = *offset * apply;
            *offset -= *out;
            if offset.abs() < INERTIA_EPSILON {
                *offset = 0.0;
            }
        }

        let [d_alpha, d_beta, d_radius, pan_x, pan_y] = step;
        if d_alpha != 0.0 || d_beta != 0.0 {
            camera.rotate(d_alpha, d_beta);
        }
        if d_radius != 0.0 {
            camera.zoom(d_radius);
        }
        if pan_x != 0.0 || pan_y != 0.0 {
            camera.pan(pan_x, pan_y);
        }

        camera.position()
    }

    /// Drop all pending and inertial motion
    pub fn reset(&mut self) {
        self.pending_rotate_x = 0.0;
        self.pending_rotate_y = 0.0;
        self.pending_pan_x = 0.0;
        self.pending_pan_y = 0.0;
        self.pending_wheel = 0.0;
        self.inertial_alpha = 0.0;
        self.inertial_beta = 0.0;
        self.inertial_radius = 0.0;
        self.inertial_pan_x = 0.0;
        self.inertial_pan_y = 0.0;
    }

    /// Toggle inertia on/off
    pub fn toggle_inertia(&mut self) -> bool {
        self.inertia_enabled = !self.inertia_enabled;
        self.inertia_enabled
    }

    /// Check if inertia is enabled
    pub fn is_inertia_enabled(&self) -> bool {
        self.inertia_enabled
    }

    /// Builder: set angular sensibility (pixels per radian)
    pub fn with_angular_sensibility(mut self, sensibility: f32) -> Self {
        self.angular_sensibility = sensibility;
        self
    }

    /// Builder: set wheel precision (higher = slower zoom)
    pub fn with_wheel_precision(mut self, precision: f32) -> Self {
        self.wheel_precision = precision;
        self
    }

    /// Builder: set panning sensibility (pixels per world unit)
    pub fn with_panning_sensibility(mut self, sensibility: f32) -> Self {
        self.panning_sensibility = sensibility;
        self
    }

    /// Builder: set the fraction of motion kept per 60 Hz frame
    pub fn with_inertia(mut self, inertia: f32) -> Self {
        self.inertia = inertia;
        self.inertia_enabled = inertia > 0.0;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Rotate by angle deltas in radians
    fn rotate(&mut self, delta_alpha: f32, delta_beta: f32);
    /// Change the orbit radius
    fn zoom(&mut self, delta_radius: f32);
    /// Move the target along the view's right and up axes
    fn pan(&mut self, right: f32, up: f32);
    fn position(&self) -> Vec3;
}
