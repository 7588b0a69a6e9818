//! Orbit camera
//!
//! The camera sits on a sphere around a target point:
//! - `alpha`: azimuth around the vertical axis, measured from +X toward +Z
//! - `beta`: polar angle from +Y (0 = straight above, pi/2 = level)
//! - `radius`: distance from the target
//!
//! Beta and radius are clamped to their limits whenever they change. Views
//! are left-handed (+Z into the screen) with depth in `[0, 1]`.

use std::f32::consts::PI;

use rig3d_input::CameraControl;
use rig3d_math::{Mat4, Vec3};

/// Default lower beta limit, keeps the camera off the pole
pub const DEFAULT_LOWER_BETA_LIMIT: f32 = 0.01;

/// Default upper beta limit
pub const DEFAULT_UPPER_BETA_LIMIT: f32 = PI - 0.01;

/// Orbit camera around a target
#[derive(Clone, Debug)]
pub struct ArcRotateCamera {
    alpha: f32,
    beta: f32,
    radius: f32,
    target: Vec3,

    lower_beta_limit: f32,
    upper_beta_limit: f32,
    lower_radius_limit: Option<f32>,
    upper_radius_limit: Option<f32>,

    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,

    // Restored by `restore_state`
    stored: (f32, f32, f32, Vec3),
}

impl ArcRotateCamera {
    /// Create a camera at the given orbit around `target`
    pub fn new(alpha: f32, beta: f32, radius: f32, target: Vec3) -> Self {
        let mut camera = Self {
            alpha,
            beta,
            radius,
            target,
            lower_beta_limit: DEFAULT_LOWER_BETA_LIMIT,
            upper_beta_limit: DEFAULT_UPPER_BETA_LIMIT,
            lower_radius_limit: None,
            upper_radius_limit: None,
            fov: 0.8,
            near: 1.0,
            far: 10000.0,
            stored: (alpha, beta, radius, target),
        };
        camera.beta = camera.clamped_beta(beta);
        camera.store_state();
        camera
    }

    /// Builder: set radius limits (either bound may be absent)
    pub fn with_radius_limits(mut self, lower: Option<f32>, upper: Option<f32>) -> Self {
        self.set_radius_limits(lower, upper);
        self.store_state();
        self
    }

    /// Builder: set beta limits in radians
    pub fn with_beta_limits(mut self, lower: f32, upper: f32) -> Self {
        self.set_beta_limits(lower, upper);
        self.store_state();
        self
    }

    /// Builder: set the projection parameters
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Self {
        self.fov = fov;
        self.near = near;
        self.far = far;
        self
    }

    /// Set radius limits and re-clamp the radius
    pub fn set_radius_limits(&mut self, lower: Option<f32>, upper: Option<f32>) {
        let (lower, upper) = match (lower, upper) {
            (Some(l), Some(u)) if l > u => (Some(u), Some(l)),
            limits => limits,
        };
        self.lower_radius_limit = lower;
        self.upper_radius_limit = upper;
        self.radius = self.clamped_radius(self.radius);
    }

    /// Set beta limits and re-clamp beta
    pub fn set_beta_limits(&mut self, lower: f32, upper: f32) {
        self.lower_beta_limit = lower.min(upper);
        self.upper_beta_limit = lower.max(upper);
        self.beta = self.clamped_beta(self.beta);
    }

    /// Azimuth in radians
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Polar angle in radians
    #[inline]
    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Distance from the target
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The point being orbited
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current `(lower, upper)` beta limits
    pub fn beta_limits(&self) -> (f32, f32) {
        (self.lower_beta_limit, self.upper_beta_limit)
    }

    /// Current `(lower, upper)` radius limits
    pub fn radius_limits(&self) -> (Option<f32>, Option<f32>) {
        (self.lower_radius_limit, self.upper_radius_limit)
    }

    /// Set the azimuth (unbounded)
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// Set the polar angle, clamped to the beta limits
    pub fn set_beta(&mut self, beta: f32) {
        self.beta = self.clamped_beta(beta);
    }

    /// Set the distance, clamped to the radius limits
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = self.clamped_radius(radius);
    }

    /// Remember the current orbit for [`restore_state`](Self::restore_state)
    pub fn store_state(&mut self) {
        self.stored = (self.alpha, self.beta, self.radius, self.target);
    }

    /// Return to the last stored orbit
    pub fn restore_state(&mut self) {
        let (alpha, beta, radius, target) = self.stored;
        self.alpha = alpha;
        self.beta = self.clamped_beta(beta);
        self.radius = self.clamped_radius(radius);
        self.target = target;
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        let (sin_a, cos_a) = self.alpha.sin_cos();
        let (sin_b, cos_b) = self.beta.sin_cos();
        self.target + Vec3::new(cos_a * sin_b, cos_b, sin_a * sin_b) * self.radius
    }

    /// Unit vector from the camera toward the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).try_normalize().unwrap_or(Vec3::Z)
    }

    /// Camera right axis (left-handed, Y up)
    pub fn right(&self) -> Vec3 {
        Vec3::Y.cross(self.forward()).try_normalize().unwrap_or(Vec3::X)
    }

    /// Camera up axis
    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fov, aspect.max(f32::EPSILON), self.near, self.far)
    }

    fn clamped_beta(&self, beta: f32) -> f32 {
        // NaN falls to the lower limit
        beta.max(self.lower_beta_limit).min(self.upper_beta_limit)
    }

    fn clamped_radius(&self, radius: f32) -> f32 {
        let mut r = radius;
        if let Some(lower) = self.lower_radius_limit {
            r = r.max(lower);
        }
        if let Some(upper) = self.upper_radius_limit {
            r = r.min(upper);
        }
        r
    }
}

impl CameraControl for ArcRotateCamera {
    fn rotate(&mut self, delta_alpha: f32, delta_beta: f32) {
        self.alpha += delta_alpha;
        self.set_beta(self.beta + delta_beta);
    }

    fn zoom(&mut self, delta_radius: f32) {
        self.set_radius(self.radius + delta_radius);
    }

    fn pan(&mut self, right: f32, up: f32) {
        self.target += self.right() * right + self.up() * up;
    }

    fn position(&self) -> Vec3 {
        ArcRotateCamera::position(self)
    }
}
