//! Euler angle composition
//!
//! Rotation vectors are stored as `(x, y, z)` angles in radians and composed
//! in yaw-pitch-roll order: roll (Z) is applied first, then pitch (X), then
//! yaw (Y).

use glam::{EulerRot, Quat, Vec3};

/// Convert a rotation vector `(pitch, yaw, roll)` into a quaternion
///
/// Equivalent to `Ry(yaw) * Rx(pitch) * Rz(roll)` acting on column vectors.
#[inline]
pub fn euler_to_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::YXZ, rotation.y, rotation.x, rotation.z)
}
