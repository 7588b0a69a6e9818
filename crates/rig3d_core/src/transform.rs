//! 3D Transform (position, rotation, scaling, pivot)
//!
//! A Transform3D is the local transform of a node relative to its parent.
//! Rotation is an Euler vector in radians, composed yaw-pitch-roll.

use rig3d_animation::{Channel, TargetProperty};
use rig3d_math::{euler_to_quat, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A local transform with an optional rotation pivot
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Offset from the parent origin
    pub position: Vec3,
    /// Euler angles in radians `(x, y, z)`
    pub rotation: Vec3,
    /// Per-axis scale
    pub scaling: Vec3,
    /// Point in local space that rotation and scaling happen around
    #[serde(default)]
    pub pivot: Option<Vec3>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scaling: Vec3::ONE,
            pivot: None,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Set the Euler rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set only the Z (roll) angle
    pub fn with_rotation_z(mut self, angle: f32) -> Self {
        self.rotation.z = angle;
        self
    }

    /// Set the scaling
    pub fn with_scaling(mut self, scaling: Vec3) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the rotation pivot
    pub fn with_pivot(mut self, pivot: Vec3) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Rotation as a quaternion
    #[inline]
    pub fn rotation_quat(&self) -> Quat {
        euler_to_quat(self.rotation)
    }

    /// Local matrix (column-vector convention)
    ///
    /// Without a pivot this is `T * R * S`. With pivot `p` the point is first
    /// moved by `p`, transformed, then moved back by `-p`:
    /// `T(-p) * T * R * S * T(p)`.
    pub fn local_matrix(&self) -> Mat4 {
        let trs = Mat4::from_scale_rotation_translation(self.scaling, self.rotation_quat(), self.position);
        match self.pivot {
            Some(p) => Mat4::from_translation(-p) * trs * Mat4::from_translation(p),
            None => trs,
        }
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.local_matrix().transform_point3(p)
    }

    /// Read one scalar component
    pub fn get(&self, property: TargetProperty) -> f32 {
        self.channel(property.channel())[property.component()]
    }

    /// Write one scalar component
    pub fn set(&mut self, property: TargetProperty, value: f32) {
        self.channel_mut(property.channel())[property.component()] = value;
    }

    fn channel(&self, channel: Channel) -> &Vec3 {
        match channel {
            Channel::Position => &self.position,
            Channel::Rotation => &self.rotation,
            Channel::Scaling => &self.scaling,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut Vec3 {
        match channel {
            Channel::Position => &mut self.position,
            Channel::Rotation => &mut self.rotation,
            Channel::Scaling => &mut self.scaling,
        }
    }
}
