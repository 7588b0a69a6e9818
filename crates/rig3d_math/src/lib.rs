//! 3D Mathematics Library
//!
//! This crate provides rotation helpers and primitive shape geometry for the
//! rig3d engine. Vector, quaternion and matrix types come from `glam` and are
//! re-exported here so downstream crates depend on a single math surface.
//!
//! ## Core Types
//!
//! - [`Vec3`], [`Quat`], [`Mat4`] - re-exported from glam
//! - [`euler_to_quat`] - Yaw/pitch/roll Euler composition
//!
//! ## Shape Types
//!
//! - [`Shape3D`] - Trait for triangle meshes in local space
//! - [`Triangle`] - Three vertex indices
//! - [`BoxShape`], [`CylinderShape`], [`SphereShape`], [`GroundShape`]

mod euler;
pub mod shape;
pub mod box_shape;
pub mod cylinder;
pub mod sphere;
pub mod ground;

pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
pub use euler::euler_to_quat;
pub use shape::{Shape3D, Triangle};
pub use box_shape::BoxShape;
pub use cylinder::CylinderShape;
pub use sphere::SphereShape;
pub use ground::GroundShape;
