//! Core types for the rig3d engine
//!
//! This crate provides the scene graph that rigged figures are built from:
//!
//! - [`Transform3D`] - Position, Euler rotation, scaling and pivot
//! - [`Material`] - Visual properties of a node
//! - [`Node`] - A rigid primitive with a transform, shape, and material
//! - [`ShapeTemplate`] - Serializable primitive description
//! - [`World`] - Container for all nodes and their animation playbacks
//! - [`NodeKey`] - Generational key to a node in the world

mod error;
mod node;
mod shapes;
mod transform;
mod world;

pub use error::WorldError;
pub use node::{DirtyFlags, Material, Node};
pub use shapes::{ShapeKind, ShapeTemplate};
pub use transform::Transform3D;
pub use world::{NodeKey, World};

// Re-export commonly used types for convenience
pub use rig3d_animation::{Animatable, AnimatableKey, Animation, PlaybackState};
pub use rig3d_math::{Mat4, Quat, Shape3D, Vec3};
