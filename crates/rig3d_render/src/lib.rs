//! Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws a rig3d world
//! through an orbiting camera under a hemispheric light.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`arc_camera::ArcRotateCamera`] - Orbit camera around a target point
//! - [`light::HemisphericLight`] - Sky/ground ambient light
//! - [`pipeline::MeshPipeline`] - Indexed triangle rendering with depth
//! - [`renderable::RenderableGeometry`] - Converts World/Node to GPU buffers

pub mod arc_camera;
pub mod context;
pub mod light;
pub mod pipeline;
pub mod renderable;

pub use arc_camera::ArcRotateCamera;
pub use light::HemisphericLight;
pub use renderable::RenderableGeometry;

// Re-export core types for convenience
pub use rig3d_core::{Material, Node, NodeKey, ShapeTemplate, Transform3D, World};
