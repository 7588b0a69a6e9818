//! Rendering pipeline components
//!
//! This module contains the GPU data layouts and the mesh pipeline.

pub mod types;
pub mod mesh_pipeline;

// Re-export types
pub use types::{RenderUniforms, Vertex3D};

// Re-export pipelines
pub use mesh_pipeline::{MeshPipeline, DEPTH_FORMAT};
