//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A world-space vertex with normal and color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in world space (x, y, z)
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex3D {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }
}

impl Default for Vertex3D {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            color: [1.0; 4],
        }
    }
}

/// Render uniforms for the mesh pass
/// Layout: 176 bytes total (must match mesh.wgsl RenderUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Sky direction (normalized) + intensity (16 bytes)
    pub light_dir: [f32; 3],
    pub light_intensity: f32,
    /// Sky color + padding (16 bytes)
    pub sky_color: [f32; 3],
    pub _padding0: f32,
    /// Ground color + padding (16 bytes)
    pub ground_color: [f32; 3],
    pub _padding1: f32,
}

const IDENTITY: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_matrix: IDENTITY,
            projection_matrix: IDENTITY,
            light_dir: [0.0, 1.0, 0.0],
            light_intensity: 1.0,
            sky_color: [1.0, 1.0, 1.0],
            _padding0: 0.0,
            ground_color: [0.0, 0.0, 0.0],
            _padding1: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex3d_size() {
        // 3 floats position + 3 floats normal + 4 floats color = 40 bytes
        assert_eq!(size_of::<Vertex3D>(), 40);
    }

    #[test]
    fn test_render_uniforms_size() {
        // 32 floats of matrices + 3 vec3/f32 pairs = 44 floats = 176 bytes
        assert_eq!(size_of::<RenderUniforms>(), 176);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex3D>(), 4);
        assert_eq!(std::mem::align_of::<RenderUniforms>(), 4);
    }
}
