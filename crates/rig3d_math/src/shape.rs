//! Shape traits and primitives for 3D geometry
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.

use crate::Vec3;

/// A triangle defined by vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Indices into the parent shape's vertex array
    pub indices: [usize; 3],
}

impl Triangle {
    /// Create a new triangle with the given vertex indices
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c] }
    }
}

/// Trait for triangle-mesh shapes in local space
///
/// Every vertex has a position and a unit normal; `positions()` and
/// `normals()` always have the same length.
pub trait Shape3D: Send + Sync {
    /// Vertex positions in local space
    fn positions(&self) -> &[Vec3];

    /// Per-vertex unit normals
    fn normals(&self) -> &[Vec3];

    /// Triangle list indexing into `positions()`
    fn triangles(&self) -> &[Triangle];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.positions().len()
    }

    /// Get the number of triangles
    #[inline]
    fn triangle_count(&self) -> usize {
        self.triangles().len()
    }

    /// Axis-aligned bounds `(min, max)` of the vertex positions
    fn bounds(&self) -> (Vec3, Vec3) {
        self.positions().iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }
}

/// Append a quad `a b c d` (counter-clockwise) as two triangles
pub(crate) fn push_quad(triangles: &mut Vec<Triangle>, a: usize, b: usize, c: usize, d: usize) {
    triangles.push(Triangle::new(a, b, c));
    triangles.push(Triangle::new(a, c, d));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_new() {
        let tri = Triangle::new(0, 1, 2);
        assert_eq!(tri.indices, [0, 1, 2]);
    }

    #[test]
    fn test_push_quad() {
        let mut tris = Vec::new();
        push_quad(&mut tris, 0, 1, 2, 3);
        assert_eq!(tris, vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]);
    }
}
