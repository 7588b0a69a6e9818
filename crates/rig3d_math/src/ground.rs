//! Ground plane geometry
//!
//! A flat rectangle in the XZ plane at `y = 0`, facing +Y.

use crate::shape::{Shape3D, Triangle};
use crate::Vec3;

/// A ground plane of `width` (X) by `height` (Z)
#[derive(Clone, Debug)]
pub struct GroundShape {
    width: f32,
    height: f32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl GroundShape {
    /// Create a ground plane centered at the origin
    pub fn new(width: f32, height: f32) -> Self {
        let w = width * 0.5;
        let h = height * 0.5;
        let positions = vec![
            Vec3::new(-w, 0.0, -h),
            Vec3::new(w, 0.0, -h),
            Vec3::new(w, 0.0, h),
            Vec3::new(-w, 0.0, h),
        ];
        // Counter-clockwise seen from above
        let triangles = vec![Triangle::new(0, 2, 1), Triangle::new(0, 3, 2)];

        Self {
            width,
            height,
            positions,
            normals: vec![Vec3::Y; 4],
            triangles,
        }
    }

    /// Extent along X
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Extent along Z
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Shape3D for GroundShape {
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_is_flat() {
        let g = GroundShape::new(30.0, 30.0);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.triangle_count(), 2);
        assert!(g.positions().iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_ground_bounds() {
        let g = GroundShape::new(30.0, 20.0);
        let (min, max) = g.bounds();
        assert_eq!(min, Vec3::new(-15.0, 0.0, -10.0));
        assert_eq!(max, Vec3::new(15.0, 0.0, 10.0));
    }

    #[test]
    fn test_ground_faces_up() {
        let g = GroundShape::new(2.0, 2.0);
        for tri in g.triangles() {
            let [a, b, c] = tri.indices.map(|i| g.positions()[i]);
            assert!((b - a).cross(c - a).y > 0.0);
        }
    }
}
