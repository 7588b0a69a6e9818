//! Cylinder geometry
//!
//! The cylinder is aligned with the local Y axis and centered at the origin.
//! The side wall and both caps have separate vertices so that the caps get
//! flat normals.

use std::f32::consts::TAU;

use crate::shape::{push_quad, Shape3D, Triangle};
use crate::Vec3;

/// Default number of radial segments
pub const DEFAULT_TESSELLATION: u32 = 24;

/// A capped cylinder along Y
#[derive(Clone, Debug)]
pub struct CylinderShape {
    height: f32,
    diameter: f32,
    tessellation: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl CylinderShape {
    /// Create a cylinder with the default tessellation
    pub fn new(height: f32, diameter: f32) -> Self {
        Self::with_tessellation(height, diameter, DEFAULT_TESSELLATION)
    }

    /// Create a cylinder with `tessellation` radial segments (at least 3)
    pub fn with_tessellation(height: f32, diameter: f32, tessellation: u32) -> Self {
        let segments = tessellation.max(3) as usize;
        let radius = diameter * 0.5;
        let half_height = height * 0.5;

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut triangles = Vec::new();

        // Side wall: a bottom and top ring, seam vertex duplicated
        for i in 0..=segments {
            let angle = TAU * i as f32 / segments as f32;
            let radial = Vec3::new(angle.cos(), 0.0, angle.sin());
            positions.push(radial * radius - Vec3::Y * half_height);
            normals.push(radial);
            positions.push(radial * radius + Vec3::Y * half_height);
            normals.push(radial);
        }
        for i in 0..segments {
            let bottom = i * 2;
            let top = bottom + 1;
            let next_bottom = bottom + 2;
            let next_top = bottom + 3;
            push_quad(&mut triangles, bottom, top, next_top, next_bottom);
        }

        // Caps: center vertex plus a ring
        for (y, normal) in [(half_height, Vec3::Y), (-half_height, Vec3::NEG_Y)] {
            let center = positions.len();
            positions.push(Vec3::new(0.0, y, 0.0));
            normals.push(normal);
            for i in 0..segments {
                let angle = TAU * i as f32 / segments as f32;
                positions.push(Vec3::new(angle.cos() * radius, y, angle.sin() * radius));
                normals.push(normal);
            }
            for i in 0..segments {
                let a = center + 1 + i;
                let b = center + 1 + (i + 1) % segments;
                if normal.y > 0.0 {
                    triangles.push(Triangle::new(center, b, a));
                } else {
                    triangles.push(Triangle::new(center, a, b));
                }
            }
        }

        Self {
            height,
            diameter,
            tessellation: segments as u32,
            positions,
            normals,
            triangles,
        }
    }

    /// Height along Y
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Diameter of both caps
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Number of radial segments
    #[inline]
    pub fn tessellation(&self) -> u32 {
        self.tessellation
    }
}

impl Shape3D for CylinderShape {
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

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_cylinder_counts() {
        let c = CylinderShape::with_tessellation(5.0, 1.0, 8);
        // side: 2 * 9 ring vertices, caps: 2 * (1 + 8)
        assert_eq!(c.vertex_count(), 18 + 18);
        // side: 8 quads, caps: 2 * 8 fans
        assert_eq!(c.triangle_count(), 16 + 16);
    }

    #[test]
    fn test_cylinder_bounds() {
        let c = CylinderShape::new(5.0, 1.0);
        let (min, max) = c.bounds();
        assert!((min.y + 2.5).abs() < EPSILON);
        assert!((max.y - 2.5).abs() < EPSILON);
        assert!((max.x - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_minimum_tessellation() {
        let c = CylinderShape::with_tessellation(1.0, 1.0, 1);
        assert_eq!(c.tessellation(), 3);
    }

    #[test]
    fn test_cylinder_winding_matches_normal() {
        let c = CylinderShape::with_tessellation(2.0, 1.0, 12);
        for tri in c.triangles() {
            let [a, b, d] = tri.indices.map(|i| c.positions()[i]);
            let face = (b - a).cross(d - a);
            let normal = c.normals()[tri.indices[1]];
            assert!(face.dot(normal) > 0.0);
        }
    }
}
