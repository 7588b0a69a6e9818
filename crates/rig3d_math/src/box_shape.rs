//! Axis-aligned box geometry
//!
//! A box has 6 faces with 4 vertices each, so that every face gets flat
//! normals. Each face is split into 2 triangles.

use crate::shape::{push_quad, Shape3D, Triangle};
use crate::Vec3;

/// Face normal and the two tangents spanning it (`u x v == normal`)
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// A box centered at the origin
#[derive(Clone, Debug)]
pub struct BoxShape {
    size: Vec3,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl BoxShape {
    /// Create a box with extents `width` (X), `height` (Y) and `depth` (Z)
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let size = Vec3::new(width, height, depth);
        let half = size * 0.5;

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut triangles = Vec::with_capacity(12);

        for (normal, u, v) in FACES {
            let base = positions.len();
            for (s, t) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                positions.push((normal + u * s + v * t) * half);
                normals.push(normal);
            }
            push_quad(&mut triangles, base, base + 1, base + 2, base + 3);
        }

        Self {
            size,
            positions,
            normals,
            triangles,
        }
    }

    /// Full extents (width, height, depth)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }
}

impl Shape3D for BoxShape {
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
