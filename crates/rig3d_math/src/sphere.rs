//! UV sphere geometry

use std::f32::consts::{PI, TAU};

use crate::shape::{push_quad, Shape3D, Triangle};
use crate::Vec3;

/// Default number of latitude rings
pub const DEFAULT_SEGMENTS: u32 = 32;

/// A UV sphere centered at the origin
///
/// `segments` latitude rings and `2 * segments` longitude slices.
#[derive(Clone, Debug)]
pub struct SphereShape {
    diameter: f32,
    segments: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl SphereShape {
    /// Create a sphere with the default segment count
    pub fn new(diameter: f32) -> Self {
        Self::with_segments(diameter, DEFAULT_SEGMENTS)
    }

    /// Create a sphere with `segments` latitude rings (at least 2)
    pub fn with_segments(diameter: f32, segments: u32) -> Self {
        let rings = segments.max(2) as usize;
        let slices = rings * 2;
        let radius = diameter * 0.5;

        let mut positions = Vec::with_capacity((rings + 1) * (slices + 1));
        let mut normals = Vec::with_capacity((rings + 1) * (slices + 1));
        let mut triangles = Vec::with_capacity(rings * slices * 2);

        for ring in 0..=rings {
            // Polar angle from the north pole
            let theta = PI * ring as f32 / rings as f32;
            for slice in 0..=slices {
                let phi = TAU * slice as f32 / slices as f32;
                let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
                positions.push(normal * radius);
                normals.push(normal);
            }
        }

        let stride = slices + 1;
        for ring in 0..rings {
            for slice in 0..slices {
                let a = ring * stride + slice;
                let b = a + stride;
                push_quad(&mut triangles, a, a + 1, b + 1, b);
            }
        }

        Self {
            diameter,
            segments: rings as u32,
            positions,
            normals,
            triangles,
        }
    }

    /// Sphere diameter
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Number of latitude rings
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }
}

impl Shape3D for SphereShape {
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
