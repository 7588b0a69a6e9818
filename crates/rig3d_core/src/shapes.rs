//! Serializable shape templates
//!
//! ShapeTemplate stores the construction parameters of a primitive so nodes
//! can be compared, serialized and inspected without holding a mesh. The mesh
//! is created on demand with [`ShapeTemplate::create_shape`].
//!
//! All shapes are created in **local space**, centered at the origin. The
//! node transform positions them.

use std::fmt;

use rig3d_math::{BoxShape, CylinderShape, GroundShape, Shape3D, SphereShape};
use serde::{Deserialize, Serialize};

/// Which primitive a template describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Cylinder,
    Sphere,
    Ground,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Ground => "ground",
        };
        f.write_str(name)
    }
}

/// Serializable shape template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// An axis-aligned box
    Box {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
        /// Extent along Z
        depth: f32,
    },
    /// A cylinder along the Y axis
    Cylinder {
        /// Extent along Y
        height: f32,
        /// Diameter of both caps
        diameter: f32,
    },
    /// A UV sphere
    Sphere {
        diameter: f32,
    },
    /// A flat plane in XZ facing +Y
    Ground {
        /// Extent along X
        width: f32,
        /// Extent along Z
        height: f32,
    },
}

impl ShapeTemplate {
    /// Create the mesh for this template
    pub fn create_shape(&self) -> Box<dyn Shape3D> {
        match *self {
            ShapeTemplate::Box { width, height, depth } => Box::new(BoxShape::new(width, height, depth)),
            ShapeTemplate::Cylinder { height, diameter } => Box::new(CylinderShape::new(height, diameter)),
            ShapeTemplate::Sphere { diameter } => Box::new(SphereShape::new(diameter)),
            ShapeTemplate::Ground { width, height } => Box::new(GroundShape::new(width, height)),
        }
    }

    /// Which primitive this is
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeTemplate::Box { .. } => ShapeKind::Box,
            ShapeTemplate::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeTemplate::Sphere { .. } => ShapeKind::Sphere,
            ShapeTemplate::Ground { .. } => ShapeKind::Ground,
        }
    }

    /// Create a box template
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        ShapeTemplate::Box { width, height, depth }
    }

    /// Create a cylinder template
    pub fn cylinder(height: f32, diameter: f32) -> Self {
        ShapeTemplate::Cylinder { height, diameter }
    }

    /// Create a sphere template
    pub fn sphere(diameter: f32) -> Self {
        ShapeTemplate::Sphere { diameter }
    }

    /// Create a ground template
    pub fn ground(width: f32, height: f32) -> Self {
        ShapeTemplate::Ground { width, height }
    }
}
