//! Renderable geometry - bridges World/Node to GPU buffers
//!
//! This module bakes each node's local shape through its world matrix into
//! world-space vertices and a shared index buffer.

use rig3d_core::{Node, NodeKey, World};
use rig3d_math::{Mat3, Mat4};

use crate::pipeline::Vertex3D;

/// GPU-ready geometry collected from nodes
pub struct RenderableGeometry {
    /// World-space vertices with normals and colors
    pub vertices: Vec<Vertex3D>,
    /// Triangle list indexing into `vertices`
    pub indices: Vec<u32>,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Collect geometry from every node in a world
    pub fn from_world(world: &World) -> Self {
        let mut result = Self::new();
        result.rebuild(world);
        result
    }

    /// Replace the contents with every node in a world, keeping allocations
    pub fn rebuild(&mut self, world: &World) {
        self.clear();
        for (key, _) in world.iter() {
            self.add_node(world, key);
        }
    }

    /// Add one node's geometry, placed by its world matrix
    ///
    /// Unknown keys add nothing.
    pub fn add_node(&mut self, world: &World, key: NodeKey) {
        let (Some(node), Some(matrix)) = (world.get(key), world.world_matrix(key)) else {
            return;
        };
        self.add_transformed(node, matrix);
    }

    fn add_transformed(&mut self, node: &Node, matrix: Mat4) {
        let shape = node.shape.create_shape();
        let normal_matrix = normal_matrix(matrix);
        let color = node.material.base_color;
        let vertex_offset = self.vertices.len();

        for (position, normal) in shape.positions().iter().zip(shape.normals()) {
            let p = matrix.transform_point3(*position);
            let n = (normal_matrix * *normal).try_normalize().unwrap_or(*normal);
            self.vertices.push(Vertex3D::new(p.to_array(), n.to_array(), color));
        }

        for tri in shape.triangles() {
            self.indices
                .extend(tri.indices.iter().map(|&i| (i + vertex_offset) as u32));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Default for RenderableGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Inverse-transpose of the upper 3x3, falling back to the plain 3x3 when singular
fn normal_matrix(matrix: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(matrix);
    if m.determinant().abs() <= f32::EPSILON {
        return m;
    }
    m.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig3d_core::{Material, ShapeTemplate, Transform3D};
    use rig3d_math::Vec3;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn bounds(vertices: &[Vertex3D]) -> Option<(Vec3, Vec3)> {
        let first = Vec3::from_array(vertices.first()?.position);
        Some(vertices.iter().fold((first, first), |(min, max), v| {
            let p = Vec3::from_array(v.position);
            (min.min(p), max.max(p))
        }))
    }

    #[test]
    fn test_empty_world() {
        let geometry = RenderableGeometry::from_world(&World::new());
        assert!(geometry.is_empty());
        assert_eq!(geometry.vertex_count(), 0);
        assert!(bounds(&geometry.vertices).is_none());
    }

    #[test]
    fn test_box_counts() {
        let mut world = World::new();
        world.add_node(Node::new(ShapeTemplate::cuboid(1.0, 1.0, 1.0))).unwrap();

        let geometry = RenderableGeometry::from_world(&world);
        assert_eq!(geometry.vertex_count(), 24);
        assert_eq!(geometry.triangle_count(), 12);
        assert_eq!(geometry.index_count(), 36);
    }

    #[test]
    fn test_indices_offset_per_node() {
        let mut world = World::new();
        world.add_node(Node::new(ShapeTemplate::ground(2.0, 2.0))).unwrap();
        world.add_node(Node::new(ShapeTemplate::ground(2.0, 2.0))).unwrap();

        let geometry = RenderableGeometry::from_world(&world);
        assert_eq!(geometry.vertex_count(), 8);
        let max_index = geometry.indices.iter().copied().max().unwrap();
        assert_eq!(max_index, 7);
    }

    #[test]
    fn test_child_baked_through_parent() {
        let mut world = World::new();
        let parent = world
            .add_node(
                Node::new(ShapeTemplate::ground(1.0, 1.0))
                    .with_transform(Transform3D::from_position(Vec3::new(0.0, 2.0, 0.0))),
            )
            .unwrap();
        let child = world
            .add_child(
                parent,
                Node::new(ShapeTemplate::ground(2.0, 2.0))
                    .with_transform(Transform3D::from_position(Vec3::new(3.0, 0.0, 0.0))),
            )
            .unwrap();

        let mut geometry = RenderableGeometry::new();
        geometry.add_node(&world, child);

        let (min, max) = bounds(&geometry.vertices).unwrap();
        assert!(approx_eq(min.x, 2.0) && approx_eq(max.x, 4.0));
        assert!(approx_eq(min.y, 2.0) && approx_eq(max.y, 2.0));
    }

    #[test]
    fn test_material_color_and_normals() {
        let mut world = World::new();
        world
            .add_node(
                Node::new(ShapeTemplate::ground(1.0, 1.0))
                    .with_material(Material::from_rgb(0.2, 0.4, 0.6))
                    .with_transform(Transform3D::identity().with_rotation_z(std::f32::consts::PI)),
            )
            .unwrap();

        let geometry = RenderableGeometry::from_world(&world);
        for v in &geometry.vertices {
            assert_eq!(v.color, [0.2, 0.4, 0.6, 1.0]);
            // Flipped upside down
            assert!(approx_eq(v.normal[1], -1.0));
        }
    }

    #[test]
    fn test_rebuild_follows_moved_node() {
        let mut world = World::new();
        let key = world.add_node(Node::new(ShapeTemplate::ground(2.0, 2.0))).unwrap();
        let mut geometry = RenderableGeometry::from_world(&world);
        let capacity = geometry.vertices.capacity();

        world.get_mut(key).unwrap().transform.position = Vec3::new(5.0, 0.0, 0.0);
        geometry.rebuild(&world);

        assert_eq!(geometry.vertex_count(), 4);
        assert_eq!(geometry.index_count(), 6);
        assert_eq!(geometry.vertices.capacity(), capacity);
        let (min, max) = bounds(&geometry.vertices).unwrap();
        assert!(approx_eq(min.x, 4.0) && approx_eq(max.x, 6.0));
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        world.add_node(Node::new(ShapeTemplate::sphere(1.0))).unwrap();
        let mut geometry = RenderableGeometry::from_world(&world);
        assert!(!geometry.is_empty());
        geometry.clear();
        assert!(geometry.is_empty());
    }
}
