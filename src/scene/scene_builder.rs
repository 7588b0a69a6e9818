//! SceneBuilder - Declarative scene construction
//!
//! Populates a [`Stage`] from named parts. Parents are referred to by name and
//! must be created before their children.

use std::collections::HashMap;

use rig3d_core::{Material, Node, NodeKey, ShapeTemplate, Transform3D};
use rig3d_math::Vec3;
use rig3d_render::{ArcRotateCamera, HemisphericLight};

use super::error::SceneError;
use super::stage::Stage;

/// One rigid body of a figure
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPart {
    /// Unique node name
    pub name: &'static str,
    /// Primitive and its dimensions
    pub shape: ShapeTemplate,
    /// Parent part, or `None` for a root
    pub parent: Option<&'static str>,
    /// Position relative to the parent
    pub position: Vec3,
    /// Roll angle in radians
    pub rotation_z: f32,
    /// Local rotation pivot
    pub pivot: Option<Vec3>,
}

impl BodyPart {
    /// Local transform of the part
    pub fn transform(&self) -> Transform3D {
        let transform = Transform3D::from_position(self.position).with_rotation_z(self.rotation_z);
        match self.pivot {
            Some(p) => transform.with_pivot(p),
            None => transform,
        }
    }
}

/// Builder for populating a stage
///
/// # Example
/// ```ignore
/// let mut stage = Stage::new();
/// let mut builder = SceneBuilder::new(&mut stage);
/// builder.camera(camera).light(light);
/// builder.ground("ground", 30.0, 30.0, Material::BLACK)?;
/// for part in HUMANOID_PARTS {
///     builder.part(part)?;
/// }
/// let nodes = builder.finish();
/// ```
pub struct SceneBuilder<'a> {
    stage: &'a mut Stage,
    nodes: HashMap<String, NodeKey>,
    body_material: Material,
}

impl<'a> SceneBuilder<'a> {
    /// Create a builder over a stage
    pub fn new(stage: &'a mut Stage) -> Self {
        Self {
            stage,
            nodes: HashMap::new(),
            body_material: Material::WHITE,
        }
    }

    /// Material given to parts added with [`part`](Self::part)
    pub fn with_body_material(mut self, material: Material) -> Self {
        self.body_material = material;
        self
    }

    /// Install the stage camera
    pub fn camera(&mut self, camera: ArcRotateCamera) -> &mut Self {
        self.stage.camera = Some(camera);
        self
    }

    /// Install the stage light
    pub fn light(&mut self, light: HemisphericLight) -> &mut Self {
        self.stage.light = Some(light);
        self
    }

    /// Add a ground plane at the origin
    pub fn ground(&mut self, name: &str, width: f32, height: f32, material: Material) -> Result<NodeKey, SceneError> {
        let node = Node::new(ShapeTemplate::ground(width, height))
            .with_name(name)
            .with_material(material);
        let key = self.stage.world.add_node(node)?;
        log::debug!("Created ground '{}' ({} x {})", name, width, height);
        self.nodes.insert(name.to_string(), key);
        Ok(key)
    }

    /// Add a body part under its named parent
    pub fn part(&mut self, part: &BodyPart) -> Result<NodeKey, SceneError> {
        let node = Node::new(part.shape)
            .with_name(part.name)
            .with_transform(part.transform())
            .with_material(self.body_material);

        let key = match part.parent {
            Some(parent) => {
                let parent_key = self.key(parent).ok_or_else(|| SceneError::UnknownParent {
                    node: part.name.to_string(),
                    parent: parent.to_string(),
                })?;
                self.stage.world.add_child(parent_key, node)?
            }
            None => self.stage.world.add_node(node)?,
        };

        log::debug!(
            "Created {} '{}' under {}",
            part.shape.kind(),
            part.name,
            part.parent.unwrap_or("<root>")
        );
        self.nodes.insert(part.name.to_string(), key);
        Ok(key)
    }

    /// Key of a node created by this builder
    pub fn key(&self, name: &str) -> Option<NodeKey> {
        self.nodes.get(name).copied()
    }

    /// Finish building, returning every created node by name
    pub fn finish(self) -> HashMap<String, NodeKey> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn part(name: &'static str, parent: Option<&'static str>, position: Vec3) -> BodyPart {
        BodyPart {
            name,
            shape: ShapeTemplate::cuboid(1.0, 1.0, 1.0),
            parent,
            position,
            rotation_z: 0.0,
            pivot: None,
        }
    }

    #[test]
    fn test_empty_builder() {
        let mut stage = Stage::new();
        let nodes = SceneBuilder::new(&mut stage).finish();
        assert!(nodes.is_empty());
        assert!(stage.world.is_empty());
    }

    #[test]
    fn test_part_links_parent() {
        let mut stage = Stage::new();
        let mut builder = SceneBuilder::new(&mut stage);
        let root = builder.part(&part("root", None, Vec3::new(1.0, 0.0, 0.0))).unwrap();
        let child = builder.part(&part("child", Some("root"), Vec3::new(0.0, 2.0, 0.0))).unwrap();
        let nodes = builder.finish();

        assert_eq!(nodes.len(), 2);
        assert_eq!(stage.world.parent_of(child), Some(root));
        let p = stage.world.world_position(child).unwrap();
        assert!(approx_eq(p.x, 1.0) && approx_eq(p.y, 2.0));
    }

    #[test]
    fn test_unknown_parent() {
        let mut stage = Stage::new();
        let mut builder = SceneBuilder::new(&mut stage);
        let err = builder.part(&part("orphan", Some("missing"), Vec3::ZERO)).unwrap_err();
        assert!(matches!(err, SceneError::UnknownParent { .. }));
        drop(builder);
        assert!(stage.world.is_empty());
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut stage = Stage::new();
        let mut builder = SceneBuilder::new(&mut stage);
        builder.part(&part("a", None, Vec3::ZERO)).unwrap();
        let err = builder.part(&part("a", None, Vec3::ZERO)).unwrap_err();
        assert!(matches!(err, SceneError::World(_)));
    }

    #[test]
    fn test_ground_and_materials() {
        let mut stage = Stage::new();
        let mut builder = SceneBuilder::new(&mut stage).with_body_material(Material::GRAY);
        let ground = builder.ground("ground", 30.0, 30.0, Material::BLACK).unwrap();
        let body = builder.part(&part("body", None, Vec3::ZERO)).unwrap();
        builder.finish();

        assert_eq!(stage.world.get(ground).unwrap().material, Material::BLACK);
        assert_eq!(stage.world.get(body).unwrap().material, Material::GRAY);
    }

    #[test]
    fn test_camera_and_light_installed() {
        let mut stage = Stage::new();
        let mut builder = SceneBuilder::new(&mut stage);
        builder
            .camera(ArcRotateCamera::new(0.0, 1.0, 10.0, Vec3::ZERO))
            .light(HemisphericLight::new("light", Vec3::Y));
        builder.finish();

        assert!(stage.camera.is_some());
        assert_eq!(stage.light.as_ref().map(|l| l.name.as_str()), Some("light"));
    }

    #[test]
    fn test_pivot_in_transform() {
        let mut p = part("hand", None, Vec3::ZERO);
        p.pivot = Some(Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(p.transform().pivot, Some(Vec3::new(0.0, 2.5, 0.0)));
    }
}
