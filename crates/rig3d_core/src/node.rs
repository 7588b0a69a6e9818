//! Node and Material types
//!
//! A Node is one rigid primitive in the scene graph: a shape, a local
//! transform, a material and its place in the hierarchy.

use std::sync::Arc;

use bitflags::bitflags;
use rig3d_animation::Animation;
use serde::{Deserialize, Serialize};

use crate::shapes::ShapeTemplate;
use crate::world::NodeKey;
use crate::Transform3D;

bitflags! {
    /// Flags indicating which parts of a node have changed and need updating
    ///
    /// The renderer rebuilds geometry only when some node is dirty.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Local transform or parent has changed
        const TRANSFORM = 1 << 0;
        /// Shape has changed
        const MESH = 1 << 1;
        /// Material has changed
        const MATERIAL = 1 << 2;
        /// All flags set - node needs full rebuild
        const ALL = Self::TRANSFORM.bits() | Self::MESH.bits() | Self::MATERIAL.bits();
    }
}

/// A simple material with just a base color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// Create a new material with the given RGBA color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// White material
    pub const WHITE: Self = Self { base_color: [1.0, 1.0, 1.0, 1.0] };

    /// Black material
    pub const BLACK: Self = Self { base_color: [0.0, 0.0, 0.0, 1.0] };

    /// Gray material
    pub const GRAY: Self = Self { base_color: [0.5, 0.5, 0.5, 1.0] };
}

/// A node in the scene graph
///
/// Each node has:
/// - An optional name (unique within a [`World`](crate::World))
/// - A shape template (the geometry in local space)
/// - A local transform relative to its parent
/// - A material
/// - Its parent and children, maintained by the world
/// - The animations attached to it
/// - Dirty flags (for change tracking)
#[derive(Clone, Debug)]
pub struct Node {
    /// Optional name for this node (for lookup)
    pub name: Option<String>,
    /// The node's shape
    pub shape: ShapeTemplate,
    /// Transform relative to the parent (or the world for roots)
    pub transform: Transform3D,
    /// The node's material
    pub material: Material,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    animations: Vec<Arc<Animation>>,
    dirty: DirtyFlags,
}

impl Node {
    /// Create a new unparented node with the given shape
    pub fn new(shape: ShapeTemplate) -> Self {
        Self {
            name: None,
            shape,
            transform: Transform3D::identity(),
            material: Material::default(),
            parent: None,
            children: Vec::new(),
            animations: Vec::new(),
            dirty: DirtyFlags::ALL, // New nodes are dirty
        }
    }

    /// Set the name of this node
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    /// Set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Name of this node, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parent key, or `None` for a root
    #[inline]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Child keys in insertion order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Animations attached to this node
    pub fn animations(&self) -> &[Arc<Animation>] {
        &self.animations
    }

    /// Attach an animation curve
    ///
    /// The same `Arc` may be attached to several nodes.
    pub fn add_animation(&mut self, animation: Arc<Animation>) {
        self.animations.push(animation);
    }

    // --- Dirty tracking methods ---

    /// Check if this node has any dirty flags set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Get the current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this node as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }

    /// Set the transform and mark it as dirty
    pub fn set_transform(&mut self, transform: Transform3D) {
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Set the material and mark it as dirty
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.mark_dirty(DirtyFlags::MATERIAL);
    }
}
