//! World container for nodes
//!
//! The World owns the scene graph and the animation playbacks that drive it.
//! World matrices are composed on demand from the parent chain, so changing a
//! parent's local transform moves its whole subtree.

use std::collections::HashMap;
use std::sync::Arc;

use rig3d_animation::{Animatable, AnimatableKey, Animation, AnimationScheduler};
use rig3d_math::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};

use crate::error::WorldError;
use crate::node::{DirtyFlags, Node};

new_key_type! {
    /// Generational key for a node in the world
    pub struct NodeKey;
}

/// The scene graph containing all nodes
#[derive(Default)]
pub struct World {
    /// All nodes (using generational keys)
    nodes: SlotMap<NodeKey, Node>,
    /// Name index for named nodes
    names: HashMap<String, NodeKey>,
    /// Running animation playbacks
    scheduler: AnimationScheduler<NodeKey>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world with pre-allocated capacity for nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            names: HashMap::with_capacity(capacity),
            scheduler: AnimationScheduler::new(),
        }
    }

    /// Add a root node, returning its key
    ///
    /// Fails if another node already has the same name.
    pub fn add_node(&mut self, mut node: Node) -> Result<NodeKey, WorldError> {
        if let Some(name) = node.name() {
            if self.names.contains_key(name) {
                return Err(WorldError::DuplicateName(name.to_string()));
            }
        }

        node.parent = None;
        node.children.clear();
        let name = node.name.clone();
        let key = self.nodes.insert(node);
        if let Some(name) = name {
            self.names.insert(name, key);
        }
        Ok(key)
    }

    /// Add a node as a child of `parent`
    pub fn add_child(&mut self, parent: NodeKey, node: Node) -> Result<NodeKey, WorldError> {
        if !self.nodes.contains_key(parent) {
            return Err(WorldError::UnknownNode(parent));
        }
        let key = self.add_node(node)?;
        self.set_parent(key, Some(parent))?;
        Ok(key)
    }

    /// Reparent `child` under `parent`, or make it a root with `None`
    ///
    /// The local transform is kept, so the node moves with its new parent.
    pub fn set_parent(&mut self, child: NodeKey, parent: Option<NodeKey>) -> Result<(), WorldError> {
        if !self.nodes.contains_key(child) {
            return Err(WorldError::UnknownNode(child));
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(WorldError::UnknownNode(parent));
            }
            // Walk up from the new parent; meeting the child means a cycle
            let mut current = Some(parent);
            while let Some(key) = current {
                if key == child {
                    log::warn!("Rejected reparenting {:?} under its descendant {:?}", child, parent);
                    return Err(WorldError::CycleDetected { child, parent });
                }
                current = self.parent_of(key);
            }
        }

        if let Some(old) = self.parent_of(child) {
            if let Some(old_parent) = self.nodes.get_mut(old) {
                old_parent.children.retain(|&k| k != child);
            }
        }
        if let Some(parent) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.push(child);
            }
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = parent;
            node.mark_dirty(DirtyFlags::TRANSFORM);
        }
        Ok(())
    }

    /// Get a reference to a node by key
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Get a mutable reference to a node by key
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Find a node by name
    pub fn get_by_name(&self, name: &str) -> Option<&Node> {
        self.key_of(name).and_then(|key| self.nodes.get(key))
    }

    /// Key of the node with this name
    pub fn key_of(&self, name: &str) -> Option<NodeKey> {
        self.names.get(name).copied()
    }

    /// Parent of a node
    pub fn parent_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.parent)
    }

    /// Children of a node (empty for unknown keys)
    pub fn children_of(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes.get(key).map(|n| n.children()).unwrap_or(&[])
    }

    /// All nodes without a parent
    pub fn roots(&self) -> Vec<NodeKey> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(key, _)| key)
            .collect()
    }

    /// Get the number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over keys and nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes.iter()
    }

    /// World matrix of a node: parent world matrix times local matrix
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let mut node = self.nodes.get(key)?;
        let mut matrix = node.transform.local_matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            matrix = node.transform.local_matrix() * matrix;
        }
        Some(matrix)
    }

    /// World-space position of a node's local origin
    pub fn world_position(&self, key: NodeKey) -> Option<Vec3> {
        self.world_matrix(key).map(|m| m.transform_point3(Vec3::ZERO))
    }

    // --- Animation ---

    /// Attach an animation curve to a node
    pub fn attach_animation(&mut self, key: NodeKey, animation: Arc<Animation>) -> Result<(), WorldError> {
        let node = self.nodes.get_mut(key).ok_or(WorldError::UnknownNode(key))?;
        node.add_animation(animation);
        Ok(())
    }

    /// Play every animation attached to a node over `[from, to]`
    ///
    /// Any playback already running on the node is replaced.
    pub fn begin_animation(
        &mut self,
        key: NodeKey,
        from: f32,
        to: f32,
        looping: bool,
    ) -> Result<AnimatableKey, WorldError> {
        self.begin_animation_with_speed(key, from, to, looping, 1.0)
    }

    /// [`begin_animation`](World::begin_animation) with a speed multiplier
    pub fn begin_animation_with_speed(
        &mut self,
        key: NodeKey,
        from: f32,
        to: f32,
        looping: bool,
        speed_ratio: f32,
    ) -> Result<AnimatableKey, WorldError> {
        let node = self.nodes.get(key).ok_or(WorldError::UnknownNode(key))?;
        let animations = node.animations().to_vec();
        let playback = self.scheduler.begin(key, animations, from, to, looping, speed_ratio)?;
        Ok(playback)
    }

    /// First playback running on a node
    pub fn animatable(&self, key: NodeKey) -> Option<&Animatable<NodeKey>> {
        self.scheduler
            .keys_for(key)
            .first()
            .and_then(|&playback| self.scheduler.get(playback))
    }

    /// Get a playback by key
    pub fn playback(&self, key: AnimatableKey) -> Option<&Animatable<NodeKey>> {
        self.scheduler.get(key)
    }

    /// Get a mutable playback by key
    pub fn playback_mut(&mut self, key: AnimatableKey) -> Option<&mut Animatable<NodeKey>> {
        self.scheduler.get_mut(key)
    }

    /// Stop every playback on a node, returning how many were stopped
    pub fn stop_animation(&mut self, key: NodeKey) -> usize {
        self.scheduler.stop_target(key)
    }

    /// The animation scheduler
    pub fn scheduler(&self) -> &AnimationScheduler<NodeKey> {
        &self.scheduler
    }

    /// Advance animation playback by `dt` seconds
    ///
    /// Sampled values are written into node transforms, and touched nodes are
    /// marked dirty.
    pub fn update(&mut self, dt: f32) {
        for value in self.scheduler.update(dt) {
            if let Some(node) = self.nodes.get_mut(value.target) {
                node.transform.set(value.property, value.value);
                node.mark_dirty(DirtyFlags::TRANSFORM);
            }
        }
    }

    // --- Dirty tracking ---

    /// Check if any node is dirty
    pub fn has_dirty_nodes(&self) -> bool {
        self.nodes.values().any(|n| n.is_dirty())
    }

    /// Clear dirty flags on every node
    pub fn clear_all_dirty(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_dirty();
        }
    }
}
