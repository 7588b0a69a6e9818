//! Scene graph error types

use std::fmt;

use rig3d_animation::AnimationError;

use crate::world::NodeKey;

/// Error type for scene graph operations
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Another node already has this name
    DuplicateName(String),
    /// The key does not refer to a live node
    UnknownNode(NodeKey),
    /// Reparenting would make a node its own ancestor
    CycleDetected {
        /// Node being reparented
        child: NodeKey,
        /// Requested parent
        parent: NodeKey,
    },
    /// Starting an animation failed
    Animation(AnimationError),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::DuplicateName(name) => write!(f, "Duplicate node name: '{}'", name),
            WorldError::UnknownNode(key) => write!(f, "Unknown node: {:?}", key),
            WorldError::CycleDetected { child, parent } => write!(
                f,
                "Parenting {:?} under {:?} would create a cycle",
                child, parent
            ),
            WorldError::Animation(e) => write!(f, "Animation error: {}", e),
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorldError::Animation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AnimationError> for WorldError {
    fn from(e: AnimationError) -> Self {
        WorldError::Animation(e)
    }
}
