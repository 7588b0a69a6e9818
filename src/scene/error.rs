//! Scene construction errors

use std::fmt;

use rig3d_animation::AnimationError;
use rig3d_core::WorldError;

/// Failure while populating a stage
#[derive(Debug)]
pub enum SceneError {
    /// The stage already holds a scene
    AlreadyInitialized,
    /// A part names a parent that has not been created
    UnknownParent { node: String, parent: String },
    /// A node the scene needs was never created
    MissingNode(String),
    /// The scene graph rejected an operation
    World(WorldError),
    /// An animation curve could not be built
    Animation(AnimationError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::AlreadyInitialized => write!(f, "Scene has already been initialized"),
            SceneError::UnknownParent { node, parent } => {
                write!(f, "Node '{}' refers to unknown parent '{}'", node, parent)
            }
            SceneError::MissingNode(name) => write!(f, "Scene has no node named '{}'", name),
            SceneError::World(e) => write!(f, "Scene graph error: {}", e),
            SceneError::Animation(e) => write!(f, "Animation error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::World(e) => Some(e),
            SceneError::Animation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for SceneError {
    fn from(e: WorldError) -> Self {
        SceneError::World(e)
    }
}

impl From<AnimationError> for SceneError {
    fn from(e: AnimationError) -> Self {
        SceneError::Animation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_parent() {
        let err = SceneError::UnknownParent {
            node: "rightShin".to_string(),
            parent: "rightFoot".to_string(),
        };
        assert_eq!(err.to_string(), "Node 'rightShin' refers to unknown parent 'rightFoot'");
    }

    #[test]
    fn test_from_animation_error_keeps_source() {
        let err: SceneError = AnimationError::EmptyKeys.into();
        assert!(matches!(err, SceneError::Animation(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
