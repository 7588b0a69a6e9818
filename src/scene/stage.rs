//! The stage a scene is built on
//!
//! A [`Stage`] is the rendering context handle handed to scene construction:
//! the node world plus the active camera and light.

use rig3d_core::World;
use rig3d_render::{ArcRotateCamera, HemisphericLight};

/// World, camera and light for one window
#[derive(Default)]
pub struct Stage {
    /// Every node in the scene
    pub world: World,
    /// Active camera, once the scene has created one
    pub camera: Option<ArcRotateCamera>,
    /// Scene light, once the scene has created one
    pub light: Option<HemisphericLight>,
    ready: bool,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a scene has been built on this stage
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stage_is_empty() {
        let stage = Stage::new();
        assert!(stage.world.is_empty());
        assert!(stage.camera.is_none());
        assert!(stage.light.is_none());
        assert!(!stage.is_ready());
    }

    #[test]
    fn test_mark_ready() {
        let mut stage = Stage::new();
        stage.mark_ready();
        assert!(stage.is_ready());
    }
}
