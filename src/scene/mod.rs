//! Scene construction
//!
//! This module builds the humanoid scene on a [`Stage`]: the camera, the
//! light, the ground and the rigged figure with its hand animation.

mod error;
mod humanoid;
mod scene_builder;
mod stage;

pub use error::SceneError;
pub use humanoid::{
    build_camera, hand_animation, on_scene_ready, HumanoidRig, GROUND_NAME, HAND_ANIMATION_FPS,
    HAND_ANIMATION_NAME, HAND_ANIMATION_PROPERTY, HAND_ANIMATION_RANGE, HAND_KEYS, HUMANOID_PARTS,
    LEFT_HAND, LIGHT_NAME, RIGHT_HAND,
};
pub use scene_builder::{BodyPart, SceneBuilder};
pub use stage::Stage;
