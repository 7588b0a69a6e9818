//! The rigged humanoid scene
//!
//! Fourteen rigid parts chained by parenting: the right leg rises from the
//! right foot up to the pelvis and comes back down the left leg, while the
//! spine, chest, hands and head hang off the pelvis. Both hands swing about Y
//! on one shared keyframe curve.

use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use rig3d_animation::{Animation, AnimationType, Keyframe, LoopMode};
use rig3d_core::{AnimatableKey, Material, NodeKey, PlaybackState, ShapeTemplate, World, WorldError};
use rig3d_math::Vec3;
use rig3d_render::{ArcRotateCamera, HemisphericLight};

use super::error::SceneError;
use super::scene_builder::{BodyPart, SceneBuilder};
use super::stage::Stage;
use crate::config::{CameraConfig, SceneConfig};

pub const GROUND_NAME: &str = "ground";
pub const LIGHT_NAME: &str = "light";
pub const RIGHT_HAND: &str = "rightHand";
pub const LEFT_HAND: &str = "leftHand";

/// Name of the shared hand curve
pub const HAND_ANIMATION_NAME: &str = "animationHand";
/// Property the hand curve drives
pub const HAND_ANIMATION_PROPERTY: &str = "rotation.y";
/// Frames per second of the hand curve
pub const HAND_ANIMATION_FPS: f32 = 30.0;
/// Playback range of the hand curve, in frames
pub const HAND_ANIMATION_RANGE: (f32, f32) = (0.0, 150.0);

/// Keys of the hand curve: raise over 50 frames, hold, lower
pub const HAND_KEYS: [Keyframe; 4] = [
    Keyframe::new(0.0, 0.0),
    Keyframe::new(50.0, FRAC_PI_2),
    Keyframe::new(100.0, FRAC_PI_2),
    Keyframe::new(150.0, 0.0),
];

const fn cuboid(width: f32, height: f32, depth: f32) -> ShapeTemplate {
    ShapeTemplate::Box { width, height, depth }
}

const fn cylinder(height: f32, diameter: f32) -> ShapeTemplate {
    ShapeTemplate::Cylinder { height, diameter }
}

/// Every part of the figure, parents before children
pub static HUMANOID_PARTS: [BodyPart; 14] = [
    BodyPart {
        name: "rightFoot",
        shape: cuboid(1.0, 1.0, 3.0),
        parent: None,
        position: Vec3::new(2.0, 0.5, 0.0),
        rotation_z: 0.0,
        pivot: None,
    },
    BodyPart {
        name: "rightShin",
        shape: cuboid(1.0, 3.0, 1.0),
        parent: Some("rightFoot"),
        position: Vec3::new(0.0, 1.5, -1.0),
        rotation_z: 0.0,
        pivot: None,
    },
    BodyPart {
        name: "rightKnee",
        shape: cylinder(1.0, 1.0),
        parent: Some("rightShin"),
        position: Vec3::new(0.0, 2.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "rightHip",
        shape: cuboid(1.0, 3.0, 1.0),
        parent: Some("rightKnee"),
        position: Vec3::new(2.0, 0.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "pelvis",
        shape: cylinder(5.0, 1.0),
        parent: Some("rightHip"),
        position: Vec3::new(2.0, -2.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "leftHip",
        shape: cuboid(1.0, 3.0, 1.0),
        parent: Some("pelvis"),
        position: Vec3::new(2.0, -2.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "leftKnee",
        shape: cylinder(1.0, 1.0),
        parent: Some("leftHip"),
        position: Vec3::new(0.0, -2.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "leftShin",
        shape: cuboid(1.0, 3.0, 1.0),
        parent: Some("leftKnee"),
        position: Vec3::new(-2.0, 0.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    // Feet are roots, like the ground
    BodyPart {
        name: "leftFoot",
        shape: cuboid(1.0, 1.0, 3.0),
        parent: None,
        position: Vec3::new(-2.0, 0.5, 0.0),
        rotation_z: 0.0,
        pivot: None,
    },
    BodyPart {
        name: "spine",
        shape: cuboid(1.0, 8.0, 1.0),
        parent: Some("pelvis"),
        position: Vec3::new(-4.5, 0.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: "chest",
        shape: cylinder(5.0, 1.0),
        parent: Some("spine"),
        position: Vec3::new(0.0, 4.5, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: None,
    },
    BodyPart {
        name: RIGHT_HAND,
        shape: cuboid(1.0, 6.0, 1.0),
        parent: Some("chest"),
        position: Vec3::new(0.0, 0.0, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: Some(Vec3::new(0.0, 2.5, 0.0)),
    },
    BodyPart {
        name: LEFT_HAND,
        shape: cuboid(1.0, 6.0, 1.0),
        parent: Some("chest"),
        position: Vec3::new(2.5, 3.5, 0.0),
        rotation_z: FRAC_PI_2,
        pivot: Some(Vec3::new(2.5, 3.0, 0.0)),
    },
    BodyPart {
        name: "head",
        shape: ShapeTemplate::Sphere { diameter: 3.0 },
        parent: Some("chest"),
        position: Vec3::new(2.0, 0.0, 0.0),
        rotation_z: 0.0,
        pivot: None,
    },
];

/// Handles to everything `on_scene_ready` created
#[derive(Debug, Clone)]
pub struct HumanoidRig {
    /// Body parts by name
    pub nodes: HashMap<String, NodeKey>,
    /// The ground plane
    pub ground: NodeKey,
    /// Curve shared by both hands
    pub hand_animation: Arc<Animation>,
    /// Hand playbacks, right then left; empty when autoplay is off
    pub playbacks: Vec<AnimatableKey>,
}

impl HumanoidRig {
    /// Key of a body part
    pub fn get(&self, name: &str) -> Option<NodeKey> {
        self.nodes.get(name).copied()
    }

    /// Keys of both hands, right then left
    pub fn hands(&self) -> Vec<NodeKey> {
        [RIGHT_HAND, LEFT_HAND].iter().filter_map(|name| self.get(name)).collect()
    }

    /// Pause or resume the hand playbacks
    pub fn set_paused(&self, world: &mut World, paused: bool) {
        for &key in &self.playbacks {
            if let Some(playback) = world.playback_mut(key) {
                if paused {
                    playback.pause();
                } else {
                    playback.resume();
                }
            }
        }
    }

    /// True if any hand playback is paused
    pub fn is_paused(&self, world: &World) -> bool {
        self.playbacks
            .iter()
            .filter_map(|&key| world.playback(key))
            .any(|playback| playback.state() == PlaybackState::Paused)
    }
}

/// Build the hand curve
pub fn hand_animation() -> Result<Animation, SceneError> {
    let animation = Animation::new(
        HAND_ANIMATION_NAME,
        HAND_ANIMATION_PROPERTY,
        HAND_ANIMATION_FPS,
        AnimationType::Float,
        LoopMode::Cycle,
    )?
    .with_keys(HAND_KEYS.to_vec())?;
    Ok(animation)
}

/// Orbit camera described by the camera config
pub fn build_camera(config: &CameraConfig) -> ArcRotateCamera {
    ArcRotateCamera::new(config.alpha, config.beta, config.radius, Vec3::from_array(config.target))
        .with_radius_limits(config.lower_radius_limit, config.upper_radius_limit)
        .with_beta_limits(config.lower_beta_limit, config.upper_beta_limit)
        .with_projection(config.fov, config.near, config.far)
}

/// Populate an empty stage with the humanoid scene
///
/// Creates the camera, the light, the ground and every body part, attaches
/// the shared hand curve to both hands, and (unless autoplay is off) starts
/// looping it over frames 0 to 150. A stage can only be populated once; later
/// calls return [`SceneError::AlreadyInitialized`] and change nothing.
pub fn on_scene_ready(stage: &mut Stage, config: &SceneConfig) -> Result<HumanoidRig, SceneError> {
    if stage.is_ready() {
        log::warn!("Scene is already initialized, ignoring");
        return Err(SceneError::AlreadyInitialized);
    }

    // Everything that can fail is checked before the stage is touched
    let names = std::iter::once(GROUND_NAME).chain(HUMANOID_PARTS.iter().map(|p| p.name));
    for name in names {
        if stage.world.key_of(name).is_some() {
            return Err(WorldError::DuplicateName(name.to_string()).into());
        }
    }
    let hand_animation = Arc::new(hand_animation()?);

    let rendering = &config.rendering;
    let [r, g, b] = rendering.body_color;
    let [gr, gg, gb] = rendering.ground_color;
    let [ground_width, ground_height] = rendering.ground_size;

    let mut builder = SceneBuilder::new(stage).with_body_material(Material::from_rgb(r, g, b));
    builder
        .camera(build_camera(&config.camera))
        .light(
            HemisphericLight::new(LIGHT_NAME, Vec3::from_array(rendering.light_position))
                .with_intensity(rendering.light_intensity),
        );
    let ground = builder.ground(GROUND_NAME, ground_width, ground_height, Material::from_rgb(gr, gg, gb))?;
    for part in HUMANOID_PARTS.iter() {
        builder.part(part)?;
    }
    let mut nodes = builder.finish();
    nodes.remove(GROUND_NAME);

    let mut playbacks = Vec::new();
    for hand in [RIGHT_HAND, LEFT_HAND] {
        let key = nodes
            .get(hand)
            .copied()
            .ok_or_else(|| SceneError::MissingNode(hand.to_string()))?;
        stage.world.attach_animation(key, Arc::clone(&hand_animation))?;

        if config.animation.autoplay {
            let (from, to) = HAND_ANIMATION_RANGE;
            let playback = stage
                .world
                .begin_animation_with_speed(key, from, to, true, config.animation.speed_ratio)?;
            log::debug!("Started '{}' on {} over [{}, {}]", hand_animation.name(), hand, from, to);
            playbacks.push(playback);
        }
    }

    stage.mark_ready();
    log::info!("Scene ready with {} nodes", stage.world.node_count());

    Ok(HumanoidRig {
        nodes,
        ground,
        hand_animation,
        playbacks,
    })
}
