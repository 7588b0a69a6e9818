//! Integration tests for the humanoid scene
//!
//! Builds the scene on a fresh stage and checks the hierarchy, the shared
//! hand curve, its playback and the camera limits.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};
use std::sync::Arc;

use rig3d::config::SceneConfig;
use rig3d::scene::{on_scene_ready, HumanoidRig, SceneError, Stage, GROUND_NAME, LEFT_HAND, RIGHT_HAND};
use rig3d_core::{Material, PlaybackState, ShapeTemplate, Vec3};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn build() -> (Stage, HumanoidRig) {
    let mut stage = Stage::new();
    let rig = on_scene_ready(&mut stage, &SceneConfig::default()).unwrap();
    (stage, rig)
}

fn cuboid(width: f32, height: f32, depth: f32) -> ShapeTemplate {
    ShapeTemplate::Box { width, height, depth }
}

fn cylinder(height: f32, diameter: f32) -> ShapeTemplate {
    ShapeTemplate::Cylinder { height, diameter }
}

struct Expected {
    name: &'static str,
    shape: ShapeTemplate,
    parent: Option<&'static str>,
    position: [f32; 3],
    rotation_z: f32,
    pivot: Option<[f32; 3]>,
}

fn expected_parts() -> Vec<Expected> {
    let e = |name, shape, parent, position, rotation_z, pivot| Expected {
        name,
        shape,
        parent,
        position,
        rotation_z,
        pivot,
    };
    vec![
        e("rightFoot", cuboid(1.0, 1.0, 3.0), None, [2.0, 0.5, 0.0], 0.0, None),
        e("rightShin", cuboid(1.0, 3.0, 1.0), Some("rightFoot"), [0.0, 1.5, -1.0], 0.0, None),
        e("rightKnee", cylinder(1.0, 1.0), Some("rightShin"), [0.0, 2.0, 0.0], FRAC_PI_2, None),
        e("rightHip", cuboid(1.0, 3.0, 1.0), Some("rightKnee"), [2.0, 0.0, 0.0], FRAC_PI_2, None),
        e("pelvis", cylinder(5.0, 1.0), Some("rightHip"), [2.0, -2.0, 0.0], FRAC_PI_2, None),
        e("leftHip", cuboid(1.0, 3.0, 1.0), Some("pelvis"), [2.0, -2.0, 0.0], FRAC_PI_2, None),
        e("leftKnee", cylinder(1.0, 1.0), Some("leftHip"), [0.0, -2.0, 0.0], FRAC_PI_2, None),
        e("leftShin", cuboid(1.0, 3.0, 1.0), Some("leftKnee"), [-2.0, 0.0, 0.0], FRAC_PI_2, None),
        e("leftFoot", cuboid(1.0, 1.0, 3.0), None, [-2.0, 0.5, 0.0], 0.0, None),
        e("spine", cuboid(1.0, 8.0, 1.0), Some("pelvis"), [-4.5, 0.0, 0.0], FRAC_PI_2, None),
        e("chest", cylinder(5.0, 1.0), Some("spine"), [0.0, 4.5, 0.0], FRAC_PI_2, None),
        e("rightHand", cuboid(1.0, 6.0, 1.0), Some("chest"), [0.0, 0.0, 0.0], FRAC_PI_2, Some([0.0, 2.5, 0.0])),
        e("leftHand", cuboid(1.0, 6.0, 1.0), Some("chest"), [2.5, 3.5, 0.0], FRAC_PI_2, Some([2.5, 3.0, 0.0])),
        e("head", ShapeTemplate::Sphere { diameter: 3.0 }, Some("chest"), [2.0, 0.0, 0.0], 0.0, None),
    ]
}

#[test]
fn test_every_part_matches_table() {
    let (stage, rig) = build();
    let world = &stage.world;

    for expected in expected_parts() {
        let key = rig.get(expected.name).unwrap_or_else(|| panic!("missing {}", expected.name));
        let node = world.get(key).unwrap();

        assert_eq!(node.name(), Some(expected.name));
        assert_eq!(node.shape, expected.shape, "shape of {}", expected.name);

        let parent_name = world.parent_of(key).and_then(|p| world.get(p)).and_then(|p| p.name());
        assert_eq!(parent_name, expected.parent, "parent of {}", expected.name);

        assert_eq!(node.transform.position, Vec3::from_array(expected.position), "position of {}", expected.name);
        assert!(approx_eq(node.transform.rotation.z, expected.rotation_z), "rotation.z of {}", expected.name);
        assert_eq!(node.transform.rotation.x, 0.0);
        assert_eq!(node.transform.rotation.y, 0.0);
        assert_eq!(node.transform.pivot, expected.pivot.map(Vec3::from_array), "pivot of {}", expected.name);
    }
}

#[test]
fn test_exactly_one_node_per_name() {
    let (stage, rig) = build();
    assert_eq!(rig.nodes.len(), 14);
    assert_eq!(stage.world.node_count(), 15);

    let mut names: Vec<&str> = stage.world.iter().filter_map(|(_, n)| n.name()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_ground_and_light() {
    let (stage, rig) = build();
    let ground = stage.world.get(rig.ground).unwrap();
    assert_eq!(ground.name(), Some(GROUND_NAME));
    assert_eq!(ground.shape, ShapeTemplate::Ground { width: 30.0, height: 30.0 });
    assert_eq!(ground.material, Material::from_rgb(0.0, 0.0, 0.0));
    assert!(stage.world.parent_of(rig.ground).is_none());

    let light = stage.light.as_ref().unwrap();
    assert_eq!(light.direction, Vec3::new(0.0, 100.0, 0.0));
    assert_eq!(light.direction(), Vec3::Y);
}

#[test]
fn test_hand_curve_keys() {
    let (_, rig) = build();
    let keys = rig.hand_animation.keys();
    let frames: Vec<f32> = keys.iter().map(|k| k.frame).collect();
    let values: Vec<f32> = keys.iter().map(|k| k.value).collect();

    assert_eq!(frames, vec![0.0, 50.0, 100.0, 150.0]);
    assert_eq!(values, vec![0.0, FRAC_PI_2, FRAC_PI_2, 0.0]);
    assert_eq!(rig.hand_animation.frame_rate(), 30.0);
    assert_eq!(rig.hand_animation.property().path(), "rotation.y");
}

#[test]
fn test_hands_share_one_curve() {
    let (stage, rig) = build();
    let right = stage.world.get(rig.get(RIGHT_HAND).unwrap()).unwrap();
    let left = stage.world.get(rig.get(LEFT_HAND).unwrap()).unwrap();

    assert_eq!(right.animations().len(), 1);
    assert_eq!(left.animations().len(), 1);
    assert!(Arc::ptr_eq(&right.animations()[0], &left.animations()[0]));
    assert!(Arc::ptr_eq(&right.animations()[0], &rig.hand_animation));
}

#[test]
fn test_only_hands_are_animated() {
    let (stage, rig) = build();
    for (name, &key) in &rig.nodes {
        let animated = !stage.world.get(key).unwrap().animations().is_empty();
        assert_eq!(animated, name == RIGHT_HAND || name == LEFT_HAND, "{}", name);
    }
}

#[test]
fn test_playback_loops_over_full_range() {
    let (stage, rig) = build();
    assert_eq!(rig.playbacks.len(), 2);

    for hand in rig.hands() {
        let playback = stage.world.animatable(hand).unwrap();
        assert_eq!(playback.from_frame(), 0.0);
        assert_eq!(playback.to_frame(), 150.0);
        assert!(playback.is_looping());
        assert_eq!(playback.state(), PlaybackState::Playing);
    }
}

#[test]
fn test_hand_rotation_wraps_after_one_cycle() {
    let (mut stage, rig) = build();
    let hand = rig.get(RIGHT_HAND).unwrap();

    // 0.5 s at 30 fps = frame 15
    stage.world.update(0.5);
    let first = stage.world.get(hand).unwrap().transform.rotation.y;

    // One full cycle (150 frames = 5 s) later
    stage.world.update(5.0);
    let second = stage.world.get(hand).unwrap().transform.rotation.y;

    assert!(approx_eq(first, second), "{} vs {}", first, second);
    assert!(stage.world.animatable(hand).is_some());
}

#[test]
fn test_hands_keep_swinging_after_a_week() {
    let (mut stage, rig) = build();
    let hand = rig.get(RIGHT_HAND).unwrap();

    // A whole number of cycles, back at frame 0
    stage.world.update(600_000.0);
    let rested = stage.world.get(hand).unwrap().transform.rotation.y;
    assert!(approx_eq(rested, 0.0), "{}", rested);

    for _ in 0..60 {
        stage.world.update(1.0 / 60.0);
    }
    let raised = stage.world.get(hand).unwrap().transform.rotation.y;
    assert!(approx_eq(raised, stage.world.get(hand).unwrap().animations()[0].evaluate(30.0)));
    assert!(raised > 0.0);
}

#[test]
fn test_sampling_midway_and_monotonic() {
    let (_, rig) = build();
    let curve = &rig.hand_animation;

    let mid = curve.evaluate(25.0);
    assert!(mid > 0.0 && mid < FRAC_PI_2);

    let mut previous = curve.evaluate(0.0);
    for frame in 1..=50 {
        let value = curve.evaluate(frame as f32);
        assert!(value >= previous, "frame {}", frame);
        previous = value;
    }
    assert!(approx_eq(curve.evaluate(75.0), FRAC_PI_2));
    assert!(approx_eq(curve.evaluate(150.0), 0.0));
}

#[test]
fn test_both_hands_move_together() {
    let (mut stage, rig) = build();
    stage.world.update(1.0);

    let hands = rig.hands();
    let right = stage.world.get(hands[0]).unwrap().transform.rotation.y;
    let left = stage.world.get(hands[1]).unwrap().transform.rotation.y;
    assert!(right > 0.0);
    assert!(approx_eq(right, left));
}

#[test]
fn test_camera_initial_orbit() {
    let (stage, _) = build();
    let camera = stage.camera.as_ref().unwrap();

    assert!(approx_eq(camera.alpha(), FRAC_PI_4));
    assert!(approx_eq(camera.beta(), FRAC_PI_3));
    assert!(approx_eq(camera.radius(), 40.0));
    assert_eq!(camera.target(), Vec3::new(20.0, 15.0, 20.0));
    assert_eq!(camera.radius_limits(), (Some(5.0), Some(100.0)));
}

#[test]
fn test_camera_beta_clamped() {
    let (mut stage, _) = build();
    let camera = stage.camera.as_mut().unwrap();

    camera.set_beta(0.0);
    assert!(approx_eq(camera.beta(), FRAC_PI_6));
    camera.set_beta(3.0);
    assert!(approx_eq(camera.beta(), FRAC_PI_2));
    camera.set_beta(1.0);
    assert!(approx_eq(camera.beta(), 1.0));
}

#[test]
fn test_camera_radius_clamped() {
    let (mut stage, _) = build();
    let camera = stage.camera.as_mut().unwrap();

    camera.set_radius(1.0);
    assert!(approx_eq(camera.radius(), 5.0));
    camera.set_radius(500.0);
    assert!(approx_eq(camera.radius(), 100.0));
}

#[test]
fn test_second_call_changes_nothing() {
    let (mut stage, rig) = build();
    let count = stage.world.node_count();
    let playbacks = stage.world.scheduler().len();

    let err = on_scene_ready(&mut stage, &SceneConfig::default()).unwrap_err();
    assert!(matches!(err, SceneError::AlreadyInitialized));
    assert_eq!(stage.world.node_count(), count);
    assert_eq!(stage.world.scheduler().len(), playbacks);
    assert_eq!(stage.world.key_of(RIGHT_HAND), rig.get(RIGHT_HAND));
}

#[test]
fn test_feet_are_roots() {
    let (stage, rig) = build();
    let mut roots = stage.world.roots();
    roots.sort();
    let mut expected = vec![rig.get("rightFoot").unwrap(), rig.get("leftFoot").unwrap(), rig.ground];
    expected.sort();
    assert_eq!(roots, expected);
}
