//! Integration tests for the animation pipeline
//!
//! These tests verify that playback flows through the scene graph:
//! 1. A shared curve drives several nodes identically
//! 2. Sampled rotations move pivoted children in world space
//! 3. Looping playback stays inside its frame range
//! 4. Dirty flags are raised by animation updates

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use rig3d_animation::{Animation, AnimationType, Keyframe, LoopMode, PlaybackState};
use rig3d_core::{Material, Node, ShapeTemplate, Transform3D, Vec3, World};

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn wave() -> Arc<Animation> {
    let anim = Animation::new("wave", "rotation.y", 30.0, AnimationType::Float, LoopMode::Cycle)
        .unwrap()
        .with_keys(vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(50.0, FRAC_PI_2),
            Keyframe::new(100.0, FRAC_PI_2),
            Keyframe::new(150.0, 0.0),
        ])
        .unwrap();
    Arc::new(anim)
}

fn arm(name: &str, position: Vec3, pivot: Vec3) -> Node {
    Node::new(ShapeTemplate::cuboid(1.0, 6.0, 1.0))
        .with_name(name)
        .with_transform(Transform3D::from_position(position).with_pivot(pivot).with_rotation_z(FRAC_PI_2))
        .with_material(Material::GRAY)
}

// ==================== Shared Curve Tests ====================

#[test]
fn test_shared_curve_drives_both_targets_identically() {
    let mut world = World::new();
    let body = world.add_node(Node::new(ShapeTemplate::cylinder(5.0, 1.0)).with_name("body")).unwrap();
    let left = world.add_child(body, arm("left", Vec3::new(2.5, 3.5, 0.0), Vec3::new(2.5, 3.0, 0.0))).unwrap();
    let right = world.add_child(body, arm("right", Vec3::ZERO, Vec3::new(0.0, 2.5, 0.0))).unwrap();

    let curve = wave();
    world.attach_animation(left, curve.clone()).unwrap();
    world.attach_animation(right, curve.clone()).unwrap();
    world.begin_animation(left, 0.0, 150.0, true).unwrap();
    world.begin_animation(right, 0.0, 150.0, true).unwrap();

    for _ in 0..90 {
        world.update(1.0 / 60.0);
        let l = world.get(left).unwrap().transform.rotation.y;
        let r = world.get(right).unwrap().transform.rotation.y;
        assert!(approx_eq(l, r), "mirrored arms diverged: {} vs {}", l, r);
    }

    let shared = &world.get(left).unwrap().animations()[0];
    assert!(Arc::ptr_eq(shared, &world.get(right).unwrap().animations()[0]));
    assert!(Arc::ptr_eq(shared, &curve));
}

// ==================== Transform Propagation Tests ====================

#[test]
fn test_animated_rotation_moves_pivoted_node() {
    let mut world = World::new();
    let pivot = Vec3::new(0.0, 2.5, 0.0);
    let hand = world.add_node(arm("hand", Vec3::ZERO, pivot)).unwrap();
    world.attach_animation(hand, wave()).unwrap();
    world.begin_animation(hand, 0.0, 150.0, true).unwrap();

    let tip_local = Vec3::new(0.0, 3.0, 0.0);
    let before = world.world_matrix(hand).unwrap().transform_point3(tip_local);

    // 50 frames at 30 fps reaches the first plateau
    world.update(50.0 / 30.0);
    let node = world.get(hand).unwrap();
    assert!(approx_eq(node.transform.rotation.y, FRAC_PI_2));
    assert!(approx_eq(node.transform.rotation.z, FRAC_PI_2));

    let after = world.world_matrix(hand).unwrap().transform_point3(tip_local);
    assert!(!vec_approx_eq(before, after));

    // The pivot point itself never moves: T(-p) * M * T(p) maps -p to position - p
    let anchor = world.world_matrix(hand).unwrap().transform_point3(-pivot);
    assert!(vec_approx_eq(anchor, -pivot));
}

#[test]
fn test_child_follows_animated_parent() {
    let mut world = World::new();
    let parent = world
        .add_node(Node::new(ShapeTemplate::sphere(1.0)).with_name("parent"))
        .unwrap();
    let child = world
        .add_child(
            parent,
            Node::new(ShapeTemplate::sphere(1.0))
                .with_name("child")
                .with_transform(Transform3D::from_position(Vec3::new(1.0, 0.0, 0.0))),
        )
        .unwrap();
    world.attach_animation(parent, wave()).unwrap();
    world.begin_animation(parent, 0.0, 150.0, true).unwrap();

    world.update(50.0 / 30.0);
    // Yaw of pi/2 swings +X onto -Z
    let pos = world.world_position(child).unwrap();
    assert!(vec_approx_eq(pos, Vec3::new(0.0, 0.0, -1.0)));
}

// ==================== Looping Tests ====================

#[test]
fn test_looping_playback_stays_in_range() {
    let mut world = World::new();
    let key = world.add_node(arm("hand", Vec3::ZERO, Vec3::ZERO)).unwrap();
    world.attach_animation(key, wave()).unwrap();
    world.begin_animation(key, 0.0, 150.0, true).unwrap();

    for _ in 0..1000 {
        world.update(1.0 / 60.0);
        let animatable = world.animatable(key).unwrap();
        assert_eq!(animatable.state(), PlaybackState::Playing);
        let frame = animatable.current_frame();
        assert!((0.0..=150.0).contains(&frame));
        let value = world.get(key).unwrap().transform.rotation.y;
        assert!((-EPSILON..=FRAC_PI_2 + EPSILON).contains(&value));
    }
}

#[test]
fn test_non_looping_playback_finishes() {
    let mut world = World::new();
    let key = world.add_node(arm("hand", Vec3::ZERO, Vec3::ZERO)).unwrap();
    world.attach_animation(key, wave()).unwrap();
    world.begin_animation(key, 0.0, 50.0, false).unwrap();

    world.update(10.0);
    assert!(world.animatable(key).is_none());
    assert!(approx_eq(world.get(key).unwrap().transform.rotation.y, FRAC_PI_2));
}

// ==================== Dirty Tracking Tests ====================

#[test]
fn test_update_marks_only_animated_nodes_dirty() {
    let mut world = World::new();
    let still = world.add_node(Node::new(ShapeTemplate::ground(30.0, 30.0)).with_name("ground")).unwrap();
    let moving = world.add_node(arm("hand", Vec3::ZERO, Vec3::ZERO)).unwrap();
    world.attach_animation(moving, wave()).unwrap();
    world.begin_animation(moving, 0.0, 150.0, true).unwrap();
    world.clear_all_dirty();

    world.update(0.1);
    assert!(world.get(moving).unwrap().is_dirty());
    assert!(!world.get(still).unwrap().is_dirty());
}
