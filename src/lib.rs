//! rig3d - a rigged humanoid viewer
//!
//! Builds a hierarchy of primitives into a humanoid figure, swings its hands
//! on a looping keyframe curve, and shows it through an orbit camera.
//!
//! - [`config`] - Layered application configuration
//! - [`scene`] - Stage, scene builder and the humanoid scene
//! - [`systems`] - Window, render and simulation systems
//! - [`input`] - Key bindings and camera controller setup

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
