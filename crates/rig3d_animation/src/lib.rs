//! Keyframe animation for rig3d
//!
//! This crate provides property animation for scene nodes:
//! - [`Animation`] - A named curve of `(frame, value)` keys driving one property
//! - [`TargetProperty`] - The property path a curve writes (`"rotation.y"`, ...)
//! - [`Animatable`] - One running playback of a set of curves on a target
//! - [`AnimationScheduler`] - Owns all playbacks and advances them each frame
//!
//! The scheduler is generic over the target key so that it does not depend on
//! any particular scene representation.

pub mod animation;
pub mod animatable;
pub mod error;
pub mod property;
pub mod scheduler;

// Re-export commonly used types
pub use animation::{Animation, AnimationType, Keyframe, LoopMode};
pub use animatable::{Animatable, AnimatedValue, PlaybackState};
pub use error::AnimationError;
pub use property::{Channel, TargetProperty};
pub use scheduler::{AnimatableKey, AnimationScheduler};
