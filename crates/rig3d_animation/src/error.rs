//! Animation error types

use std::fmt;

/// Error type for building and starting animations
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A curve was given no keys
    EmptyKeys,
    /// Key frames must be strictly increasing
    NonIncreasingFrames {
        /// Index of the offending key
        index: usize,
        /// Frame of the key before it
        previous: f32,
        /// Frame of the offending key
        frame: f32,
    },
    /// Property path is not one of the animatable properties
    UnsupportedProperty(String),
    /// Frame rate must be finite and positive
    InvalidFrameRate(f32),
    /// Playback range must satisfy `from < to`
    InvalidRange {
        /// Start frame
        from: f32,
        /// End frame
        to: f32,
    },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::EmptyKeys => write!(f, "Animation has no keys"),
            AnimationError::NonIncreasingFrames { index, previous, frame } => write!(
                f,
                "Key {} at frame {} does not come after frame {}",
                index, frame, previous
            ),
            AnimationError::UnsupportedProperty(path) => {
                write!(f, "Unsupported animation property: '{}'", path)
            }
            AnimationError::InvalidFrameRate(rate) => {
                write!(f, "Invalid frame rate: {}", rate)
            }
            AnimationError::InvalidRange { from, to } => {
                write!(f, "Invalid playback range: [{}, {}]", from, to)
            }
        }
    }
}

impl std::error::Error for AnimationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_increasing_display() {
        let err = AnimationError::NonIncreasingFrames { index: 2, previous: 50.0, frame: 40.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("Key 2"));
        assert!(msg.contains("40"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_unsupported_property_display() {
        let err = AnimationError::UnsupportedProperty("material.alpha".to_string());
        assert!(format!("{}", err).contains("material.alpha"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = AnimationError::InvalidRange { from: 10.0, to: 5.0 };
        assert_eq!(format!("{}", err), "Invalid playback range: [10, 5]");
    }
}
