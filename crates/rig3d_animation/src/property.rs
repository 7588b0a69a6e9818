//! Animatable property paths
//!
//! A curve targets exactly one scalar component of a node transform, named by
//! a dotted path such as `"rotation.y"`.

use std::fmt;
use std::str::FromStr;

use crate::error::AnimationError;

/// Which transform vector a property belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Local position
    Position,
    /// Local Euler rotation
    Rotation,
    /// Local scaling
    Scaling,
}

/// A scalar transform component that a curve can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetProperty {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScalingX,
    ScalingY,
    ScalingZ,
}

impl TargetProperty {
    /// All supported properties
    pub const ALL: [TargetProperty; 9] = [
        TargetProperty::PositionX,
        TargetProperty::PositionY,
        TargetProperty::PositionZ,
        TargetProperty::RotationX,
        TargetProperty::RotationY,
        TargetProperty::RotationZ,
        TargetProperty::ScalingX,
        TargetProperty::ScalingY,
        TargetProperty::ScalingZ,
    ];

    /// Parse a dotted property path
    pub fn parse(path: &str) -> Result<Self, AnimationError> {
        Self::ALL
            .into_iter()
            .find(|p| p.path() == path)
            .ok_or_else(|| AnimationError::UnsupportedProperty(path.to_string()))
    }

    /// The dotted path for this property
    pub fn path(&self) -> &'static str {
        match self {
            TargetProperty::PositionX => "position.x",
            TargetProperty::PositionY => "position.y",
            TargetProperty::PositionZ => "position.z",
            TargetProperty::RotationX => "rotation.x",
            TargetProperty::RotationY => "rotation.y",
            TargetProperty::RotationZ => "rotation.z",
            TargetProperty::ScalingX => "scaling.x",
            TargetProperty::ScalingY => "scaling.y",
            TargetProperty::ScalingZ => "scaling.z",
        }
    }

    /// The transform vector this property lives in
    pub fn channel(&self) -> Channel {
        match self {
            TargetProperty::PositionX | TargetProperty::PositionY | TargetProperty::PositionZ => {
                Channel::Position
            }
            TargetProperty::RotationX | TargetProperty::RotationY | TargetProperty::RotationZ => {
                Channel::Rotation
            }
            TargetProperty::ScalingX | TargetProperty::ScalingY | TargetProperty::ScalingZ => {
                Channel::Scaling
            }
        }
    }

    /// Component index within the channel vector (0 = x, 1 = y, 2 = z)
    pub fn component(&self) -> usize {
        match self {
            TargetProperty::PositionX | TargetProperty::RotationX | TargetProperty::ScalingX => 0,
            TargetProperty::PositionY | TargetProperty::RotationY | TargetProperty::ScalingY => 1,
            TargetProperty::PositionZ | TargetProperty::RotationZ | TargetProperty::ScalingZ => 2,
        }
    }
}

impl FromStr for TargetProperty {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
