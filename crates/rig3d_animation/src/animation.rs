//! Keyframe animation curves
//!
//! An [`Animation`] is a named, typed sequence of `(frame, value)` keys that
//! drives one [`TargetProperty`]. Frames are in animation units; the frame
//! rate converts them to seconds. Values between keys are interpolated
//! linearly.
//!
//! Curves are immutable once shared: nodes hold them as `Arc<Animation>`, so
//! several nodes can be driven by the very same instance.

use crate::error::AnimationError;
use crate::property::TargetProperty;

/// A single key of a curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Frame number
    pub frame: f32,
    /// Value at that frame
    pub value: f32,
}

impl Keyframe {
    /// Create a new key
    #[inline]
    pub const fn new(frame: f32, value: f32) -> Self {
        Self { frame, value }
    }
}

/// Value type carried by a curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// A single `f32`
    #[default]
    Float,
}

/// What a looping playback does when it wraps around
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Restart from the first frame, offsetting values by the total change of
    /// each completed loop
    Relative,
    /// Restart from the first frame
    #[default]
    Cycle,
    /// Hold the final value; never loops
    Constant,
    /// Play forward, then backward, alternately
    Yoyo,
}

/// A keyframe curve driving one property
#[derive(Clone, Debug)]
pub struct Animation {
    name: String,
    property: TargetProperty,
    frame_rate: f32,
    data_type: AnimationType,
    loop_mode: LoopMode,
    keys: Vec<Keyframe>,
}

impl Animation {
    /// Create a curve with no keys
    ///
    /// `property` is a dotted path such as `"rotation.y"`; `frame_rate` is in
    /// frames per second and must be positive.
    pub fn new(
        name: impl Into<String>,
        property: &str,
        frame_rate: f32,
        data_type: AnimationType,
        loop_mode: LoopMode,
    ) -> Result<Self, AnimationError> {
        let property = TargetProperty::parse(property)?;
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(AnimationError::InvalidFrameRate(frame_rate));
        }

        Ok(Self {
            name: name.into(),
            property,
            frame_rate,
            data_type,
            loop_mode,
            keys: Vec::new(),
        })
    }

    /// Replace all keys
    ///
    /// Keys must be non-empty with strictly increasing frames. On error the
    /// existing keys are left untouched.
    pub fn set_keys(&mut self, keys: Vec<Keyframe>) -> Result<(), AnimationError> {
        if keys.is_empty() {
            return Err(AnimationError::EmptyKeys);
        }
        for (index, pair) in keys.windows(2).enumerate() {
            // Negated comparison also rejects NaN frames
            if !(pair[1].frame > pair[0].frame) {
                return Err(AnimationError::NonIncreasingFrames {
                    index: index + 1,
                    previous: pair[0].frame,
                    frame: pair[1].frame,
                });
            }
        }
        self.keys = keys;
        Ok(())
    }

    /// Builder form of [`set_keys`](Animation::set_keys)
    pub fn with_keys(mut self, keys: Vec<Keyframe>) -> Result<Self, AnimationError> {
        self.set_keys(keys)?;
        Ok(self)
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property this curve drives
    #[inline]
    pub fn property(&self) -> TargetProperty {
        self.property
    }

    /// Frames per second
    #[inline]
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Value type
    #[inline]
    pub fn data_type(&self) -> AnimationType {
        self.data_type
    }

    /// Loop behaviour
    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// The keys, ordered by frame
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Frame of the first key (0 if there are no keys)
    pub fn first_frame(&self) -> f32 {
        self.keys.first().map(|k| k.frame).unwrap_or(0.0)
    }

    /// Frame of the last key (0 if there are no keys)
    pub fn last_frame(&self) -> f32 {
        self.keys.last().map(|k| k.frame).unwrap_or(0.0)
    }

    /// Sample the curve at `frame`
    ///
    /// Frames before the first key or after the last one clamp to the end
    /// values. An empty curve evaluates to 0.
    pub fn evaluate(&self, frame: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if frame <= first.frame {
            return first.value;
        }
        if frame >= last.frame {
            return last.value;
        }

        // First key strictly after `frame`; the clamps above keep it in 1..len
        let next = self.keys.partition_point(|k| k.frame <= frame);
        let k0 = self.keys[next - 1];
        let k1 = self.keys[next];
        let t = (frame - k0.frame) / (k1.frame - k0.frame);
        k0.value + (k1.value - k0.value) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn hand_curve() -> Animation {
        Animation::new("animationHand", "rotation.y", 30.0, AnimationType::Float, LoopMode::Cycle)
            .unwrap()
            .with_keys(vec![
                Keyframe::new(0.0, 0.0),
                Keyframe::new(50.0, FRAC_PI_2),
                Keyframe::new(100.0, FRAC_PI_2),
                Keyframe::new(150.0, 0.0),
            ])
            .unwrap()
    }

    #[test]
    fn test_new_parses_property() {
        let anim = hand_curve();
        assert_eq!(anim.property(), TargetProperty::RotationY);
        assert_eq!(anim.frame_rate(), 30.0);
        assert_eq!(anim.loop_mode(), LoopMode::Cycle);
        assert_eq!(anim.data_type(), AnimationType::Float);
        assert_eq!(anim.name(), "animationHand");
    }

    #[test]
    fn test_invalid_frame_rate() {
        let err = Animation::new("a", "rotation.y", 0.0, AnimationType::Float, LoopMode::Cycle)
            .unwrap_err();
        assert_eq!(err, AnimationError::InvalidFrameRate(0.0));
    }

    #[test]
    fn test_unsupported_property() {
        let result = Animation::new("a", "visibility", 30.0, AnimationType::Float, LoopMode::Cycle);
        assert!(matches!(result, Err(AnimationError::UnsupportedProperty(_))));
    }

    #[test]
    fn test_keys_must_increase() {
        let mut anim = hand_curve();
        let err = anim
            .set_keys(vec![Keyframe::new(0.0, 0.0), Keyframe::new(50.0, 1.0), Keyframe::new(50.0, 2.0)])
            .unwrap_err();
        assert_eq!(err, AnimationError::NonIncreasingFrames { index: 2, previous: 50.0, frame: 50.0 });
        // Previous keys survive a rejected update
        assert_eq!(anim.keys().len(), 4);
    }

    #[test]
    fn test_empty_keys_rejected() {
        let mut anim = hand_curve();
        assert_eq!(anim.set_keys(Vec::new()), Err(AnimationError::EmptyKeys));
    }

    #[test]
    fn test_evaluate_at_keys() {
        let anim = hand_curve();
        assert!(approx_eq(anim.evaluate(0.0), 0.0));
        assert!(approx_eq(anim.evaluate(50.0), FRAC_PI_2));
        assert!(approx_eq(anim.evaluate(100.0), FRAC_PI_2));
        assert!(approx_eq(anim.evaluate(150.0), 0.0));
    }

    #[test]
    fn test_evaluate_between_keys() {
        let anim = hand_curve();
        let v = anim.evaluate(25.0);
        assert!(v > 0.0 && v < FRAC_PI_2);
        assert!(approx_eq(v, FRAC_PI_2 / 2.0));
        assert!(approx_eq(anim.evaluate(125.0), FRAC_PI_2 / 2.0));
    }

    #[test]
    fn test_evaluate_clamps_outside_range() {
        let anim = hand_curve();
        assert!(approx_eq(anim.evaluate(-10.0), 0.0));
        assert!(approx_eq(anim.evaluate(500.0), 0.0));
    }

    #[test]
    fn test_evaluate_empty_curve() {
        let anim = Animation::new("a", "position.x", 30.0, AnimationType::Float, LoopMode::Cycle).unwrap();
        assert_eq!(anim.evaluate(10.0), 0.0);
        assert_eq!(anim.first_frame(), 0.0);
        assert_eq!(anim.last_frame(), 0.0);
    }
}
