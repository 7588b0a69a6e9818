//! Running playbacks
//!
//! An [`Animatable`] is one playback of a set of curves on one target over a
//! frame range. It owns the playback clock; sampling is derived from elapsed
//! time so pausing and resuming never drifts.

use std::sync::Arc;

use crate::animation::{Animation, LoopMode};
use crate::error::AnimationError;
use crate::property::TargetProperty;

/// Playback state of an [`Animatable`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Advancing with time
    Playing,
    /// Holding the current frame
    Paused,
    /// Finished or explicitly stopped
    Stopped,
}

/// A sampled value ready to be written into a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue<K> {
    /// The target the playback drives
    pub target: K,
    /// Which component of the target
    pub property: TargetProperty,
    /// Sampled value
    pub value: f32,
}

/// One playback of one or more curves on a target
#[derive(Clone, Debug)]
pub struct Animatable<K> {
    target: K,
    animations: Vec<Arc<Animation>>,
    from: f32,
    to: f32,
    looping: bool,
    speed_ratio: f32,
    /// Seconds of playback time, already excluding paused time
    ///
    /// Held in f64 so small steps still register after days of looping.
    elapsed: f64,
    state: PlaybackState,
}

impl<K: Copy> Animatable<K> {
    /// Create a playing animatable over `[from, to]`
    pub fn new(
        target: K,
        animations: Vec<Arc<Animation>>,
        from: f32,
        to: f32,
        looping: bool,
    ) -> Result<Self, AnimationError> {
        if !(from.is_finite() && to.is_finite() && from < to) {
            return Err(AnimationError::InvalidRange { from, to });
        }

        Ok(Self {
            target,
            animations,
            from,
            to,
            looping,
            speed_ratio: 1.0,
            elapsed: 0.0,
            state: PlaybackState::Playing,
        })
    }

    /// Set the speed multiplier (negative values clamp to 0)
    pub fn with_speed_ratio(mut self, speed_ratio: f32) -> Self {
        self.set_speed_ratio(speed_ratio);
        self
    }

    /// Set the speed multiplier (negative values clamp to 0)
    pub fn set_speed_ratio(&mut self, speed_ratio: f32) {
        self.speed_ratio = speed_ratio.max(0.0);
    }

    /// Speed multiplier
    #[inline]
    pub fn speed_ratio(&self) -> f32 {
        self.speed_ratio
    }

    /// The driven target
    #[inline]
    pub fn target(&self) -> K {
        self.target
    }

    /// Curves played by this animatable
    pub fn animations(&self) -> &[Arc<Animation>] {
        &self.animations
    }

    /// Advance the clock by `dt` seconds
    ///
    /// Does nothing unless playing. Enters [`PlaybackState::Stopped`] once
    /// every curve has run past `to` without looping.
    pub fn advance(&mut self, dt: f32) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.elapsed += f64::from(dt.max(0.0));

        if self.animations.iter().all(|anim| self.has_finished(anim)) {
            self.state = PlaybackState::Stopped;
        }
    }

    /// Current frame, measured with the first curve's frame rate
    pub fn current_frame(&self) -> f32 {
        self.animations
            .first()
            .map(|anim| self.sample_frame(anim).0)
            .unwrap_or(self.from)
    }

    /// Whether the playback wraps around at `to`
    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// First frame of the range
    #[inline]
    pub fn from_frame(&self) -> f32 {
        self.from
    }

    /// Last frame of the range
    #[inline]
    pub fn to_frame(&self) -> f32 {
        self.to
    }

    /// Current playback state
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Hold the current frame
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Continue from the held frame
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    /// Rewind to `from` and play
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.state = PlaybackState::Playing;
    }

    /// Stop without rewinding
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Sample every curve at the current time
    pub fn values(&self) -> Vec<AnimatedValue<K>> {
        self.animations
            .iter()
            .map(|anim| AnimatedValue {
                target: self.target,
                property: anim.property(),
                value: self.sample(anim),
            })
            .collect()
    }

    fn frame_offset(&self, anim: &Animation) -> f64 {
        self.elapsed * f64::from(anim.frame_rate()) * f64::from(self.speed_ratio)
    }

    fn wraps(&self, anim: &Animation) -> bool {
        self.looping && anim.loop_mode() != LoopMode::Constant
    }

    fn has_finished(&self, anim: &Animation) -> bool {
        !self.wraps(anim) && self.frame_offset(anim) >= f64::from(self.to - self.from)
    }

    /// Frame to sample `anim` at, and how many whole loops have completed
    fn sample_frame(&self, anim: &Animation) -> (f32, f32) {
        let range = f64::from(self.to - self.from);
        let offset = self.frame_offset(anim);

        if !self.wraps(anim) {
            return (self.from + offset.min(range) as f32, 0.0);
        }

        let loops = (offset / range).floor();
        let local = (offset - loops * range).clamp(0.0, range) as f32;
        let frame = match anim.loop_mode() {
            // Odd loops run backwards
            LoopMode::Yoyo if loops % 2.0 == 1.0 => self.to - local,
            _ => self.from + local,
        };
        (frame, loops as f32)
    }

    fn sample(&self, anim: &Animation) -> f32 {
        let (frame, loops) = self.sample_frame(anim);
        let value = anim.evaluate(frame);
        if anim.loop_mode() == LoopMode::Relative && self.wraps(anim) {
            let delta = anim.evaluate(self.to) - anim.evaluate(self.from);
            value + loops * delta
        } else {
            value
        }
    }
}
