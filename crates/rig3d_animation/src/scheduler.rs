//! Playback scheduling
//!
//! The scheduler owns every running [`Animatable`] and advances them together
//! once per frame, handing back the sampled values for the caller to apply.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::animatable::{Animatable, AnimatedValue, PlaybackState};
use crate::animation::Animation;
use crate::error::AnimationError;

new_key_type! {
    /// Key for a running playback
    pub struct AnimatableKey;
}

/// Owns and advances all running playbacks
#[derive(Clone, Debug)]
pub struct AnimationScheduler<K> {
    animatables: SlotMap<AnimatableKey, Animatable<K>>,
}

impl<K: Copy + PartialEq> AnimationScheduler<K> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            animatables: SlotMap::with_key(),
        }
    }

    /// Start playing `animations` on `target` over `[from, to]`
    ///
    /// Any playback already driving `target` is stopped first.
    pub fn begin(
        &mut self,
        target: K,
        animations: Vec<Arc<Animation>>,
        from: f32,
        to: f32,
        looping: bool,
        speed_ratio: f32,
    ) -> Result<AnimatableKey, AnimationError> {
        let animatable = Animatable::new(target, animations, from, to, looping)?
            .with_speed_ratio(speed_ratio);

        let replaced = self.stop_target(target);
        if replaced > 0 {
            log::debug!("Replaced {} playback(s) on target", replaced);
        }

        let key = self.animatables.insert(animatable);
        log::debug!(
            "Began playback over [{}, {}] (loop: {}, speed: {})",
            from,
            to,
            looping,
            speed_ratio
        );
        Ok(key)
    }

    /// Get a playback by key
    pub fn get(&self, key: AnimatableKey) -> Option<&Animatable<K>> {
        self.animatables.get(key)
    }

    /// Get a mutable playback by key
    pub fn get_mut(&mut self, key: AnimatableKey) -> Option<&mut Animatable<K>> {
        self.animatables.get_mut(key)
    }

    /// Remove a playback, returning it
    pub fn stop(&mut self, key: AnimatableKey) -> Option<Animatable<K>> {
        self.animatables.remove(key).map(|mut animatable| {
            animatable.stop();
            animatable
        })
    }

    /// Remove every playback driving `target`, returning how many were removed
    pub fn stop_target(&mut self, target: K) -> usize {
        let before = self.animatables.len();
        self.animatables.retain(|_, a| a.target() != target);
        before - self.animatables.len()
    }

    /// Keys of the playbacks driving `target`
    pub fn keys_for(&self, target: K) -> Vec<AnimatableKey> {
        self.animatables
            .iter()
            .filter(|(_, a)| a.target() == target)
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of live playbacks
    pub fn len(&self) -> usize {
        self.animatables.len()
    }

    /// Whether there are no live playbacks
    pub fn is_empty(&self) -> bool {
        self.animatables.is_empty()
    }

    /// Iterate over all playbacks
    pub fn iter(&self) -> impl Iterator<Item = (AnimatableKey, &Animatable<K>)> {
        self.animatables.iter()
    }

    /// Advance every playing animatable by `dt` seconds
    ///
    /// Returns the sampled values of everything that was playing, including
    /// the final values of playbacks that finished during this step. Finished
    /// playbacks are removed.
    pub fn update(&mut self, dt: f32) -> Vec<AnimatedValue<K>> {
        let mut values = Vec::new();
        let mut finished = Vec::new();

        for (key, animatable) in &mut self.animatables {
            if animatable.state() != PlaybackState::Playing {
                continue;
            }
            animatable.advance(dt);
            values.extend(animatable.values());
            if animatable.state() == PlaybackState::Stopped {
                finished.push(key);
            }
        }

        for key in finished {
            self.animatables.remove(key);
            log::debug!("Playback finished");
        }

        values
    }
}

impl<K: Copy + PartialEq> Default for AnimationScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
