//! Animation scheduler
//!
//! Owns every tween and advances them each frame by an explicit delta, so
//! host loops and headless runs step animations the same way.

use crate::easing::Easing;
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TweenId;
}

/// The animation scheduler that ticks all active tweens
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Tween>,
    frames: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            frames: 0,
        }
    }

    /// Add a settled tween resting at `value`
    pub fn add_value(&mut self, value: f32, duration_ms: u32, easing: Easing) -> TweenId {
        self.tweens.insert(Tween::new(value, duration_ms, easing))
    }

    pub fn get_tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    /// Current value of a tween, if it exists
    pub fn value(&self, id: TweenId) -> Option<f32> {
        self.tweens.get(id).map(Tween::value)
    }

    /// Retarget a tween; returns whether an animation was (re)started
    pub fn animate_to(&mut self, id: TweenId, target: f32) -> bool {
        match self.tweens.get_mut(id) {
            Some(tween) => {
                let started = tween.retarget(target);
                if started {
                    tracing::debug!(?id, from = tween.start(), to = target, "tween retargeted");
                }
                started
            }
            None => false,
        }
    }

    /// Jump a tween to `value` without animating
    pub fn snap(&mut self, id: TweenId, value: f32) {
        if let Some(tween) = self.tweens.get_mut(id) {
            tween.snap(value);
        }
    }

    /// Tick all tweens by an explicit delta (in milliseconds)
    pub fn tick_by(&mut self, dt_ms: f32) {
        self.frames += 1;
        for (_, tween) in self.tweens.iter_mut() {
            tween.tick(dt_ms);
        }
        tracing::trace!(frame = self.frames, dt_ms, "animation frame");
    }

    /// Check if any tweens are still running
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_tweens_are_inactive() {
        let mut scheduler = AnimationScheduler::new();
        let opacity = scheduler.add_value(1.0, 500, Easing::EaseIn);
        scheduler.add_value(0.0, 500, Easing::EaseIn);

        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.value(opacity), Some(1.0));
    }

    #[test]
    fn test_tick_by_drives_all_tweens() {
        let mut scheduler = AnimationScheduler::new();
        let blur = scheduler.add_value(30.0, 500, Easing::EaseIn);
        let saturation = scheduler.add_value(1.0, 500, Easing::EaseIn);

        assert!(scheduler.animate_to(blur, 10.0));
        assert!(scheduler.animate_to(saturation, 1.8));
        assert!(scheduler.has_active_animations());

        for _ in 0..32 {
            scheduler.tick_by(16.0);
        }

        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.value(blur), Some(10.0));
        assert_eq!(scheduler.value(saturation), Some(1.8));
        assert_eq!(scheduler.frame_count(), 32);
    }

    #[test]
    fn test_animate_to_current_target_does_not_restart() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_value(0.0, 500, Easing::Linear);

        assert!(scheduler.animate_to(id, 1.0));
        scheduler.tick_by(100.0);
        assert!(!scheduler.animate_to(id, 1.0));

        let progress = scheduler.get_tween(id).map(Tween::progress);
        assert!((progress.unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_snap_cancels_running_tween() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_value(0.0, 500, Easing::Linear);
        scheduler.animate_to(id, 1.0);
        scheduler.tick_by(100.0);

        scheduler.snap(id, 0.5);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.value(id), Some(0.5));
    }
}
