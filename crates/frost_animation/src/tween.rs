//! Retargetable tweens
//!
//! A [`Tween`] interpolates a single value from a start to a target over a
//! fixed duration with an easing curve. Calling [`Tween::retarget`] while the
//! tween is running restarts it from the value currently displayed, so the
//! most recent target always wins and nothing jumps.

use crate::easing::Easing;

/// A time-based interpolation of one `f32` value
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Tween {
    /// A settled tween resting at `value`
    pub fn new(value: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration_ms,
            elapsed_ms: duration_ms as f32,
            easing,
            playing: false,
        }
    }

    /// Start animating toward `target` from the currently displayed value
    ///
    /// Retargeting to the value the tween is already heading for is a no-op.
    /// Returns whether the tween was (re)started.
    pub fn retarget(&mut self, target: f32) -> bool {
        if target == self.to {
            return false;
        }

        self.from = self.value();
        self.to = target;
        self.elapsed_ms = 0.0;
        self.playing = self.duration_ms > 0;
        if !self.playing {
            self.from = target;
        }
        true
    }

    /// Jump to `value` without animating
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed_ms = self.duration_ms as f32;
        self.playing = false;
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
        }
    }

    /// Linear progress through the duration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    ///
    /// Exactly equal to the target once the tween has finished.
    pub fn value(&self) -> f32 {
        if !self.playing {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn start(&self) -> f32 {
        self.from
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
