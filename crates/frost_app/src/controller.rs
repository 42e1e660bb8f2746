//! Glass effect controller
//!
//! Owns the blur/saturation parameters of the card's backdrop and animates
//! them when the glass toggle changes.
//!
//! Two kinds of values are tracked:
//!
//! - **Targets** ([`EffectState`]): what the backdrop should show once the
//!   animation settles. While active these are the configured active values
//!   (blur 10, saturation 1.8); while inactive they are the captured baseline.
//! - **Displayed** values: the tweened values pushed to the surface on each
//!   frame. They equal the targets exactly once the transition finishes.
//!
//! The baseline is captured once, when the backdrop surface first attaches.
//! Later captures are ignored.

use crate::config::GlassConfig;
use crate::surface::BackdropSurface;
use frost_animation::{AnimationScheduler, TweenId};
use frost_core::fsm::{EventId, StateId, StateMachine, Transition};
use frost_core::BackdropFilter;

/// Activation state of the glass effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlassState {
    #[default]
    Inactive,
    Active,
}

impl GlassState {
    const INACTIVE: StateId = 0;
    const ACTIVE: StateId = 1;

    fn id(self) -> StateId {
        match self {
            GlassState::Inactive => Self::INACTIVE,
            GlassState::Active => Self::ACTIVE,
        }
    }

    fn from_id(id: StateId) -> Self {
        if id == Self::ACTIVE {
            GlassState::Active
        } else {
            GlassState::Inactive
        }
    }
}

const ACTIVATE: EventId = 1;
const DEACTIVATE: EventId = 2;

/// Target blur/saturation and the baseline they fall back to
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectState {
    blur_radius: f32,
    saturation: f32,
    baseline_blur: f32,
    baseline_saturation: f32,
    baseline_captured: bool,
    active: bool,
}

impl EffectState {
    pub fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn baseline_blur(&self) -> f32 {
        self.baseline_blur
    }

    pub fn baseline_saturation(&self) -> f32 {
        self.baseline_saturation
    }

    pub fn baseline_captured(&self) -> bool {
        self.baseline_captured
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Target filter as a value
    pub fn filter(&self) -> BackdropFilter {
        BackdropFilter::new(self.blur_radius, self.saturation)
    }

    fn derive(&mut self, config: &GlassConfig) {
        if self.active {
            self.blur_radius = config.active_blur;
            self.saturation = config.active_saturation;
        } else {
            self.blur_radius = self.baseline_blur;
            self.saturation = self.baseline_saturation;
        }
    }
}

/// Drives the glass backdrop between its baseline and active looks
pub struct GlassEffectController {
    config: GlassConfig,
    state: EffectState,
    machine: StateMachine,
    scheduler: AnimationScheduler,
    blur: TweenId,
    saturation: TweenId,
    content_opacity: TweenId,
}

impl GlassEffectController {
    pub fn new(config: GlassConfig) -> Self {
        let machine = StateMachine::new(
            GlassState::Inactive.id(),
            vec![
                Transition::new(GlassState::INACTIVE, ACTIVATE, GlassState::ACTIVE),
                Transition::new(GlassState::ACTIVE, DEACTIVATE, GlassState::INACTIVE),
            ],
        );

        let mut scheduler = AnimationScheduler::new();
        let blur = scheduler.add_value(0.0, config.duration_ms, config.easing);
        let saturation = scheduler.add_value(0.0, config.duration_ms, config.easing);
        let content_opacity = scheduler.add_value(0.0, config.duration_ms, config.easing);

        Self {
            config,
            state: EffectState::default(),
            machine,
            scheduler,
            blur,
            saturation,
            content_opacity,
        }
    }

    /// Record the surface's own blur/saturation as the "off" look
    ///
    /// Only the first call has an effect. Returns whether the baseline was
    /// captured by this call.
    pub fn capture_baseline(&mut self, current_blur: f32, current_saturation: f32) -> bool {
        if self.state.baseline_captured {
            tracing::trace!("baseline already captured");
            return false;
        }

        self.state.baseline_blur = current_blur;
        self.state.baseline_saturation = current_saturation;
        self.state.baseline_captured = true;
        self.state.derive(&self.config);

        // The surface is already showing its baseline
        if !self.state.active {
            self.scheduler.snap(self.blur, current_blur);
            self.scheduler.snap(self.saturation, current_saturation);
        } else {
            self.retarget();
        }

        tracing::debug!(
            blur = current_blur,
            saturation = current_saturation,
            "captured backdrop baseline"
        );
        true
    }

    /// Capture the baseline from a surface's current values
    pub fn capture_from(&mut self, surface: &dyn BackdropSurface) -> bool {
        self.capture_baseline(surface.blur_radius(), surface.saturation())
    }

    /// Turn the effect on or off, animating toward the new targets
    ///
    /// Setting the current value again changes nothing and does not restart
    /// the transition. Returns whether the state changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        if active == self.state.active {
            return false;
        }

        let event = if active { ACTIVATE } else { DEACTIVATE };
        let state = GlassState::from_id(self.machine.send(event));
        self.state.active = state == GlassState::Active;
        self.state.derive(&self.config);
        self.retarget();

        tracing::debug!(
            ?state,
            blur = self.state.blur_radius,
            saturation = self.state.saturation,
            "glass effect toggled"
        );
        true
    }

    /// Flip the effect
    pub fn toggle(&mut self) -> bool {
        self.set_active(!self.state.active)
    }

    fn retarget(&mut self) {
        let opacity = if self.state.active { 1.0 } else { 0.0 };
        self.scheduler.animate_to(self.blur, self.state.blur_radius);
        self.scheduler
            .animate_to(self.saturation, self.state.saturation);
        self.scheduler.animate_to(self.content_opacity, opacity);
    }

    /// Advance the transition; returns whether it is still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.scheduler.tick_by(dt_ms);
        let running = self.scheduler.has_active_animations();
        tracing::trace!(dt_ms, running, "glass tick");
        running
    }

    /// Push the displayed values to a surface
    pub fn apply_to(&self, surface: &mut dyn BackdropSurface) {
        surface.apply(self.displayed());
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Filter currently shown (mid-transition values while animating)
    pub fn displayed(&self) -> BackdropFilter {
        BackdropFilter::new(
            self.scheduler.value(self.blur).unwrap_or_default(),
            self.scheduler.value(self.saturation).unwrap_or_default(),
        )
    }

    /// Opacity of the card content, fading in with the effect
    pub fn content_opacity(&self) -> f32 {
        self.scheduler
            .value(self.content_opacity)
            .unwrap_or_default()
    }

    pub fn state(&self) -> &EffectState {
        &self.state
    }

    pub fn glass_state(&self) -> GlassState {
        GlassState::from_id(self.machine.current_state())
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    /// Number of activation changes so far
    pub fn transition_count(&self) -> u64 {
        self.machine.transition_count()
    }
}

impl Default for GlassEffectController {
    fn default() -> Self {
        Self::new(GlassConfig::default())
    }
}
