//! Frostcard application shell
//!
//! [`FrostApp`] ties the pieces together: it owns the glass effect
//! controller, the backdrop surface and the card scene, routes input events,
//! and pushes animated values into the surface and scene on every frame.

use crate::card::MembershipCard;
use crate::config::FrostConfig;
use crate::controller::GlassEffectController;
use crate::headless_assert::{DiagnosticsElement, DiagnosticsSnapshot, EffectSnapshot};
use crate::headless_runner::{HeadlessTarget, ProbeContext};
use crate::surface::{create_surface, BackdropCapability, BackdropSurface};
use frost_core::{event_types, Event, EventData, EventDispatcher, EventType};

/// The single-screen membership card app
pub struct FrostApp {
    config: FrostConfig,
    controller: GlassEffectController,
    surface: Box<dyn BackdropSurface>,
    card: MembershipCard,
    listeners: EventDispatcher,
    mounted: bool,
}

impl FrostApp {
    /// Widget id of the scene root (mount/unmount/resize target)
    pub const ROOT_ID: u64 = 0;
    /// Widget id of the activation toggle
    pub const TOGGLE_ID: u64 = 1;

    /// Create the app with the surface selected by configuration
    pub fn new(config: FrostConfig) -> Self {
        let surface = create_surface(
            &config.surface,
            config.glass.duration_ms,
            config.glass.easing,
        );
        Self::with_surface(config, surface)
    }

    /// Create the app around an existing surface
    pub fn with_surface(config: FrostConfig, surface: Box<dyn BackdropSurface>) -> Self {
        let controller = GlassEffectController::new(config.glass.clone());
        let card = MembershipCard::new(config.card.clone());
        Self {
            config,
            controller,
            surface,
            card,
            listeners: EventDispatcher::new(),
            mounted: false,
        }
    }

    /// Attach the backdrop surface, capturing its baseline on first attach
    pub fn attach_surface(&mut self) {
        if self.surface.capability() == BackdropCapability::Unsupported {
            tracing::warn!("backdrop surface has no filter support; using 0 baseline");
        }
        self.mounted = true;
        self.controller.capture_from(self.surface.as_ref());
        self.sync();
    }

    /// Observe events after the app has handled them
    pub fn subscribe<F>(&mut self, target: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.listeners.register(target, event_type, handler);
    }

    /// Route an input event
    ///
    /// Toggle events act only on [`FrostApp::TOGGLE_ID`]; lifecycle and
    /// resize events only on [`FrostApp::ROOT_ID`]. Listeners see every event.
    pub fn handle_event(&mut self, event: &Event) {
        match (event.target, event.event_type, &event.data) {
            (Self::TOGGLE_ID, event_types::TOGGLE, EventData::Toggle { value }) => {
                let active = value.unwrap_or(!self.controller.is_active());
                self.set_active(active);
            }
            (Self::ROOT_ID, event_types::MOUNT, _) => self.attach_surface(),
            (Self::ROOT_ID, event_types::UNMOUNT, _) => {
                self.mounted = false;
                tracing::debug!("card unmounted");
            }
            (Self::ROOT_ID, event_types::RESIZE, EventData::Resize { width, height }) => {
                self.card.resize(*width as f32, *height as f32);
                self.sync();
            }
            (widget, event_type, _) => {
                tracing::trace!(widget, event_type, "event not routed");
            }
        }

        self.listeners.dispatch(event);
    }

    /// Turn the glass effect on or off
    pub fn set_active(&mut self, active: bool) -> bool {
        let changed = self.controller.set_active(active);
        self.card.set_toggle(self.controller.is_active());
        changed
    }

    pub fn toggle(&mut self) -> bool {
        let active = !self.controller.is_active();
        self.set_active(active)
    }

    /// Advance animations by `dt_ms`; returns whether they are still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let running = self.controller.tick(dt_ms);
        self.sync();
        running
    }

    /// Push displayed values into the surface and scene
    fn sync(&mut self) {
        if self.mounted {
            self.controller.apply_to(self.surface.as_mut());
        }
        self.card.set_backdrop(self.controller.displayed());
        self.card
            .set_content_opacity(self.controller.content_opacity());
    }

    pub fn controller(&self) -> &GlassEffectController {
        &self.controller
    }

    pub fn surface(&self) -> &dyn BackdropSurface {
        self.surface.as_ref()
    }

    pub fn card(&self) -> &MembershipCard {
        &self.card
    }

    pub fn config(&self) -> &FrostConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current effect values
    pub fn effect_snapshot(&self) -> EffectSnapshot {
        let displayed = self.controller.displayed();
        let state = self.controller.state();
        EffectSnapshot {
            active: state.active(),
            blur_radius: displayed.blur_radius,
            saturation: displayed.saturation,
            target_blur: state.blur_radius(),
            target_saturation: state.saturation(),
            content_opacity: self.controller.content_opacity(),
            animating: self.controller.is_animating(),
            backdrop_supported: self.surface.capability() == BackdropCapability::Supported,
            css: self.surface.css(),
        }
    }

    /// Observable state for diagnostics
    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        let elements = self
            .card
            .elements()
            .iter()
            .map(|el| {
                (
                    el.id.clone(),
                    DiagnosticsElement {
                        text: el.text().map(str::to_string),
                        opacity: el.opacity,
                    },
                )
            })
            .collect();
        DiagnosticsSnapshot {
            elements,
            effect: self.effect_snapshot(),
        }
    }
}

impl Default for FrostApp {
    fn default() -> Self {
        Self::new(FrostConfig::default())
    }
}

impl HeadlessTarget for FrostApp {
    fn dispatch(&mut self, event: &Event) {
        self.handle_event(event);
    }

    fn advance(&mut self, dt_ms: u64) {
        self.tick(dt_ms as f32);
    }

    fn snapshot(&self, ctx: &ProbeContext) -> DiagnosticsSnapshot {
        tracing::trace!(
            frame = ctx.elapsed_frames,
            ms = ctx.elapsed_ms,
            step = ctx.step_index,
            "probe"
        );
        self.diagnostics()
    }
}
