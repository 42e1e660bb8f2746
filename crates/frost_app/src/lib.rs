//! Frostcard Application
//!
//! A single-screen membership card whose frosted glass backdrop can be
//! switched on and off. Turning the effect on animates the backdrop blur
//! and saturation from the surface's captured baseline to the configured
//! active values and fades in the card content; turning it off animates back.
//!
//! # Example
//!
//! ```
//! use frost_app::prelude::*;
//!
//! let mut app = FrostApp::new(FrostConfig::default());
//! app.attach_surface();
//! app.toggle();
//! app.tick(500.0);
//!
//! let effect = app.effect_snapshot();
//! assert!(effect.active);
//! assert!((effect.blur_radius - 10.0).abs() < 1e-4);
//! ```

mod app;
pub mod card;
mod config;
mod controller;
mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
mod surface;

#[cfg(test)]
mod tests;

pub use app::FrostApp;
pub use card::{CardElement, ElementKind, MembershipCard, TextStyle};
pub use config::{CardConfig, FrostConfig, GlassConfig, SurfaceBackend, SurfaceConfig};
pub use controller::{EffectState, GlassEffectController, GlassState};
pub use error::{FrostError, Result};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_scenario, HeadlessTarget, RunOutcome};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use surface::{
    create_surface, BackdropCapability, BackdropSurface, CssBackdropSurface, UnsupportedSurface,
};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::FrostApp;
    pub use crate::config::{FrostConfig, GlassConfig, SurfaceBackend};
    pub use crate::controller::{GlassEffectController, GlassState};
    pub use crate::error::{FrostError, Result};
    pub use crate::surface::{BackdropSurface, CssBackdropSurface, UnsupportedSurface};

    // Core types
    pub use frost_animation::Easing;
    pub use frost_core::{BackdropFilter, Color, Event, Point, Rect, Size};
}
