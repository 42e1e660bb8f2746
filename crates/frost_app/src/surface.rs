//! Backdrop surfaces
//!
//! A backdrop surface is the translucent layer that blurs and saturates
//! whatever is drawn beneath it. Blur radius and saturation are plain
//! properties on the surface.
//!
//! Backends without a backdrop filter report [`BackdropCapability::Unsupported`]:
//! reads fall back to `0.0` and writes are ignored, so the effect silently
//! degrades to a no-op.

use crate::config::{SurfaceBackend, SurfaceConfig};
use frost_animation::Easing;
use frost_core::BackdropFilter;

/// Whether a surface can actually filter its backdrop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropCapability {
    Supported,
    Unsupported,
}

/// A rendering primitive with a live backdrop filter
pub trait BackdropSurface {
    fn capability(&self) -> BackdropCapability;

    fn blur_radius(&self) -> f32;

    fn saturation(&self) -> f32;

    /// Apply a new filter and re-render
    fn apply(&mut self, filter: BackdropFilter);

    fn set_blur_radius(&mut self, radius: f32) {
        let saturation = self.saturation();
        self.apply(BackdropFilter::new(radius, saturation));
    }

    fn set_saturation(&mut self, saturation: f32) {
        let radius = self.blur_radius();
        self.apply(BackdropFilter::new(radius, saturation));
    }

    /// The filter as currently rendered
    fn filter(&self) -> BackdropFilter {
        BackdropFilter::new(self.blur_radius(), self.saturation())
    }

    /// Number of re-renders triggered by [`BackdropSurface::apply`]
    fn render_count(&self) -> u64;

    /// CSS declarations describing the surface, if the backend has any
    fn css(&self) -> Option<String> {
        None
    }
}

/// Create the surface selected by configuration
pub fn create_surface(
    config: &SurfaceConfig,
    duration_ms: u32,
    easing: Easing,
) -> Box<dyn BackdropSurface> {
    match config.backend {
        SurfaceBackend::Css => Box::new(
            CssBackdropSurface::new(config.blur_radius, config.saturation)
                .with_transition(duration_ms, easing),
        ),
        SurfaceBackend::Unsupported => {
            tracing::warn!("backdrop-filter unavailable; glass effect disabled");
            Box::new(UnsupportedSurface)
        }
    }
}

/// A translucent layer styled with CSS `backdrop-filter`
#[derive(Clone, Debug)]
pub struct CssBackdropSurface {
    filter: BackdropFilter,
    transition_ms: u32,
    easing: Easing,
    renders: u64,
}

impl CssBackdropSurface {
    pub fn new(blur_radius: f32, saturation: f32) -> Self {
        Self {
            filter: BackdropFilter::new(blur_radius, saturation),
            transition_ms: 500,
            easing: Easing::EaseIn,
            renders: 0,
        }
    }

    pub fn with_transition(mut self, duration_ms: u32, easing: Easing) -> Self {
        self.transition_ms = duration_ms;
        self.easing = easing;
        self
    }

    /// `backdrop-filter: blur(..) saturate(..);`
    pub fn filter_css(&self) -> String {
        format!("backdrop-filter: {};", self.filter.to_css())
    }

    /// `transition: backdrop-filter 500ms ease-in;`
    pub fn transition_css(&self) -> String {
        format!(
            "transition: backdrop-filter {}ms {};",
            self.transition_ms,
            self.easing.css_name()
        )
    }
}

impl BackdropSurface for CssBackdropSurface {
    fn capability(&self) -> BackdropCapability {
        BackdropCapability::Supported
    }

    fn blur_radius(&self) -> f32 {
        self.filter.blur_radius
    }

    fn saturation(&self) -> f32 {
        self.filter.saturation
    }

    fn apply(&mut self, filter: BackdropFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.renders += 1;
        tracing::trace!(css = %self.filter_css(), "backdrop re-rendered");
    }

    fn render_count(&self) -> u64 {
        self.renders
    }

    fn css(&self) -> Option<String> {
        Some(format!("{} {}", self.filter_css(), self.transition_css()))
    }
}

/// Stand-in for a backend without backdrop filtering
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedSurface;

impl BackdropSurface for UnsupportedSurface {
    fn capability(&self) -> BackdropCapability {
        BackdropCapability::Unsupported
    }

    fn blur_radius(&self) -> f32 {
        0.0
    }

    fn saturation(&self) -> f32 {
        0.0
    }

    fn apply(&mut self, _filter: BackdropFilter) {}

    fn render_count(&self) -> u64 {
        0
    }
}
