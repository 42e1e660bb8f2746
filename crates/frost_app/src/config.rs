//! Application configuration
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock membership card:
//!
//! ```toml
//! [glass]
//! active_blur = 10.0
//! active_saturation = 1.8
//! duration_ms = 500
//! easing = "ease-in"
//!
//! [surface]
//! backend = "css"
//! blur_radius = 30.0
//! saturation = 1.0
//!
//! [card]
//! holder = "SEUNGCHUL HA"
//! institution = "University of Utah"
//! ```

use crate::error::{FrostError, Result};
use frost_animation::Easing;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrostConfig {
    pub glass: GlassConfig,
    pub surface: SurfaceConfig,
    pub card: CardConfig,
}

/// Targets and timing of the glass activation animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    /// Blur radius while active
    pub active_blur: f32,
    /// Saturation factor while active
    pub active_saturation: f32,
    /// Transition duration in milliseconds
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            active_blur: 10.0,
            active_saturation: 1.8,
            duration_ms: 500,
            easing: Easing::EaseIn,
        }
    }
}

/// Which backdrop surface to create
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceBackend {
    /// CSS `backdrop-filter` on a translucent layer
    #[default]
    Css,
    /// No backdrop filter available; the effect is a no-op
    Unsupported,
}

/// The backdrop surface and the material values it starts with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub backend: SurfaceBackend,
    /// Blur radius of the ultra-thin dark material before activation
    pub blur_radius: f32,
    /// Saturation of the ultra-thin dark material before activation
    pub saturation: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            backend: SurfaceBackend::Css,
            blur_radius: 30.0,
            saturation: 1.0,
        }
    }
}

/// Card text and geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub holder: String,
    pub institution: String,
    pub toggle_label: String,
    pub corner_radius: f32,
    pub height: f32,
    pub horizontal_padding: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "MEMBERSHIP".to_string(),
            holder: "SEUNGCHUL HA".to_string(),
            institution: "University of Utah".to_string(),
            toggle_label: "Activate Glassmorphism".to_string(),
            corner_radius: 25.0,
            height: 220.0,
            horizontal_padding: 25.0,
            viewport_width: 390.0,
            viewport_height: 844.0,
        }
    }
}

impl FrostConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: FrostConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FrostError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("glass.active_blur", self.glass.active_blur),
            ("glass.active_saturation", self.glass.active_saturation),
            ("surface.blur_radius", self.surface.blur_radius),
            ("surface.saturation", self.surface.saturation),
            ("card.corner_radius", self.card.corner_radius),
            ("card.horizontal_padding", self.card.horizontal_padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FrostError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("card.height", self.card.height),
            ("card.viewport_width", self.card.viewport_width),
            ("card.viewport_height", self.card.viewport_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FrostError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}
