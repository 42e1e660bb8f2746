//! Layer primitives for the Frostcard scene
//!
//! Everything the card composition is built from: geometry, colors, gradient
//! fills, shadows, blend modes, and the backdrop filter that drives the glass
//! effect.
//!
//! # Backdrop filters
//!
//! A [`BackdropFilter`] carries blur radius and saturation as plain fields.
//! Surfaces read and write these directly; there is no hidden filter object
//! to look up. [`BackdropFilter::to_css`] renders the CSS `backdrop-filter`
//! value for web-style surfaces.

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rect of the given size centered on `center`
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Inset the rect by a delta (shrink from all sides)
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.width - dx * 2.0).max(0.0),
            (self.size.height - dy * 2.0).max(0.0),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color and Visual Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const PURPLE: Color = Color::rgb(0.686, 0.322, 0.871);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// CSS `rgba(...)` notation with 0-255 channels
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            trim_float(self.a)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Linear gradient with evenly spaced stops
    pub fn linear(start: Point, end: Point, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, color)| GradientStop {
                offset: i as f32 / last,
                color: *color,
            })
            .collect();
        Gradient::Linear { start, end, stops }
    }

    /// Top-leading to bottom-trailing gradient in unit space
    pub fn diagonal(colors: &[Color]) -> Self {
        Self::linear(Point::ZERO, Point::new(1.0, 1.0), colors)
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
        }
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

/// Blend mode for layer composition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Overlay,
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Shadow configuration
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
        }
    }

    /// CSS `box-shadow` value for this shadow
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            trim_float(self.offset_x),
            trim_float(self.offset_y),
            trim_float(self.blur),
            trim_float(self.spread),
            self.color.to_css()
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layer Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Generator for unique layer IDs
#[derive(Debug)]
pub struct LayerIdGenerator {
    next: u64,
}

impl LayerIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next += 1;
        id
    }
}

impl Default for LayerIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

/// Post-processing effect applied to a layer's own content
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterOp {
    Blur { radius: f32 },
    Saturation { factor: f32 },
}

impl FilterOp {
    /// CSS filter function for this op
    pub fn to_css(&self) -> String {
        match self {
            FilterOp::Blur { radius } => format!("blur({}px)", trim_float(*radius)),
            FilterOp::Saturation { factor } => format!("saturate({})", trim_float(*factor)),
        }
    }
}

/// Filter applied to whatever is rendered beneath a translucent layer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackdropFilter {
    /// Gaussian blur radius in pixels
    pub blur_radius: f32,
    /// Saturation factor (1.0 = unchanged)
    pub saturation: f32,
}

impl BackdropFilter {
    pub const fn new(blur_radius: f32, saturation: f32) -> Self {
        Self {
            blur_radius,
            saturation,
        }
    }

    /// The filter as an ordered op chain (blur first, then saturate)
    pub fn ops(&self) -> [FilterOp; 2] {
        [
            FilterOp::Blur {
                radius: self.blur_radius,
            },
            FilterOp::Saturation {
                factor: self.saturation,
            },
        ]
    }

    /// CSS `backdrop-filter` value, e.g. `blur(10px) saturate(1.8)`
    pub fn to_css(&self) -> String {
        let [blur, saturate] = self.ops();
        format!("{} {}", blur.to_css(), saturate.to_css())
    }
}

/// Format a float without trailing zeros (`10.0` -> `10`, `1.80` -> `1.8`)
pub fn trim_float(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_operations() {
        let r = Rect::centered(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r.origin, Point::new(40.0, 45.0));
        assert_eq!(r.center(), Point::new(50.0, 50.0));

        let inset_rect = Rect::new(0.0, 0.0, 200.0, 100.0).inset(25.0, 0.0);
        assert_eq!(inset_rect.origin.x, 25.0);
        assert_eq!(inset_rect.width(), 150.0);
        assert_eq!(inset_rect.height(), 100.0);
    }

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
        assert_eq!(Color::WHITE.with_alpha(0.25).to_css(), "rgba(255, 255, 255, 0.25)");
    }

    #[test]
    fn test_gradient_stops_evenly_spaced() {
        let g = Gradient::diagonal(&[
            Color::WHITE.with_alpha(0.6),
            Color::TRANSPARENT,
            Color::PURPLE.with_alpha(0.2),
            Color::PURPLE.with_alpha(0.5),
        ]);
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[1] - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(offsets[3], 1.0);
    }

    #[test]
    fn test_backdrop_filter_css() {
        assert_eq!(
            BackdropFilter::new(10.0, 1.8).to_css(),
            "blur(10px) saturate(1.8)"
        );
        assert_eq!(BackdropFilter::default().to_css(), "blur(0px) saturate(0)");
        assert_eq!(
            BackdropFilter::new(12.345, 1.0).to_css(),
            "blur(12.345px) saturate(1)"
        );
    }

    #[test]
    fn test_shadow_css() {
        let s = Shadow::new(-10.0, 10.0, 5.0, Color::BLACK.with_alpha(0.15));
        assert_eq!(s.to_css(), "-10px 10px 5px 0px rgba(0, 0, 0, 0.15)");
    }

    #[test]
    fn test_layer_ids_are_sequential() {
        let mut ids = LayerIdGenerator::new();
        assert_eq!(ids.next(), LayerId(1));
        assert_eq!(ids.next(), LayerId(2));
    }
}
