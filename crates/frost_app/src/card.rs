//! Membership card scene
//!
//! The single screen of the app, described as a flat list of positioned
//! elements drawn back to front: background, three decorative circles, the
//! glass card (backdrop, frosted fill, gradient border), the card content,
//! and the activation toggle.
//!
//! Only two things change at runtime: the backdrop filter of the glass card
//! and the opacity of the card content. Both are pushed in by the app after
//! every animation frame.

use crate::config::CardConfig;
use frost_core::{
    BackdropFilter, BlendMode, Brush, Color, CornerRadius, FilterOp, Gradient, LayerId,
    LayerIdGenerator, Point, Rect, Shadow, Size,
};
use smallvec::{smallvec, SmallVec};
use std::fmt::Write as _;

/// Element ids used by the scene
pub mod ids {
    pub const BACKGROUND: &str = "background";
    pub const CIRCLE_TOP: &str = "circle-top";
    pub const CIRCLE_BOTTOM: &str = "circle-bottom";
    pub const CIRCLE_CENTER: &str = "circle-center";
    pub const GLASS_CARD: &str = "glass-card";
    pub const CARD_FILL: &str = "card-fill";
    pub const CARD_BORDER: &str = "card-border";
    pub const CARD_TITLE: &str = "card-title";
    pub const CARD_LOGO: &str = "card-logo";
    pub const CARD_HOLDER: &str = "card-holder";
    pub const CARD_INSTITUTION: &str = "card-institution";
    pub const TOGGLE: &str = "toggle";
}

/// Background color behind everything
pub const BACKGROUND_COLOR: u32 = 0x1C1B33;

/// Card content font sizes
const CALLOUT_SIZE: f32 = 16.0;
const TITLE3_SIZE: f32 = 20.0;

/// Text styling shared by every label on the card
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: u16,
    pub color: Color,
    pub kerning: f32,
    pub shadow_radius: f32,
}

impl TextStyle {
    fn card(size: f32) -> Self {
        Self {
            size,
            weight: 600,
            color: Color::WHITE,
            kerning: 1.2,
            shadow_radius: 15.0,
        }
    }
}

/// What an element draws
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// Solid or gradient filled rounded rectangle
    Shape,
    /// Bitmap asset by name
    Image { asset: String },
    /// Translucent layer filtering what is beneath it
    Backdrop { filter: BackdropFilter },
    Text { content: String, style: TextStyle },
    Toggle { label: String, on: bool },
}

/// One positioned element of the scene
#[derive(Clone, Debug, PartialEq)]
pub struct CardElement {
    pub id: String,
    pub layer: LayerId,
    pub kind: ElementKind,
    pub frame: Rect,
    pub corner_radius: CornerRadius,
    pub fill: Option<Brush>,
    pub stroke: Option<(Brush, f32)>,
    pub shadows: SmallVec<[Shadow; 2]>,
    pub filter: Option<FilterOp>,
    pub blend: BlendMode,
    pub opacity: f32,
    /// Fades with the glass effect
    pub content: bool,
}

impl CardElement {
    fn new(id: &str, layer: LayerId, kind: ElementKind, frame: Rect) -> Self {
        Self {
            id: id.to_string(),
            layer,
            kind,
            frame,
            corner_radius: CornerRadius::ZERO,
            fill: None,
            stroke: None,
            shadows: SmallVec::new(),
            filter: None,
            blend: BlendMode::Normal,
            opacity: 1.0,
            content: false,
        }
    }

    /// Visible text of the element, if any
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } => Some(content.as_str()),
            ElementKind::Toggle { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }
}

/// The membership card screen
#[derive(Clone, Debug)]
pub struct MembershipCard {
    config: CardConfig,
    viewport: Size,
    elements: Vec<CardElement>,
    backdrop: BackdropFilter,
    content_opacity: f32,
    toggle_on: bool,
}

impl MembershipCard {
    pub fn new(config: CardConfig) -> Self {
        let viewport = Size::new(config.viewport_width, config.viewport_height);
        let mut card = Self {
            config,
            viewport,
            elements: Vec::new(),
            backdrop: BackdropFilter::default(),
            content_opacity: 0.0,
            toggle_on: false,
        };
        card.layout();
        card
    }

    /// Rebuild element frames for a new viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.layout();
    }

    pub fn set_backdrop(&mut self, filter: BackdropFilter) {
        self.backdrop = filter;
        if let Some(el) = self.element_mut(ids::GLASS_CARD) {
            el.kind = ElementKind::Backdrop { filter };
        }
    }

    pub fn set_content_opacity(&mut self, opacity: f32) {
        self.content_opacity = opacity.clamp(0.0, 1.0);
        for el in self.elements.iter_mut().filter(|el| el.content) {
            el.opacity = self.content_opacity;
        }
    }

    pub fn set_toggle(&mut self, on: bool) {
        self.toggle_on = on;
        if let Some(el) = self.element_mut(ids::TOGGLE) {
            if let ElementKind::Toggle { on: value, .. } = &mut el.kind {
                *value = on;
            }
        }
    }

    pub fn elements(&self) -> &[CardElement] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&CardElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut CardElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_opacity(&self) -> f32 {
        self.content_opacity
    }

    pub fn backdrop(&self) -> BackdropFilter {
        self.backdrop
    }

    /// Frame of the glass card itself
    pub fn card_frame(&self) -> Rect {
        let width = (self.viewport.width - self.config.horizontal_padding * 2.0).max(0.0);
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        Rect::centered(center, Size::new(width, self.config.height))
    }

    fn layout(&mut self) {
        let mut layers = LayerIdGenerator::new();
        let mut elements = Vec::new();
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        let radius = CornerRadius::uniform(self.config.corner_radius);

        let mut background = CardElement::new(
            ids::BACKGROUND,
            layers.next(),
            ElementKind::Shape,
            Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height),
        );
        background.fill = Some(Color::from_hex(BACKGROUND_COLOR).into());
        elements.push(background);

        // Decorative circles: (id, asset, diameter, offset from center)
        for (id, asset, diameter, dx, dy) in [
            (ids::CIRCLE_TOP, "TopCircle", 200.0, 150.0, -90.0),
            (ids::CIRCLE_BOTTOM, "BottomCircle", 100.0, -150.0, 90.0),
            (ids::CIRCLE_CENTER, "CenterCircle", 50.0, -40.0, -100.0),
        ] {
            let frame = Rect::centered(
                Point::new(center.x + dx, center.y + dy),
                Size::new(diameter, diameter),
            );
            let mut circle = CardElement::new(
                id,
                layers.next(),
                ElementKind::Image {
                    asset: asset.to_string(),
                },
                frame,
            );
            circle.corner_radius = CornerRadius::uniform(diameter / 2.0);
            elements.push(circle);
        }

        let card = self.card_frame();
        let shadow_color = Color::BLACK.with_alpha(0.15);

        let mut glass = CardElement::new(
            ids::GLASS_CARD,
            layers.next(),
            ElementKind::Backdrop {
                filter: self.backdrop,
            },
            card,
        );
        glass.corner_radius = radius;
        glass.shadows = smallvec![
            Shadow::new(-10.0, 10.0, 5.0, shadow_color),
            Shadow::new(10.0, -10.0, 5.0, shadow_color),
        ];
        elements.push(glass);

        let mut fill = CardElement::new(ids::CARD_FILL, layers.next(), ElementKind::Shape, card);
        fill.corner_radius = radius;
        fill.fill = Some(
            Gradient::diagonal(&[Color::WHITE.with_alpha(0.25), Color::WHITE.with_alpha(0.05)])
                .into(),
        );
        fill.filter = Some(FilterOp::Blur { radius: 5.0 });
        elements.push(fill);

        let mut border =
            CardElement::new(ids::CARD_BORDER, layers.next(), ElementKind::Shape, card);
        border.corner_radius = radius;
        border.stroke = Some((
            Gradient::diagonal(&[
                Color::WHITE.with_alpha(0.6),
                Color::TRANSPARENT,
                Color::PURPLE.with_alpha(0.2),
                Color::PURPLE.with_alpha(0.5),
            ])
            .into(),
            2.0,
        ));
        elements.push(border);

        // Content: 20pt padding plus 10pt extra vertically
        let inner = card.inset(20.0, 30.0);
        let title_height = CALLOUT_SIZE * 1.3;
        let logo = Size::new(40.0, 40.0);

        elements.push(self.text_element(
            ids::CARD_TITLE,
            layers.next(),
            self.config.title.clone(),
            CALLOUT_SIZE,
            Rect::new(
                inner.origin.x,
                inner.origin.y,
                (inner.width() - logo.width).max(0.0),
                logo.height,
            ),
        ));

        let mut logo_el = CardElement::new(
            ids::CARD_LOGO,
            layers.next(),
            ElementKind::Image {
                asset: "Logo".to_string(),
            },
            Rect::new(
                inner.origin.x + inner.width() - logo.width,
                inner.origin.y,
                logo.width,
                logo.height,
            ),
        );
        logo_el.blend = BlendMode::Overlay;
        logo_el.content = true;
        logo_el.opacity = self.content_opacity;
        elements.push(logo_el);

        let holder_height = TITLE3_SIZE * 1.3;
        let bottom = inner.origin.y + inner.height();
        let institution_top = bottom - title_height;
        let holder_top = institution_top - 12.0 - holder_height;

        elements.push(self.text_element(
            ids::CARD_HOLDER,
            layers.next(),
            self.config.holder.clone(),
            TITLE3_SIZE,
            Rect::new(inner.origin.x, holder_top, inner.width(), holder_height),
        ));
        elements.push(self.text_element(
            ids::CARD_INSTITUTION,
            layers.next(),
            self.config.institution.clone(),
            CALLOUT_SIZE,
            Rect::new(inner.origin.x, institution_top, inner.width(), title_height),
        ));

        let toggle_height = 31.0;
        elements.push(CardElement::new(
            ids::TOGGLE,
            layers.next(),
            ElementKind::Toggle {
                label: self.config.toggle_label.clone(),
                on: self.toggle_on,
            },
            Rect::new(
                15.0,
                self.viewport.height - 15.0 - toggle_height,
                (self.viewport.width - 30.0).max(0.0),
                toggle_height,
            ),
        ));

        self.elements = elements;
    }

    fn text_element(
        &self,
        id: &str,
        layer: LayerId,
        content: String,
        size: f32,
        frame: Rect,
    ) -> CardElement {
        let mut el = CardElement::new(
            id,
            layer,
            ElementKind::Text {
                content,
                style: TextStyle::card(size),
            },
            frame,
        );
        el.blend = BlendMode::Overlay;
        el.content = true;
        el.opacity = self.content_opacity;
        el
    }

    /// Render the scene as a CSS stylesheet, one rule per element
    pub fn to_stylesheet(&self) -> String {
        let mut css = String::new();
        for el in &self.elements {
            let _ = writeln!(css, "#{} {{", el.id);
            let _ = writeln!(
                css,
                "  left: {}px; top: {}px; width: {}px; height: {}px;",
                px(el.frame.origin.x),
                px(el.frame.origin.y),
                px(el.frame.width()),
                px(el.frame.height())
            );
            if el.corner_radius != CornerRadius::ZERO {
                let _ = writeln!(css, "  border-radius: {}px;", px(el.corner_radius.top_left));
            }
            if let Some(fill) = &el.fill {
                let _ = writeln!(css, "  background: {};", brush_css(fill));
            }
            if let Some((brush, width)) = &el.stroke {
                let _ = writeln!(
                    css,
                    "  border: {}px solid transparent; border-image: {} 1;",
                    px(*width),
                    brush_css(brush)
                );
            }
            if !el.shadows.is_empty() {
                let shadows: Vec<String> = el.shadows.iter().map(Shadow::to_css).collect();
                let _ = writeln!(css, "  box-shadow: {};", shadows.join(", "));
            }
            if let Some(filter) = &el.filter {
                let _ = writeln!(css, "  filter: {};", filter.to_css());
            }
            match &el.kind {
                ElementKind::Backdrop { filter } => {
                    let _ = writeln!(css, "  backdrop-filter: {};", filter.to_css());
                }
                ElementKind::Image { asset } => {
                    let _ = writeln!(css, "  background-image: url(\"{asset}.png\");");
                }
                ElementKind::Text { style, .. } => {
                    let _ = writeln!(
                        css,
                        "  font-size: {}px; font-weight: {}; color: {}; letter-spacing: {}px; text-shadow: 0 0 {}px rgba(0, 0, 0, 0.33);",
                        px(style.size),
                        style.weight,
                        style.color.to_css(),
                        px(style.kerning),
                        px(style.shadow_radius)
                    );
                }
                ElementKind::Shape | ElementKind::Toggle { .. } => {}
            }
            if el.blend == BlendMode::Overlay {
                let _ = writeln!(css, "  mix-blend-mode: overlay;");
            }
            if el.opacity < 1.0 {
                let _ = writeln!(css, "  opacity: {};", px(el.opacity));
            }
            css.push_str("}\n");
        }
        css
    }
}

fn px(value: f32) -> String {
    frost_core::layer::trim_float(value)
}

fn brush_css(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => color.to_css(),
        Brush::Gradient(gradient) => {
            let stops: Vec<String> = gradient
                .stops()
                .iter()
                .map(|s| format!("{} {}%", s.color.to_css(), px(s.offset * 100.0)))
                .collect();
            format!("linear-gradient(135deg, {})", stops.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> MembershipCard {
        MembershipCard::new(CardConfig::default())
    }

    #[test]
    fn test_all_elements_present_in_draw_order() {
        let card = card();
        let order: Vec<&str> = card.elements().iter().map(|el| el.id.as_str()).collect();
        assert_eq!(
            order,
            vec![
                ids::BACKGROUND,
                ids::CIRCLE_TOP,
                ids::CIRCLE_BOTTOM,
                ids::CIRCLE_CENTER,
                ids::GLASS_CARD,
                ids::CARD_FILL,
                ids::CARD_BORDER,
                ids::CARD_TITLE,
                ids::CARD_LOGO,
                ids::CARD_HOLDER,
                ids::CARD_INSTITUTION,
                ids::TOGGLE,
            ]
        );
    }

    #[test]
    fn test_card_geometry() {
        let card = card();
        let frame = card.card_frame();
        assert_eq!(frame.origin.x, 25.0);
        assert_eq!(frame.width(), 340.0);
        assert_eq!(frame.height(), 220.0);
        assert_eq!(frame.center(), Point::new(195.0, 422.0));

        let top = card.element(ids::CIRCLE_TOP).unwrap();
        assert_eq!(top.frame.center(), Point::new(345.0, 332.0));
        assert_eq!(top.frame.width(), 200.0);
    }

    #[test]
    fn test_content_starts_hidden_and_fades() {
        let mut card = card();
        assert!(card
            .elements()
            .iter()
            .filter(|el| el.content)
            .all(|el| el.opacity == 0.0));

        card.set_content_opacity(0.5);
        assert_eq!(card.element(ids::CARD_HOLDER).unwrap().opacity, 0.5);
        assert_eq!(card.element(ids::CARD_LOGO).unwrap().opacity, 0.5);
        assert_eq!(card.element(ids::BACKGROUND).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_backdrop_follows_updates_and_survives_resize() {
        let mut card = card();
        card.set_backdrop(BackdropFilter::new(10.0, 1.8));
        card.set_content_opacity(1.0);
        card.set_toggle(true);
        card.resize(800.0, 600.0);

        let glass = card.element(ids::GLASS_CARD).unwrap();
        assert_eq!(
            glass.kind,
            ElementKind::Backdrop {
                filter: BackdropFilter::new(10.0, 1.8)
            }
        );
        assert_eq!(glass.frame.width(), 750.0);
        assert_eq!(card.element(ids::CARD_TITLE).unwrap().opacity, 1.0);
        assert_eq!(
            card.element(ids::TOGGLE).unwrap().kind,
            ElementKind::Toggle {
                label: "Activate Glassmorphism".to_string(),
                on: true
            }
        );
    }

    #[test]
    fn test_texts_come_from_config() {
        let config = CardConfig {
            holder: "ADA LOVELACE".to_string(),
            ..Default::default()
        };
        let card = MembershipCard::new(config);
        assert_eq!(card.element(ids::CARD_HOLDER).unwrap().text(), Some("ADA LOVELACE"));
        assert_eq!(card.element(ids::CARD_TITLE).unwrap().text(), Some("MEMBERSHIP"));
    }

    #[test]
    fn test_stylesheet_contains_glass_rules() {
        let mut card = card();
        card.set_backdrop(BackdropFilter::new(10.0, 1.8));
        let css = card.to_stylesheet();

        assert!(css.contains("#glass-card {"));
        assert!(css.contains("backdrop-filter: blur(10px) saturate(1.8);"));
        assert!(css.contains("box-shadow: -10px 10px 5px 0px rgba(0, 0, 0, 0.15), 10px -10px 5px 0px rgba(0, 0, 0, 0.15);"));
        assert!(css.contains("filter: blur(5px);"));
        assert!(css.contains("mix-blend-mode: overlay;"));
        assert!(css.contains("opacity: 0;"));
    }
}
