//! Tests for frost_app API

use crate::card::ids;
use crate::prelude::*;
use crate::{BackdropCapability, SurfaceConfig};

const EPS: f32 = 1e-4;

fn mounted_app(config: FrostConfig) -> FrostApp {
    let mut app = FrostApp::new(config);
    app.attach_surface();
    app
}

fn assert_filter(app: &FrostApp, blur: f32, saturation: f32) {
    let displayed = app.controller().displayed();
    assert!(
        (displayed.blur_radius - blur).abs() < EPS,
        "blur {} != {}",
        displayed.blur_radius,
        blur
    );
    assert!(
        (displayed.saturation - saturation).abs() < EPS,
        "saturation {} != {}",
        displayed.saturation,
        saturation
    );
}

#[test]
fn test_app_creation() {
    let app = FrostApp::default();
    assert!(!app.is_mounted());
    assert!(!app.controller().is_active());
    assert_eq!(app.card().content_opacity(), 0.0);
}

#[test]
fn test_activation_roundtrip() {
    let mut app = mounted_app(FrostConfig::default());
    assert_filter(&app, 30.0, 1.0);

    app.toggle();
    app.tick(500.0);
    assert_filter(&app, 10.0, 1.8);
    assert_eq!(app.card().content_opacity(), 1.0);
    assert_eq!(
        app.surface().css().as_deref(),
        Some("backdrop-filter: blur(10px) saturate(1.8); transition: backdrop-filter 500ms ease-in;")
    );

    app.toggle();
    app.tick(500.0);
    assert_filter(&app, 30.0, 1.0);
    assert_eq!(app.card().content_opacity(), 0.0);
}

#[test]
fn test_repeated_activation_is_noop() {
    let mut app = mounted_app(FrostConfig::default());
    assert!(app.set_active(true));
    app.tick(250.0);
    let halfway = app.controller().displayed();

    assert!(!app.set_active(true));
    app.tick(0.0);
    assert_eq!(app.controller().displayed(), halfway);
    assert_eq!(app.controller().transition_count(), 1);
}

#[test]
fn test_reversal_mid_animation_starts_from_displayed() {
    let mut app = mounted_app(FrostConfig::default());
    app.set_active(true);
    app.tick(250.0);
    let mid = app.controller().displayed().blur_radius;
    assert!(mid < 30.0 && mid > 10.0);

    app.set_active(false);
    app.tick(0.0);
    assert!((app.controller().displayed().blur_radius - mid).abs() < EPS);

    app.tick(500.0);
    assert_filter(&app, 30.0, 1.0);
}

#[test]
fn test_unsupported_backend_degrades_silently() {
    let config = FrostConfig {
        surface: SurfaceConfig {
            backend: SurfaceBackend::Unsupported,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut app = mounted_app(config);
    assert_eq!(app.surface().capability(), BackdropCapability::Unsupported);

    app.toggle();
    app.tick(500.0);
    assert_filter(&app, 10.0, 1.8);
    assert_eq!(app.surface().blur_radius(), 0.0);
    assert_eq!(app.surface().render_count(), 0);

    app.toggle();
    app.tick(500.0);
    assert_filter(&app, 0.0, 0.0);
}

#[test]
fn test_custom_active_values_from_toml() {
    let config = FrostConfig::from_toml_str(
        r#"
        [glass]
        active_blur = 4.0
        active_saturation = 2.5
        duration_ms = 200
        easing = "linear"
        "#,
    )
    .unwrap();
    let mut app = mounted_app(config);

    app.toggle();
    app.tick(100.0);
    assert_filter(&app, 17.0, 1.75);

    app.tick(100.0);
    assert_filter(&app, 4.0, 2.5);
}

#[test]
fn test_card_content_follows_effect() {
    let mut app = mounted_app(FrostConfig::default());
    app.toggle();
    app.tick(500.0);

    let card = app.card();
    assert_eq!(card.element(ids::CARD_TITLE).map(|e| e.opacity), Some(1.0));
    assert_eq!(
        card.element(ids::CARD_HOLDER).and_then(|e| e.text()),
        Some("SEUNGCHUL HA")
    );
    assert!(card
        .to_stylesheet()
        .contains("backdrop-filter: blur(10px) saturate(1.8)"));
}
