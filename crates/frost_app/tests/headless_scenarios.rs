//! Headless scenario runs against the full app

use frost_app::headless_runner::{run_loaded_scenario, run_scenario_with_target};
use frost_app::headless_runtime::HeadlessRunConfig;
use frost_app::prelude::*;
use frost_app::{run_scenario, HeadlessScenario, ReportStatus};

const TOGGLE_ROUNDTRIP: &str = include_str!("../scenarios/toggle_roundtrip.json");
const IDEMPOTENT_ACTIVATION: &str = include_str!("../scenarios/idempotent_activation.json");
const MID_FLIGHT_REVERSAL: &str = include_str!("../scenarios/mid_flight_reversal.json");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn toggle_roundtrip_passes() {
    init_tracing();
    let outcome = run_scenario(TOGGLE_ROUNDTRIP).unwrap();
    let report = outcome.report();
    assert!(report.is_passed(), "{report:?}");
    assert_eq!(report.elapsed_ms, 1000);

    let effect = report.effect.as_ref().unwrap();
    assert!(!effect.active);
    assert!(!effect.animating);
    assert_eq!(effect.content_opacity, 0.0);
}

#[test]
fn repeated_activation_does_not_restart() {
    init_tracing();
    let outcome = run_scenario(IDEMPOTENT_ACTIVATION).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn reversal_settles_on_baseline() {
    init_tracing();
    let outcome = run_scenario(MID_FLIGHT_REVERSAL).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().elapsed_frames, 8 + 32);
}

#[test]
fn unsupported_backend_is_a_silent_noop() {
    init_tracing();
    let config = FrostConfig::from_toml_str(
        r#"
        [surface]
        backend = "unsupported"
        "#,
    )
    .unwrap();
    let mut app = FrostApp::new(config);

    let outcome = run_scenario_with_target(
        r#"{ "steps": [
            { "type": "attach" },
            { "type": "assert_blur", "value": 0.0 },
            { "type": "assert_saturation", "value": 0.0 },
            { "type": "toggle" },
            { "type": "wait", "ms": 500 },
            { "type": "assert_active", "value": true },
            { "type": "assert_blur", "value": 10.0 },
            { "type": "toggle" },
            { "type": "wait", "ms": 500 },
            { "type": "assert_blur", "value": 0.0 }
        ] }"#,
        HeadlessRunConfig::default(),
        &mut app,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    let effect = outcome.report().effect.clone().unwrap();
    assert!(!effect.backdrop_supported);
    assert!(effect.css.is_none());
    assert_eq!(app.surface().render_count(), 0);
}

#[test]
fn early_assertion_fails_with_context() {
    init_tracing();
    let outcome = run_scenario(
        r#"{ "name": "too_early", "steps": [
            { "type": "attach" },
            { "type": "toggle" },
            { "type": "wait", "ms": 100 },
            { "type": "assert_blur", "value": 10.0, "tolerance": 0.5 }
        ] }"#,
    )
    .unwrap();

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.scenario.as_deref(), Some("too_early"));
    assert_eq!(report.failed_step_index, Some(3));
    assert!(report.effect.as_ref().unwrap().animating);
    assert!(report.message.as_deref().unwrap_or_default().contains("blur"));
}

#[test]
fn coarse_ticks_still_settle_exactly() {
    init_tracing();
    let scenario = HeadlessScenario::from_json(TOGGLE_ROUNDTRIP).unwrap();
    let mut app = FrostApp::default();
    let cfg = HeadlessRunConfig {
        tick_ms: 100,
        probe_every_frames: 4,
        ..Default::default()
    };

    let outcome = run_loaded_scenario(&scenario, cfg, &mut app).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().elapsed_frames, 10);
}
