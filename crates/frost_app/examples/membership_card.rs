//! Membership Card Demo
//!
//! Drives the glassmorphism toggle headlessly:
//! - Loads an optional TOML config (first argument)
//! - Runs the toggle roundtrip scenario, prints the JSON report and writes it
//!   to `target/membership_card_report.json`
//! - Prints the card stylesheet with the glass effect active
//!
//! Run with: cargo run -p frost_app --example membership_card [-- frost.toml]

use std::path::Path;

use frost_app::headless_runner::run_loaded_scenario;
use frost_app::headless_runtime::HeadlessRunConfig;
use frost_app::prelude::*;
use frost_app::HeadlessScenario;
use frost_core::event_types;
use tracing_subscriber::EnvFilter;

const SCENARIO: &str = include_str!("../scenarios/toggle_roundtrip.json");
const REPORT_PATH: &str = "target/membership_card_report.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FrostConfig::from_path(Path::new(&path))?,
        None => FrostConfig::default(),
    };

    let mut app = FrostApp::new(config.clone());
    app.subscribe(FrostApp::TOGGLE_ID, event_types::TOGGLE, |event| {
        tracing::info!(timestamp = event.timestamp, "toggle pressed");
    });

    let scenario = HeadlessScenario::from_json(SCENARIO)?;
    let run_cfg = HeadlessRunConfig {
        width: config.card.viewport_width as u32,
        height: config.card.viewport_height as u32,
        ..Default::default()
    };
    let outcome = run_loaded_scenario(&scenario, run_cfg, &mut app)?;
    outcome.report().write_to_writer(&mut std::io::stdout())?;
    outcome.report().write_to_path(Path::new(REPORT_PATH))?;
    tracing::info!(path = REPORT_PATH, "report written");

    let mut showcase = FrostApp::new(config);
    showcase.attach_surface();
    showcase.set_active(true);
    showcase.tick(showcase.config().glass.duration_ms as f32);
    if let Some(css) = showcase.surface().css() {
        println!("{css}");
    }
    print!("{}", showcase.card().to_stylesheet());

    if outcome.is_failed() {
        anyhow::bail!("scenario failed");
    }
    Ok(())
}
