//! Scenario runner that executes headless diagnostics goals.

use crate::app::FrostApp;
use crate::config::FrostConfig;
use crate::headless_assert::{
    evaluate_assert_active, evaluate_assert_blur, evaluate_assert_exists,
    evaluate_assert_saturation, evaluate_assert_text_contains, AssertionResult,
    DiagnosticsSnapshot,
};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use anyhow::Result;
use frost_core::Event;

/// Temporal context passed into diagnostics probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeContext {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub step_index: usize,
}

/// Something a scenario can drive: receives input, advances frames, and
/// reports observable state.
pub trait HeadlessTarget {
    fn dispatch(&mut self, event: &Event);

    /// Advance one frame by `dt_ms` logical milliseconds
    fn advance(&mut self, dt_ms: u64);

    fn snapshot(&self, ctx: &ProbeContext) -> DiagnosticsSnapshot;
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a default app.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let mut app = FrostApp::new(FrostConfig::default());
    run_scenario_with_target(input, HeadlessRunConfig::default(), &mut app)
}

/// Execute scenario JSON against a caller-provided target.
pub fn run_scenario_with_target<T: HeadlessTarget>(
    input: &str,
    runtime_cfg: HeadlessRunConfig,
    target: &mut T,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg, target)
}

/// Execute a pre-loaded scenario against a target.
pub fn run_loaded_scenario<T: HeadlessTarget>(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
    target: &mut T,
) -> Result<RunOutcome> {
    runtime_cfg.validate()?;

    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;
    let mut latest_snapshot: Option<DiagnosticsSnapshot> = None;
    let probe_every = runtime_cfg.probe_every_frames;

    // The run viewport applies before any step executes
    dispatch(
        target,
        &mut latest_snapshot,
        Event::resize(FrostApp::ROOT_ID, runtime_cfg.width, runtime_cfg.height),
        elapsed_ms,
    );

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let ctx = ProbeContext {
            elapsed_frames,
            elapsed_ms,
            step_index,
        };

        let result = match step {
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, runtime_cfg.tick_ms);
                let mut remaining_ms = *ms;
                run_sampled_frames(
                    runtime_cfg,
                    frames,
                    probe_every,
                    step_index,
                    &mut elapsed_frames,
                    &mut elapsed_ms,
                    &mut latest_snapshot,
                    target,
                    || {
                        let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                        remaining_ms = remaining_ms.saturating_sub(step_ms);
                        step_ms
                    },
                )?;
                continue;
            }
            ScenarioStep::Tick { frames } => {
                run_sampled_frames(
                    runtime_cfg,
                    *frames,
                    probe_every,
                    step_index,
                    &mut elapsed_frames,
                    &mut elapsed_ms,
                    &mut latest_snapshot,
                    target,
                    || runtime_cfg.tick_ms,
                )?;
                continue;
            }
            ScenarioStep::Attach => {
                dispatch(target, &mut latest_snapshot, Event::mount(FrostApp::ROOT_ID), elapsed_ms);
                continue;
            }
            ScenarioStep::Toggle => {
                dispatch(target, &mut latest_snapshot, Event::toggle(FrostApp::TOGGLE_ID), elapsed_ms);
                continue;
            }
            ScenarioStep::SetActive { value } => {
                dispatch(
                    target,
                    &mut latest_snapshot,
                    Event::set_toggle(FrostApp::TOGGLE_ID, *value),
                    elapsed_ms,
                );
                continue;
            }
            ScenarioStep::AssertExists { id } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, target, ctx);
                ("assert_exists", evaluate_assert_exists(id, snapshot))
            }
            ScenarioStep::AssertTextContains { id, value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, target, ctx);
                (
                    "assert_text_contains",
                    evaluate_assert_text_contains(id, value, snapshot),
                )
            }
            ScenarioStep::AssertActive { value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, target, ctx);
                ("assert_active", evaluate_assert_active(*value, snapshot))
            }
            ScenarioStep::AssertBlur { value, tolerance } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, target, ctx);
                ("assert_blur", evaluate_assert_blur(*value, *tolerance, snapshot))
            }
            ScenarioStep::AssertSaturation { value, tolerance } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, target, ctx);
                (
                    "assert_saturation",
                    evaluate_assert_saturation(*value, *tolerance, snapshot),
                )
            }
        };

        if let (assertion, AssertionResult::Failed { message, .. }) = result {
            tracing::info!(step_index, assertion, %message, "scenario failed");
            let effect = ensure_snapshot(&mut latest_snapshot, target, ctx).effect.clone();
            let report =
                HeadlessReport::failed(assertion, step_index, message, elapsed_frames, elapsed_ms)
                    .with_scenario(scenario.name.clone())
                    .with_effect(effect);
            return Ok(RunOutcome::Failed { report });
        }
    }

    let effect = ensure_snapshot(
        &mut latest_snapshot,
        target,
        ProbeContext {
            elapsed_frames,
            elapsed_ms,
            step_index: scenario.steps.len(),
        },
    )
    .effect
    .clone();
    tracing::info!(elapsed_frames, elapsed_ms, "scenario passed");

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(elapsed_frames, elapsed_ms)
            .with_scenario(scenario.name.clone())
            .with_effect(effect),
    })
}

fn dispatch<T: HeadlessTarget>(
    target: &mut T,
    latest_snapshot: &mut Option<DiagnosticsSnapshot>,
    event: Event,
    elapsed_ms: u64,
) {
    target.dispatch(&event.with_timestamp(elapsed_ms));
    *latest_snapshot = None;
}

fn ensure_snapshot<'a, T: HeadlessTarget>(
    latest_snapshot: &'a mut Option<DiagnosticsSnapshot>,
    target: &T,
    probe_ctx: ProbeContext,
) -> &'a DiagnosticsSnapshot {
    latest_snapshot.get_or_insert_with(|| target.snapshot(&probe_ctx))
}

#[allow(clippy::too_many_arguments)]
fn run_sampled_frames<T, A>(
    runtime_cfg: HeadlessRunConfig,
    frames: u32,
    probe_every: u32,
    step_index: usize,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
    latest_snapshot: &mut Option<DiagnosticsSnapshot>,
    target: &mut T,
    mut advance_ms: A,
) -> Result<()>
where
    T: HeadlessTarget,
    A: FnMut() -> u64,
{
    if frames == 0 {
        *latest_snapshot = Some(target.snapshot(&ProbeContext {
            elapsed_frames: *elapsed_frames,
            elapsed_ms: *elapsed_ms,
            step_index,
        }));
        return Ok(());
    }

    let mut cfg = runtime_cfg;
    cfg.max_frames = frames;
    let mut sampled_frames = 0u32;
    HeadlessRuntime::run(cfg, |_| {
        let dt_ms = advance_ms();
        target.advance(dt_ms);
        *elapsed_frames = (*elapsed_frames).saturating_add(1);
        *elapsed_ms = (*elapsed_ms).saturating_add(dt_ms);
        sampled_frames = sampled_frames.saturating_add(1);

        if sampled_frames % probe_every == 0 || sampled_frames == frames {
            *latest_snapshot = Some(target.snapshot(&ProbeContext {
                elapsed_frames: *elapsed_frames,
                elapsed_ms: *elapsed_ms,
                step_index,
            }));
        } else {
            *latest_snapshot = None;
        }
    })?;

    Ok(())
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
