//! Scenario runner that drives a [`GreeterApp`] through headless diagnostics goals.

use anyhow::Result;
use tracing::debug;

use crate::app::GreeterApp;
use crate::headless_assert::{
    evaluate_assert_exists, evaluate_assert_locale, evaluate_assert_rebuilds,
    evaluate_assert_selected, evaluate_assert_text_contains, AssertionResult, DiagnosticsSnapshot,
};
use crate::headless_report::{HeadlessReport, RunStats};
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

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

/// Execute scenario JSON against `app`.
pub fn run_scenario(
    app: &mut GreeterApp,
    input: &str,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(app, &scenario, runtime_cfg)
}

/// Execute a pre-loaded scenario against `app`.
///
/// Assertion failures produce a `Failed` outcome; only an invalid runtime
/// configuration is an `Err`.
pub fn run_loaded_scenario(
    app: &mut GreeterApp,
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    runtime_cfg.validate()?;
    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        debug!(step_index, ?step, "scenario step");
        let verdict = match step {
            ScenarioStep::Wait { ms } => {
                let frames = runtime_cfg.frames_for(*ms);
                run_frames(app, runtime_cfg, frames, &mut elapsed_frames, &mut elapsed_ms)?;
                None
            }
            ScenarioStep::Tick { frames } => {
                run_frames(app, runtime_cfg, *frames, &mut elapsed_frames, &mut elapsed_ms)?;
                None
            }
            ScenarioStep::Click { id } => match app.click(id) {
                Ok(_) => None,
                Err(e) => Some((
                    "click",
                    AssertionResult::Failed {
                        code: "click_failed".to_string(),
                        message: e.to_string(),
                    },
                )),
            },
            ScenarioStep::AssertExists { id } => {
                let snapshot = DiagnosticsSnapshot::capture(app);
                Some(("assert_exists", evaluate_assert_exists(id, &snapshot)))
            }
            ScenarioStep::AssertTextContains { id, value } => {
                let snapshot = DiagnosticsSnapshot::capture(app);
                Some((
                    "assert_text_contains",
                    evaluate_assert_text_contains(id, value, &snapshot),
                ))
            }
            ScenarioStep::AssertSelected { index } => {
                let snapshot = DiagnosticsSnapshot::capture(app);
                Some(("assert_selected", evaluate_assert_selected(*index, &snapshot)))
            }
            ScenarioStep::AssertLocale { locale } => {
                let snapshot = DiagnosticsSnapshot::capture(app);
                Some(("assert_locale", evaluate_assert_locale(locale, &snapshot)))
            }
            ScenarioStep::AssertRebuilds { count } => {
                let snapshot = DiagnosticsSnapshot::capture(app);
                Some(("assert_rebuilds", evaluate_assert_rebuilds(*count, &snapshot)))
            }
        };

        if let Some((assertion, AssertionResult::Failed { message, .. })) = verdict {
            let report = HeadlessReport::failed(
                scenario.name.clone(),
                assertion,
                step_index,
                message,
                stats(app, elapsed_frames, elapsed_ms),
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(
            scenario.name.clone(),
            stats(app, elapsed_frames, elapsed_ms),
        ),
    })
}

fn run_frames(
    app: &mut GreeterApp,
    runtime_cfg: HeadlessRunConfig,
    frames: u32,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
) -> Result<()> {
    if frames == 0 {
        return Ok(());
    }
    let mut cfg = runtime_cfg;
    cfg.max_frames = frames;
    HeadlessRuntime::run(app, cfg, |frame| {
        if frame.rebuilt {
            debug!(frame = frame.frame_index, "rebuild during headless run");
        }
        *elapsed_frames = elapsed_frames.saturating_add(1);
        *elapsed_ms = elapsed_ms.saturating_add(runtime_cfg.tick_ms);
    })
}

fn stats(app: &GreeterApp, elapsed_frames: u64, elapsed_ms: u64) -> RunStats {
    RunStats {
        elapsed_frames,
        elapsed_ms,
        rebuilds: app.rebuild_count(),
        final_locale: app.host_locale().to_string(),
    }
}
