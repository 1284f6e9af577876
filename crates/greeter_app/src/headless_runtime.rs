//! Deterministic headless frame loop.

use anyhow::{bail, Result};

use crate::app::GreeterApp;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(())
    }

    /// Frames needed to cover `ms` of logical time (rounded up).
    pub fn frames_for(&self, ms: u64) -> u32 {
        if ms == 0 {
            return 0;
        }
        let tick = self.tick_ms.max(1);
        let frames = ms.saturating_add(tick - 1) / tick;
        frames.min(u32::MAX as u64) as u32
    }
}

/// What happened in one headless frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessFrame {
    pub frame_index: u32,
    pub elapsed_ms: u64,
    pub rebuilt: bool,
}

/// Runs host frames against a [`GreeterApp`] without a window.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run `cfg.max_frames` frames, reporting each to `on_frame`.
    pub fn run<F>(app: &mut GreeterApp, cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessFrame),
    {
        cfg.validate()?;
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }

        for frame in 0..cfg.max_frames {
            let rebuilt = app.frame();
            on_frame(&HeadlessFrame {
                frame_index: frame,
                elapsed_ms: cfg.tick_ms.saturating_mul(frame as u64 + 1),
                rebuilt,
            });
        }

        Ok(())
    }
}
