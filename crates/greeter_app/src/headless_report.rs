//! Report output model for headless diagnostics runs.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless diagnostics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub rebuilds: u64,
    pub final_locale: String,
}

/// Run counters shared by passed and failed reports.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub rebuilds: u64,
    pub final_locale: String,
}

impl HeadlessReport {
    pub fn passed(scenario: Option<String>, stats: RunStats) -> Self {
        Self {
            scenario,
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames: stats.elapsed_frames,
            elapsed_ms: stats.elapsed_ms,
            rebuilds: stats.rebuilds,
            final_locale: stats.final_locale,
        }
    }

    pub fn failed(
        scenario: Option<String>,
        assertion: &str,
        failed_step_index: usize,
        message: String,
        stats: RunStats,
    ) -> Self {
        Self {
            scenario,
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames: stats.elapsed_frames,
            elapsed_ms: stats.elapsed_ms,
            rebuilds: stats.rebuilds,
            final_locale: stats.final_locale,
        }
    }

    /// Write the report as JSON to a relative path inside the working directory.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
