//! Greeter configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::headless_runtime::HeadlessRunConfig;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "greeter.toml";

/// Top-level configuration (greeter.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct GreeterConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Host runtime settings
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct HostConfig {
    /// Startup locale; `None` detects it from the OS
    #[serde(default)]
    pub locale: Option<String>,
}

/// Headless frame loop settings
///
/// The view tree carries no geometry, so only the frame tick is configurable.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct HeadlessConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    16
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl HeadlessConfig {
    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            tick_ms: self.tick_ms,
            ..Default::default()
        }
    }
}

/// Logging settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl GreeterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse greeter.toml")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Load `path` if given, else `greeter.toml` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
