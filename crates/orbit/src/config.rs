use anyhow::{Context, Result};
use orbit_core::MotionParams;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Main configuration for an Orbit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the plugin component; the native engine is used when absent
    #[serde(default)]
    pub plugin: Option<String>,

    /// Fixed-point parameters passed to `initialize`
    pub motion: MotionParams,

    /// Object position before the first tick
    #[serde(default)]
    pub start: StartConfig,

    /// Run loop configuration
    #[serde(default)]
    pub run: RunConfig,
}

/// Initial register values, in fixed point
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StartConfig {
    #[serde(default)]
    pub x: i32,

    #[serde(default)]
    pub y: i32,
}

/// Run loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of ticks to run
    #[serde(default = "default_ticks")]
    pub ticks: u32,

    /// Seed for the host random source; seeded from the OS when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            seed: None,
        }
    }
}

fn default_ticks() -> u32 {
    360
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let mut config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            // Try TOML first (preferred), fall back to JSON
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }?;

        // Plugin paths are relative to the config file; an empty path is left
        // for `validate` to reject
        if let (Some(plugin), Some(dir)) = (config.plugin.as_mut(), path.parent())
            && !plugin.is_empty()
            && Path::new(plugin.as_str()).is_relative()
        {
            *plugin = dir.join(&*plugin).to_string_lossy().into_owned();
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.plugin.as_deref() == Some("") {
            anyhow::bail!("plugin cannot be empty");
        }

        if self.run.ticks == 0 {
            anyhow::bail!("run.ticks must be at least 1");
        }

        // A single wrap step only keeps the angle within a turn up to this speed
        if self.motion.speed.unsigned_abs() > 3_600_000 {
            tracing::warn!(
                speed = self.motion.speed,
                "motion.speed exceeds a full turn per tick; angle will drift past 360"
            );
        }

        Ok(())
    }
}
