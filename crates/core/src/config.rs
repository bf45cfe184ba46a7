// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker configuration
//!
//! Loaded from TOML with human-readable durations:
//!
//! ```toml
//! name = "BackgroundWorker"
//! seed = 42
//!
//! [timing]
//! min = "30ms"
//! max = "70ms"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default worker name, also used as the execution context's span name
pub const DEFAULT_NAME: &str = "BackgroundWorker";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid job timing: min {min:?} exceeds max {max:?}")]
    InvalidTiming { min: Duration, max: Duration },
}

/// Bounds of the simulated per-step delay, drawn from `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTiming {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl JobTiming {
    pub const DEFAULT_MIN: Duration = Duration::from_millis(30);
    pub const DEFAULT_MAX: Duration = Duration::from_millis(70);

    pub fn new(min: Duration, max: Duration) -> Result<Self, ConfigError> {
        let timing = Self { min, max };
        timing.validate()?;
        Ok(timing)
    }

    pub fn from_millis(min: u64, max: u64) -> Result<Self, ConfigError> {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidTiming {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for JobTiming {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Everything needed to create a worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub name: String,
    pub timing: JobTiming,
    /// Fixed seed for the delay source; seeded from the wall clock when absent
    pub seed: Option<u64>,
}

impl WorkerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_timing(mut self, timing: JobTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: WorkerConfig = toml::from_str(source)?;
        config.timing.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            timing: JobTiming::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
