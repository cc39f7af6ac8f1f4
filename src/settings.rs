//! Layered configuration for the CLI.
//!
//! Settings are resolved lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`breathwatch.toml` unless `--config` names another)
//! 3. `BREATHWATCH__*` environment variables, `__` separating nested keys
//!
//! ```toml
//! data_dir = "/var/lib/breathwatch"
//! log_filter = "breathwatch_core=debug"
//!
//! [scoring]
//! trigger_points = 20
//! humidity_range = { min = 35.0, max = 55.0 }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use breathwatch_core::ScoringConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given. It may be absent.
pub const DEFAULT_CONFIG_FILE: &str = "breathwatch.toml";

pub const ENV_PREFIX: &str = "BREATHWATCH";

/// Directory holding persisted profile and temperature data.
pub const DEFAULT_DATA_DIR: &str = ".breathwatch";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    pub scoring: ScoringConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_filter: None,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let config = Config::builder()
            .add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        let settings: AppConfig = config
            .try_deserialize()
            .context("Invalid breathwatch configuration")?;
        settings
            .scoring
            .validate()
            .context("Invalid scoring configuration")?;
        Ok(settings)
    }
}
