//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resulting
//! `Context`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STOREGEN_PROJECT__NAMESPACE`, ...
//! 3. `--config FILE` (must exist when given)
//! 4. `.storegen.toml` in the project directory
//! 5. Global `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = ".storegen.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where generated sources go.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Root package every artifact package hangs off.
    pub namespace: String,
    /// Source directory relative to the project directory.
    pub source_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                namespace: "com.example.mongo_migrate_multids".into(),
                source_root: "src/main/java".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration for `project_dir`, layering every source over the
    /// built-in defaults.
    pub fn load(project_dir: &Path, config_file: Option<&PathBuf>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = Self::config_path() {
            debug!(path = %global.display(), "Global config candidate");
            builder = builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(project_dir.join(PROJECT_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        if let Some(path) = config_file {
            debug!(path = %path.display(), "Explicit config file");
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("STOREGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(config_error)
    }

    /// Path to the global configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storegen", "storegen")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
