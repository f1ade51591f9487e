//! Settings file handling.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "rigcheck.toml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog file (`.toml` or `.json`).
    pub dataset: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/catalog.toml"),
            log_filter: "rigcheck=info,compat_core=info,parts_catalog=info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings file")
    }

    /// Read an explicit settings file, or the default one if present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => Path::new(DEFAULT_SETTINGS_FILE),
            None => return Ok(Self::default()),
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, dataset: Option<PathBuf>, output: Option<OutputFormat>) -> Self {
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
