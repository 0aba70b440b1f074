//! # Pipeline Configuration
//!
//! A small YAML file naming the services directory, the catalog
//! destination and the ordered list of service definition files:
//!
//! ```yaml
//! input_dir: services
//! output_path: services.json
//! services:
//!   - youtube.yml
//!   - tiktok.yml
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file, so the pipeline behaves the same from any working directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Placeholder path reported for configs not read from a file.
pub(crate) const INLINE_CONFIG: &str = "<inline>";

/// Inputs and output of one catalog build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory holding the per-service YAML files.
    pub input_dir: PathBuf,
    /// Destination of the generated catalog.
    pub output_path: PathBuf,
    /// Service definition file names, relative to `input_dir`.
    pub services: Vec<String>,
}

impl CatalogConfig {
    /// Parse a config from YAML text. Paths are kept as written.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if the text is not valid YAML or does
    /// not match the config shape.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(source).map_err(|e| CatalogError::Config {
            path: INLINE_CONFIG.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read a config file and resolve its relative paths against the
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| CatalogError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(config = %path.display(), base = %base.display(), "loaded catalog config");
        Ok(config.resolve_relative_to(base))
    }

    /// Make relative `input_dir` and `output_path` relative to `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        if self.input_dir.is_relative() {
            self.input_dir = base.join(&self.input_dir);
        }
        if self.output_path.is_relative() {
            self.output_path = base.join(&self.output_path);
        }
        self
    }

    /// Check the config for problems. Returns a list of error messages
    /// (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.services.is_empty() {
            errors.push("services must list at least one file".to_string());
        }

        let mut seen = BTreeSet::new();
        for name in &self.services {
            if name.trim().is_empty() {
                errors.push("services must not contain empty file names".to_string());
                continue;
            }
            if name.contains('/') || name.contains('\\') {
                errors.push(format!(
                    "service file '{name}' must be a plain file name inside input_dir"
                ));
            }
            if !seen.insert(name.as_str()) {
                errors.push(format!("service file '{name}' is listed more than once"));
            }
        }

        errors
    }
}
