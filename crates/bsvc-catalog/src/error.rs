//! # Pipeline Errors
//!
//! Every stage failure is fatal. Errors carry enough context (file path,
//! service id, rule) to fix the offending source without re-running.

use bsvc_icon::IconError;
use thiserror::Error;

/// Error from any stage of the catalog pipeline.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A service definition could not be read or parsed.
    #[error("error while reading YAML files: '{path}': {reason}")]
    Load {
        /// Path of the service definition file.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// Icon validation failed.
    #[error(transparent)]
    Icons(#[from] IconError),

    /// The catalog could not be written.
    #[error("error while writing services catalog '{path}': {reason}")]
    Write {
        /// Destination path of the catalog.
        path: String,
        /// Reason the catalog could not be written.
        reason: String,
    },

    /// The pipeline configuration is unreadable or invalid.
    #[error("invalid catalog config '{path}': {reason}")]
    Config {
        /// Path of the configuration file, or `<inline>` once parsed.
        path: String,
        /// What is wrong with the configuration.
        reason: String,
    },
}
