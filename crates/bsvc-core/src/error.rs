//! # Error Types
//!
//! Errors raised while turning raw service definitions into typed records.
//! Higher crates wrap these with the file path they came from.

use thiserror::Error;

/// Error constructing a [`ServiceId`](crate::ServiceId) or
/// [`ServiceRecord`](crate::ServiceRecord).
#[derive(Error, Debug)]
pub enum CoreError {
    /// The service identifier is empty or otherwise unusable.
    #[error("invalid service id: {0}")]
    InvalidId(String),

    /// The document parsed, but does not have the shape of a service definition.
    #[error("invalid service record: {reason}")]
    InvalidRecord {
        /// What is wrong with the document.
        reason: String,
    },

    /// The document is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML tree cannot be represented as JSON.
    #[error("YAML-to-JSON conversion failed: {0}")]
    Conversion(String),
}
