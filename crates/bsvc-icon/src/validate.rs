//! # Batch Icon Validation
//!
//! Validates the icons of a whole batch of service records. Rule
//! violations are collected across every record and reported together, so
//! one run surfaces every icon that needs fixing. A record whose markup does
//! not parse stops validation immediately.

use std::fmt;

use bsvc_core::{ServiceId, ServiceRecord};
use thiserror::Error;

use crate::rules::{check_icon, IconViolation};

/// A service icon is not well-formed XML.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid SVG for the service with id '{service_id}': {reason}")]
pub struct SvgParseError {
    /// Service whose icon failed to parse.
    pub service_id: ServiceId,
    /// Parser diagnostic.
    pub reason: String,
}

/// Error returned by [`validate_icons`].
#[derive(Error, Debug)]
pub enum IconError {
    /// An icon could not be parsed at all.
    #[error(transparent)]
    Parse(#[from] SvgParseError),

    /// One or more icons violate the house style.
    #[error("{0}")]
    Violations(IconViolations),
}

/// Every violation found in one validation run, in record-then-rule order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconViolations {
    violations: Vec<IconViolation>,
}

impl IconViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[IconViolation] {
        &self.violations
    }

    /// Rendered `"<id> : <description>"` messages.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<IconViolation> {
        self.violations
    }
}

impl fmt::Display for IconViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate the icon of every record.
///
/// # Errors
///
/// Returns `IconError::Parse` as soon as one icon fails to parse, and
/// `IconError::Violations` with every rule violation across all records
/// otherwise.
pub fn validate_icons(records: &[ServiceRecord]) -> Result<(), IconError> {
    let mut violations = Vec::new();

    for record in records {
        tracing::debug!(service_id = %record.id(), "checking service icon");
        let found = check_icon(record.id(), record.icon_svg())?;
        for v in &found {
            tracing::warn!(service_id = %v.service_id, rule = ?v.rule, "icon rule violated");
        }
        violations.extend(found);
    }

    if violations.is_empty() {
        tracing::info!(services = records.len(), "all service icons are valid");
        Ok(())
    } else {
        Err(IconError::Violations(IconViolations { violations }))
    }
}
