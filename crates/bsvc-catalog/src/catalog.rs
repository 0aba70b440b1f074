//! # Services Catalog
//!
//! The `services.json` envelope: a single object whose `blocked_services`
//! key holds every service record, sorted by id.

use std::collections::HashSet;

use bsvc_core::ServiceRecord;
use serde::{Deserialize, Serialize};

/// The published catalog of blockable services.
///
/// # Invariants
///
/// - `blocked_services` is sorted ascending by service id. Records sharing
///   an id keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesCatalog {
    blocked_services: Vec<ServiceRecord>,
}

impl ServicesCatalog {
    /// Sort the records by id and wrap them in the catalog envelope.
    pub fn from_records(mut records: Vec<ServiceRecord>) -> Self {
        records.sort_by(|a, b| a.id().cmp(b.id()));

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                tracing::warn!(service_id = %record.id(), "duplicate service id in catalog");
            }
        }

        Self { blocked_services: records }
    }

    /// The catalog's services, in catalog order.
    pub fn services(&self) -> &[ServiceRecord] {
        &self.blocked_services
    }

    /// Returns the number of services.
    pub fn len(&self) -> usize {
        self.blocked_services.len()
    }

    /// Returns true if the catalog holds no services.
    pub fn is_empty(&self) -> bool {
        self.blocked_services.is_empty()
    }

    /// Serialize to JSON with two-space indentation and no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
