//! # Service Definition Loader
//!
//! Reads the named YAML files from the services directory, in the order the
//! names are given. One file holds one service definition.

use std::path::Path;

use bsvc_core::ServiceRecord;

use crate::error::CatalogError;

/// Load the service definitions named by `file_names` from `directory`.
///
/// The result corresponds one-to-one, by index, to `file_names`.
///
/// # Errors
///
/// Returns `CatalogError::Load` for the first file that is missing,
/// unreadable, not valid YAML, or not a service definition. Records loaded
/// before the failure are discarded.
pub fn load_services<N: AsRef<Path>>(
    directory: &Path,
    file_names: &[N],
) -> Result<Vec<ServiceRecord>, CatalogError> {
    let records = file_names
        .iter()
        .map(|name| load_service(&directory.join(name)))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        directory = %directory.display(),
        services = records.len(),
        "loaded service definitions"
    );
    Ok(records)
}

/// Load a single service definition file.
fn load_service(path: &Path) -> Result<ServiceRecord, CatalogError> {
    tracing::debug!(path = %path.display(), "reading service definition");

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Load {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    ServiceRecord::from_yaml_str(&content).map_err(|e| CatalogError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
