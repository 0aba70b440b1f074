//! # Catalog Pipeline
//!
//! Load, validate, write. Each stage finishes before the next starts, and
//! the catalog is written only if every icon passed validation.

use std::path::Path;

use bsvc_icon::validate_icons;

use crate::config::{CatalogConfig, INLINE_CONFIG};
use crate::error::CatalogError;
use crate::loader::load_services;
use crate::writer::write_catalog;

/// Rebuild the services catalog at `result_path` from the definitions named
/// by `file_names` in `input_dir`.
///
/// # Errors
///
/// Returns the first stage failure. `result_path` is untouched unless the
/// write stage itself is reached.
pub fn rewrite_services_json<N: AsRef<Path>>(
    input_dir: &Path,
    result_path: &Path,
    file_names: &[N],
) -> Result<(), CatalogError> {
    let records = load_services(input_dir, file_names)?;
    validate_icons(&records)?;
    write_catalog(records, result_path)
}

/// Rebuild the services catalog described by `config`.
///
/// # Errors
///
/// Returns `CatalogError::Config` if [`CatalogConfig::validate`] reports
/// problems, and the errors of [`rewrite_services_json`] otherwise.
pub fn run(config: &CatalogConfig) -> Result<(), CatalogError> {
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(CatalogError::Config {
            path: INLINE_CONFIG.to_string(),
            reason: problems.join("; "),
        });
    }

    rewrite_services_json(&config.input_dir, &config.output_path, &config.services)
}
