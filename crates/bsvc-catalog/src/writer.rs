//! # Catalog Writer
//!
//! Writes `services.json` through a temporary file in the destination
//! directory that is renamed over the target once fully written. Readers
//! see either the previous catalog or the new one, never a partial file.

use std::io::Write;
use std::path::Path;

use bsvc_core::ServiceRecord;

use crate::catalog::ServicesCatalog;
use crate::error::CatalogError;

/// Sort `records`, wrap them in the catalog envelope and write the catalog
/// to `output_path`, replacing any existing file.
///
/// # Errors
///
/// Returns `CatalogError::Write` if serialization or any filesystem step
/// fails. The temporary file is removed and an existing catalog at
/// `output_path` is left untouched.
pub fn write_catalog(records: Vec<ServiceRecord>, output_path: &Path) -> Result<(), CatalogError> {
    let catalog = ServicesCatalog::from_records(records);
    let json = catalog.to_json_pretty().map_err(|e| CatalogError::Write {
        path: output_path.display().to_string(),
        reason: format!("serialization failed: {e}"),
    })?;

    write_atomic(output_path, json.as_bytes()).map_err(|e| CatalogError::Write {
        path: output_path.display().to_string(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        path = %output_path.display(),
        services = catalog.len(),
        "wrote services catalog"
    );
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tracing::debug!(tmp = %tmp.path().display(), "staging catalog in temporary file");

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    // Temporary files are created owner-only; the catalog is a published artifact.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(id: &str) -> ServiceRecord {
        ServiceRecord::from_value(json!({"id": id, "icon_svg": "<svg/>"})).unwrap()
    }

    #[test]
    fn writes_sorted_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("services.json");

        write_catalog(vec![record("b"), record("a")], &out).unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["blocked_services"][0]["id"], "a");
        assert_eq!(value["blocked_services"][1]["id"], "b");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("services.json");
        std::fs::write(&out, "stale").unwrap();

        write_catalog(vec![record("a")], &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("{\n  \"blocked_services\""));
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("services.json");

        write_catalog(vec![record("a")], &out).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no-such-dir").join("services.json");

        let err = write_catalog(vec![record("a")], &out).unwrap_err();
        match err {
            CatalogError::Write { path, .. } => assert!(path.ends_with("services.json")),
            other => panic!("expected Write, got: {other}"),
        }
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn catalog_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("services.json");
        write_catalog(vec![record("a")], &out).unwrap();

        let mode = std::fs::metadata(&out).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
