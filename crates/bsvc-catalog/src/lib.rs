//! # bsvc-catalog: Blocked Services Catalog Pipeline
//!
//! Builds `services.json` from a directory of per-service YAML definitions:
//!
//! ```text
//! load_services ──▶ validate_icons ──▶ write_catalog
//!  (YAML files)      (house style)      (sorted, atomic)
//! ```
//!
//! Each stage completes before the next begins, and any failure aborts the
//! run before the output file is touched.
//!
//! ## Entry Points
//!
//! - [`rewrite_services_json`]: run the pipeline for explicit arguments.
//! - [`run`]: run the pipeline described by a [`CatalogConfig`].
//!
//! The individual stages ([`load_services`], [`write_catalog`]) are public
//! for callers that need only part of the pipeline.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use catalog::ServicesCatalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use loader::load_services;
pub use pipeline::{rewrite_services_json, run};
pub use writer::write_catalog;
