//! # bsvc-core: Foundational Types for the Blocked Services Catalog
//!
//! Defines the types shared by every stage of the catalog pipeline:
//!
//! - [`ServiceId`]: newtype over the `id` field of a service definition.
//!   Never empty; ordered byte-lexicographically so catalog output is stable.
//! - [`ServiceRecord`]: one parsed service definition. The `id` and
//!   `icon_svg` fields are typed; every other field is opaque and passed
//!   through to the catalog unchanged, in document order.
//! - [`yaml_to_json_value`]: the single conversion path from a YAML document
//!   tree to the JSON value tree that ends up in `services.json`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bsvc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod record;
pub mod yaml;

pub use error::CoreError;
pub use identity::ServiceId;
pub use record::ServiceRecord;
pub use yaml::yaml_to_json_value;
