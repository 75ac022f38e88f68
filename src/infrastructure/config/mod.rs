//! Catalog configuration management
//!
//! Hierarchical catalog loading using figment:
//! - Built-in phase/step tables as defaults
//! - YAML file overrides
//! - Environment variable overrides
//! - Invariant validation after every load

pub mod loader;

pub use loader::{CatalogError, CatalogLoader};
