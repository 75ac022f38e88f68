//! Infrastructure layer module
//!
//! Adapters around the pure core:
//! - Catalog configuration management (figment + YAML + env)
//! - Logging infrastructure (tracing)
//!
//! Storage, HTTP routing, and event broadcasting are external
//! collaborators and have no implementation here.

pub mod config;
pub mod logging;
