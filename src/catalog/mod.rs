//! Catalog lookup layer
//!
//! This module provides a trait-based abstraction over the database's
//! catalog lookups, allowing the viewer HTTP API in production and
//! in-memory catalogs in tests.

pub mod memory;
pub mod provider;
pub mod types;
pub mod viewer;

// Re-export main types
pub use memory::{CatalogSnapshot, MemoryCatalog};
pub use provider::{CatalogProvider, fetch_entities};
pub use types::{
    AutocompleteRequest, AutocompleteResponse, AutocompleteResult, CatalogEntity, EntityType,
};
pub use viewer::ViewerClient;
