//! In-memory catalog provider
//!
//! Answers lookups from fixed listings. Used by tests and by the CLI's
//! offline mode, where the catalog comes from a JSON file instead of a
//! running node.

use crate::catalog::provider::CatalogProvider;
use crate::catalog::types::{AutocompleteRequest, AutocompleteResponse, CatalogEntity};
use crate::error::CatalogResult;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Catalog held in memory
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    /// Directory path (relative, with trailing `/`, `""` for the root) to children
    listings: HashMap<String, Vec<CatalogEntity>>,
    /// Table path (relative) to its column entities
    columns: HashMap<String, Vec<CatalogEntity>>,
    /// Answer every lookup with `Success: false`
    failing: bool,
    /// Every request seen, in order
    requests: Mutex<Vec<AutocompleteRequest>>,
}

/// File form of a memory catalog
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub listings: HashMap<String, Vec<CatalogEntity>>,
    #[serde(default)]
    pub columns: HashMap<String, Vec<CatalogEntity>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that rejects every lookup
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::new();
        for (dir, entities) in snapshot.listings {
            catalog = catalog.with_listing(&dir, entities);
        }
        for (table, entities) in snapshot.columns {
            catalog.columns.insert(table, entities);
        }
        catalog
    }

    /// Register the children of directory `dir`
    pub fn with_listing(mut self, dir: &str, entities: Vec<CatalogEntity>) -> Self {
        self.listings.insert(dir_key(dir), entities);
        self
    }

    /// Register columns of `table`, in order
    pub fn with_columns(mut self, table: &str, columns: &[&str]) -> Self {
        let table = table.trim_matches('/').to_string();
        let entities = columns
            .iter()
            .map(|name| CatalogEntity::column(*name, table.clone()))
            .collect();
        self.columns.insert(table, entities);
        self
    }

    /// Register fully described column entities of `table`
    pub fn with_column_entities(mut self, table: &str, columns: Vec<CatalogEntity>) -> Self {
        self.columns.insert(table.trim_matches('/').to_string(), columns);
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<AutocompleteRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, request: &AutocompleteRequest) {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
    }

    fn list_prefix(&self, prefix: &str) -> Vec<CatalogEntity> {
        // "shop/ord" lists "shop/" and keeps names starting with "ord"
        let (dir, stem) = match prefix.rfind('/') {
            Some(i) => prefix.split_at(i + 1),
            None => ("", prefix),
        };
        self.listings
            .get(dir)
            .map(|entities| {
                entities
                    .iter()
                    .filter(|e| e.name.starts_with(stem))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn list_columns(&self, tables: &[String]) -> Vec<CatalogEntity> {
        tables
            .iter()
            .filter_map(|t| self.columns.get(t.trim_matches('/')))
            .flat_map(|cols| cols.iter().cloned())
            .collect()
    }
}

fn dir_key(dir: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        String::new()
    } else {
        format!("{}/", dir)
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> CatalogResult<AutocompleteResponse> {
        self.record(request);
        if self.failing {
            return Ok(AutocompleteResponse::failed("catalog unavailable"));
        }

        let mut entities = if request.tables.is_empty() {
            self.list_prefix(request.prefix.as_deref().unwrap_or_default())
        } else {
            self.list_columns(&request.tables)
        };
        entities.truncate(request.limit);
        Ok(AutocompleteResponse::ok(entities))
    }
}
