//! Catalog provider trait
//!
//! Defines the interface every catalog lookup backend must implement.
//! This abstraction allows for:
//! - The viewer HTTP client in production
//! - In-memory catalogs in tests
//! - Consistent degradation when a lookup fails

use crate::catalog::types::{AutocompleteRequest, AutocompleteResponse, CatalogEntity};
use crate::error::CatalogResult;
use async_trait::async_trait;

/// Main catalog provider trait
///
/// Callers own authentication and session context; the suggestion pipeline
/// treats a provider as a plain async function.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Resolve a path prefix or a table list into catalog entities
    ///
    /// # Errors
    /// Returns `CatalogError` when the lookup could not be performed at all.
    /// A lookup the backend rejected is `Ok` with `success == false`.
    async fn autocomplete(&self, request: &AutocompleteRequest)
    -> CatalogResult<AutocompleteResponse>;
}

#[async_trait]
impl<T: CatalogProvider + ?Sized> CatalogProvider for std::sync::Arc<T> {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> CatalogResult<AutocompleteResponse> {
        (**self).autocomplete(request).await
    }
}

/// Run a lookup and fold every failure into `None`
///
/// Autocomplete must never break editing, so transport errors and
/// `success == false` are logged and swallowed here.
pub async fn fetch_entities<C: CatalogProvider + ?Sized>(
    provider: &C,
    request: &AutocompleteRequest,
) -> Option<Vec<CatalogEntity>> {
    match provider.autocomplete(request).await {
        Ok(response) => {
            let errors = response.error.clone();
            let entities = response.into_entities();
            if entities.is_none() {
                tracing::warn!(
                    database = %request.database,
                    errors = ?errors,
                    "catalog lookup rejected"
                );
            }
            entities
        }
        Err(err) => {
            tracing::warn!(database = %request.database, error = %err, "catalog lookup failed");
            None
        }
    }
}
