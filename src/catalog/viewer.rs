//! Viewer HTTP catalog provider
//!
//! Concrete implementation over the node's `/viewer/json/autocomplete`
//! handler using reqwest.

use crate::catalog::provider::CatalogProvider;
use crate::catalog::types::{AutocompleteRequest, AutocompleteResponse};
use crate::config::Settings;
use crate::error::{CatalogError, CatalogResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Catalog provider backed by the viewer API
pub struct ViewerClient {
    /// Shared HTTP client (connection pool)
    http: reqwest::Client,
    /// Full autocomplete URL
    url: String,
}

impl ViewerClient {
    /// Build a client from settings.
    ///
    /// The token, when set, is sent verbatim as the `Authorization` header
    /// (e.g. `OAuth <token>` or `Bearer <token>`).
    pub fn new(settings: &Settings) -> CatalogResult<Self> {
        Self::with_url(
            settings.endpoint.autocomplete_url(),
            settings.timeout(),
            settings.token.as_deref(),
        )
    }

    /// Build a client for an explicit autocomplete URL
    pub fn with_url(url: String, timeout: Duration, token: Option<&str>) -> CatalogResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(token)
                .map_err(|e| CatalogError::InvalidEndpoint(format!("Invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::InvalidEndpoint(e.to_string()))?;

        Ok(Self { http, url })
    }

    /// URL every lookup is sent to
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Query parameters of an autocomplete call, in wire order
pub fn query_params(request: &AutocompleteRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![("database", request.database.clone())];
    if let Some(prefix) = &request.prefix {
        params.push(("prefix", prefix.clone()));
    }
    if !request.tables.is_empty() {
        params.push(("table", request.tables.join(",")));
    }
    params.push(("limit", request.limit.to_string()));
    params
}

#[async_trait]
impl CatalogProvider for ViewerClient {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> CatalogResult<AutocompleteResponse> {
        tracing::debug!(
            url = %self.url,
            prefix = ?request.prefix,
            tables = request.tables.len(),
            limit = request.limit,
            "catalog lookup"
        );

        let response = self
            .http
            .get(&self.url)
            .query(&query_params(request))
            .send()
            .await?
            .error_for_status()?;

        // decode failures surface as `CatalogError::Decode`
        Ok(response.json::<AutocompleteResponse>().await?)
    }
}
