//! yql-suggest - Ranked YQL editor completions
//!
//! yql-suggest produces the suggestion list of a YQL query editor. An
//! external grammar-aware parser reports what may appear at the caret; this
//! crate turns that report into editor completion items, resolving table,
//! directory and column names through the database viewer's autocomplete API.
//!
//! # Features
//!
//! - **Entities**: tables, views, topics and directories under the typed path
//! - **Columns**: alias- and source-qualified, with key/nullability details
//! - **Statement hints**: keywords, variables, column aliases
//! - **Reference lists**: functions, types, UDFs, pragmas, entity settings
//! - **Stable ordering**: category first, catalog order second
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`context`]: The parser's caret hints
//! - [`catalog`]: Catalog lookups (viewer HTTP API, in-memory)
//! - [`suggest`]: Normalization, ranking, generators and the orchestrator
//! - [`config`]: Viewer endpoint and lookup settings
//! - [`error`]: Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use yql_suggest::catalog::ViewerClient;
//! use yql_suggest::config::Settings;
//! use yql_suggest::context::ParsedContext;
//! use yql_suggest::suggest::{EditorRange, SuggestRequest, Suggester};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::default();
//! let suggester = Suggester::with_settings(ViewerClient::new(&settings)?, &settings);
//!
//! let context = ParsedContext::from_json(r#"{"suggestEntity": ["table"]}"#)?;
//! let request = SuggestRequest::new(EditorRange::on_line(1, 15, 15), "/local");
//!
//! for item in suggester.suggest(&context, &request).await {
//!     println!("{} ({})", item.label_text(), item.sort_text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod suggest;

pub use error::{CatalogError, ConfigError, Result, SuggestError};
