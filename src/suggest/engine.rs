//! Suggestion orchestrator
//!
//! Runs the generators the parser context asks for and concatenates their
//! items. Catalog-backed generators run concurrently; everything else is
//! synchronous. Nothing is shared between requests.

use crate::catalog::CatalogProvider;
use crate::config::Settings;
use crate::config::settings::DEFAULT_LOOKUP_LIMIT;
use crate::context::ParsedContext;
use crate::suggest::item::{CompletionItem, EditorRange};
use crate::suggest::{columns, entities, lexical};

/// Caret-side inputs of one suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    /// Range every item replaces
    pub range: EditorRange,
    /// Database path lookups are scoped to
    pub database: String,
    /// Entity path typed before the caret, as written (may start with a backtick)
    pub prefix: Option<String>,
}

impl SuggestRequest {
    pub fn new(range: EditorRange, database: impl Into<String>) -> Self {
        Self {
            range,
            database: database.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Suggestion pipeline over a catalog provider
pub struct Suggester<C> {
    catalog: C,
    entity_limit: usize,
    column_limit: usize,
}

impl<C: CatalogProvider> Suggester<C> {
    /// Pipeline with the default 1000-entity lookup caps
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            entity_limit: DEFAULT_LOOKUP_LIMIT,
            column_limit: DEFAULT_LOOKUP_LIMIT,
        }
    }

    /// Pipeline with the lookup caps from `settings`
    pub fn with_settings(catalog: C, settings: &Settings) -> Self {
        Self {
            catalog,
            entity_limit: settings.entity_limit,
            column_limit: settings.column_limit,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Produce the completion items for one caret position.
    ///
    /// Never fails: a category whose lookup fails is simply missing.
    pub async fn suggest(
        &self,
        context: &ParsedContext,
        request: &SuggestRequest,
    ) -> Vec<CompletionItem> {
        let range = request.range;
        let database = request.database.as_str();

        let entity_items = async {
            match context.suggest_entity.as_deref() {
                Some(kinds) if !kinds.is_empty() => {
                    entities::entities(
                        &self.catalog,
                        range,
                        kinds,
                        database,
                        request.prefix.as_deref(),
                        self.entity_limit,
                    )
                    .await
                }
                _ => Vec::new(),
            }
        };

        let column_items = async {
            match context.suggest_columns.as_ref() {
                Some(suggestion) if !context.column_sources().is_empty() => {
                    columns::columns(
                        &self.catalog,
                        range,
                        suggestion,
                        context.variables(),
                        database,
                        self.column_limit,
                    )
                    .await
                }
                _ => Vec::new(),
            }
        };

        let index_items = async {
            match context.suggest_table_indexes.as_ref() {
                Some(hint) if !hint.table_name.is_empty() => {
                    entities::table_indexes(
                        &self.catalog,
                        range,
                        &hint.table_name,
                        database,
                        self.entity_limit,
                    )
                    .await
                }
                _ => Vec::new(),
            }
        };

        let (entity_items, column_items, index_items) =
            futures::join!(entity_items, column_items, index_items);

        let mut items = Vec::new();
        if context.suggest_pragmas {
            items.extend(lexical::pragmas(range));
        }
        items.extend(entity_items);
        items.extend(column_items);
        if let Some(aliases) = context.suggest_column_aliases.as_deref() {
            items.extend(lexical::column_aliases(range, aliases));
        }
        items.extend(lexical::variables(range, context.variables()));
        items.extend(index_items);
        if let Some(entity) = context.suggest_table_hints {
            items.extend(lexical::table_hints(range, entity));
        }
        if let Some(entity) = context.suggest_entity_settings {
            items.extend(lexical::entity_settings(range, entity));
        }
        if let Some(keywords) = context.suggest_keywords.as_deref() {
            items.extend(lexical::keywords(range, keywords));
        }
        if context.suggest_aggregate_functions {
            items.extend(lexical::aggregate_functions(range));
        }
        if context.suggest_table_functions {
            items.extend(lexical::table_functions(range));
        }
        if context.suggest_window_functions {
            items.extend(lexical::window_functions(range));
        }
        if context.suggest_functions {
            items.extend(lexical::simple_functions(range));
        }
        if context.suggest_simple_types {
            items.extend(lexical::simple_types(range));
        }
        if context.suggest_udfs {
            items.extend(lexical::udfs(range));
        }

        tracing::debug!(database, items = items.len(), "suggestions ready");
        items
    }
}
