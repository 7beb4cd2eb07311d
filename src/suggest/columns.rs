//! Column generator
//!
//! Columns come from three places, in this order: the catalog (for table
//! and view sources), the parser's knowledge of `$variable` subqueries, and
//! columns the parser resolved itself. Each column is offered once per alias
//! of its source; without an alias it is qualified by the source name when
//! the statement reads from several sources.

use crate::catalog::{AutocompleteRequest, CatalogEntity, CatalogProvider, fetch_entities};
use crate::context::{ColumnSuggestion, VariableSuggestion};
use crate::suggest::item::{CompletionItem, CompletionItemKind, EditorRange};
use crate::suggest::names::{
    is_variable_reference, normalize_entity_prefix, source_key, strip_backticks,
    wrap_in_backticks_if_needed,
};
use crate::suggest::rank::{SuggestionCategory, category_sort_text, sort_text};
use std::collections::HashMap;

/// Short attribute tag, e.g. `PK0, NN, Default`; empty when nothing is known
pub fn column_details(column: &CatalogEntity) -> String {
    let mut details = Vec::new();
    if let Some(pk) = column.pk_index {
        details.push(format!("PK{}", pk));
    }
    if column.not_null == Some(true) {
        details.push("NN".to_string());
    }
    if column.has_default() {
        details.push("Default".to_string());
    }
    details.join(", ")
}

/// Source name -> aliases it is referenced by in the statement
pub type AliasMap = HashMap<String, Vec<String>>;

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

pub async fn columns<C: CatalogProvider + ?Sized>(
    catalog: &C,
    range: EditorRange,
    suggestion: &ColumnSuggestion,
    variables: &[VariableSuggestion],
    database: &str,
    limit: usize,
) -> Vec<CompletionItem> {
    let Some(sources) = suggestion.tables.as_deref() else {
        return Vec::new();
    };
    let multi = sources.len() > 1;

    // Tables are looked up as directories: `orders/` lists its columns
    let mut table_sources = Vec::new();
    let mut variable_sources = Vec::new();
    for source in sources {
        let unquoted = strip_backticks(&source.name);
        if is_variable_reference(unquoted) {
            push_unique(&mut variable_sources, unquoted.to_string());
            continue;
        }
        let mut path = unquoted.to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        let path = normalize_entity_prefix(&path, database);
        if !path.is_empty() {
            push_unique(&mut table_sources, path);
        }
    }

    let mut found = Vec::new();
    if !table_sources.is_empty() {
        let request = AutocompleteRequest::by_tables(database, table_sources, limit);
        found = fetch_entities(catalog, &request).await.unwrap_or_default();
    }

    for source in &variable_sources {
        let name = &source[1..];
        let variable_columns = variables
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.value.as_ref())
            .and_then(|value| value.columns.as_ref());
        if let Some(cols) = variable_columns {
            found.extend(cols.iter().map(|c| CatalogEntity::column(c.as_str(), source.as_str())));
        }
    }

    for source in sources {
        if let Some(cols) = &source.columns {
            let parent = source_key(&source.name, database);
            found.extend(
                cols.iter()
                    .map(|c| CatalogEntity::column(c.as_str(), parent.as_str())),
            );
        }
    }

    let aliases = alias_map(
        sources.iter().map(|s| (s.name.as_str(), s.alias.as_deref())),
        database,
    );
    let with_all = suggestion.wants_all_columns();
    let items = column_items(range, &found, &aliases, multi, database, with_all);
    tracing::debug!(
        sources = sources.len(),
        columns = found.len(),
        items = items.len(),
        "columns"
    );
    items
}

/// Build the alias map from `(source name, alias)` pairs
pub fn alias_map<'a, I>(sources: I, database: &str) -> AliasMap
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut map = AliasMap::new();
    for (name, alias) in sources {
        let aliases = map.entry(source_key(name, database)).or_default();
        if let Some(alias) = alias.filter(|a| !a.is_empty()) {
            push_unique(aliases, alias.to_string());
        }
    }
    map
}

/// Render resolved columns; non-column entities are skipped
pub fn column_items(
    range: EditorRange,
    found: &[CatalogEntity],
    aliases: &AliasMap,
    multi: bool,
    database: &str,
    with_all_columns: bool,
) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = Vec::new();
    // texts of columns read without an alias, for the all-columns item
    let mut unaliased: Vec<String> = Vec::new();

    for column in found.iter().filter(|c| c.is_column()) {
        let details = column_details(column);
        let name = wrap_in_backticks_if_needed(&column.name);
        let parent = source_key(column.parent.as_deref().unwrap_or_default(), database);
        let position = items.len();

        let source_aliases = aliases.get(&parent).filter(|a| !a.is_empty());
        let texts: Vec<String> = match source_aliases {
            Some(source_aliases) => source_aliases
                .iter()
                .map(|alias| format!("{}.{}", alias, name))
                .collect(),
            None if multi => vec![format!("{}.{}", wrap_in_backticks_if_needed(&parent), name)],
            None => vec![name.into_owned()],
        };

        for text in texts {
            let mut item = CompletionItem::new(
                text.clone(),
                CompletionItemKind::Variable,
                range,
                sort_text(SuggestionCategory::Columns, position),
            )
            .with_detail("Column");
            if !details.is_empty() {
                item = item.with_description(details.clone());
            }
            items.push(item);
            if source_aliases.is_none() {
                push_unique(&mut unaliased, text);
            }
        }
    }

    if with_all_columns && unaliased.len() > 1 {
        let all = unaliased.join(", ");
        items.push(CompletionItem::new(
            all,
            CompletionItemKind::Variable,
            range,
            category_sort_text(SuggestionCategory::AllColumns),
        ));
    }
    items
}
