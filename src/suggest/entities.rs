//! Catalog entity generators
//!
//! Offers scheme objects under the typed path prefix. The catalog answers
//! in relevance order, which is kept through the position part of each
//! item's sort key.

use crate::catalog::{AutocompleteRequest, CatalogProvider, EntityType, fetch_entities};
use crate::context::YqlEntity;
use crate::suggest::item::{Command, CompletionItem, CompletionItemKind, EditorRange};
use crate::suggest::names::normalize_entity_prefix;
use crate::suggest::rank::{SuggestionCategory, sort_text};
use std::collections::HashSet;

/// Types offered whatever entity kind the parser asked for
const COMMON_TYPES: &[EntityType] = &[
    EntityType::Dir,
    EntityType::Unknown,
    EntityType::ExtSubDomain,
];

const INDEX_TYPES: &[EntityType] = &[EntityType::TableIndex, EntityType::Index];

/// Catalog types that satisfy a parser entity kind
pub fn catalog_types(entity: YqlEntity) -> &'static [EntityType] {
    match entity {
        YqlEntity::ExternalDataSource => &[EntityType::ExternalDataSource],
        YqlEntity::ExternalTable => &[EntityType::ExternalTable],
        YqlEntity::Replication => &[EntityType::Replication],
        YqlEntity::Table => &[EntityType::Table, EntityType::ColumnTable],
        YqlEntity::TableStore => &[EntityType::ColumnStore],
        YqlEntity::Topic => &[EntityType::PersQueueGroup],
        YqlEntity::View => &[EntityType::View],
        YqlEntity::TableIndex => INDEX_TYPES,
        YqlEntity::Other => &[],
    }
}

/// Union of the catalog types accepted for `kinds`, directories included
pub fn accepted_types(kinds: &[YqlEntity]) -> HashSet<EntityType> {
    kinds
        .iter()
        .flat_map(|kind| catalog_types(*kind).iter().copied())
        .chain(COMMON_TYPES.iter().copied())
        .collect()
}

/// Suggest catalog entities under `prefix`.
///
/// Directories get a trailing `/` and reopen the suggestion widget once
/// inserted. Unless the user already opened a backtick, a directory is
/// inserted as the snippet `` `name/$0` `` so the caret stays inside the
/// quotes.
pub async fn entities<C: CatalogProvider + ?Sized>(
    catalog: &C,
    range: EditorRange,
    kinds: &[YqlEntity],
    database: &str,
    prefix: Option<&str>,
    limit: usize,
) -> Vec<CompletionItem> {
    let typed = prefix.unwrap_or_default();
    let request =
        AutocompleteRequest::by_prefix(database, normalize_entity_prefix(typed, database), limit);
    let Some(found) = fetch_entities(catalog, &request).await else {
        return Vec::new();
    };

    let with_backticks = typed.starts_with('`');
    let accepted = accepted_types(kinds);
    let total = found.len();

    let items: Vec<CompletionItem> = found
        .into_iter()
        .filter(|entity| accepted.contains(&entity.entity_type))
        .enumerate()
        .map(|(position, entity)| {
            let is_dir = entity.entity_type.is_directory();
            let label = if is_dir {
                format!("{}/", entity.name)
            } else {
                entity.name
            };
            let kind = if is_dir {
                CompletionItemKind::Folder
            } else {
                CompletionItemKind::Text
            };
            let snippet = (is_dir && !with_backticks).then(|| format!("`{}$0`", label));
            let reopen = label.ends_with('/');

            let mut item = CompletionItem::new(
                label,
                kind,
                range,
                sort_text(SuggestionCategory::Entity, position),
            )
            .with_detail(entity.type_name);
            if let Some(snippet) = snippet {
                item = item.with_snippet(snippet);
            }
            if reopen {
                item = item.with_command(Command::trigger_suggest());
            }
            item
        })
        .collect();
    tracing::debug!(prefix = typed, found = total, items = items.len(), "entities");
    items
}

/// Suggest the secondary indexes of `table`
pub async fn table_indexes<C: CatalogProvider + ?Sized>(
    catalog: &C,
    range: EditorRange,
    table: &str,
    database: &str,
    limit: usize,
) -> Vec<CompletionItem> {
    let mut prefix = normalize_entity_prefix(table, database);
    if !prefix.ends_with('/') {
        prefix.push('/');
    }
    let request = AutocompleteRequest::by_prefix(database, prefix, limit);
    let Some(found) = fetch_entities(catalog, &request).await else {
        return Vec::new();
    };

    found
        .into_iter()
        .filter(|entity| INDEX_TYPES.contains(&entity.entity_type))
        .enumerate()
        .map(|(position, entity)| {
            CompletionItem::new(
                entity.name,
                CompletionItemKind::Reference,
                range,
                sort_text(SuggestionCategory::TableIndexes, position),
            )
            .with_detail("Index")
        })
        .collect()
}
