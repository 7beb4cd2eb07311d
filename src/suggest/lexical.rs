//! Statement-local and static generators
//!
//! Categories that never touch the catalog: hints taken straight from the
//! parser context and the built-in reference lists. Items of one category
//! share a single sort key; the editor breaks ties by label.

use crate::context::{ColumnAliasSuggestion, KeywordSuggestion, VariableSuggestion, YqlEntity};
use crate::suggest::item::{CompletionItem, CompletionItemKind, EditorRange};
use crate::suggest::rank::{SuggestionCategory, category_sort_text};
use crate::suggest::reference;

fn plain_items<'a, I>(
    names: I,
    kind: CompletionItemKind,
    detail: &str,
    category: SuggestionCategory,
    range: EditorRange,
) -> Vec<CompletionItem>
where
    I: IntoIterator<Item = &'a str>,
{
    let sort_text = category_sort_text(category);
    names
        .into_iter()
        .map(|name| {
            CompletionItem::new(name, kind, range, sort_text.clone()).with_detail(detail)
        })
        .collect()
}

pub fn keywords(range: EditorRange, keywords: &[KeywordSuggestion]) -> Vec<CompletionItem> {
    plain_items(
        keywords.iter().map(|k| k.value.as_str()),
        CompletionItemKind::Keyword,
        "Keyword",
        SuggestionCategory::Keywords,
        range,
    )
}

pub fn column_aliases(
    range: EditorRange,
    aliases: &[ColumnAliasSuggestion],
) -> Vec<CompletionItem> {
    plain_items(
        aliases.iter().map(|a| a.name.as_str()),
        CompletionItemKind::Variable,
        "Column alias",
        SuggestionCategory::ColumnAliases,
        range,
    )
}

/// Variables are reported without their `$`; it is added back here
pub fn variables(range: EditorRange, variables: &[VariableSuggestion]) -> Vec<CompletionItem> {
    let sort_text = category_sort_text(SuggestionCategory::Variables);
    variables
        .iter()
        .map(|v| {
            CompletionItem::new(
                format!("${}", v.name),
                CompletionItemKind::Variable,
                range,
                sort_text.clone(),
            )
            .with_detail("Variable")
        })
        .collect()
}

pub fn simple_functions(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::SIMPLE_FUNCTIONS.iter().copied(),
        CompletionItemKind::Function,
        "Function",
        SuggestionCategory::Functions,
        range,
    )
}

pub fn aggregate_functions(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::AGGREGATE_FUNCTIONS.iter().copied(),
        CompletionItemKind::Function,
        "Aggregate function",
        SuggestionCategory::AggregateFunctions,
        range,
    )
}

pub fn window_functions(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::WINDOW_FUNCTIONS.iter().copied(),
        CompletionItemKind::Function,
        "Window function",
        SuggestionCategory::WindowFunctions,
        range,
    )
}

pub fn table_functions(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::TABLE_FUNCTIONS.iter().copied(),
        CompletionItemKind::Function,
        "Table function",
        SuggestionCategory::TableFunctions,
        range,
    )
}

pub fn udfs(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::UDFS.iter().copied(),
        CompletionItemKind::Function,
        "UDF",
        SuggestionCategory::Udfs,
        range,
    )
}

pub fn simple_types(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::SIMPLE_TYPES.iter().copied(),
        CompletionItemKind::TypeParameter,
        "Type",
        SuggestionCategory::SimpleTypes,
        range,
    )
}

pub fn pragmas(range: EditorRange) -> Vec<CompletionItem> {
    plain_items(
        reference::PRAGMAS.iter().copied(),
        CompletionItemKind::Module,
        "Pragma",
        SuggestionCategory::Pragmas,
        range,
    )
}

pub fn entity_settings(range: EditorRange, entity: YqlEntity) -> Vec<CompletionItem> {
    plain_items(
        reference::entity_settings(entity).iter().copied(),
        CompletionItemKind::Property,
        "Setting",
        SuggestionCategory::EntitySettings,
        range,
    )
}

pub fn table_hints(range: EditorRange, entity: YqlEntity) -> Vec<CompletionItem> {
    plain_items(
        reference::table_hints(entity).iter().copied(),
        CompletionItemKind::Property,
        "Hint",
        SuggestionCategory::TableHints,
        range,
    )
}
