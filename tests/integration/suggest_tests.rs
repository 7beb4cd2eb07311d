//! Integration tests for the suggestion pipeline
//!
//! Drives `Suggester` end to end against in-memory catalogs.

use crate::common::{DATABASE, caret, shop_catalog, texts, with_detail};
use yql_suggest::catalog::{CatalogEntity, MemoryCatalog};
use yql_suggest::context::ParsedContext;
use yql_suggest::suggest::{
    CompletionItemKind, InsertTextRule, SuggestRequest, SuggestionCategory, Suggester, sort_text,
    rank::category_sort_text,
};

fn context(json: &str) -> ParsedContext {
    ParsedContext::from_json(json).unwrap()
}

fn request() -> SuggestRequest {
    SuggestRequest::new(caret(), DATABASE)
}

#[tokio::test]
async fn test_columns_then_keywords() {
    let catalog = MemoryCatalog::new().with_columns("orders", &["id", "total"]);
    let suggester = Suggester::new(catalog);
    let ctx = context(
        r#"{
            "suggestColumns": {"all": true, "tables": [{"name": "orders"}]},
            "suggestKeywords": [{"value": "WHERE"}, {"value": "GROUP BY"}]
        }"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["id", "total", "id, total", "WHERE", "GROUP BY"]);
    let columns: Vec<_> = items.iter().filter(|i| i.kind == CompletionItemKind::Variable).collect();
    let keywords: Vec<_> = items.iter().filter(|i| i.kind == CompletionItemKind::Keyword).collect();
    assert_eq!(columns.len(), 3);
    for column in &columns {
        for keyword in &keywords {
            assert!(column.sort_text < keyword.sort_text);
        }
    }
    assert!(items.iter().all(|i| i.range == caret()));
}

#[tokio::test]
async fn test_no_all_columns_item_unless_requested() {
    let catalog = MemoryCatalog::new().with_columns("orders", &["id", "total"]);
    let suggester = Suggester::new(catalog);
    let ctx = context(
        r#"{
            "suggestColumns": {"tables": [{"name": "orders"}]},
            "suggestKeywords": [{"value": "AND"}]
        }"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["id", "total", "AND"]);
    assert!(
        items
            .iter()
            .all(|i| i.sort_text != category_sort_text(SuggestionCategory::AllColumns))
    );
}

#[tokio::test]
async fn test_column_lookup_request() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestColumns": {"tables": [{"name": "`/local/orders`"}]}}"#);

    suggester.suggest(&ctx, &request()).await;

    let requests = suggester.catalog().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].tables, ["orders/"]);
    assert_eq!(requests[0].limit, 1000);
    assert_eq!(requests[0].database, DATABASE);
}

#[tokio::test]
async fn test_aliased_and_qualified_columns() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(
        r#"{"suggestColumns": {"all": true, "tables": [
            {"name": "orders", "alias": "o"},
            {"name": "`shop/items`"}
        ]}}"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(
        texts(&items),
        ["o.id", "o.total", "o.created", "`shop/items`.sku"]
    );
    assert_eq!(
        suggester.catalog().requests()[0].tables,
        ["orders/", "shop/items/"]
    );
    let labels: Vec<_> = items
        .iter()
        .map(|i| serde_json::to_value(&i.label).unwrap())
        .collect();
    assert_eq!(labels[0], serde_json::json!({"label": "o.id", "description": "PK0, NN"}));
    assert_eq!(labels[1], serde_json::json!({"label": "o.total", "description": "NN"}));
    assert_eq!(labels[2], serde_json::json!({"label": "o.created", "description": "Default"}));
    assert_eq!(labels[3], serde_json::json!("`shop/items`.sku"));
}

#[tokio::test]
async fn test_variable_columns_skip_catalog() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(
        r#"{
            "suggestColumns": {"all": true, "tables": [{"name": "$sub"}]},
            "suggestVariables": [{"name": "sub", "value": {"columns": ["a", "b"]}}]
        }"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["a", "b", "a, b", "$sub"]);
    assert!(suggester.catalog().requests().is_empty());
}

#[tokio::test]
async fn test_parser_resolved_columns() {
    let suggester = Suggester::new(MemoryCatalog::new());
    let ctx = context(
        r#"{"suggestColumns": {
            "all": false,
            "tables": [{"name": "t", "alias": "x", "columns": ["c1"]}]
        }}"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["x.c1"]);
}

#[tokio::test]
async fn test_entities_at_root() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestEntity": ["table"]}"#);

    let items = suggester.suggest(&ctx, &request()).await;

    // topic is not requested; unknown types always pass
    assert_eq!(
        items.iter().map(|i| i.label_text()).collect::<Vec<_>>(),
        ["orders", "my dir/", "shop/", "weird"]
    );
    assert_eq!(texts(&items), ["orders", "`my dir/$0`", "`shop/$0`", "weird"]);

    let dir = &items[1];
    assert_eq!(dir.kind, CompletionItemKind::Folder);
    assert_eq!(dir.insert_text_rules, Some(InsertTextRule::InsertAsSnippet));
    assert_eq!(dir.detail.as_deref(), Some("dir"));
    assert!(dir.command.is_some());

    let table = &items[0];
    assert_eq!(table.kind, CompletionItemKind::Text);
    assert_eq!(table.insert_text_rules, None);
    assert!(table.command.is_none());

    let keys: Vec<_> = items.iter().map(|i| i.sort_text.as_str()).collect();
    assert_eq!(keys, ["ca", "cb", "cc", "cd"]);
    assert_eq!(suggester.catalog().requests()[0].prefix.as_deref(), Some(""));
}

#[tokio::test]
async fn test_entities_inside_backticks() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestEntity": ["table"]}"#);

    let items = suggester
        .suggest(&ctx, &request().with_prefix("`"))
        .await;
    let dir = items.iter().find(|i| i.label_text() == "my dir/").unwrap();
    assert_eq!(dir.insert_text, "my dir/");
    assert_eq!(dir.insert_text_rules, None);
    assert!(dir.command.is_some());

    let nested = suggester
        .suggest(&ctx, &request().with_prefix("`my dir/"))
        .await;
    assert_eq!(texts(&nested), ["items"]);
    assert_eq!(
        suggester.catalog().requests()[1].prefix.as_deref(),
        Some("my dir/")
    );
}

#[tokio::test]
async fn test_absolute_prefix_is_normalized() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestEntity": ["view", "table"]}"#);

    let items = suggester
        .suggest(&ctx, &request().with_prefix("/local/shop/"))
        .await;

    assert_eq!(texts(&items), ["items", "orders_v"]);
    assert_eq!(with_detail(&items, "column_table").len(), 1);
    assert_eq!(
        suggester.catalog().requests()[0].prefix.as_deref(),
        Some("shop/")
    );
}

#[tokio::test]
async fn test_unrecognised_type_keeps_backend_name() {
    let lock: CatalogEntity =
        serde_json::from_value(serde_json::json!({"Name": "lock", "Type": "kesus"})).unwrap();
    let suggester = Suggester::new(MemoryCatalog::new().with_listing("", vec![lock]));
    let ctx = context(r#"{"suggestEntity": ["table"]}"#);

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["lock"]);
    assert_eq!(items[0].detail.as_deref(), Some("kesus"));
}

#[tokio::test]
async fn test_topics() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestEntity": ["topic"]}"#);

    let items = suggester.suggest(&ctx, &request().with_prefix("ev")).await;

    assert_eq!(texts(&items), ["events"]);
    assert_eq!(items[0].detail.as_deref(), Some("pers_queue_group"));
}

#[tokio::test]
async fn test_table_indexes() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(r#"{"suggestTableIndexes": {"tableName": "`orders`"}}"#);

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["by_total"]);
    assert_eq!(items[0].sort_text, sort_text(SuggestionCategory::TableIndexes, 0));
    assert_eq!(
        suggester.catalog().requests()[0].prefix.as_deref(),
        Some("orders/")
    );
}

#[tokio::test]
async fn test_failed_lookup_degrades_to_empty() {
    let suggester = Suggester::new(MemoryCatalog::failing());
    let ctx = context(
        r#"{
            "suggestEntity": ["table"],
            "suggestColumns": {"tables": [{"name": "orders"}]},
            "suggestTableIndexes": {"tableName": "orders"},
            "suggestKeywords": [{"value": "SELECT"}]
        }"#,
    );

    let items = suggester.suggest(&ctx, &request()).await;

    assert_eq!(texts(&items), ["SELECT"]);
    assert_eq!(suggester.catalog().requests().len(), 3);
}

#[tokio::test]
async fn test_category_order() {
    let suggester = Suggester::new(shop_catalog());
    let ctx = context(
        r#"{
            "suggestPragmas": true,
            "suggestEntity": ["table"],
            "suggestColumns": {"all": true, "tables": [{"name": "orders"}]},
            "suggestColumnAliases": [{"name": "sum_total"}],
            "suggestVariables": [{"name": "limit"}],
            "suggestTableHints": "table",
            "suggestEntitySettings": "table",
            "suggestKeywords": [{"value": "FROM"}],
            "suggestAggregateFunctions": true,
            "suggestTableFunctions": true,
            "suggestWindowFunctions": true,
            "suggestFunctions": true,
            "suggestSimpleTypes": true,
            "suggestUdfs": true
        }"#,
    );

    let mut items = suggester.suggest(&ctx, &request()).await;
    items.sort_by(|a, b| a.sort_text.cmp(&b.sort_text));

    let mut groups: Vec<&str> = Vec::new();
    for item in &items {
        let group = item.detail.as_deref().unwrap_or("All columns");
        let group = match group {
            "dir" | "table" | "unknown" => "Entity",
            other => other,
        };
        if groups.last() != Some(&group) {
            groups.push(group);
        }
    }
    assert_eq!(
        groups,
        [
            "Pragma",
            "Entity",
            "All columns",
            "Column",
            "Column alias",
            "Variable",
            "Hint",
            "Setting",
            "Keyword",
            "Aggregate function",
            "Table function",
            "Window function",
            "Function",
            "Type",
            "UDF",
        ]
    );
}
