//! Parser context
//!
//! The caret-relative hint set produced by the external YQL parser. Every
//! hint is optional: a missing hint means its category is not applicable at
//! the caret. Keys follow the parser's camelCase JSON; unknown keys (such as
//! `errors` or `suggestDatabases`) are ignored.

use serde::{Deserialize, Serialize};

/// Parser entity kinds that can be suggested at the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YqlEntity {
    ExternalDataSource,
    ExternalTable,
    Replication,
    Table,
    TableStore,
    Topic,
    View,
    TableIndex,
    #[serde(other)]
    Other,
}

/// A keyword valid at the caret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub value: String,
}

/// A column alias defined in the current statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliasSuggestion {
    pub name: String,
}

/// A named expression (`$name`) visible at the caret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSuggestion {
    /// Name without the leading `$`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<VariableValue>,
}

/// What the parser knows about a variable's value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableValue {
    /// Columns of a variable bound to a subquery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

/// A column source referenced by the statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSource {
    /// Table/view path as written, or a `$variable`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Columns the parser resolved on its own (e.g. from a subquery)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

/// Column hint: which sources to draw columns from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSuggestion {
    /// Offer an extra item listing every visible column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<ColumnSource>>,
}

impl ColumnSuggestion {
    pub fn wants_all_columns(&self) -> bool {
        self.all == Some(true)
    }
}

/// Index hint: indexes of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableIndexSuggestion {
    pub table_name: String,
}

/// Parser result for one caret position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_keywords: Option<Vec<KeywordSuggestion>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_variables: Option<Vec<VariableSuggestion>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_column_aliases: Option<Vec<ColumnAliasSuggestion>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_columns: Option<ColumnSuggestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_entity: Option<Vec<YqlEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_table_indexes: Option<TableIndexSuggestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_table_hints: Option<YqlEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_entity_settings: Option<YqlEntity>,

    #[serde(default)]
    pub suggest_functions: bool,

    #[serde(default)]
    pub suggest_aggregate_functions: bool,

    #[serde(default)]
    pub suggest_window_functions: bool,

    #[serde(default)]
    pub suggest_table_functions: bool,

    #[serde(default)]
    pub suggest_simple_types: bool,

    #[serde(default)]
    pub suggest_udfs: bool,

    #[serde(default)]
    pub suggest_pragmas: bool,

    /// Accepted for compatibility; templates are rendered by the editor
    #[serde(default)]
    pub suggest_templates: bool,
}

impl ParsedContext {
    /// Parse the parser's JSON output
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Column sources, if any were reported
    pub fn column_sources(&self) -> &[ColumnSource] {
        self.suggest_columns
            .as_ref()
            .and_then(|c| c.tables.as_deref())
            .unwrap_or_default()
    }

    /// Variables, if any were reported
    pub fn variables(&self) -> &[VariableSuggestion] {
        self.suggest_variables.as_deref().unwrap_or_default()
    }
}
