//! Catalog type definitions
//!
//! Wire types of the viewer autocomplete handler. Field names follow the
//! viewer's PascalCase JSON.

use serde::{Deserialize, Serialize};

/// Scheme object type as reported by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Dir,
    Table,
    ColumnTable,
    ColumnStore,
    View,
    Index,
    TableIndex,
    PersQueueGroup,
    SubDomain,
    ExtSubDomain,
    ExternalTable,
    ExternalDataSource,
    Replication,
    Column,
    #[serde(other)]
    Unknown,
}

impl EntityType {
    const KNOWN: [EntityType; 14] = [
        EntityType::Dir,
        EntityType::Table,
        EntityType::ColumnTable,
        EntityType::ColumnStore,
        EntityType::View,
        EntityType::Index,
        EntityType::TableIndex,
        EntityType::PersQueueGroup,
        EntityType::SubDomain,
        EntityType::ExtSubDomain,
        EntityType::ExternalTable,
        EntityType::ExternalDataSource,
        EntityType::Replication,
        EntityType::Column,
    ];

    /// Parse a wire name; anything unrecognised is `Unknown`
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or(EntityType::Unknown)
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Dir => "dir",
            EntityType::Table => "table",
            EntityType::ColumnTable => "column_table",
            EntityType::ColumnStore => "column_store",
            EntityType::View => "view",
            EntityType::Index => "index",
            EntityType::TableIndex => "table_index",
            EntityType::PersQueueGroup => "pers_queue_group",
            EntityType::SubDomain => "sub_domain",
            EntityType::ExtSubDomain => "ext_sub_domain",
            EntityType::ExternalTable => "external_table",
            EntityType::ExternalDataSource => "external_data_source",
            EntityType::Replication => "replication",
            EntityType::Column => "column",
            EntityType::Unknown => "unknown",
        }
    }

    /// Types offered as navigable folders
    pub fn is_directory(&self) -> bool {
        matches!(self, EntityType::Dir | EntityType::ExtSubDomain)
    }
}

/// A named object reported by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireEntity", into = "WireEntity")]
pub struct CatalogEntity {
    pub name: String,
    pub entity_type: EntityType,
    /// `Type` exactly as the viewer sent it, kept for types this crate
    /// does not know
    pub type_name: String,
    /// Owning table or view path, set for columns
    pub parent: Option<String>,
    /// Position inside the primary key
    pub pk_index: Option<u32>,
    pub not_null: Option<bool>,
    /// Default value expression; only its presence matters here
    pub default: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize)]
struct WireEntity {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    entity_type: String,
    #[serde(rename = "Parent", default, skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    #[serde(rename = "PKIndex", default, skip_serializing_if = "Option::is_none")]
    pk_index: Option<u32>,
    #[serde(rename = "NotNull", default, skip_serializing_if = "Option::is_none")]
    not_null: Option<bool>,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    default: Option<serde_json::Value>,
}

impl From<WireEntity> for CatalogEntity {
    fn from(wire: WireEntity) -> Self {
        Self {
            name: wire.name,
            entity_type: EntityType::from_name(&wire.entity_type),
            type_name: wire.entity_type,
            parent: wire.parent,
            pk_index: wire.pk_index,
            not_null: wire.not_null,
            default: wire.default,
        }
    }
}

impl From<CatalogEntity> for WireEntity {
    fn from(entity: CatalogEntity) -> Self {
        Self {
            name: entity.name,
            entity_type: entity.type_name,
            parent: entity.parent,
            pk_index: entity.pk_index,
            not_null: entity.not_null,
            default: entity.default,
        }
    }
}

impl CatalogEntity {
    /// Plain entity without column attributes
    pub fn new(name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            name: name.into(),
            entity_type,
            type_name: entity_type.as_str().to_string(),
            parent: None,
            pk_index: None,
            not_null: None,
            default: None,
        }
    }

    /// Column entity owned by `parent`
    pub fn column(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
            ..Self::new(name, EntityType::Column)
        }
    }

    pub fn is_column(&self) -> bool {
        self.entity_type == EntityType::Column
    }

    /// Whether a default expression is present (null, false, 0 and "" count as absent)
    pub fn has_default(&self) -> bool {
        match &self.default {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }
}

/// Parameters of one autocomplete call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
    /// Database path the lookup is scoped to
    pub database: String,
    /// Path prefix relative to the database
    pub prefix: Option<String>,
    /// Tables or views whose columns are requested
    pub tables: Vec<String>,
    /// Result cap
    pub limit: usize,
}

impl AutocompleteRequest {
    /// Lookup of entities under `prefix`
    pub fn by_prefix(database: &str, prefix: impl Into<String>, limit: usize) -> Self {
        Self {
            database: database.to_string(),
            prefix: Some(prefix.into()),
            tables: Vec::new(),
            limit,
        }
    }

    /// Batch lookup of the columns of `tables`
    pub fn by_tables(database: &str, tables: Vec<String>, limit: usize) -> Self {
        Self {
            database: database.to_string(),
            prefix: None,
            tables,
            limit,
        }
    }
}

/// Payload of a successful lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResult {
    #[serde(rename = "Entities", default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<CatalogEntity>>,

    #[serde(rename = "Total", default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Response envelope of the autocomplete handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(rename = "Success", default)]
    pub success: bool,

    #[serde(rename = "Result", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AutocompleteResult>,

    #[serde(rename = "Error", default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

impl AutocompleteResponse {
    /// Successful response carrying `entities`
    pub fn ok(entities: Vec<CatalogEntity>) -> Self {
        Self {
            success: true,
            result: Some(AutocompleteResult {
                total: Some(entities.len() as u64),
                entities: Some(entities),
            }),
            error: Vec::new(),
        }
    }

    /// Failed response
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: vec![message.into()],
        }
    }

    /// Entities of a successful response; `None` when the lookup failed
    pub fn into_entities(self) -> Option<Vec<CatalogEntity>> {
        if !self.success {
            return None;
        }
        Some(self.result.and_then(|r| r.entities).unwrap_or_default())
    }
}
