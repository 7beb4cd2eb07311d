//! Static YQL reference lists
//!
//! Built-in names the editor can offer without asking the catalog.

use crate::context::YqlEntity;

pub const SIMPLE_FUNCTIONS: &[&str] = &[
    "AddMember",
    "AddTimezone",
    "AsDict",
    "AsList",
    "AsSet",
    "AsStruct",
    "AsTagged",
    "AsTuple",
    "AsVariant",
    "AssumeStrict",
    "Bitcast",
    "ByteAt",
    "ChooseMembers",
    "ClearBit",
    "Coalesce",
    "CombineMembers",
    "CurrentTzDate",
    "CurrentTzDatetime",
    "CurrentTzTimestamp",
    "CurrentUtcDate",
    "CurrentUtcDatetime",
    "CurrentUtcTimestamp",
    "DictContains",
    "DictCreate",
    "DictHasItems",
    "DictItems",
    "DictKeys",
    "DictLength",
    "DictLookup",
    "DictPayloads",
    "EndsWith",
    "Ensure",
    "EnsureConvertibleTo",
    "EnsureType",
    "Enum",
    "EvaluateCode",
    "EvaluateExpr",
    "EvaluateType",
    "ExpandStruct",
    "Find",
    "FlattenMembers",
    "FlipBit",
    "ForceRemoveMember",
    "ForceRenameMembers",
    "FormatType",
    "FromBytes",
    "GatherMembers",
    "Greatest",
    "If",
    "Just",
    "Least",
    "Len",
    "Length",
    "Likely",
    "ListAll",
    "ListAny",
    "ListAvg",
    "ListCollect",
    "ListConcat",
    "ListCreate",
    "ListEnumerate",
    "ListExtend",
    "ListFilter",
    "ListFlatMap",
    "ListFlatten",
    "ListFromRange",
    "ListHas",
    "ListHasItems",
    "ListHead",
    "ListIndexOf",
    "ListLast",
    "ListLength",
    "ListMap",
    "ListMax",
    "ListMin",
    "ListNotNull",
    "ListReverse",
    "ListSkip",
    "ListSort",
    "ListSortAsc",
    "ListSortDesc",
    "ListSum",
    "ListTake",
    "ListUniq",
    "ListZip",
    "ListZipAll",
    "MAX_OF",
    "MIN_OF",
    "Nanvl",
    "Nothing",
    "Pickle",
    "Random",
    "RandomNumber",
    "RandomUuid",
    "RemoveMember",
    "RemoveMembers",
    "RemoveTimezone",
    "RenameMembers",
    "ReplaceMember",
    "RFind",
    "SetBit",
    "SpreadMembers",
    "StablePickle",
    "StartsWith",
    "StaticMap",
    "StaticZip",
    "StructMembers",
    "Substring",
    "TableName",
    "TablePath",
    "TableRecordIndex",
    "TableRow",
    "TestBit",
    "ToBytes",
    "Udf",
    "Unpickle",
    "Unwrap",
    "Variant",
    "Visit",
    "WeakField",
];

pub const AGGREGATE_FUNCTIONS: &[&str] = &[
    "AGGREGATE_BY",
    "AGGREGATE_LIST",
    "AGGREGATE_LIST_DISTINCT",
    "AGG_LIST",
    "AGG_LIST_DISTINCT",
    "AVG",
    "AVG_IF",
    "BITAND",
    "BITOR",
    "BITXOR",
    "BOOL_AND",
    "BOOL_OR",
    "BOOL_XOR",
    "BOTTOM",
    "BOTTOM_BY",
    "CORRELATION",
    "COUNT",
    "COUNT_IF",
    "COVARIANCE",
    "COVARIANCE_POPULATION",
    "COVARIANCE_SAMPLE",
    "CountDistinctEstimate",
    "HISTOGRAM",
    "HyperLogLog",
    "LinearHistogram",
    "LogarithmicHistogram",
    "MAX",
    "MAX_BY",
    "MEDIAN",
    "MIN",
    "MIN_BY",
    "MODE",
    "PERCENTILE",
    "SOME",
    "STDDEV",
    "STDDEV_POPULATION",
    "STDDEV_SAMPLE",
    "SUM",
    "SUM_IF",
    "TOP",
    "TOPFREQ",
    "TOP_BY",
    "UDAF",
    "VARIANCE",
    "VARIANCE_POPULATION",
    "VARIANCE_SAMPLE",
];

pub const WINDOW_FUNCTIONS: &[&str] = &[
    "CUME_DIST",
    "DENSE_RANK",
    "FIRST_VALUE",
    "LAG",
    "LAST_VALUE",
    "LEAD",
    "NTH_VALUE",
    "NTILE",
    "PERCENT_RANK",
    "RANK",
    "ROW_NUMBER",
    "SessionStart",
    "SessionState",
];

pub const TABLE_FUNCTIONS: &[&str] = &[
    "AS_TABLE",
    "CONCAT",
    "EACH",
    "FILTER",
    "FOLDER",
    "LIKE",
    "RANGE",
    "REGEXP",
    "WalkFolders",
];

pub const PRAGMAS: &[&str] = &[
    "AnsiImplicitCrossJoin",
    "AnsiInForEmptyOrNullableItemsCollections",
    "AnsiOptionalAs",
    "AnsiRankForNullableKeys",
    "CoalesceJoinKeysOnQualifiedAll",
    "CompactGroupBy",
    "DisableAnsiOptionalAs",
    "DisableAnsiRankForNullableKeys",
    "DisableCoalesceJoinKeysOnQualifiedAll",
    "DisableSimpleColumns",
    "File",
    "Folder",
    "Library",
    "OrderedColumns",
    "Package",
    "RefSelect",
    "SimpleColumns",
    "TablePathPrefix",
    "Warning",
];

pub const SIMPLE_TYPES: &[&str] = &[
    "Bool",
    "Date",
    "Date32",
    "Datetime",
    "Datetime64",
    "Decimal",
    "Double",
    "DyNumber",
    "Float",
    "Int16",
    "Int32",
    "Int64",
    "Int8",
    "Interval",
    "Interval64",
    "Json",
    "JsonDocument",
    "String",
    "Timestamp",
    "Timestamp64",
    "TzDate",
    "TzDatetime",
    "TzTimestamp",
    "Uint16",
    "Uint32",
    "Uint64",
    "Uint8",
    "Utf8",
    "Uuid",
    "Yson",
];

pub const UDFS: &[&str] = &[
    "DateTime::Format",
    "DateTime::GetDayOfMonth",
    "DateTime::GetMonth",
    "DateTime::GetYear",
    "DateTime::MakeDate",
    "DateTime::MakeDatetime",
    "DateTime::MakeTimestamp",
    "DateTime::Parse",
    "DateTime::Split",
    "DateTime::StartOfDay",
    "DateTime::StartOfMonth",
    "Digest::Crc32c",
    "Digest::Md5Hex",
    "Digest::Sha256",
    "Histogram::Print",
    "Hyperscan::Grep",
    "Hyperscan::Match",
    "Ip::FromString",
    "Ip::ToString",
    "Json::From",
    "Math::Abs",
    "Math::Ceil",
    "Math::Floor",
    "Math::Log",
    "Math::Pi",
    "Math::Pow",
    "Math::Round",
    "Math::Sqrt",
    "Pire::Grep",
    "Pire::Match",
    "Re2::Capture",
    "Re2::Grep",
    "Re2::Match",
    "Re2::Replace",
    "String::Contains",
    "String::JoinFromList",
    "String::SplitToList",
    "String::Strip",
    "String::ToLower",
    "String::ToUpper",
    "Unicode::Fold",
    "Unicode::GetLength",
    "Unicode::Normalize",
    "Url::GetHost",
    "Url::GetPath",
    "Url::Parse",
    "Yson::ConvertTo",
    "Yson::From",
    "Yson::Lookup",
    "Yson::Parse",
    "Yson::SerializeJson",
];

const TABLE_SETTINGS: &[&str] = &[
    "AUTO_PARTITIONING_BY_LOAD",
    "AUTO_PARTITIONING_BY_SIZE",
    "AUTO_PARTITIONING_MAX_PARTITIONS_COUNT",
    "AUTO_PARTITIONING_MIN_PARTITIONS_COUNT",
    "AUTO_PARTITIONING_PARTITION_SIZE_MB",
    "KEY_BLOOM_FILTER",
    "PARTITION_AT_KEYS",
    "READ_REPLICAS_SETTINGS",
    "STORE",
    "TTL",
    "UNIFORM_PARTITIONS",
];

const TABLE_STORE_SETTINGS: &[&str] = &["AUTO_PARTITIONING_MIN_PARTITIONS_COUNT", "STORE"];

const TOPIC_SETTINGS: &[&str] = &[
    "metering_mode",
    "min_active_partitions",
    "partition_count_limit",
    "partition_write_burst_bytes",
    "partition_write_speed_bytes_per_second",
    "retention_period",
    "retention_storage_mb",
    "supported_codecs",
];

const VIEW_SETTINGS: &[&str] = &["security_invoker"];

const EXTERNAL_DATA_SOURCE_SETTINGS: &[&str] = &[
    "AUTH_METHOD",
    "DATABASE_NAME",
    "LOCATION",
    "LOGIN",
    "PASSWORD_SECRET_NAME",
    "PROTOCOL",
    "SERVICE_ACCOUNT_ID",
    "SERVICE_ACCOUNT_SECRET_NAME",
    "SOURCE_TYPE",
    "USE_TLS",
];

const EXTERNAL_TABLE_SETTINGS: &[&str] = &[
    "COMPRESSION",
    "DATA_SOURCE",
    "FORMAT",
    "LOCATION",
    "PARTITIONED_BY",
];

const REPLICATION_SETTINGS: &[&str] = &[
    "CONNECTION_STRING",
    "DATABASE",
    "ENDPOINT",
    "PASSWORD",
    "PASSWORD_SECRET_NAME",
    "TOKEN",
    "TOKEN_SECRET_NAME",
    "USER",
];

const TABLE_HINTS: &[&str] = &["COLUMNS", "INLINE", "SCHEMA", "UNORDERED", "XLOCK"];

const EXTERNAL_HINTS: &[&str] = &[
    "COLUMNS",
    "COMPRESSION",
    "CSV_DELIMITER",
    "FILE_PATTERN",
    "FORMAT",
    "PARTITIONED_BY",
    "SCHEMA",
];

/// `WITH (...)` settings accepted when creating or altering an entity
pub fn entity_settings(entity: YqlEntity) -> &'static [&'static str] {
    match entity {
        YqlEntity::Table => TABLE_SETTINGS,
        YqlEntity::TableStore => TABLE_STORE_SETTINGS,
        YqlEntity::Topic => TOPIC_SETTINGS,
        YqlEntity::View => VIEW_SETTINGS,
        YqlEntity::ExternalDataSource => EXTERNAL_DATA_SOURCE_SETTINGS,
        YqlEntity::ExternalTable => EXTERNAL_TABLE_SETTINGS,
        YqlEntity::Replication => REPLICATION_SETTINGS,
        YqlEntity::TableIndex | YqlEntity::Other => &[],
    }
}

/// Hints accepted after a table reference in a read
pub fn table_hints(entity: YqlEntity) -> &'static [&'static str] {
    match entity {
        YqlEntity::Table => TABLE_HINTS,
        YqlEntity::ExternalTable | YqlEntity::ExternalDataSource => EXTERNAL_HINTS,
        YqlEntity::TableStore
        | YqlEntity::Topic
        | YqlEntity::View
        | YqlEntity::Replication
        | YqlEntity::TableIndex
        | YqlEntity::Other => &[],
    }
}
