//! Suggestion ordering
//!
//! The editor sorts items by `sortText` as plain strings. Every item's key
//! is the category rank followed by its position inside the category, both
//! written with `encode_rank`.

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Suggestion categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuggestionCategory {
    Templates,
    Pragmas,
    Entity,
    AllColumns,
    Columns,
    ColumnAliases,
    Variables,
    TableIndexes,
    TableHints,
    EntitySettings,
    Keywords,
    AggregateFunctions,
    TableFunctions,
    WindowFunctions,
    Functions,
    SimpleTypes,
    Udfs,
}

impl SuggestionCategory {
    /// Every category, lowest weight first
    pub const ALL: [SuggestionCategory; 17] = [
        SuggestionCategory::Templates,
        SuggestionCategory::Pragmas,
        SuggestionCategory::Entity,
        SuggestionCategory::AllColumns,
        SuggestionCategory::Columns,
        SuggestionCategory::ColumnAliases,
        SuggestionCategory::Variables,
        SuggestionCategory::TableIndexes,
        SuggestionCategory::TableHints,
        SuggestionCategory::EntitySettings,
        SuggestionCategory::Keywords,
        SuggestionCategory::AggregateFunctions,
        SuggestionCategory::TableFunctions,
        SuggestionCategory::WindowFunctions,
        SuggestionCategory::Functions,
        SuggestionCategory::SimpleTypes,
        SuggestionCategory::Udfs,
    ];

    /// Rank of the category; lower sorts first
    pub fn weight(&self) -> usize {
        match self {
            SuggestionCategory::Templates => 0,
            SuggestionCategory::Pragmas => 1,
            SuggestionCategory::Entity => 2,
            SuggestionCategory::AllColumns => 3,
            SuggestionCategory::Columns => 4,
            SuggestionCategory::ColumnAliases => 5,
            SuggestionCategory::Variables => 6,
            SuggestionCategory::TableIndexes => 7,
            SuggestionCategory::TableHints => 8,
            SuggestionCategory::EntitySettings => 9,
            SuggestionCategory::Keywords => 10,
            SuggestionCategory::AggregateFunctions => 11,
            SuggestionCategory::TableFunctions => 12,
            SuggestionCategory::WindowFunctions => 13,
            SuggestionCategory::Functions => 14,
            SuggestionCategory::SimpleTypes => 15,
            SuggestionCategory::Udfs => 16,
        }
    }
}

/// Encode a non-negative index as a string that sorts like the number.
///
/// Below 26 this is the index-th letter. Above, `z` is repeated
/// `index / 26` times and followed by the letter for `index % 26`, so
/// `25 -> "z"`, `26 -> "za"`, `51 -> "zz"`, `52 -> "zza"`.
pub fn encode_rank(index: usize) -> String {
    let base = ALPHABET.len();
    if index < base {
        return char::from(ALPHABET[index]).to_string();
    }
    let mut out = String::with_capacity(index / base + 1);
    for _ in 0..index / base {
        out.push(char::from(ALPHABET[base - 1]));
    }
    out.push(char::from(ALPHABET[index % base]));
    out
}

/// Key for the item at `position` inside `category`
pub fn sort_text(category: SuggestionCategory, position: usize) -> String {
    let mut key = encode_rank(category.weight());
    key.push_str(&encode_rank(position));
    key
}

/// Key shared by every item of a category that keeps no inner order
pub fn category_sort_text(category: SuggestionCategory) -> String {
    encode_rank(category.weight())
}
