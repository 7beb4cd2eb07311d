//! YQL suggestion pipeline
//!
//! Turns a parser context into ranked editor completion items:
//!
//! - [`names`]: path normalization and quoting
//! - [`rank`]: category weights and sort-key encoding
//! - [`entities`], [`columns`]: catalog-backed generators
//! - [`lexical`]: statement-local and static generators
//! - [`engine`]: the orchestrator tying them together

pub mod columns;
pub mod cursor;
pub mod engine;
pub mod entities;
pub mod item;
pub mod lexical;
pub mod names;
pub mod rank;
pub mod reference;

pub use engine::{SuggestRequest, Suggester};
pub use item::{
    Command, CompletionItem, CompletionItemKind, CompletionLabel, EditorRange, InsertTextRule,
};
pub use rank::{SuggestionCategory, encode_rank, sort_text};
