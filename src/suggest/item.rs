//! Editor completion items
//!
//! The shape the host editor's completion provider expects: camelCase keys,
//! numeric kind and insert-rule enums.

use serde::{Serialize, Serializer};

/// Editor completion item kind (numeric on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompletionItemKind {
    Method = 0,
    Function = 1,
    Constructor = 2,
    Field = 3,
    Variable = 4,
    Class = 5,
    Struct = 6,
    Interface = 7,
    Module = 8,
    Property = 9,
    Event = 10,
    Operator = 11,
    Unit = 12,
    Value = 13,
    Constant = 14,
    Enum = 15,
    EnumMember = 16,
    Keyword = 17,
    Text = 18,
    Color = 19,
    File = 20,
    Reference = 21,
    Customcolor = 22,
    Folder = 23,
    TypeParameter = 24,
    User = 25,
    Issue = 26,
    Snippet = 27,
}

impl Serialize for CompletionItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// How the editor treats `insertText`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InsertTextRule {
    KeepWhitespace = 1,
    /// `$0`-style placeholders are expanded
    InsertAsSnippet = 4,
}

impl Serialize for InsertTextRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// 1-based editor range the suggestion replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorRange {
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

impl EditorRange {
    /// Range on a single line
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start_line_number: line,
            start_column,
            end_line_number: line,
            end_column,
        }
    }
}

/// Item label, optionally with a right-aligned description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompletionLabel {
    Plain(String),
    Described { label: String, description: String },
}

impl CompletionLabel {
    pub fn text(&self) -> &str {
        match self {
            CompletionLabel::Plain(label) => label,
            CompletionLabel::Described { label, .. } => label,
        }
    }
}

/// Editor command run after the item is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub id: String,
    pub title: String,
}

impl Command {
    /// Reopen the suggestion widget (used after inserting a directory)
    pub fn trigger_suggest() -> Self {
        Self {
            id: "editor.action.triggerSuggest".to_string(),
            title: String::new(),
        }
    }
}

/// One row of the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: CompletionLabel,
    pub insert_text: String,
    pub kind: CompletionItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub range: EditorRange,
    pub sort_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_rules: Option<InsertTextRule>,
}

impl CompletionItem {
    /// Item whose label and inserted text are the same
    pub fn new(
        text: impl Into<String>,
        kind: CompletionItemKind,
        range: EditorRange,
        sort_text: String,
    ) -> Self {
        let text = text.into();
        Self {
            label: CompletionLabel::Plain(text.clone()),
            insert_text: text,
            kind,
            detail: None,
            range,
            sort_text,
            command: None,
            insert_text_rules: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let label = self.label.text().to_string();
        self.label = CompletionLabel::Described {
            label,
            description: description.into(),
        };
        self
    }

    /// Insert `snippet` in snippet mode instead of the label
    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.insert_text = snippet;
        self.insert_text_rules = Some(InsertTextRule::InsertAsSnippet);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Label text as shown in the dropdown
    pub fn label_text(&self) -> &str {
        self.label.text()
    }
}
