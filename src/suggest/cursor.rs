//! Caret helpers
//!
//! Work out what the user typed before the caret: the word a suggestion
//! replaces and the (possibly quoted) path prefix entity lookups start from.

use crate::suggest::item::EditorRange;

/// Bytes that end an identifier when scanning back from the caret
fn is_word_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace() || b"().,;=<>!+-*/%'\"`[]{}:".contains(&b)
}

/// Bytes that end an unquoted path
fn is_path_delimiter(b: u8) -> bool {
    b != b'/' && b != b'`' && is_word_delimiter(b)
}

fn clamp_to_boundary(line: &str, col: usize) -> Option<usize> {
    let col = col.min(line.len());
    line.is_char_boundary(col).then_some(col)
}

fn scan_back(line: &str, col: usize, stop: fn(u8) -> bool) -> &str {
    let Some(col) = clamp_to_boundary(line, col) else {
        return "";
    };
    let bytes = line.as_bytes();
    let mut start = col;
    while start > 0 && !stop(bytes[start - 1]) {
        start -= 1;
    }
    &line[start..col]
}

/// Extract the word immediately before byte offset `col`.
///
/// Word delimiters are whitespace, operators, quotes, backticks and the
/// path separator, so inside `shop/ord` this yields `ord`.
pub fn word_before_cursor(line: &str, col: usize) -> &str {
    scan_back(line, col, is_word_delimiter)
}

/// Extract the entity path typed before byte offset `col`.
///
/// Inside an unclosed backtick the prefix starts at that backtick and may
/// contain spaces (`` `my dir/su ``); otherwise it is the run of path
/// characters before the caret (`/local/shop/ord`).
pub fn entity_prefix_before_cursor(line: &str, col: usize) -> &str {
    let Some(col) = clamp_to_boundary(line, col) else {
        return "";
    };
    let before = &line[..col];
    let open = if before.matches('`').count() % 2 == 1 {
        // unclosed quote
        before.rfind('`')
    } else if let Some(inner) = before.strip_suffix('`') {
        // caret right after a closing quote
        inner.rfind('`')
    } else {
        None
    };
    match open {
        Some(open) => &before[open..],
        None => scan_back(line, col, is_path_delimiter),
    }
}

/// Range and entity prefix for a 1-based caret position in `text`.
///
/// `column` counts characters, as editors do. Returns `None` when the
/// position is outside the text.
pub fn replace_range(text: &str, line: u32, column: u32) -> Option<(EditorRange, String)> {
    let line_text = text.split('\n').nth(line.checked_sub(1)? as usize)?;
    let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);
    let char_col = column.checked_sub(1)? as usize;
    let byte_col = match line_text.char_indices().nth(char_col) {
        Some((i, _)) => i,
        None if char_col == line_text.chars().count() => line_text.len(),
        None => return None,
    };

    let word = word_before_cursor(line_text, byte_col);
    let start = column - word.chars().count() as u32;
    let prefix = entity_prefix_before_cursor(line_text, byte_col).to_string();
    Some((EditorRange::on_line(line, start, column), prefix))
}
