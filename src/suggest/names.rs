//! Entity name normalization
//!
//! The parser reports paths as typed (quoted, absolute, relative) while the
//! catalog reports them relative to the database. Everything is compared
//! after `normalize_entity_prefix`.

use std::borrow::Cow;

const QUOTE: char = '`';
const SEPARATOR: char = '/';

/// Strip one leading and one trailing backtick, independently
pub fn strip_backticks(value: &str) -> &str {
    let value = value.strip_prefix(QUOTE).unwrap_or(value);
    value.strip_suffix(QUOTE).unwrap_or(value)
}

/// Strip a single leading path separator
pub fn strip_leading_separator(value: &str) -> &str {
    value.strip_prefix(SEPARATOR).unwrap_or(value)
}

/// Whether the value names a `$variable`
pub fn is_variable_reference(value: &str) -> bool {
    value.starts_with('$')
}

/// Whether an identifier must be quoted to be valid YQL.
///
/// Whitespace, `@`, and the ASCII run from `"` to `/` (quotes, `$`, `-`,
/// `.`, `,`, parentheses, the separator itself) all need quoting.
fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || c == '@' || ('"'..='/').contains(&c))
}

/// Wrap in backticks when the value is not a bare identifier
pub fn wrap_in_backticks_if_needed(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(format!("{QUOTE}{value}{QUOTE}"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Remove `database` from the front of `path` at a path boundary
fn strip_database_prefix<'a>(path: &'a str, database: &str) -> &'a str {
    if database.is_empty() {
        return path;
    }
    match path.strip_prefix(database) {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => rest,
        _ => path,
    }
}

fn normalize_step(value: &str, database: &str) -> String {
    let unquoted = strip_backticks(value);
    if !unquoted.starts_with(SEPARATOR) {
        return unquoted.to_string();
    }
    let path = strip_leading_separator(unquoted);
    let database = strip_leading_separator(database).trim_end_matches(SEPARATOR);
    strip_leading_separator(strip_database_prefix(path, database)).to_string()
}

/// Canonicalize a path so parser names and catalog names compare equal.
///
/// `/db/schema/table` with database `/db` becomes `schema/table`; relative
/// names are returned unquoted but otherwise unchanged. A single step only
/// ever removes characters, so repeating it until nothing changes always
/// terminates and makes the result idempotent.
pub fn normalize_entity_prefix(value: &str, database: &str) -> String {
    let mut current = normalize_step(value, database);
    loop {
        let next = normalize_step(&current, database);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Key a column source is matched by: normalized, without trailing separators
pub fn source_key(value: &str, database: &str) -> String {
    normalize_entity_prefix(value, database)
        .trim_end_matches(SEPARATOR)
        .to_string()
}
