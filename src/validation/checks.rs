//! Individual validation checks.
//!
//! Each check walks one table's entries in row order and returns its own
//! `ValidationResult`. Names that are blank after trimming are reported
//! once, by `check_empty_names`, and skipped by every other check.

use std::collections::HashMap;
use std::path::Path;

use super::warning::{Diagnostic, RowRef, TableKind, ValidationResult};

/// One descriptor as seen by the checks.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub line: usize,
    pub name: &'a str,
    pub doc: &'a str,
}

/// A table's entries plus the file they came from.
#[derive(Debug, Clone)]
pub struct TableEntries<'a> {
    pub kind: TableKind,
    pub path: &'a Path,
    pub entries: Vec<Entry<'a>>,
}

impl<'a> TableEntries<'a> {
    fn at(&self, line: usize) -> RowRef {
        RowRef {
            table: self.kind,
            path: self.path.to_path_buf(),
            line,
        }
    }

    /// Entries whose name is not blank.
    fn named(&self) -> impl Iterator<Item = &Entry<'a>> + '_ {
        self.entries.iter().filter(|e| !is_blank(e.name))
    }
}

/// Names must be non-empty.
pub fn check_empty_names(table: &TableEntries) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in table.entries.iter().filter(|e| is_blank(e.name)) {
        result.push(
            Diagnostic::error(
                table.at(entry.line),
                "stylegen::validate::empty-name",
                "field name is empty",
            )
            .with_help("Every row needs a field name in its name column"),
        );
    }

    result
}

/// Names must be unique within their table.
pub fn check_duplicate_names(table: &TableEntries) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for entry in table.named() {
        if let Some(first) = first_seen.get(entry.name) {
            result.push(
                Diagnostic::error(
                    table.at(entry.line),
                    "stylegen::validate::duplicate-name",
                    format!("name '{}' already used on line {}", entry.name, first),
                )
                .with_help("Each field may appear only once per table"),
            );
        } else {
            first_seen.insert(entry.name, entry.line);
        }
    }

    result
}

/// Names are spliced into generated code as members and enumerators, so they
/// should be plain C identifiers.
pub fn check_identifiers(table: &TableEntries) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in table.named().filter(|e| !is_identifier(e.name)) {
        result.push(Diagnostic::warning(
            table.at(entry.line),
            "stylegen::validate::identifier",
            format!("'{}' is not a valid identifier", entry.name),
        ));
    }

    result
}

/// Comments are written verbatim inside a string literal.
pub fn check_comment_quotes(table: &TableEntries) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in &table.entries {
        if entry.doc.contains(['"', '\\', '\n', '\r']) {
            result.push(
                Diagnostic::warning(
                    table.at(entry.line),
                    "stylegen::validate::comment-quote",
                    format!("comment for '{}' will break its string literal", entry.name),
                )
                .with_help("Remove quotes, backslashes and line breaks from the comment"),
            );
        }
    }

    result
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
