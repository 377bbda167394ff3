//! Validation of descriptor tables.
//!
//! Runs a suite of checks over both tables after reading and before
//! emission. Errors stop generation; warnings are reported and ignored.
//! Used by both `stylegen generate` and `stylegen check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, RowRef, Severity, TableKind, ValidationResult};

use checks::{Entry, TableEntries};

use crate::descriptor::Tables;
use crate::output::{plural, Printer};

/// Run all validation checks against both tables.
pub fn validate_tables(tables: &Tables) -> ValidationResult {
    let style = TableEntries {
        kind: TableKind::Style,
        path: &tables.paths.style,
        entries: tables
            .style
            .iter()
            .map(|f| Entry { line: f.line, name: &f.name, doc: &f.doc })
            .collect(),
    };
    let colors = TableEntries {
        kind: TableKind::Colors,
        path: &tables.paths.colors,
        entries: tables
            .colors
            .iter()
            .map(|c| Entry { line: c.line, name: &c.name, doc: &c.doc })
            .collect(),
    };

    let mut result = ValidationResult::new();
    for table in [&style, &colors] {
        result.merge(checks::check_empty_names(table));
        result.merge(checks::check_duplicate_names(table));
        result.merge(checks::check_identifiers(table));
        result.merge(checks::check_comment_quotes(table));
    }
    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&format!("{}[{}]", d.severity, d.code), d.severity == Severity::Error);
        printer.plain(&format!("{}: {}", label, d));
        if let Some(help) = &d.help {
            printer.plain(&format!("  {} {}", printer.dim("help:"), help));
        }
    }
}

/// One-line summary of a validation run, e.g. "2 errors, 1 warning".
pub fn summary(result: &ValidationResult) -> String {
    format!(
        "{}, {}",
        plural(result.error_count(), "error", "errors"),
        plural(result.warning_count(), "warning", "warnings")
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::descriptor::{read_descriptors, ColorDescriptor, FieldDescriptor, TablePaths, TypeTag};

    fn tables(style: Vec<FieldDescriptor>, colors: Vec<ColorDescriptor>) -> Tables {
        Tables {
            style,
            colors,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_empty_tables() {
        let result = validate_tables(&Tables::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_clean_tables() {
        let tables = tables(
            vec![
                FieldDescriptor::new(TypeTag::Scalar, "Alpha", "Global alpha"),
                FieldDescriptor::new(TypeTag::Vector2, "WindowPadding", ""),
            ],
            vec![ColorDescriptor::new("ImGuiCol_Text", "")],
        );
        assert!(validate_tables(&tables).is_ok());
    }

    #[test]
    fn test_same_name_in_both_tables_is_fine() {
        let tables = tables(
            vec![FieldDescriptor::new(TypeTag::Scalar, "Alpha", "")],
            vec![ColorDescriptor::new("Alpha", "")],
        );
        assert!(!validate_tables(&tables).has_errors());
    }

    #[test]
    fn test_catches_duplicate_style_field() {
        let tables = tables(
            vec![
                FieldDescriptor::new(TypeTag::Scalar, "Alpha", "").at_line(1),
                FieldDescriptor::new(TypeTag::Flag, "Alpha", "").at_line(2),
            ],
            vec![],
        );
        let result = validate_tables(&tables);
        let d = result.iter().find(|d| d.severity == Severity::Error).unwrap();

        assert_eq!(d.at.table, TableKind::Style);
        assert_eq!(d.code, "stylegen::validate::duplicate-name");
        assert_eq!(d.to_string(), "style.csv:2: name 'Alpha' already used on line 1");
    }

    #[test]
    fn test_duplicate_after_blank_lines_reports_file_line() {
        let path = Path::new("t/c.csv");
        let source = "Text,\n\n\nBorder,\"multi\nline\"\nText,\n";
        let tables = Tables {
            style: vec![],
            colors: read_descriptors(source, path).unwrap(),
            paths: TablePaths {
                colors: path.to_path_buf(),
                ..Default::default()
            },
        };
        let result = validate_tables(&tables);
        let errors: Vec<String> = result
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.to_string())
            .collect();

        assert_eq!(errors, ["t/c.csv:6: name 'Text' already used on line 1"]);
    }

    #[test]
    fn test_blank_name_is_a_single_error() {
        let tables = tables(vec![], vec![ColorDescriptor::new("   ", "").at_line(3)]);
        let result = validate_tables(&tables);
        let codes: Vec<&str> = result.iter().map(|d| d.code).collect();

        assert_eq!(codes, ["stylegen::validate::empty-name"]);
    }

    #[test]
    fn test_summary() {
        let tables = tables(
            vec![],
            vec![
                ColorDescriptor::new("", ""),
                ColorDescriptor::new("Bad Name", ""),
            ],
        );
        assert_eq!(summary(&validate_tables(&tables)), "1 error, 1 warning");
    }
}
