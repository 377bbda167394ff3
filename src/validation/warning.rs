//! Diagnostic types for validation results.

use std::fmt;
use std::path::PathBuf;

use crate::error::GenError;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which descriptor table a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Style,
    Colors,
}

/// The table row a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    pub table: TableKind,
    pub path: PathBuf,
    /// Line the row starts on (1-indexed).
    pub line: usize,
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.strip_prefix(".").unwrap_or(&self.path);
        write!(f, "{}:{}", path.display(), self.line)
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "stylegen::validate::duplicate-name").
    pub code: &'static str,
    pub at: RowRef,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(at: RowRef, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            at,
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(at: RowRef, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(at, code, message)
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Collects diagnostics from validation checks, in the order found.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Turn any errors into a single `GenError::Validation`.
    ///
    /// The message names the first error; warnings never fail.
    pub fn into_result(self) -> crate::error::Result<()> {
        let errors = self.error_count();
        let Some(first) = self
            .diagnostics
            .into_iter()
            .find(|d| d.severity == Severity::Error)
        else {
            return Ok(());
        };

        let message = if errors == 1 {
            first.to_string()
        } else {
            format!("{} (and {} more)", first, errors - 1)
        };

        Err(GenError::Validation {
            message,
            help: first.help,
        })
    }
}
