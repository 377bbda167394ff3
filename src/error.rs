use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stylegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("File not found: {path}")]
    #[diagnostic(
        code(stylegen::file_not_found),
        help("Descriptor tables are read relative to the working directory")
    )]
    FileNotFound { path: PathBuf },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stylegen::io))]
    Io { path: PathBuf, message: String },

    #[error("{path}:{line}: expected {expected} cells, found {found}")]
    #[diagnostic(code(stylegen::malformed_row))]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: unknown field type '{token}'")]
    #[diagnostic(
        code(stylegen::unknown_type),
        help("Accepted types are ImVec2, float and bool")
    )]
    UnknownType {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}:{line}: unterminated quoted cell")]
    #[diagnostic(code(stylegen::unterminated_quote))]
    UnterminatedQuote { path: PathBuf, line: usize },

    #[error("Validation error: {message}")]
    #[diagnostic(code(stylegen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(stylegen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    /// Map a failed read of `path` to `FileNotFound` or `Io`.
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            GenError::FileNotFound { path }
        } else {
            GenError::Io {
                path,
                message: format!("Failed to read file: {}", err),
            }
        }
    }
}
