//! Descriptor tables.
//!
//! A descriptor table is a headerless comma-separated file where each row
//! describes one configuration field. Two schemas exist:
//!
//! - style rows: `type, name, comment` where `type` is `ImVec2`, `float` or `bool`
//! - color rows: `name, comment`
//!
//! Row order is significant and preserved; it decides emission order and,
//! for generated save code, the key order of the written document.

mod reader;

pub use reader::{load_table, read_descriptors, FromRow, Row, RowReader};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{DEFAULT_COLOR_TABLE, DEFAULT_STYLE_TABLE};
use crate::error::{GenError, Result};

/// Declared type of a style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    /// Numeric scalar (`float`).
    #[serde(rename = "float")]
    Scalar,
    /// Boolean flag (`bool`).
    #[serde(rename = "bool")]
    Flag,
    /// Two-component numeric vector (`ImVec2`).
    #[serde(rename = "ImVec2")]
    Vector2,
}

impl TypeTag {
    pub const ALL: [TypeTag; 3] = [TypeTag::Scalar, TypeTag::Flag, TypeTag::Vector2];

    /// The token used for this type in a style table.
    pub fn token(self) -> &'static str {
        match self {
            TypeTag::Scalar => "float",
            TypeTag::Flag => "bool",
            TypeTag::Vector2 => "ImVec2",
        }
    }

    /// Look up a type by its table token. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.token() == token)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One row of the style table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub ty: TypeTag,
    pub name: String,
    pub doc: String,
    /// Line the row starts on, or 0 when not read from a table.
    pub line: usize,
}

impl FieldDescriptor {
    pub fn new(ty: TypeTag, name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            doc: doc.into(),
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

impl FromRow for FieldDescriptor {
    const ARITY: usize = 3;

    fn from_cells(cells: Vec<String>, path: &Path, line: usize) -> Result<Self> {
        let [token, name, doc]: [String; 3] = cells.try_into().map_err(|cells: Vec<String>| {
            GenError::MalformedRow {
                path: path.to_path_buf(),
                line,
                expected: Self::ARITY,
                found: cells.len(),
            }
        })?;

        let ty = TypeTag::from_token(&token).ok_or_else(|| GenError::UnknownType {
            path: path.to_path_buf(),
            line,
            token,
        })?;

        Ok(Self { ty, name, doc, line })
    }
}

/// One row of the color table. Every color shares the same implicit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorDescriptor {
    pub name: String,
    pub doc: String,
    /// Line the row starts on, or 0 when not read from a table.
    pub line: usize,
}

impl ColorDescriptor {
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

impl FromRow for ColorDescriptor {
    const ARITY: usize = 2;

    fn from_cells(cells: Vec<String>, path: &Path, line: usize) -> Result<Self> {
        let [name, doc]: [String; 2] = cells.try_into().map_err(|cells: Vec<String>| {
            GenError::MalformedRow {
                path: path.to_path_buf(),
                line,
                expected: Self::ARITY,
                found: cells.len(),
            }
        })?;

        Ok(Self { name, doc, line })
    }
}

/// Both descriptor tables, read in full.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tables {
    pub style: Vec<FieldDescriptor>,
    pub colors: Vec<ColorDescriptor>,
    /// Where the tables were read from.
    #[serde(skip)]
    pub paths: TablePaths,
}

impl Tables {
    /// Read the style and color tables from disk.
    ///
    /// The style table is read first; any failure aborts before the color
    /// table is touched.
    pub fn load(style_path: &Path, colors_path: &Path) -> Result<Self> {
        Ok(Self {
            style: load_table(style_path)?,
            colors: load_table(colors_path)?,
            paths: TablePaths {
                style: style_path.to_path_buf(),
                colors: colors_path.to_path_buf(),
            },
        })
    }
}

/// Paths to the two descriptor tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub style: PathBuf,
    pub colors: PathBuf,
}

impl Default for TablePaths {
    fn default() -> Self {
        Self {
            style: PathBuf::from(DEFAULT_STYLE_TABLE),
            colors: PathBuf::from(DEFAULT_COLOR_TABLE),
        }
    }
}
