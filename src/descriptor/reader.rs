//! Streaming reader for quoted comma-separated rows.

use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::error::{GenError, Result};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// A single record: its cells and the line it starts on (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub cells: Vec<String>,
}

/// A record type that can be built from one table row.
pub trait FromRow: Sized {
    /// Number of cells every row of this kind must have.
    const ARITY: usize;

    /// Build a record from exactly `ARITY` cells.
    fn from_cells(cells: Vec<String>, path: &Path, line: usize) -> Result<Self>;
}

/// Iterator over the rows of a descriptor table.
///
/// Cells are separated by `,`. A cell that starts with `"` is quoted: it may
/// contain delimiters and line breaks, and `""` inside it stands for a single
/// quote. Blank lines are skipped. Cell text is kept verbatim, including
/// surrounding whitespace.
pub struct RowReader<'a> {
    chars: Peekable<Chars<'a>>,
    path: &'a Path,
    line: usize,
}

impl<'a> RowReader<'a> {
    /// `path` is only used to label errors.
    pub fn new(source: &'a str, path: &'a Path) -> Self {
        Self {
            chars: source.chars().peekable(),
            path,
            line: 1,
        }
    }

    /// Consume a line terminator if one is next. Returns true if consumed.
    fn eat_newline(&mut self) -> bool {
        match self.chars.peek() {
            Some('\n') => {
                self.chars.next();
            }
            Some('\r') => {
                self.chars.next();
                if self.chars.peek() == Some(&'\n') {
                    self.chars.next();
                }
            }
            _ => return false,
        }
        self.line += 1;
        true
    }

    fn read_row(&mut self) -> Result<Row> {
        let start = self.line;
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut started = false;
        let mut quoted = false;

        loop {
            if !quoted && self.eat_newline() {
                break;
            }

            let Some(c) = self.chars.next() else {
                if quoted {
                    return Err(GenError::UnterminatedQuote {
                        path: self.path.to_path_buf(),
                        line: start,
                    });
                }
                break;
            };

            match c {
                QUOTE if quoted => {
                    if self.chars.peek() == Some(&QUOTE) {
                        self.chars.next();
                        cell.push(QUOTE);
                    } else {
                        quoted = false;
                    }
                }
                QUOTE if !started => {
                    quoted = true;
                    started = true;
                }
                DELIMITER if !quoted => {
                    cells.push(std::mem::take(&mut cell));
                    started = false;
                }
                '\n' => {
                    self.line += 1;
                    cell.push(c);
                }
                _ => {
                    cell.push(c);
                    started = true;
                }
            }
        }

        cells.push(cell);
        Ok(Row { line: start, cells })
    }
}

impl Iterator for RowReader<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.eat_newline() {}
        self.chars.peek()?;
        Some(self.read_row())
    }
}

/// Read every row of `source` as a `T`, preserving order.
///
/// Fails on the first row with the wrong number of cells or an invalid value.
pub fn read_descriptors<T: FromRow>(source: &str, path: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for row in RowReader::new(source, path) {
        let row = row?;
        if row.cells.len() != T::ARITY {
            return Err(GenError::MalformedRow {
                path: path.to_path_buf(),
                line: row.line,
                expected: T::ARITY,
                found: row.cells.len(),
            });
        }
        records.push(T::from_cells(row.cells, path, row.line)?);
    }

    Ok(records)
}

/// Read a descriptor table from disk.
pub fn load_table<T: FromRow>(path: &Path) -> Result<Vec<T>> {
    let source = std::fs::read_to_string(path).map_err(|e| GenError::from_read(path, e))?;
    read_descriptors(&source, path)
}
