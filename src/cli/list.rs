//! List command implementation.
//!
//! Prints the descriptor tables in row order, either as aligned text or
//! as JSON.

use std::io::{self, Write};

use clap::Args;

use crate::descriptor::Tables;
use crate::error::{GenError, Result};
use crate::output::Printer;

use super::TableArgs;

/// List the fields and colors in the descriptor tables
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let settings = args.tables.settings(None)?;
    let tables = super::load_tables(&settings, printer)?;

    let text = if args.json {
        let mut json = serde_json::to_string_pretty(&tables).map_err(|e| GenError::Io {
            path: "<stdout>".into(),
            message: e.to_string(),
        })?;
        json.push('\n');
        json
    } else {
        render_text(&tables)
    };

    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(|e| GenError::Io {
            path: "<stdout>".into(),
            message: e.to_string(),
        })
}

fn render_text(tables: &Tables) -> String {
    let width = tables
        .style
        .iter()
        .map(|f| f.name.len())
        .chain(tables.colors.iter().map(|c| c.name.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in &tables.style {
        out.push_str(&row(field.ty.token(), &field.name, &field.doc, width));
    }
    for color in &tables.colors {
        out.push_str(&row("color", &color.name, &color.doc, width));
    }
    out
}

fn row(kind: &str, name: &str, doc: &str, width: usize) -> String {
    format!("{kind:<6} {name:<width$}  {doc}").trim_end().to_string() + "\n"
}
