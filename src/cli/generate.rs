//! Generate command implementation.
//!
//! Reads both descriptor tables, validates them and writes the four
//! banner-framed code blocks to stdout. Nothing is written to stdout unless
//! both tables were read and validated.

use std::io;

use clap::Args;

use crate::emit::generate;
use crate::error::{GenError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_tables};

use super::TableArgs;

/// Generate save/load code from the descriptor tables
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Spaces to prepend to every generated line
    #[arg(long)]
    pub indent: Option<usize>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let settings = args.tables.settings(args.indent)?;
    let tables = super::load_tables(&settings, printer)?;

    let result = validate_tables(&tables);
    print_diagnostics(&result, printer);
    result.into_result()?;

    let generated = generate(&tables, &settings.emit);
    generated
        .write_to(&mut io::stdout().lock())
        .map_err(|e| GenError::Io {
            path: "<stdout>".into(),
            message: e.to_string(),
        })?;

    printer.status(
        "Generated",
        &format!(
            "save/load code for {} and {}",
            plural(tables.style.len(), "field", "fields"),
            plural(tables.colors.len(), "color", "colors")
        ),
    );

    Ok(())
}
