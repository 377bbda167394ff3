//! Check command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::validation::{print_diagnostics, summary, validate_tables};

use super::TableArgs;

/// Read and validate the descriptor tables without generating code
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub tables: TableArgs,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let settings = args.tables.settings(None)?;
    let tables = super::load_tables(&settings, printer)?;

    let result = validate_tables(&tables);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        printer.warning("Failed", &summary(&result));
    } else {
        printer.status("Checked", &summary(&result));
    }

    result.into_result()
}
