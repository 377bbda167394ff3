pub mod check;
pub mod completions;
pub mod generate;
pub mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{Overrides, Settings};
use crate::descriptor::{load_table, ColorDescriptor, FieldDescriptor, Tables};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// stylegen - Style save/load code generator
#[derive(Parser, Debug)]
#[command(name = "stylegen")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    // Used when no subcommand is given.
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, with a bare invocation meaning `generate`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate(self.generate))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate save/load code from the descriptor tables
    Generate(generate::GenerateArgs),

    /// Read and validate the descriptor tables without generating code
    Check(check::CheckArgs),

    /// List the fields and colors in the descriptor tables
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where to find the descriptor tables.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Style table (type, name, comment)
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Color table (name, comment)
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Manifest to read instead of ./stylegen.yaml
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl TableArgs {
    /// Resolve against the working directory and any manifest found there.
    pub fn settings(&self, indent: Option<usize>) -> Result<Settings> {
        Settings::resolve(
            Path::new("."),
            Overrides {
                style: self.style.clone(),
                colors: self.colors.clone(),
                indent,
                manifest: self.manifest.clone(),
            },
        )
    }
}

/// Read both tables named by `settings`, reporting progress.
pub fn load_tables(settings: &Settings, printer: &Printer) -> Result<Tables> {
    if let Some(manifest) = &settings.manifest {
        printer.info("Using", &display_path(manifest));
    }

    let style: Vec<FieldDescriptor> = load_table(&settings.tables.style)?;
    printer.status(
        "Reading",
        &format!(
            "{} ({})",
            display_path(&settings.tables.style),
            plural(style.len(), "field", "fields")
        ),
    );

    let colors: Vec<ColorDescriptor> = load_table(&settings.tables.colors)?;
    printer.status(
        "Reading",
        &format!(
            "{} ({})",
            display_path(&settings.tables.colors),
            plural(colors.len(), "color", "colors")
        ),
    );

    Ok(Tables {
        style,
        colors,
        paths: settings.tables.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["stylegen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_table_flags_without_subcommand() {
        let cli = Cli::try_parse_from([
            "stylegen",
            "--style",
            "s.csv",
            "--colors",
            "c.csv",
            "--indent",
            "4",
        ])
        .unwrap();

        match cli.into_command() {
            Commands::Generate(args) => {
                assert_eq!(args.tables.style, Some(PathBuf::from("s.csv")));
                assert_eq!(args.tables.colors, Some(PathBuf::from("c.csv")));
                assert_eq!(args.indent, Some(4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_table_flags_do_not_mix_with_subcommand() {
        assert!(Cli::try_parse_from(["stylegen", "--style", "s.csv", "check"]).is_err());
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "stylegen",
            "generate",
            "--style",
            "ui/style.csv",
            "--indent",
            "8",
            "-q",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.tables.style, Some(PathBuf::from("ui/style.csv")));
                assert!(args.tables.colors.is_none());
                assert_eq!(args.indent, Some(8));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::try_parse_from(["stylegen", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ref args)) if args.json));
    }
}
