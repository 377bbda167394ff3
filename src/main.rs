use clap::Parser;
use miette::Result;
use stylegen::cli::{Cli, Commands};
use stylegen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.into_command() {
        Commands::Generate(args) => stylegen::cli::generate::run(args, &printer)?,
        Commands::Check(args) => stylegen::cli::check::run(args, &printer)?,
        Commands::List(args) => stylegen::cli::list::run(args, &printer)?,
        Commands::Completions(args) => stylegen::cli::completions::run(args)?,
    }

    Ok(())
}
