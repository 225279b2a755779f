use clap::Parser;
use miette::Result;
use strata::cli::{Cli, Commands};
use strata::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_quiet(cli.quiet);

    match cli.command {
        Commands::Build(args) => strata::cli::build::run(args, &printer)?,
        Commands::Init(args) => strata::cli::init::run(args, &printer)?,
        Commands::Validate(args) => strata::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => strata::cli::completions::run(args)?,
    }

    Ok(())
}
