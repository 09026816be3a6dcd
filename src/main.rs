use clap::Parser;
use curvetrace::cli::{Cli, Commands};
use curvetrace::logger;
use curvetrace::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = logger::init(cli.verbose, cli.quiet);
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Trace(args) => curvetrace::cli::trace::run(args, &printer)?,
        Commands::Width(args) => curvetrace::cli::width::run(args, &printer)?,
        Commands::Completions(args) => curvetrace::cli::completions::run(args)?,
    }

    Ok(())
}
