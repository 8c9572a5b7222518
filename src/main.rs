use clap::Parser;
use tracing_subscriber::EnvFilter;

mod blast;
mod classify;
mod cli;
mod core;
mod output;
mod parsing;
mod selection;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("plasidome=debug,info")
    } else {
        EnvFilter::new("plasidome=info,warn")
    };

    // Progress goes to stderr so stdout stays clean for json/tsv output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Run(args) => {
            cli::run::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Select(args) => {
            cli::select::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
