use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod seed;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arbor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = seed::open_store(cli.seed.as_deref())?;

    match &cli.command {
        Commands::Get(args) => commands::get::run(&store, args, cli.format),
        Commands::Collections => commands::collections::run(&store, cli.format),
        Commands::Destroy(args) => commands::destroy::run(&store, args, cli.format),
    }
}
