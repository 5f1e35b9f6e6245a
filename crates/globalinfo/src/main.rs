mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get { key, select } => commands::get::run(&cli.config, &key, &select),
        Commands::List { select } => commands::list::run(&cli.config, &select),
        Commands::Keys => commands::keys::run(&cli.config),
        Commands::Version => commands::version::run(),
    }
}
