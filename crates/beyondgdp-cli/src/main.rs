//! Beyond GDP CLI - dashboard queries from the terminal.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::open_dashboard(cli.config.as_deref(), cli.data.as_deref()).and_then(|dashboard| {
        match cli.command {
            Commands::Ask { question, json } => commands::ask::run(&dashboard, question, json, cli.verbose),
            Commands::Indicators { json } => commands::indicators::run(&dashboard, json),
            Commands::Profile {
                country,
                theme,
                json,
            } => commands::profile::run(&dashboard, &country, theme, json),
            Commands::Compare {
                theme,
                countries,
                year,
                indicator,
                json,
            } => commands::compare::run(&dashboard, theme, &countries, year, indicator.as_deref(), json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
