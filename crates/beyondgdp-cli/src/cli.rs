//! CLI argument definitions using clap.

use beyondgdp::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Beyond GDP: explore development indicators and ask questions about them
#[derive(Parser)]
#[command(name = "beyondgdp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./beyondgdp.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Indicator data file, overriding the configured path
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question, or read one per line from stdin
    Ask {
        /// Question words (e.g. "PIB de la France en 2010")
        #[arg(value_name = "QUESTION")]
        question: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List themes and their indicators with row counts
    Indicators {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show indicator coverage and correlations for one country
    Profile {
        /// Country name as spelled in the dataset
        #[arg(long)]
        country: String,

        /// Theme (economy, health, education, environment, inequality, society)
        #[arg(short, long)]
        theme: Theme,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare several countries on one theme at one year
    Compare {
        /// Theme (economy, health, education, environment, inequality, society)
        #[arg(short, long)]
        theme: Theme,

        /// Comma-separated country names as spelled in the dataset
        #[arg(long, value_delimiter = ',', default_value = "France,United States,China")]
        countries: Vec<String>,

        /// Year (default: latest year with data for these countries)
        #[arg(short, long)]
        year: Option<i32>,

        /// Series plotted against GDP per capita, by code or name
        #[arg(short, long)]
        indicator: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
