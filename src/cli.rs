use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "spacescore")]
#[command(about = "Space-industry company scoring and benchmarking engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a company snapshot
    Score {
        /// Path to a company snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rank against a custom reference set (JSON seed file)
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Increase breakdown detail (-v shows factor trails)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Show the reference leaderboard
    Leaderboard {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N companies
        #[arg(long)]
        top: Option<usize>,

        /// Only companies in this sector (exact match, case-insensitive)
        #[arg(long)]
        sector: Option<String>,

        /// Use a custom reference set (JSON seed file)
        #[arg(long)]
        reference: Option<PathBuf>,
    },

    /// Show one reference company by slug
    Show {
        /// Company slug, e.g. "rocket-lab"
        slug: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use a custom reference set (JSON seed file)
        #[arg(long)]
        reference: Option<PathBuf>,
    },

    /// Print the score tier bands
    Tiers {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
