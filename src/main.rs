use anyhow::Result;
use clap::Parser;
use spacescore::cli::{Cli, Commands};
use spacescore::commands::{
    handle_leaderboard, handle_score, handle_show, handle_tiers, LeaderboardConfig, ScoreConfig,
    ShowConfig,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            snapshot,
            format,
            output,
            reference,
            verbosity,
        } => handle_score(ScoreConfig {
            snapshot,
            format,
            output,
            reference,
            verbosity,
        }),
        Commands::Leaderboard {
            format,
            output,
            top,
            sector,
            reference,
        } => handle_leaderboard(LeaderboardConfig {
            format,
            output,
            top,
            sector,
            reference,
        }),
        Commands::Show {
            slug,
            format,
            output,
            reference,
        } => handle_show(ShowConfig {
            slug,
            format,
            output,
            reference,
        }),
        Commands::Tiers { format, output } => handle_tiers(format, output),
    }
}
