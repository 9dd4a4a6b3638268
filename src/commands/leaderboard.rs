//! `spacescore leaderboard`: render the reference leaderboard.

use std::path::PathBuf;

use crate::commands::{open_output, resolve_reference_table};
use crate::io::output::{create_writer, OutputFormat};
use crate::reference::CompanyScoreEntry;

#[derive(Debug)]
pub struct LeaderboardConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub sector: Option<String>,
    pub reference: Option<PathBuf>,
}

pub fn handle_leaderboard(config: LeaderboardConfig) -> anyhow::Result<()> {
    let table = resolve_reference_table(config.reference.as_deref())?;

    let mut ranked: Vec<&CompanyScoreEntry> = table.leaderboard();
    if let Some(sector) = &config.sector {
        ranked.retain(|entry| entry.sector.eq_ignore_ascii_case(sector));
    }
    if let Some(top) = config.top {
        ranked.truncate(top);
    }

    let out = open_output(config.output.as_ref())?;
    let mut writer = create_writer(out, config.format, 0);
    writer.write_leaderboard(&ranked)
}
