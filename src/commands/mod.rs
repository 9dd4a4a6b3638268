//! CLI command implementations.
//!
//! Each submodule handles one subcommand: loading its inputs, running
//! the engine or reference accessors, and rendering through the shared
//! output writers.
//!
//! Available commands:
//! - **score**: score a company snapshot JSON file
//! - **leaderboard**: render the reference leaderboard
//! - **show**: display one reference company by slug
//! - **tiers**: print the score tier bands

pub mod leaderboard;
pub mod score;
pub mod show;
pub mod tiers;

pub use leaderboard::{handle_leaderboard, LeaderboardConfig};
pub use score::{handle_score, ScoreConfig};
pub use show::{handle_show, ShowConfig};
pub use tiers::handle_tiers;

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::SpaceScoreError;
use crate::reference::{ReferenceSeed, ReferenceTable};

/// Resolve the reference table: the built-in benchmark, or a custom
/// seed file when `--reference` was given.
pub(crate) fn resolve_reference_table(
    path: Option<&Path>,
) -> Result<Cow<'static, ReferenceTable>, SpaceScoreError> {
    match path {
        None => Ok(Cow::Borrowed(ReferenceTable::builtin())),
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| {
                SpaceScoreError::ReferenceRead {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            let seeds: Vec<ReferenceSeed> =
                serde_json::from_str(&raw).map_err(|source| SpaceScoreError::ReferenceParse {
                    path: path.to_path_buf(),
                    source,
                })?;
            log::debug!("loaded {} reference seeds from {}", seeds.len(), path.display());
            Ok(Cow::Owned(ReferenceTable::from_seeds(seeds)?))
        }
    }
}

/// Output destination: a file when `--output` was given, else stdout.
pub(crate) fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}
