//! `spacescore score`: score a company snapshot JSON file.

use std::path::PathBuf;

use crate::commands::{open_output, resolve_reference_table};
use crate::company::CompanyInput;
use crate::errors::SpaceScoreError;
use crate::io::output::{create_writer, OutputFormat};
use crate::score::ScoreEngine;

#[derive(Debug)]
pub struct ScoreConfig {
    pub snapshot: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub verbosity: u8,
}

pub fn handle_score(config: ScoreConfig) -> anyhow::Result<()> {
    let company = load_snapshot(&config.snapshot)?;
    log::debug!("scoring snapshot for {}", company.name);

    let table = resolve_reference_table(config.reference.as_deref())?;
    let engine = ScoreEngine::new(&table);
    let result = engine.score(&company);

    let out = open_output(config.output.as_ref())?;
    let mut writer = create_writer(out, config.format, config.verbosity);
    writer.write_score(&company.name, &result)
}

fn load_snapshot(path: &PathBuf) -> Result<CompanyInput, SpaceScoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SpaceScoreError::SnapshotRead {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SpaceScoreError::SnapshotParse {
        path: path.clone(),
        source,
    })
}
