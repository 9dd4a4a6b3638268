//! `spacescore show`: display one reference company by slug.

use std::path::PathBuf;

use crate::commands::{open_output, resolve_reference_table};
use crate::errors::SpaceScoreError;
use crate::io::output::{create_writer, OutputFormat};

#[derive(Debug)]
pub struct ShowConfig {
    pub slug: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub reference: Option<PathBuf>,
}

pub fn handle_show(config: ShowConfig) -> anyhow::Result<()> {
    let table = resolve_reference_table(config.reference.as_deref())?;
    let entry = table
        .company(&config.slug)
        .ok_or_else(|| SpaceScoreError::UnknownCompany(config.slug.clone()))?;

    let out = open_output(config.output.as_ref())?;
    let mut writer = create_writer(out, config.format, 0);
    writer.write_entry(entry)
}
