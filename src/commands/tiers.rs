//! `spacescore tiers`: print the score tier bands.

use std::path::PathBuf;

use crate::commands::open_output;
use crate::io::output::{create_writer, OutputFormat};

pub fn handle_tiers(format: OutputFormat, output: Option<PathBuf>) -> anyhow::Result<()> {
    let out = open_output(output.as_ref())?;
    let mut writer = create_writer(out, format, 0);
    writer.write_tiers()
}
