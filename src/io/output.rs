//! Report writers for scoring results, the leaderboard, and tier bands.
//!
//! One writer per output format over any `std::io::Write` destination.
//! Terminal output uses color and a table layout; markdown mirrors the
//! same content for report files; JSON is the machine-readable form.

use std::io::Write;

use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::reference::CompanyScoreEntry;
use crate::score::tiers::ScoreTier;
use crate::score::types::SpaceScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_score(&mut self, name: &str, result: &SpaceScoreResult) -> anyhow::Result<()>;
    fn write_leaderboard(&mut self, entries: &[&CompanyScoreEntry]) -> anyhow::Result<()>;
    fn write_entry(&mut self, entry: &CompanyScoreEntry) -> anyhow::Result<()>;
    fn write_tiers(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer(
    writer: Box<dyn Write>,
    format: OutputFormat,
    verbosity: u8,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter { writer }),
        OutputFormat::Markdown => Box::new(MarkdownWriter { writer, verbosity }),
        OutputFormat::Terminal => Box::new(TerminalWriter { writer, verbosity }),
    }
}

pub struct JsonWriter {
    writer: Box<dyn Write>,
}

impl OutputWriter for JsonWriter {
    fn write_score(&mut self, name: &str, result: &SpaceScoreResult) -> anyhow::Result<()> {
        let payload = serde_json::json!({
            "name": name,
            "score": result,
        });
        writeln!(self.writer, "{}", serde_json::to_string_pretty(&payload)?)?;
        Ok(())
    }

    fn write_leaderboard(&mut self, entries: &[&CompanyScoreEntry]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    fn write_entry(&mut self, entry: &CompanyScoreEntry) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", serde_json::to_string_pretty(entry)?)?;
        Ok(())
    }

    fn write_tiers(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            serde_json::to_string_pretty(&ScoreTier::ALL)?
        )?;
        Ok(())
    }
}

pub struct TerminalWriter {
    writer: Box<dyn Write>,
    verbosity: u8,
}

impl OutputWriter for TerminalWriter {
    fn write_score(&mut self, name: &str, result: &SpaceScoreResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", name.bold())?;
        writeln!(
            self.writer,
            "Space Score: {} / 1000  [{}]  ({} percentile)",
            result.total.to_string().bold(),
            tier_colored(result.tier),
            ordinal(result.percentile)
        )?;
        writeln!(self.writer)?;

        for dim in &result.breakdown {
            writeln!(
                self.writer,
                "  {:<22} {:>3} / {}  {}",
                dim.dimension.name(),
                dim.score,
                dim.max_score,
                score_bar(dim.score, dim.max_score)
            )?;
            if self.verbosity >= 1 {
                for factor in &dim.factors {
                    writeln!(
                        self.writer,
                        "      {:<26} {:>3} / {}",
                        factor.label, factor.value, factor.max_value
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_leaderboard(&mut self, entries: &[&CompanyScoreEntry]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Company", "Sector", "Score", "Tier", "Pct"]);
        for (rank, entry) in entries.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                entry.name.clone(),
                entry.sector.clone(),
                entry.total.to_string(),
                entry.score_tier.label().to_string(),
                entry.percentile.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_entry(&mut self, entry: &CompanyScoreEntry) -> anyhow::Result<()> {
        writeln!(self.writer, "{} ({})", entry.name.bold(), entry.sector)?;
        writeln!(
            self.writer,
            "Space Score: {} / 1000  [{}]  ({} percentile)",
            entry.total.to_string().bold(),
            tier_colored(entry.score_tier),
            ordinal(entry.percentile)
        )?;
        writeln!(self.writer)?;
        for (dimension, score) in entry.dimension_scores() {
            writeln!(
                self.writer,
                "  {:<22} {:>3} / 200  {}",
                dimension.name(),
                score,
                score_bar(score, 200)
            )?;
        }
        Ok(())
    }

    fn write_tiers(&mut self) -> anyhow::Result<()> {
        for tier in ScoreTier::ALL {
            writeln!(
                self.writer,
                "{:<24} {:>4}-{:<4}  {}",
                tier_colored(tier).to_string(),
                tier.min_score(),
                tier.max_score(),
                tier.description()
            )?;
        }
        Ok(())
    }
}

pub struct MarkdownWriter {
    writer: Box<dyn Write>,
    verbosity: u8,
}

impl OutputWriter for MarkdownWriter {
    fn write_score(&mut self, name: &str, result: &SpaceScoreResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Space Score: {name}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            result.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{} / 1000** - {} ({} percentile)",
            result.total,
            result.tier.label(),
            ordinal(result.percentile)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Dimension | Score | Max |")?;
        writeln!(self.writer, "|-----------|-------|-----|")?;
        for dim in &result.breakdown {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                dim.dimension.name(),
                dim.score,
                dim.max_score
            )?;
        }
        if self.verbosity >= 1 {
            for dim in &result.breakdown {
                writeln!(self.writer)?;
                writeln!(self.writer, "## {}", dim.dimension.name())?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| Factor | Value | Max |")?;
                writeln!(self.writer, "|--------|-------|-----|")?;
                for factor in &dim.factors {
                    writeln!(
                        self.writer,
                        "| {} | {} | {} |",
                        factor.label, factor.value, factor.max_value
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_leaderboard(&mut self, entries: &[&CompanyScoreEntry]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Space Score Leaderboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Company | Sector | Score | Tier | Percentile |"
        )?;
        writeln!(
            self.writer,
            "|---|---------|--------|-------|------|------------|"
        )?;
        for (rank, entry) in entries.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                rank + 1,
                entry.name,
                entry.sector,
                entry.total,
                entry.score_tier.label(),
                entry.percentile
            )?;
        }
        Ok(())
    }

    fn write_entry(&mut self, entry: &CompanyScoreEntry) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", entry.name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Sector: {} - Market rank: tier {}",
            entry.sector, entry.tier
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{} / 1000** - {} ({} percentile)",
            entry.total,
            entry.score_tier.label(),
            ordinal(entry.percentile)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Dimension | Score | Max |")?;
        writeln!(self.writer, "|-----------|-------|-----|")?;
        for (dimension, score) in entry.dimension_scores() {
            writeln!(self.writer, "| {} | {} | 200 |", dimension.name(), score)?;
        }
        Ok(())
    }

    fn write_tiers(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Score Tiers")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Range | Description |")?;
        writeln!(self.writer, "|------|-------|-------------|")?;
        for tier in ScoreTier::ALL {
            writeln!(
                self.writer,
                "| {} | {}-{} | {} |",
                tier.label(),
                tier.min_score(),
                tier.max_score(),
                tier.description()
            )?;
        }
        Ok(())
    }
}

fn tier_colored(tier: ScoreTier) -> ColoredString {
    match tier {
        ScoreTier::Elite => tier.label().bright_cyan().bold(),
        ScoreTier::Leader => tier.label().green(),
        ScoreTier::Contender => tier.label().yellow(),
        ScoreTier::Emerging => tier.label().blue(),
        ScoreTier::EarlyStage => tier.label().normal(),
        ScoreTier::PreRevenue => tier.label().dimmed(),
    }
}

fn score_bar(score: u32, max: u32) -> String {
    const WIDTH: u32 = 20;
    let filled = if max == 0 { 0 } else { score * WIDTH / max };
    let mut bar = String::with_capacity(WIDTH as usize);
    for i in 0..WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

fn ordinal(percentile: u8) -> String {
    let suffix = match (percentile % 100, percentile % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{percentile}{suffix}")
}
