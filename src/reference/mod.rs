//! Immutable reference benchmark of precomputed company scores.
//!
//! The table is built once from hand-authored seeds (dimension totals
//! only, no factor trails) and never mutated afterwards: it serves as
//! the percentile baseline for freshly scored companies and backs the
//! leaderboard. Construction is two-pass: totals and tiers first, then
//! every entry's percentile against the full set.

mod data;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::SpaceScoreError;
use crate::score::percentile::percentile_rank;
use crate::score::tiers::ScoreTier;
use crate::score::types::{Dimension, MAX_DIMENSION_SCORE};

/// One seed row: final per-dimension scores for a benchmark company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceSeed {
    pub slug: String,
    pub name: String,
    pub sector: String,
    /// Externally assigned market-importance rank (1, 2, or 3).
    pub tier: u8,
    pub innovation: u32,
    pub financial: u32,
    pub market: u32,
    pub operations: u32,
    pub growth: u32,
}

/// A benchmark company with its derived total, tier, and percentile.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanyScoreEntry {
    pub slug: String,
    pub name: String,
    pub sector: String,
    pub tier: u8,
    pub innovation: u32,
    pub financial: u32,
    pub market: u32,
    pub operations: u32,
    pub growth: u32,
    pub total: u32,
    pub score_tier: ScoreTier,
    /// Rank within the reference set itself, 0-100.
    pub percentile: u8,
}

impl CompanyScoreEntry {
    /// Dimension scores in breakdown order.
    pub fn dimension_scores(&self) -> [(Dimension, u32); 5] {
        [
            (Dimension::Innovation, self.innovation),
            (Dimension::FinancialHealth, self.financial),
            (Dimension::MarketPosition, self.market),
            (Dimension::OperationalCapacity, self.operations),
            (Dimension::GrowthTrajectory, self.growth),
        ]
    }
}

/// Construct-once, read-only benchmark table keyed by slug.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: BTreeMap<String, CompanyScoreEntry>,
    totals: Vec<u32>,
}

static BUILTIN: Lazy<ReferenceTable> = Lazy::new(|| {
    log::debug!(
        "building built-in reference table ({} seeds)",
        data::REFERENCE_SEEDS.len()
    );
    ReferenceTable::build(data::REFERENCE_SEEDS.iter().map(|row| ReferenceSeed {
        slug: row.0.to_string(),
        name: row.1.to_string(),
        sector: row.2.to_string(),
        tier: row.3,
        innovation: row.4,
        financial: row.5,
        market: row.6,
        operations: row.7,
        growth: row.8,
    }))
});

impl ReferenceTable {
    /// The built-in 100-company benchmark, constructed on first use and
    /// shared read-only for the rest of the process lifetime.
    pub fn builtin() -> &'static ReferenceTable {
        &BUILTIN
    }

    /// Build a table from caller-supplied seeds.
    ///
    /// Rejects empty sets and duplicate slugs; dimension values are
    /// clamped to the 0-200 scale like every other score in the system.
    pub fn from_seeds(seeds: Vec<ReferenceSeed>) -> Result<Self, SpaceScoreError> {
        if seeds.is_empty() {
            return Err(SpaceScoreError::InvalidReference(
                "reference set is empty".to_string(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for seed in &seeds {
            if !seen.insert(seed.slug.clone()) {
                return Err(SpaceScoreError::InvalidReference(format!(
                    "duplicate slug '{}'",
                    seed.slug
                )));
            }
        }
        Ok(Self::build(seeds.into_iter()))
    }

    // Two-pass construction: derive totals and tiers, then rank every
    // entry against the complete set (self-inclusive strict-less count).
    fn build(seeds: impl Iterator<Item = ReferenceSeed>) -> Self {
        let mut entries: BTreeMap<String, CompanyScoreEntry> = seeds
            .map(|seed| {
                let innovation = seed.innovation.min(MAX_DIMENSION_SCORE);
                let financial = seed.financial.min(MAX_DIMENSION_SCORE);
                let market = seed.market.min(MAX_DIMENSION_SCORE);
                let operations = seed.operations.min(MAX_DIMENSION_SCORE);
                let growth = seed.growth.min(MAX_DIMENSION_SCORE);
                let total = innovation + financial + market + operations + growth;
                let entry = CompanyScoreEntry {
                    slug: seed.slug.clone(),
                    name: seed.name,
                    sector: seed.sector,
                    tier: seed.tier,
                    innovation,
                    financial,
                    market,
                    operations,
                    growth,
                    total,
                    score_tier: ScoreTier::for_total(total),
                    percentile: 0,
                };
                (seed.slug, entry)
            })
            .collect();

        let totals: Vec<u32> = entries.values().map(|e| e.total).collect();
        for entry in entries.values_mut() {
            entry.percentile = percentile_rank(&totals, entry.total);
        }

        Self { entries, totals }
    }

    /// Exact-match lookup by slug.
    pub fn company(&self, slug: &str) -> Option<&CompanyScoreEntry> {
        self.entries.get(slug)
    }

    /// All entries ranked by total descending, ties broken by slug
    /// ascending so the ordering is fully deterministic.
    pub fn leaderboard(&self) -> Vec<&CompanyScoreEntry> {
        let mut ranked: Vec<&CompanyScoreEntry> = self.entries.values().collect();
        ranked.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        ranked
    }

    /// Raw totals of every entry, used as the percentile baseline.
    pub fn totals(&self) -> &[u32] {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
