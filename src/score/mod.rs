//! Space Score calculation engine.
//!
//! Maps a heterogeneous company snapshot into a 0-1000 composite score
//! across five weighted dimensions, classifies the total into a display
//! tier, and ranks it against a reference set of precomputed company
//! scores.
//!
//! The engine is a total function over its input domain: absent fields
//! take neutral branches and every derived value is clamped, so scoring
//! never fails and never panics.

pub mod dimensions;
pub mod percentile;
pub mod tiers;
pub mod types;

use chrono::{Datelike, Utc};

use crate::company::CompanyInput;
use crate::reference::ReferenceTable;
use crate::score::percentile::percentile_rank;

pub use crate::score::tiers::ScoreTier;
pub use crate::score::types::{
    Dimension, DimensionScore, ScoreFactor, SpaceScoreResult, MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE,
};

/// Scoring engine bound to a reference table.
///
/// The reference table is only consulted for percentile ranking; the
/// composite score itself depends on nothing but the snapshot and the
/// engine's notion of the current year (company age factors). Tests
/// inject a fixed year and a synthetic table to stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine<'a> {
    reference: &'a ReferenceTable,
    current_year: i32,
}

impl<'a> ScoreEngine<'a> {
    /// Engine over the given reference table, using the current system
    /// year for company-age factors.
    pub fn new(reference: &'a ReferenceTable) -> Self {
        Self::with_current_year(reference, Utc::now().year())
    }

    /// Engine with an explicit current year.
    pub fn with_current_year(reference: &'a ReferenceTable, current_year: i32) -> Self {
        Self {
            reference,
            current_year,
        }
    }

    /// Score a single company snapshot.
    pub fn score(&self, company: &CompanyInput) -> SpaceScoreResult {
        let signals = company.signals();

        let breakdown = vec![
            dimensions::innovation(company, &signals),
            dimensions::financial_health(company),
            dimensions::market_position(company, &signals),
            dimensions::operational_capacity(company, &signals),
            dimensions::growth_trajectory(company, &signals, self.current_year),
        ];

        let total: u32 = breakdown.iter().map(|d| d.score).sum();
        let tier = ScoreTier::for_total(total);
        let percentile = percentile_rank(self.reference.totals(), total);

        SpaceScoreResult {
            total,
            tier,
            breakdown,
            percentile,
            updated_at: Utc::now(),
        }
    }
}

/// Score a company against the built-in reference benchmark.
///
/// Convenience entry point for callers that do not need to inject a
/// custom reference set or pin the current year.
pub fn calculate_space_score(company: &CompanyInput) -> SpaceScoreResult {
    ScoreEngine::new(ReferenceTable::builtin()).score(company)
}
