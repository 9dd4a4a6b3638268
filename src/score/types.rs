//! Type-safe score structures for the Space Score system.
//!
//! Scores are built from clamped factor values so that out-of-range
//! inputs can never escape the intended scales: every factor is clamped
//! to its own `[0, max_value]`, every dimension to `[0, 200]`, and the
//! composite total is therefore always in `[0, 1000]`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::score::tiers::ScoreTier;

/// Upper bound of a single dimension score.
pub const MAX_DIMENSION_SCORE: u32 = 200;

/// Upper bound of the composite total (five dimensions).
pub const MAX_TOTAL_SCORE: u32 = 1000;

/// The five scored dimensions, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Innovation,
    FinancialHealth,
    MarketPosition,
    OperationalCapacity,
    GrowthTrajectory,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Innovation,
        Dimension::FinancialHealth,
        Dimension::MarketPosition,
        Dimension::OperationalCapacity,
        Dimension::GrowthTrajectory,
    ];

    /// Display name for report output.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Innovation => "Innovation",
            Dimension::FinancialHealth => "Financial Health",
            Dimension::MarketPosition => "Market Position",
            Dimension::OperationalCapacity => "Operational Capacity",
            Dimension::GrowthTrajectory => "Growth Trajectory",
        }
    }

    /// Stable key used in serialized breakdowns.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Innovation => "innovation",
            Dimension::FinancialHealth => "financial_health",
            Dimension::MarketPosition => "market_position",
            Dimension::OperationalCapacity => "operational_capacity",
            Dimension::GrowthTrajectory => "growth_trajectory",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Innovation => "Patents, R&D programs, and product breadth",
            Dimension::FinancialHealth => "Revenue, funding, valuation, and profitability",
            Dimension::MarketPosition => "Contracts, partnerships, and market share",
            Dimension::OperationalCapacity => "Fleet, facilities, workforce, and cadence",
            Dimension::GrowthTrajectory => "Hiring velocity, deal flow, and expansion",
        }
    }
}

/// One factor contribution inside a dimension score.
///
/// Factors are the audit trail of a score: the factor values of a
/// calculated dimension sum to the dimension score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreFactor {
    pub label: &'static str,
    pub value: u32,
    pub max_value: u32,
}

impl ScoreFactor {
    /// Create a factor, clamping the value into `[0, max_value]`.
    pub fn new(label: &'static str, value: u32, max_value: u32) -> Self {
        Self {
            label,
            value: value.min(max_value),
            max_value,
        }
    }
}

/// A scored dimension with its factor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    #[serde(rename = "key")]
    pub dimension: Dimension,
    pub score: u32,
    pub max_score: u32,
    pub factors: Vec<ScoreFactor>,
}

impl DimensionScore {
    /// Build a dimension score from its factors, clamping the sum to
    /// `[0, MAX_DIMENSION_SCORE]`.
    pub fn from_factors(dimension: Dimension, factors: Vec<ScoreFactor>) -> Self {
        let score = factors
            .iter()
            .map(|f| f.value)
            .sum::<u32>()
            .min(MAX_DIMENSION_SCORE);
        Self {
            dimension,
            score,
            max_score: MAX_DIMENSION_SCORE,
            factors,
        }
    }

    /// A dimension holding only a precomputed total, with no factor
    /// trail. Used for reference entries, which store final values only.
    pub fn precomputed(dimension: Dimension, score: u32) -> Self {
        Self {
            dimension,
            score: score.min(MAX_DIMENSION_SCORE),
            max_score: MAX_DIMENSION_SCORE,
            factors: Vec::new(),
        }
    }
}

/// Composite scoring result for one company snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceScoreResult {
    pub total: u32,
    pub tier: ScoreTier,
    pub breakdown: Vec<DimensionScore>,
    /// Rank against the reference set, 0-100.
    pub percentile: u8,
    pub updated_at: DateTime<Utc>,
}

impl SpaceScoreResult {
    /// Look up a dimension score in the breakdown.
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.breakdown.iter().find(|d| d.dimension == dimension)
    }
}
