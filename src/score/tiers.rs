//! Tier classification for composite Space Scores.
//!
//! Maps a 0-1000 total onto six contiguous bands so that a raw number
//! always has a display tier. Bands are exhaustive over the full score
//! range: every integer in 0..=1000 matches exactly one tier.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Display tier for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreTier {
    /// 900-1000: established category leaders with dominant economics
    Elite,
    /// 750-899: at-scale operators with durable market presence
    Leader,
    /// 600-749: proven businesses still consolidating their position
    Contender,
    /// 400-599: commercial traction, partial coverage of the scorecard
    Emerging,
    /// 200-399: early commercial activity, thin financial base
    EarlyStage,
    /// 0-199: little measurable commercial footprint yet
    PreRevenue,
}

impl ScoreTier {
    /// All tiers in descending `min_score` order. Classification scans
    /// this list and returns the first band whose floor is reached.
    pub const ALL: [ScoreTier; 6] = [
        ScoreTier::Elite,
        ScoreTier::Leader,
        ScoreTier::Contender,
        ScoreTier::Emerging,
        ScoreTier::EarlyStage,
        ScoreTier::PreRevenue,
    ];

    /// Classify a composite total into its tier.
    pub fn for_total(total: u32) -> ScoreTier {
        Self::ALL
            .into_iter()
            .find(|tier| total >= tier.min_score())
            .unwrap_or(ScoreTier::PreRevenue)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Elite => "Elite",
            ScoreTier::Leader => "Leader",
            ScoreTier::Contender => "Contender",
            ScoreTier::Emerging => "Emerging",
            ScoreTier::EarlyStage => "Early Stage",
            ScoreTier::PreRevenue => "Pre-Revenue",
        }
    }

    /// Inclusive band floor.
    pub fn min_score(&self) -> u32 {
        match self {
            ScoreTier::Elite => 900,
            ScoreTier::Leader => 750,
            ScoreTier::Contender => 600,
            ScoreTier::Emerging => 400,
            ScoreTier::EarlyStage => 200,
            ScoreTier::PreRevenue => 0,
        }
    }

    /// Inclusive band ceiling.
    pub fn max_score(&self) -> u32 {
        match self {
            ScoreTier::Elite => 1000,
            ScoreTier::Leader => 899,
            ScoreTier::Contender => 749,
            ScoreTier::Emerging => 599,
            ScoreTier::EarlyStage => 399,
            ScoreTier::PreRevenue => 199,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreTier::Elite => "Category leader with dominant scale and economics",
            ScoreTier::Leader => "At-scale operator with durable market presence",
            ScoreTier::Contender => "Proven business consolidating its position",
            ScoreTier::Emerging => "Commercial traction across part of the scorecard",
            ScoreTier::EarlyStage => "Early commercial activity on a thin financial base",
            ScoreTier::PreRevenue => "Little measurable commercial footprint yet",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the full band record so downstream consumers get the
// label and bounds without a second lookup.
impl Serialize for ScoreTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoreTier", 4)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("min_score", &self.min_score())?;
        state.serialize_field("max_score", &self.max_score())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}
