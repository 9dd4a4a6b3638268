//! Company snapshot input types for the scoring engine.
//!
//! A [`CompanyInput`] is a denormalized, read-only view of a company as
//! supplied by the caller (typically deserialized from a profile API
//! payload). All fields other than `name` are optional; absent fields
//! take neutral branches in the scorers rather than producing errors.

use serde::{Deserialize, Serialize};

/// Related-record counts attached to a company snapshot.
///
/// Upstream payloads carry these under a `_count` key; all values
/// default to zero when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyCounts {
    pub funding_rounds: u32,
    pub products: u32,
    pub key_personnel: u32,
    pub contracts: u32,
    pub events: u32,
    pub satellite_assets: u32,
    pub facilities: u32,
}

/// Denormalized company snapshot scored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,

    #[serde(default)]
    pub sector: Option<String>,

    /// Externally assigned market-importance rank (1, 2, or 3).
    #[serde(default)]
    pub tier: Option<u8>,

    /// Free-text labels used as boolean capability signals.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub founded_year: Option<i32>,

    #[serde(default)]
    pub employee_count: Option<u32>,

    /// Bucket string such as "501-1000", consulted only when
    /// `employee_count` is absent.
    #[serde(default)]
    pub employee_range: Option<String>,

    /// USD
    #[serde(default)]
    pub total_funding: Option<f64>,

    /// USD
    #[serde(default)]
    pub valuation: Option<f64>,

    /// USD, annual
    #[serde(default)]
    pub revenue_estimate: Option<f64>,

    /// USD, preferred over nothing but `valuation` wins when both exist
    #[serde(default)]
    pub market_cap: Option<f64>,

    #[serde(default)]
    pub is_public: bool,

    /// Presence alone signals recent fundraising activity.
    #[serde(default)]
    pub last_funding_round: Option<String>,

    #[serde(rename = "_count", default)]
    pub counts: CompanyCounts,
}

impl CompanyInput {
    /// Create a snapshot with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sector: None,
            tier: None,
            tags: Vec::new(),
            founded_year: None,
            employee_count: None,
            employee_range: None,
            total_funding: None,
            valuation: None,
            revenue_estimate: None,
            market_cap: None,
            is_public: false,
            last_funding_round: None,
            counts: CompanyCounts::default(),
        }
    }

    /// Resolve the workforce size, falling back from the exact count to
    /// the representative value of the range bucket.
    pub fn resolved_employee_count(&self) -> u32 {
        if let Some(count) = self.employee_count {
            return count;
        }
        self.employee_range
            .as_deref()
            .map(representative_employee_count)
            .unwrap_or(0)
    }

    /// Derive the typed capability signals from the snapshot's tags.
    pub fn signals(&self) -> CapabilitySignals {
        CapabilitySignals::from_tags(&self.tags)
    }
}

/// Representative headcount for an employee-range bucket.
///
/// Unknown buckets resolve to zero so a malformed range never inflates
/// the workforce score.
fn representative_employee_count(range: &str) -> u32 {
    match range {
        "1-10" => 5,
        "11-50" => 30,
        "51-200" => 125,
        "201-500" => 350,
        "501-1000" => 750,
        "1001-5000" => 3000,
        "5001-10000" => 7500,
        "10000+" => 15000,
        other => {
            log::warn!("unknown employee range bucket: {other:?}");
            0
        }
    }
}

/// Boolean capability flags derived once from a company's free-text tags.
///
/// The scorers consume these flags instead of re-running substring
/// searches per factor. Matching is case-insensitive substring matching,
/// mirroring how the tags are authored upstream ("Patent Portfolio",
/// "SBIR Phase II", "launch-provider", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySignals {
    pub has_patents: bool,
    pub has_government_rd: bool,
    pub has_research_focus: bool,
    pub has_open_source: bool,
    pub has_software: bool,
    pub is_launch_provider: bool,
    pub is_international: bool,
    /// Raw tag count, used as a media-presence proxy.
    pub tag_count: usize,
}

impl CapabilitySignals {
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let lowered: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let any = |needles: &[&str]| {
            lowered
                .iter()
                .any(|tag| needles.iter().any(|needle| tag.contains(needle)))
        };

        Self {
            has_patents: any(&["patent", "proprietary"]),
            has_government_rd: any(&["sbir", "nasa"]),
            has_research_focus: any(&["r&d", "research"]),
            has_open_source: any(&["open-source", "open source"]),
            has_software: any(&["software"]),
            is_launch_provider: any(&["launch-provider"]),
            is_international: any(&["international", "global"]),
            tag_count: tags.len(),
        }
    }
}
