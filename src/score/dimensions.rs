//! The five dimension scorers.
//!
//! Each dimension is assembled from four or five factor sub-scores.
//! Factors are clamped to their own maxima at construction and the
//! factor sum is clamped to [`MAX_DIMENSION_SCORE`] when the dimension
//! is built, so no input can push a dimension outside [0, 200].
//!
//! Band thresholds below are the scoring contract, not tunables; they
//! are deliberately plain `if` chains so the factor trail in the output
//! can be read against this file line by line.

use crate::company::{CapabilitySignals, CompanyInput};
use crate::score::types::{Dimension, DimensionScore, ScoreFactor};

/// Innovation: patents, government R&D programs, research focus, open
/// technology, and product breadth.
pub fn innovation(company: &CompanyInput, signals: &CapabilitySignals) -> DimensionScore {
    let products = company.counts.products;
    let contracts = company.counts.contracts;

    let patent_ip = if signals.has_patents {
        40
    } else if products >= 5 {
        30
    } else if products >= 3 {
        22
    } else if products >= 1 {
        12
    } else {
        0
    };

    let government_rd = if signals.has_government_rd {
        35
    } else if contracts >= 3 {
        25
    } else if contracts >= 1 {
        15
    } else {
        0
    };

    let research_focus = if signals.has_research_focus {
        45
    } else if products >= 4 {
        30
    } else if products >= 2 {
        20
    } else if products >= 1 {
        10
    } else {
        0
    };

    let open_technology = if signals.has_open_source {
        35
    } else if signals.has_software {
        22
    } else {
        0
    };

    DimensionScore::from_factors(
        Dimension::Innovation,
        vec![
            ScoreFactor::new("Patent & IP portfolio", patent_ip, 40),
            ScoreFactor::new("Government R&D programs", government_rd, 35),
            ScoreFactor::new("R&D focus", research_focus, 45),
            ScoreFactor::new("Open technology", open_technology, 35),
            ScoreFactor::new("Product diversity", products.saturating_mul(15), 45),
        ],
    )
}

/// Financial Health: revenue, funding raised, valuation, profitability
/// signal, and funding-round history.
pub fn financial_health(company: &CompanyInput) -> DimensionScore {
    let revenue = company.revenue_estimate.unwrap_or(0.0);
    let funding = company.total_funding.unwrap_or(0.0);
    // Valuation preferred; market cap stands in for listed companies
    // that report no private valuation.
    let worth = company.valuation.or(company.market_cap).unwrap_or(0.0);

    let profitability = if company.is_public {
        25
    } else if revenue > 0.0 && revenue > funding * 0.5 {
        20
    } else if revenue > 0.0 {
        12
    } else {
        0
    };

    DimensionScore::from_factors(
        Dimension::FinancialHealth,
        vec![
            ScoreFactor::new("Revenue scale", revenue_band(revenue), 60),
            ScoreFactor::new("Funding raised", funding_band(funding), 50),
            ScoreFactor::new("Valuation", valuation_band(worth), 50),
            ScoreFactor::new("Profitability signal", profitability, 25),
            ScoreFactor::new(
                "Funding history",
                company.counts.funding_rounds.saturating_mul(5),
                15,
            ),
        ],
    )
}

/// Market Position: contract portfolio, partnership activity, externally
/// assigned market share, media presence, and public listing.
pub fn market_position(company: &CompanyInput, signals: &CapabilitySignals) -> DimensionScore {
    let contracts = company.counts.contracts;
    let events = company.counts.events;

    let contract_portfolio = if contracts >= 5 {
        55
    } else if contracts >= 3 {
        42
    } else if contracts >= 1 {
        28
    } else {
        0
    };

    let partnership_activity = if events >= 6 {
        40
    } else if events >= 3 {
        28
    } else if events >= 1 {
        15
    } else {
        0
    };

    let market_share = match company.tier {
        Some(1) => 55,
        Some(2) => 35,
        _ => 18,
    };

    let media_presence = match signals.tag_count {
        n if n >= 8 => 30,
        n if n >= 5 => 22,
        n if n >= 2 => 14,
        n if n >= 1 => 8,
        _ => 0,
    };

    DimensionScore::from_factors(
        Dimension::MarketPosition,
        vec![
            ScoreFactor::new("Contract portfolio", contract_portfolio, 55),
            ScoreFactor::new("Partnership activity", partnership_activity, 40),
            ScoreFactor::new("Market share", market_share, 55),
            ScoreFactor::new("Media presence", media_presence, 30),
            ScoreFactor::new("Public listing", if company.is_public { 15 } else { 0 }, 15),
        ],
    )
}

/// Operational Capacity: satellite fleet, facility network, workforce,
/// and launch/operations cadence.
pub fn operational_capacity(
    company: &CompanyInput,
    signals: &CapabilitySignals,
) -> DimensionScore {
    let satellites = company.counts.satellite_assets;
    let facilities = company.counts.facilities;
    let products = company.counts.products;
    let employees = company.resolved_employee_count();

    let satellite_fleet = if satellites >= 1000 {
        55
    } else if satellites >= 100 {
        42
    } else if satellites >= 10 {
        28
    } else if satellites >= 1 {
        15
    } else {
        0
    };

    let facility_network = if facilities >= 5 {
        45
    } else if facilities >= 3 {
        34
    } else if facilities >= 1 {
        20
    } else {
        0
    };

    // Launch providers are rated by market rank; everyone else falls
    // back to product count as an operations-cadence proxy.
    let launch_cadence = if signals.is_launch_provider {
        match company.tier {
            Some(1) => 40,
            Some(2) => 32,
            _ => 24,
        }
    } else if products >= 5 {
        25
    } else if products >= 2 {
        15
    } else if products >= 1 {
        8
    } else {
        0
    };

    DimensionScore::from_factors(
        Dimension::OperationalCapacity,
        vec![
            ScoreFactor::new("Satellite fleet", satellite_fleet, 55),
            ScoreFactor::new("Facility network", facility_network, 45),
            ScoreFactor::new("Workforce", workforce_band(employees), 50),
            ScoreFactor::new("Launch cadence", launch_cadence, 40),
        ],
    )
}

/// Growth Trajectory: hiring velocity, recent funding, deal activity,
/// expansion footprint, and the young-company bonus.
pub fn growth_trajectory(
    company: &CompanyInput,
    signals: &CapabilitySignals,
    current_year: i32,
) -> DimensionScore {
    let employees = company.resolved_employee_count();
    let facilities = company.counts.facilities;
    let age = company
        .founded_year
        .map(|year| (current_year - year).max(0));

    let hiring_velocity = match (age, employees) {
        (_, 0) => 0,
        (Some(age), emp) => {
            if age <= 5 && emp >= 100 {
                45
            } else if age <= 10 && emp >= 500 {
                38
            } else if age <= 10 && emp >= 100 {
                28
            } else if emp >= 1000 {
                20
            } else {
                10
            }
        }
        (None, emp) => {
            if emp >= 1000 {
                15
            } else {
                8
            }
        }
    };

    let recent_funding = if company.last_funding_round.is_some() {
        40
    } else if company.counts.funding_rounds >= 1 {
        25
    } else {
        5
    };

    let deals = company.counts.events + company.counts.contracts;
    let deal_activity = if deals >= 10 {
        45
    } else if deals >= 5 {
        32
    } else if deals >= 2 {
        20
    } else if deals >= 1 {
        10
    } else {
        0
    };

    let expansion = if signals.is_international {
        38
    } else if facilities >= 4 {
        28
    } else if facilities >= 2 {
        18
    } else if facilities >= 1 {
        10
    } else {
        0
    };

    // Nested gates, not cumulative: a well-funded young company earns
    // one bonus band or the other, never both.
    let funding = company.total_funding.unwrap_or(0.0);
    let young_company_bonus = match age {
        Some(age) if age <= 5 && funding >= 50_000_000.0 => 30,
        Some(age) if age <= 10 && funding >= 10_000_000.0 => 20,
        _ => 0,
    };

    DimensionScore::from_factors(
        Dimension::GrowthTrajectory,
        vec![
            ScoreFactor::new("Hiring velocity", hiring_velocity, 45),
            ScoreFactor::new("Recent funding", recent_funding, 40),
            ScoreFactor::new("Deal activity", deal_activity, 45),
            ScoreFactor::new("Expansion footprint", expansion, 38),
            ScoreFactor::new("Young-company bonus", young_company_bonus, 30),
        ],
    )
}

// Pure banding helpers. Financial bands run from mega-cap scale down to
// "any at all", so the first dollar of traction already moves a company
// off the floor.

fn revenue_band(revenue: f64) -> u32 {
    if revenue >= 10e9 {
        60
    } else if revenue >= 1e9 {
        52
    } else if revenue >= 100e6 {
        44
    } else if revenue >= 10e6 {
        35
    } else if revenue >= 1e6 {
        26
    } else if revenue >= 100e3 {
        16
    } else if revenue > 0.0 {
        8
    } else {
        0
    }
}

fn funding_band(funding: f64) -> u32 {
    if funding >= 5e9 {
        50
    } else if funding >= 1e9 {
        44
    } else if funding >= 500e6 {
        38
    } else if funding >= 100e6 {
        30
    } else if funding >= 10e6 {
        22
    } else if funding >= 1e6 {
        14
    } else if funding > 0.0 {
        7
    } else {
        0
    }
}

fn valuation_band(worth: f64) -> u32 {
    if worth >= 100e9 {
        50
    } else if worth >= 10e9 {
        44
    } else if worth >= 1e9 {
        36
    } else if worth >= 100e6 {
        28
    } else if worth >= 10e6 {
        20
    } else if worth >= 1e6 {
        12
    } else if worth > 0.0 {
        6
    } else {
        0
    }
}

fn workforce_band(employees: u32) -> u32 {
    if employees >= 10_000 {
        50
    } else if employees >= 5_000 {
        42
    } else if employees >= 1_000 {
        35
    } else if employees >= 250 {
        26
    } else if employees >= 50 {
        16
    } else if employees >= 1 {
        8
    } else {
        0
    }
}
