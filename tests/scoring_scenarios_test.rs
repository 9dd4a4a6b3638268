//! End-to-end scoring scenarios against the built-in reference table.

use pretty_assertions::assert_eq;
use spacescore::{
    CompanyCounts, CompanyInput, Dimension, ReferenceTable, ScoreEngine, ScoreTier,
    MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE,
};

const CURRENT_YEAR: i32 = 2026;

fn engine(table: &ReferenceTable) -> ScoreEngine<'_> {
    ScoreEngine::with_current_year(table, CURRENT_YEAR)
}

fn maxed_public_operator() -> CompanyInput {
    let mut company = CompanyInput::named("Acme");
    company.is_public = true;
    company.revenue_estimate = Some(1.5e10);
    company.total_funding = Some(6e9);
    company.valuation = Some(1.2e11);
    company.tier = Some(1);
    company.tags = vec![
        "patent".to_string(),
        "sbir".to_string(),
        "international".to_string(),
    ];
    company.founded_year = Some(CURRENT_YEAR - 10);
    company.counts = CompanyCounts {
        contracts: 6,
        events: 6,
        satellite_assets: 1200,
        facilities: 6,
        funding_rounds: 4,
        products: 4,
        ..Default::default()
    };
    company
}

fn factor_values(company: &CompanyInput, dimension: Dimension) -> Vec<u32> {
    let result = engine(ReferenceTable::builtin()).score(company);
    result
        .dimension(dimension)
        .expect("dimension present")
        .factors
        .iter()
        .map(|f| f.value)
        .collect()
}

#[test]
fn maxed_operator_hits_financial_ceiling() {
    let company = maxed_public_operator();
    let result = engine(ReferenceTable::builtin()).score(&company);

    let financial = result.dimension(Dimension::FinancialHealth).unwrap();
    assert_eq!(financial.score, 200);
    assert_eq!(
        factor_values(&company, Dimension::FinancialHealth),
        vec![60, 50, 50, 25, 15]
    );
}

#[test]
fn maxed_operator_market_position_components() {
    let company = maxed_public_operator();
    // contracts >= 5, events >= 6, tier 1, three tags, public listing
    assert_eq!(
        factor_values(&company, Dimension::MarketPosition),
        vec![55, 40, 55, 14, 15]
    );
}

#[test]
fn maxed_operator_operational_components() {
    let company = maxed_public_operator();
    let values = factor_values(&company, Dimension::OperationalCapacity);
    // satellite fleet and facility network both at their maxima
    assert_eq!(values[0], 55);
    assert_eq!(values[1], 45);
}

#[test]
fn maxed_operator_lands_in_leader_band() {
    let company = maxed_public_operator();
    let result = engine(ReferenceTable::builtin()).score(&company);
    assert_eq!(result.total, 772);
    assert_eq!(result.tier, ScoreTier::Leader);
}

#[test]
fn name_only_company_scores_pre_revenue() {
    let result = engine(ReferenceTable::builtin()).score(&CompanyInput::named("Nobody"));

    for dim in &result.breakdown {
        assert!(
            dim.score < 30,
            "{} scored {} for an empty snapshot",
            dim.dimension.name(),
            dim.score
        );
    }
    assert!(matches!(
        result.tier,
        ScoreTier::PreRevenue | ScoreTier::EarlyStage
    ));
    assert_eq!(result.percentile, 0);
}

#[test]
fn employee_range_bucket_drives_workforce_band() {
    let mut company = CompanyInput::named("Rangebound");
    company.employee_range = Some("1001-5000".to_string());
    // resolves to 3000 -> the ">= 1000" workforce band
    let values = factor_values(&company, Dimension::OperationalCapacity);
    assert_eq!(values[2], 35);
}

#[test]
fn scoring_twice_yields_identical_results() {
    let company = maxed_public_operator();
    let table = ReferenceTable::builtin();
    let first = engine(table).score(&company);
    let second = engine(table).score(&company);

    assert_eq!(first.total, second.total);
    assert_eq!(first.tier, second.tier);
    assert_eq!(first.percentile, second.percentile);
    assert_eq!(first.breakdown, second.breakdown);
}

#[test]
fn all_dimensions_and_total_respect_scale_bounds() {
    let company = maxed_public_operator();
    let result = engine(ReferenceTable::builtin()).score(&company);

    assert_eq!(result.breakdown.len(), 5);
    for dim in &result.breakdown {
        assert!(dim.score <= MAX_DIMENSION_SCORE);
        let factor_sum: u32 = dim.factors.iter().map(|f| f.value).sum();
        assert_eq!(factor_sum, dim.score);
    }
    assert!(result.total <= MAX_TOTAL_SCORE);
    assert!(result.percentile <= 100);
}

#[test]
fn result_serializes_with_tier_band_record() {
    let company = maxed_public_operator();
    let result = engine(ReferenceTable::builtin()).score(&company);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total"], 772);
    assert_eq!(json["tier"]["label"], "Leader");
    assert_eq!(json["tier"]["min_score"], 750);
    assert_eq!(json["breakdown"].as_array().unwrap().len(), 5);
    assert_eq!(json["breakdown"][1]["key"], "financial_health");
}
