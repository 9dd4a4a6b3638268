//! Reference table: leaderboard ordering, lookups, and percentile
//! behavior at the extremes.

use spacescore::{CompanyInput, ReferenceSeed, ReferenceTable, ScoreEngine};

fn seed(slug: &str, dims: [u32; 5]) -> ReferenceSeed {
    ReferenceSeed {
        slug: slug.to_string(),
        name: slug.to_string(),
        sector: "Test".to_string(),
        tier: 3,
        innovation: dims[0],
        financial: dims[1],
        market: dims[2],
        operations: dims[3],
        growth: dims[4],
    }
}

#[test]
fn builtin_leaderboard_is_sorted_non_increasing() {
    let ranked = ReferenceTable::builtin().leaderboard();
    assert_eq!(ranked.len(), 100);
    for window in ranked.windows(2) {
        assert!(
            window[0].total >= window[1].total,
            "{} ({}) ranked above {} ({})",
            window[0].slug,
            window[0].total,
            window[1].slug,
            window[1].total
        );
    }
}

#[test]
fn builtin_slugs_round_trip_through_lookup() {
    let table = ReferenceTable::builtin();
    for entry in table.leaderboard() {
        assert_eq!(table.company(&entry.slug).unwrap().slug, entry.slug);
    }
}

#[test]
fn unknown_slug_returns_none() {
    assert!(ReferenceTable::builtin().company("not-a-company").is_none());
}

#[test]
fn tied_totals_rank_by_slug() {
    let table = ReferenceTable::from_seeds(vec![
        seed("zeta", [40, 40, 40, 40, 40]),
        seed("alpha", [40, 40, 40, 40, 40]),
    ])
    .unwrap();
    let ranked = table.leaderboard();
    assert_eq!(ranked[0].slug, "alpha");
    assert_eq!(ranked[1].slug, "zeta");
}

#[test]
fn scoring_above_every_reference_entry_gives_percentile_100() {
    let table = ReferenceTable::from_seeds(vec![
        seed("a", [10, 10, 10, 10, 10]),
        seed("b", [20, 20, 20, 20, 20]),
        seed("c", [30, 30, 30, 30, 30]),
    ])
    .unwrap();
    let engine = ScoreEngine::with_current_year(&table, 2026);

    let mut company = CompanyInput::named("Overachiever");
    company.tier = Some(1);
    company.is_public = true;
    company.revenue_estimate = Some(2e9);
    company.counts.contracts = 5;
    company.counts.satellite_assets = 150;
    let result = engine.score(&company);

    assert!(result.total > 150);
    assert_eq!(result.percentile, 100);
}

#[test]
fn scoring_below_every_reference_entry_gives_percentile_0() {
    let table = ReferenceTable::from_seeds(vec![
        seed("a", [100, 100, 100, 100, 100]),
        seed("b", [150, 150, 150, 150, 150]),
    ])
    .unwrap();
    let engine = ScoreEngine::with_current_year(&table, 2026);
    let result = engine.score(&CompanyInput::named("Underdog"));
    assert_eq!(result.percentile, 0);
}

#[test]
fn percentile_changes_with_the_reference_set() {
    let strict = ReferenceTable::from_seeds(vec![
        seed("a", [190, 190, 190, 190, 190]),
        seed("b", [180, 180, 180, 180, 180]),
    ])
    .unwrap();
    let lenient = ReferenceTable::from_seeds(vec![
        seed("a", [5, 5, 5, 5, 5]),
        seed("b", [10, 10, 10, 10, 10]),
    ])
    .unwrap();

    let mut company = CompanyInput::named("Middling");
    company.tier = Some(2);
    company.counts.contracts = 3;
    company.counts.events = 3;

    let vs_strict = ScoreEngine::with_current_year(&strict, 2026).score(&company);
    let vs_lenient = ScoreEngine::with_current_year(&lenient, 2026).score(&company);

    assert_eq!(vs_strict.total, vs_lenient.total);
    assert_eq!(vs_strict.percentile, 0);
    assert_eq!(vs_lenient.percentile, 100);
}
