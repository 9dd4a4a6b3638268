//! Built-in reference benchmark seeds.
//!
//! One hundred hand-authored company baselines, each carrying final
//! per-dimension scores (innovation, financial, market, operations,
//! growth). Totals, tiers, and percentiles are derived at table build
//! time. Refreshing this dataset means editing this file.

/// `(slug, name, sector, tier, innovation, financial, market, operations, growth)`
pub(crate) const REFERENCE_SEEDS: &[(&str, &str, &str, u8, u32, u32, u32, u32, u32)] = &[
    // Launch services
    ("spacex", "SpaceX", "Launch Services", 1, 195, 200, 195, 190, 175),
    ("blue-origin", "Blue Origin", "Launch Services", 1, 170, 150, 160, 165, 150),
    ("rocket-lab", "Rocket Lab", "Launch Services", 1, 165, 160, 170, 150, 160),
    ("united-launch-alliance", "United Launch Alliance", "Launch Services", 1, 140, 155, 170, 150, 110),
    ("arianespace", "Arianespace", "Launch Services", 1, 130, 150, 165, 145, 105),
    ("firefly-aerospace", "Firefly Aerospace", "Launch Services", 2, 135, 110, 120, 105, 140),
    ("relativity-space", "Relativity Space", "Launch Services", 2, 150, 125, 110, 100, 145),
    ("stoke-space", "Stoke Space", "Launch Services", 3, 130, 85, 75, 60, 135),
    ("isar-aerospace", "Isar Aerospace", "Launch Services", 2, 120, 100, 90, 80, 130),
    ("rocket-factory-augsburg", "Rocket Factory Augsburg", "Launch Services", 3, 105, 70, 70, 65, 110),
    ("pld-space", "PLD Space", "Launch Services", 3, 95, 65, 70, 60, 105),
    ("skyroot-aerospace", "Skyroot Aerospace", "Launch Services", 3, 100, 70, 75, 60, 115),
    ("agnikul-cosmos", "Agnikul Cosmos", "Launch Services", 3, 95, 60, 65, 55, 105),
    ("gilmour-space", "Gilmour Space Technologies", "Launch Services", 3, 90, 65, 70, 60, 100),
    ("orbex", "Orbex", "Launch Services", 3, 85, 60, 65, 55, 90),
    ("latitude", "Latitude", "Launch Services", 3, 80, 50, 55, 45, 90),
    ("astra-space", "Astra Space", "Launch Services", 3, 90, 55, 75, 70, 60),
    ("abl-space-systems", "ABL Space Systems", "Launch Services", 3, 95, 75, 70, 60, 85),
    // Satellite communications
    ("starlink-services", "Starlink Services", "Satellite Communications", 1, 160, 180, 185, 195, 165),
    ("amazon-kuiper", "Amazon Project Kuiper", "Satellite Communications", 1, 155, 185, 150, 140, 160),
    ("ses", "SES", "Satellite Communications", 1, 120, 160, 170, 160, 95),
    ("intelsat", "Intelsat", "Satellite Communications", 1, 115, 150, 165, 155, 90),
    ("eutelsat-oneweb", "Eutelsat OneWeb", "Satellite Communications", 1, 125, 155, 160, 165, 105),
    ("viasat", "Viasat", "Satellite Communications", 1, 130, 155, 160, 150, 95),
    ("echostar", "EchoStar", "Satellite Communications", 2, 110, 145, 140, 135, 80),
    ("iridium", "Iridium Communications", "Satellite Communications", 1, 125, 160, 165, 160, 100),
    ("telesat", "Telesat", "Satellite Communications", 2, 110, 130, 135, 125, 95),
    ("inmarsat", "Inmarsat", "Satellite Communications", 2, 110, 140, 145, 135, 85),
    ("globalstar", "Globalstar", "Satellite Communications", 2, 95, 115, 120, 120, 85),
    ("orbcomm", "ORBCOMM", "Satellite Communications", 2, 90, 105, 115, 115, 75),
    ("ast-spacemobile", "AST SpaceMobile", "Satellite Communications", 2, 140, 125, 115, 95, 150),
    ("lynk-global", "Lynk Global", "Satellite Communications", 3, 115, 75, 80, 70, 110),
    ("astranis", "Astranis", "Satellite Communications", 2, 130, 110, 95, 85, 135),
    ("kepler-communications", "Kepler Communications", "Satellite Communications", 3, 95, 80, 95, 90, 80),
    ("kineis", "Kinéis", "Satellite Communications", 3, 90, 85, 90, 85, 90),
    ("rivada-space", "Rivada Space Networks", "Satellite Communications", 3, 85, 90, 75, 55, 95),
    ("mynaric", "Mynaric", "Satellite Communications", 3, 110, 85, 90, 80, 85),
    ("hispasat", "Hispasat", "Satellite Communications", 3, 80, 105, 100, 100, 60),
    ("arabsat", "Arabsat", "Satellite Communications", 3, 75, 100, 95, 95, 55),
    // Earth observation
    ("planet-labs", "Planet Labs", "Earth Observation", 1, 150, 130, 150, 160, 120),
    ("maxar-technologies", "Maxar Technologies", "Earth Observation", 1, 145, 150, 165, 155, 105),
    ("airbus-intelligence", "Airbus Defence & Space Intelligence", "Earth Observation", 1, 130, 145, 155, 150, 90),
    ("blacksky", "BlackSky", "Earth Observation", 2, 120, 105, 120, 115, 100),
    ("iceye", "ICEYE", "Earth Observation", 2, 140, 115, 125, 120, 130),
    ("capella-space", "Capella Space", "Earth Observation", 2, 130, 100, 110, 105, 110),
    ("satellogic", "Satellogic", "Earth Observation", 2, 115, 95, 105, 110, 95),
    ("spire-global", "Spire Global", "Earth Observation", 2, 120, 105, 115, 125, 95),
    ("hawkeye-360", "HawkEye 360", "Earth Observation", 2, 125, 100, 110, 95, 110),
    ("umbra", "Umbra", "Earth Observation", 3, 120, 85, 90, 85, 110),
    ("synspective", "Synspective", "Earth Observation", 3, 105, 80, 85, 80, 100),
    ("iqps", "iQPS", "Earth Observation", 3, 100, 80, 80, 80, 95),
    ("axelspace", "Axelspace", "Earth Observation", 3, 95, 75, 80, 85, 85),
    ("pixxel", "Pixxel", "Earth Observation", 3, 110, 75, 80, 70, 115),
    ("muon-space", "Muon Space", "Earth Observation", 3, 105, 70, 70, 65, 105),
    ("wyvern", "Wyvern", "Earth Observation", 3, 85, 55, 60, 50, 85),
    ("satvu", "SatVu", "Earth Observation", 3, 90, 60, 65, 55, 90),
    ("ursa-space", "Ursa Space Systems", "Earth Observation", 3, 80, 60, 70, 50, 70),
    // Satellite manufacturing
    ("airbus-space-systems", "Airbus Space Systems", "Satellite Manufacturing", 1, 140, 160, 165, 160, 95),
    ("thales-alenia-space", "Thales Alenia Space", "Satellite Manufacturing", 1, 135, 155, 160, 155, 90),
    ("boeing-space", "Boeing Space Systems", "Satellite Manufacturing", 1, 130, 160, 160, 155, 80),
    ("lockheed-martin-space", "Lockheed Martin Space", "Satellite Manufacturing", 1, 150, 170, 170, 160, 90),
    ("northrop-grumman-space", "Northrop Grumman Space Systems", "Satellite Manufacturing", 1, 145, 165, 165, 160, 90),
    ("mda-space", "MDA Space", "Satellite Manufacturing", 2, 125, 130, 135, 130, 100),
    ("ohb", "OHB", "Satellite Manufacturing", 2, 110, 120, 125, 125, 80),
    ("terran-orbital", "Terran Orbital", "Satellite Manufacturing", 2, 115, 95, 110, 105, 95),
    ("york-space-systems", "York Space Systems", "Satellite Manufacturing", 2, 110, 95, 105, 95, 100),
    ("apex-space", "Apex", "Satellite Manufacturing", 3, 110, 75, 70, 60, 115),
    ("k2-space", "K2 Space", "Satellite Manufacturing", 3, 105, 75, 65, 55, 115),
    ("gomspace", "GomSpace", "Satellite Manufacturing", 3, 90, 65, 80, 80, 60),
    ("aac-clyde-space", "AAC Clyde Space", "Satellite Manufacturing", 3, 85, 70, 80, 80, 60),
    ("nanoavionics", "NanoAvionics", "Satellite Manufacturing", 3, 95, 75, 85, 85, 80),
    ("endurosat", "EnduroSat", "Satellite Manufacturing", 3, 100, 70, 80, 75, 105),
    ("open-cosmos", "Open Cosmos", "Satellite Manufacturing", 3, 95, 70, 75, 70, 95),
    ("loft-orbital", "Loft Orbital", "Satellite Manufacturing", 2, 110, 100, 95, 90, 120),
    ("blue-canyon", "Blue Canyon Technologies", "Satellite Manufacturing", 3, 95, 80, 85, 85, 70),
    // In-space services and logistics
    ("astroscale", "Astroscale", "In-Space Services", 2, 140, 110, 115, 100, 120),
    ("d-orbit", "D-Orbit", "In-Space Services", 2, 120, 95, 105, 100, 110),
    ("momentus", "Momentus", "In-Space Services", 3, 90, 55, 70, 60, 60),
    ("impulse-space", "Impulse Space", "In-Space Services", 3, 125, 90, 80, 70, 130),
    ("orbit-fab", "Orbit Fab", "In-Space Services", 3, 115, 65, 70, 55, 100),
    ("starfish-space", "Starfish Space", "In-Space Services", 3, 110, 65, 70, 55, 100),
    ("exolaunch", "Exolaunch", "In-Space Services", 3, 85, 70, 90, 80, 80),
    ("varda-space", "Varda Space Industries", "In-Space Services", 3, 130, 85, 80, 65, 125),
    ("space-forge", "Space Forge", "In-Space Services", 3, 105, 60, 65, 55, 95),
    // Human spaceflight and stations
    ("axiom-space", "Axiom Space", "Human Spaceflight", 2, 140, 120, 120, 105, 135),
    ("sierra-space", "Sierra Space", "Human Spaceflight", 2, 145, 125, 120, 110, 125),
    ("vast-space", "Vast", "Human Spaceflight", 3, 125, 95, 75, 65, 125),
    ("voyager-space", "Voyager Space", "Human Spaceflight", 2, 115, 105, 110, 100, 100),
    ("virgin-galactic", "Virgin Galactic", "Space Tourism", 2, 120, 110, 125, 105, 70),
    ("space-perspective", "Space Perspective", "Space Tourism", 3, 85, 60, 70, 55, 75),
    // Lunar and deep space
    ("intuitive-machines", "Intuitive Machines", "Lunar Systems", 2, 135, 110, 125, 100, 125),
    ("astrobotic", "Astrobotic", "Lunar Systems", 2, 125, 95, 110, 90, 105),
    ("ispace", "ispace", "Lunar Systems", 2, 120, 95, 105, 85, 105),
    ("firefly-blue-ghost", "Firefly Blue Ghost Missions", "Lunar Systems", 3, 110, 80, 90, 70, 100),
    // Ground systems and space domain awareness
    ("ksat", "KSAT", "Ground Systems", 2, 95, 110, 115, 120, 75),
    ("leaf-space", "Leaf Space", "Ground Systems", 3, 85, 60, 70, 65, 80),
    ("leolabs", "LeoLabs", "Space Domain Awareness", 3, 115, 80, 90, 80, 95),
    ("slingshot-aerospace", "Slingshot Aerospace", "Space Domain Awareness", 3, 110, 80, 85, 70, 95),
    ("xona-space", "Xona Space Systems", "Navigation", 3, 110, 70, 70, 55, 105),
    ("redwire-space", "Redwire Space", "Space Infrastructure", 2, 120, 110, 120, 110, 95),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_one_hundred_entries() {
        assert_eq!(REFERENCE_SEEDS.len(), 100);
    }

    #[test]
    fn slugs_are_unique_and_kebab_case() {
        let mut slugs: Vec<&str> = REFERENCE_SEEDS.iter().map(|s| s.0).collect();
        slugs.sort_unstable();
        let before = slugs.len();
        slugs.dedup();
        assert_eq!(before, slugs.len());
        for slug in slugs {
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad slug: {slug}"
            );
        }
    }

    #[test]
    fn dimension_values_respect_scale() {
        for (slug, _, _, tier, inno, fin, market, ops, growth) in REFERENCE_SEEDS {
            assert!((1..=3).contains(tier), "{slug}: tier {tier}");
            for value in [inno, fin, market, ops, growth] {
                assert!(*value <= 200, "{slug}: dimension value {value} > 200");
            }
        }
    }
}
