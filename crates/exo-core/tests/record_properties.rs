//! Normalization properties and JSON Schema conformance for planet records.

use exo_core::{PlanetRecord, PlanetType, RawRecord, ScoreInputs, classify, habitability, normalize};
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn rows() -> Vec<RawRecord> {
    let payload = r#"[
        {"pl_name": "Kepler-186 f", "pl_rade": 1.17, "pl_eqt": 188, "st_teff": 3755, "pl_orbsmax": 0.432, "disc_year": 2014, "discoverymethod": "Transit"},
        {"pl_name": "51 Peg b", "pl_rade": 13.4, "pl_masse": 146.0, "pl_eqt": 1260, "disc_year": 1995, "discoverymethod": "Radial Velocity"},
        {"pl_name": "GJ 1214 b", "pl_rade": 2.74, "pl_masse": 8.17, "pl_eqt": 596},
        {"pl_name": null, "pl_rade": null},
        {}
    ]"#;
    serde_json::from_str(payload).expect("fixture should parse")
}

#[test]
fn every_normalized_record_matches_schema() {
    let schema = serde_json::to_value(schema_for!(PlanetRecord)).unwrap();
    for raw in rows() {
        let planet = normalize(&raw);
        let instance = serde_json::to_value(&planet).unwrap();
        let errors = validate_against_schema(&schema, &instance);
        assert!(errors.is_empty(), "{}: {errors:?}", planet.name);

        let recovered: PlanetRecord = serde_json::from_value(instance).unwrap();
        assert_eq!(recovered, planet);
    }
}

#[test]
fn type_is_unknown_exactly_when_radius_missing() {
    for raw in rows() {
        let planet = normalize(&raw);
        assert_eq!(
            planet.planet_type == PlanetType::Unknown,
            planet.radius.is_none(),
            "{}",
            planet.name
        );
    }
}

#[test]
fn scores_stay_in_range() {
    for raw in rows() {
        let planet = normalize(&raw);
        assert!(planet.habitability_score <= 100);
    }
}

#[test]
fn reference_earth_scores_one_hundred() {
    let inputs = ScoreInputs {
        equilibrium_temperature: Some(288.0),
        radius: Some(1.0),
        mass: Some(1.0),
        semi_major_axis: Some(1.0),
        stellar_temperature: Some(5778.0),
    };
    assert_eq!(habitability::score(&inputs), 100);
}

#[test]
fn classification_partitions_non_negative_radii() {
    let mut radius = 0.0_f64;
    let mut previous = classify(Some(radius));
    let mut transitions = Vec::new();
    while radius < 20.0 {
        radius += 0.01;
        let current = classify(Some(radius));
        if current != previous {
            transitions.push(current);
            previous = current;
        }
    }
    assert_eq!(
        transitions,
        vec![
            PlanetType::SuperEarth,
            PlanetType::MiniNeptune,
            PlanetType::NeptuneLike,
            PlanetType::GasGiant,
        ]
    );
}

#[test]
fn known_planets_classify_as_expected() {
    let planets: Vec<PlanetRecord> = rows().iter().map(normalize).collect();
    assert_eq!(planets[0].planet_type, PlanetType::Terrestrial);
    assert_eq!(planets[1].planet_type, PlanetType::GasGiant);
    assert_eq!(planets[2].planet_type, PlanetType::MiniNeptune);
    assert_eq!(planets[3].name, "Unknown");
    assert_eq!(planets[4].habitability_score, 0);
}
