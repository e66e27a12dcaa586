//! Built-in planets served when the archive is unavailable.

use exo_core::{PlanetRecord, PlanetType};

/// Three well-known candidates with hand-assigned scores.
///
/// The scores are fixed values, not computed by the scorer.
#[must_use]
pub fn sample_planets() -> Vec<PlanetRecord> {
    vec![
        sample(SampleSpec {
            name: "Kepler-452b",
            orbital_period: 384.8,
            radius: 1.63,
            mass: None,
            temperature: 265.0,
            distance: 1400.0,
            discovery_year: 2015,
            discovery_method: "Transit",
            habitability_score: 85,
            planet_type: PlanetType::SuperEarth,
        }),
        sample(SampleSpec {
            name: "TRAPPIST-1e",
            orbital_period: 6.1,
            radius: 0.92,
            mass: Some(0.77),
            temperature: 251.0,
            distance: 39.6,
            discovery_year: 2016,
            discovery_method: "Transit",
            habitability_score: 92,
            planet_type: PlanetType::Terrestrial,
        }),
        sample(SampleSpec {
            name: "Proxima Centauri b",
            orbital_period: 11.2,
            radius: 1.17,
            mass: Some(1.27),
            temperature: 234.0,
            distance: 4.24,
            discovery_year: 2016,
            discovery_method: "Radial Velocity",
            habitability_score: 78,
            planet_type: PlanetType::Terrestrial,
        }),
    ]
}

struct SampleSpec {
    name: &'static str,
    orbital_period: f64,
    radius: f64,
    mass: Option<f64>,
    temperature: f64,
    distance: f64,
    discovery_year: i32,
    discovery_method: &'static str,
    habitability_score: u8,
    planet_type: PlanetType,
}

fn sample(spec: SampleSpec) -> PlanetRecord {
    PlanetRecord {
        name: spec.name.to_string(),
        orbital_period: Some(spec.orbital_period),
        radius: Some(spec.radius),
        mass: spec.mass,
        temperature: Some(spec.temperature),
        ra: None,
        dec: None,
        distance: Some(spec.distance),
        discovery_year: Some(spec.discovery_year),
        discovery_method: spec.discovery_method.to_string(),
        density: None,
        eccentricity: None,
        stellar_temp: None,
        stellar_radius: None,
        stellar_mass: None,
        semi_major_axis: None,
        habitability_score: spec.habitability_score,
        planet_type: spec.planet_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_known_planets_with_fixed_scores() {
        let planets = sample_planets();
        let summary: Vec<(&str, u8)> = planets
            .iter()
            .map(|p| (p.name.as_str(), p.habitability_score))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Kepler-452b", 85),
                ("TRAPPIST-1e", 92),
                ("Proxima Centauri b", 78),
            ]
        );
    }

    #[test]
    fn sample_types_agree_with_classifier() {
        for planet in sample_planets() {
            assert_eq!(exo_core::classify(planet.radius), planet.planet_type);
        }
    }
}
