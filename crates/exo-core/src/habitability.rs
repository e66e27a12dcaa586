//! Habitability scoring.
//!
//! The score is a heuristic Earth-similarity measure in `0..=100`, built from
//! four independent contributions:
//!
//! | contribution | input(s)                               | max |
//! |--------------|----------------------------------------|-----|
//! | temperature  | equilibrium temperature                | 40  |
//! | size         | planet radius                          | 30  |
//! | mass         | planet mass                            | 20  |
//! | orbit        | semi-major axis + stellar temperature  | 10  |
//!
//! A contribution whose inputs are missing is zero. The final sum is capped
//! at 100, which the band maxima already guarantee.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bands::{Band, first_match};
use crate::record::RawRecord;

/// Earth's mean equilibrium temperature, in Kelvin.
pub const EARTH_TEMPERATURE_K: f64 = 288.0;

/// Solar effective temperature, in Kelvin.
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

pub const MAX_SCORE: u8 = 100;

/// Bands over `|T_eq - 288|`.
const TEMPERATURE_BANDS: &[Band<u8>] = &[
    Band::below(50.0, 40),
    Band::below(100.0, 30),
    Band::below(200.0, 20),
    Band::below(400.0, 10),
];

const SIZE_BANDS: &[Band<u8>] = &[
    Band::within(0.5, 2.0, 30),
    Band::within(0.3, 3.0, 20),
    Band::within(0.1, 5.0, 10),
];

const MASS_BANDS: &[Band<u8>] = &[Band::within(0.1, 5.0, 20), Band::within(0.05, 10.0, 10)];

const ORBIT_POINTS: u8 = 10;

/// The subset of a record the scorer reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInputs {
    pub equilibrium_temperature: Option<f64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub semi_major_axis: Option<f64>,
    pub stellar_temperature: Option<f64>,
}

impl From<&RawRecord> for ScoreInputs {
    fn from(raw: &RawRecord) -> Self {
        Self {
            equilibrium_temperature: raw.equilibrium_temperature,
            radius: raw.radius,
            mass: raw.mass,
            semi_major_axis: raw.semi_major_axis,
            stellar_temperature: raw.stellar_temperature,
        }
    }
}

/// Inner and outer edge of the habitable zone, in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HabitableZone {
    pub inner: f64,
    pub outer: f64,
}

impl HabitableZone {
    /// Single-parameter approximation scaled from the solar zone.
    #[must_use]
    pub fn for_stellar_temperature(stellar_temperature: f64) -> Self {
        let factor = (stellar_temperature / SOLAR_TEMPERATURE_K).sqrt();
        Self {
            inner: 0.95 * factor,
            outer: 1.37 * factor,
        }
    }

    #[must_use]
    pub fn contains(&self, semi_major_axis: f64) -> bool {
        (self.inner..=self.outer).contains(&semi_major_axis)
    }
}

/// Per-contribution points plus the capped total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HabitabilityBreakdown {
    pub temperature: u8,
    pub size: u8,
    pub mass: u8,
    pub orbit: u8,
    pub total: u8,
}

impl HabitabilityBreakdown {
    #[must_use]
    pub fn compute(inputs: &ScoreInputs) -> Self {
        let temperature = inputs
            .equilibrium_temperature
            .and_then(|t| first_match(TEMPERATURE_BANDS, (t - EARTH_TEMPERATURE_K).abs()))
            .unwrap_or(0);
        let size = inputs
            .radius
            .and_then(|r| first_match(SIZE_BANDS, r))
            .unwrap_or(0);
        let mass = inputs
            .mass
            .and_then(|m| first_match(MASS_BANDS, m))
            .unwrap_or(0);
        let orbit = match (inputs.semi_major_axis, inputs.stellar_temperature) {
            (Some(axis), Some(teff))
                if HabitableZone::for_stellar_temperature(teff).contains(axis) =>
            {
                ORBIT_POINTS
            }
            _ => 0,
        };

        let total = temperature
            .saturating_add(size)
            .saturating_add(mass)
            .saturating_add(orbit)
            .min(MAX_SCORE);

        Self {
            temperature,
            size,
            mass,
            orbit,
            total,
        }
    }
}

/// Habitability score in `0..=100`.
#[must_use]
pub fn score(inputs: &ScoreInputs) -> u8 {
    HabitabilityBreakdown::compute(inputs).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn earth() -> ScoreInputs {
        ScoreInputs {
            equilibrium_temperature: Some(288.0),
            radius: Some(1.0),
            mass: Some(1.0),
            semi_major_axis: Some(1.0),
            stellar_temperature: Some(5778.0),
        }
    }

    #[test]
    fn earth_scores_full_marks() {
        let breakdown = HabitabilityBreakdown::compute(&earth());
        assert_eq!(
            breakdown,
            HabitabilityBreakdown {
                temperature: 40,
                size: 30,
                mass: 20,
                orbit: 10,
                total: 100,
            }
        );
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(score(&ScoreInputs::default()), 0);
    }

    #[rstest]
    #[case(288.0, 40)]
    #[case(337.9, 40)]
    #[case(338.0, 30)]
    #[case(189.0, 30)]
    #[case(188.0, 20)]
    #[case(387.9, 30)]
    #[case(388.0, 20)]
    #[case(88.5, 20)]
    #[case(600.0, 10)]
    #[case(688.0, 0)]
    #[case(1500.0, 0)]
    fn temperature_bands(#[case] kelvin: f64, #[case] expected: u8) {
        let inputs = ScoreInputs {
            equilibrium_temperature: Some(kelvin),
            ..ScoreInputs::default()
        };
        assert_eq!(HabitabilityBreakdown::compute(&inputs).temperature, expected);
    }

    #[rstest]
    #[case(0.5, 30)]
    #[case(2.0, 30)]
    #[case(0.3, 20)]
    #[case(3.0, 20)]
    #[case(0.1, 10)]
    #[case(5.0, 10)]
    #[case(0.09, 0)]
    #[case(5.01, 0)]
    fn size_bands_are_inclusive(#[case] radius: f64, #[case] expected: u8) {
        let inputs = ScoreInputs {
            radius: Some(radius),
            ..ScoreInputs::default()
        };
        assert_eq!(HabitabilityBreakdown::compute(&inputs).size, expected);
    }

    #[rstest]
    #[case(0.1, 20)]
    #[case(5.0, 20)]
    #[case(0.05, 10)]
    #[case(10.0, 10)]
    #[case(0.04, 0)]
    #[case(317.8, 0)]
    fn mass_bands_are_inclusive(#[case] mass: f64, #[case] expected: u8) {
        let inputs = ScoreInputs {
            mass: Some(mass),
            ..ScoreInputs::default()
        };
        assert_eq!(HabitabilityBreakdown::compute(&inputs).mass, expected);
    }

    #[test]
    fn solar_habitable_zone_bounds() {
        let zone = HabitableZone::for_stellar_temperature(SOLAR_TEMPERATURE_K);
        assert!((zone.inner - 0.95).abs() < 1e-12);
        assert!((zone.outer - 1.37).abs() < 1e-12);
        assert!(zone.contains(1.0));
        assert!(zone.contains(zone.inner));
        assert!(zone.contains(zone.outer));
        assert!(!zone.contains(1.5));
    }

    #[test]
    fn cooler_star_pulls_zone_inward() {
        let zone = HabitableZone::for_stellar_temperature(2566.0);
        assert!(zone.outer < 1.0);
        let inputs = ScoreInputs {
            semi_major_axis: Some(1.0),
            stellar_temperature: Some(2566.0),
            ..ScoreInputs::default()
        };
        assert_eq!(HabitabilityBreakdown::compute(&inputs).orbit, 0);
    }

    #[test]
    fn orbit_needs_both_inputs() {
        let axis_only = ScoreInputs {
            semi_major_axis: Some(1.0),
            ..ScoreInputs::default()
        };
        let star_only = ScoreInputs {
            stellar_temperature: Some(5778.0),
            ..ScoreInputs::default()
        };
        assert_eq!(score(&axis_only), 0);
        assert_eq!(score(&star_only), 0);
    }

    #[test]
    fn contributions_are_independent() {
        let mut inputs = earth();
        inputs.mass = None;
        assert_eq!(score(&inputs), 80);
        inputs.equilibrium_temperature = Some(1200.0);
        assert_eq!(score(&inputs), 40);
    }

    #[test]
    fn score_never_exceeds_cap() {
        let temperatures = [None, Some(0.0), Some(250.0), Some(288.0), Some(5000.0)];
        let sizes = [None, Some(0.05), Some(0.4), Some(1.0), Some(4.0), Some(12.0)];
        for t in temperatures {
            for r in sizes {
                let inputs = ScoreInputs {
                    equilibrium_temperature: t,
                    radius: r,
                    mass: r,
                    semi_major_axis: Some(1.0),
                    stellar_temperature: Some(5778.0),
                };
                assert!(score(&inputs) <= MAX_SCORE);
            }
        }
    }
}
