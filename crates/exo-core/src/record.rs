//! Archive rows and normalized planet records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::habitability::{self, ScoreInputs};
use crate::planet_type::{PlanetType, classify};

/// Placeholder for a missing name or discovery method.
pub const UNKNOWN: &str = "Unknown";

/// One row of the planetary-systems table, keyed by archive column names.
///
/// The archive schema is not under our control, so every column is optional
/// and a row of `{}` deserializes to [`RawRecord::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "pl_name")]
    pub name: Option<String>,
    /// Days.
    #[serde(rename = "pl_orbper")]
    pub orbital_period: Option<f64>,
    /// Earth radii.
    #[serde(rename = "pl_rade")]
    pub radius: Option<f64>,
    /// Earth masses.
    #[serde(rename = "pl_masse")]
    pub mass: Option<f64>,
    /// Kelvin.
    #[serde(rename = "pl_eqt")]
    pub equilibrium_temperature: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    /// Parsecs.
    #[serde(rename = "sy_dist")]
    pub distance: Option<f64>,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<i32>,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: Option<String>,
    #[serde(rename = "pl_dens")]
    pub density: Option<f64>,
    #[serde(rename = "pl_orbeccen")]
    pub eccentricity: Option<f64>,
    /// Host-star effective temperature, Kelvin.
    #[serde(rename = "st_teff")]
    pub stellar_temperature: Option<f64>,
    #[serde(rename = "st_rad")]
    pub stellar_radius: Option<f64>,
    #[serde(rename = "st_mass")]
    pub stellar_mass: Option<f64>,
    /// AU.
    #[serde(rename = "pl_orbsmax")]
    pub semi_major_axis: Option<f64>,
}

/// Archive columns requested for every query, in the order they are selected.
pub const ARCHIVE_COLUMNS: [&str; 16] = [
    "pl_name",
    "pl_orbper",
    "pl_rade",
    "pl_masse",
    "pl_eqt",
    "ra",
    "dec",
    "sy_dist",
    "disc_year",
    "discoverymethod",
    "pl_dens",
    "pl_orbeccen",
    "st_teff",
    "st_rad",
    "st_mass",
    "pl_orbsmax",
];

/// A normalized, scored planet.
///
/// Measurements are carried over from the archive unchanged; a missing value
/// stays `None` rather than becoming zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    pub name: String,
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub temperature: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub distance: Option<f64>,
    pub discovery_year: Option<i32>,
    pub discovery_method: String,
    pub density: Option<f64>,
    pub eccentricity: Option<f64>,
    pub stellar_temp: Option<f64>,
    pub stellar_radius: Option<f64>,
    pub stellar_mass: Option<f64>,
    pub semi_major_axis: Option<f64>,
    pub habitability_score: u8,
    pub planet_type: PlanetType,
}

impl PlanetRecord {
    /// The scorer inputs this record carries.
    #[must_use]
    pub const fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            equilibrium_temperature: self.temperature,
            radius: self.radius,
            mass: self.mass,
            semi_major_axis: self.semi_major_axis,
            stellar_temperature: self.stellar_temp,
        }
    }
}

/// Convert an archive row into a scored [`PlanetRecord`].
///
/// Total over every input: missing numeric fields stay `None`, and a missing
/// or empty name or discovery method becomes `"Unknown"`.
#[must_use]
pub fn normalize(raw: &RawRecord) -> PlanetRecord {
    PlanetRecord {
        name: text_or_unknown(raw.name.as_deref()),
        orbital_period: raw.orbital_period,
        radius: raw.radius,
        mass: raw.mass,
        temperature: raw.equilibrium_temperature,
        ra: raw.ra,
        dec: raw.dec,
        distance: raw.distance,
        discovery_year: raw.discovery_year,
        discovery_method: text_or_unknown(raw.discovery_method.as_deref()),
        density: raw.density,
        eccentricity: raw.eccentricity,
        stellar_temp: raw.stellar_temperature,
        stellar_radius: raw.stellar_radius,
        stellar_mass: raw.stellar_mass,
        semi_major_axis: raw.semi_major_axis,
        habitability_score: habitability::score(&ScoreInputs::from(raw)),
        planet_type: classify(raw.radius),
    }
}

fn text_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
