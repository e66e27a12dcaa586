//! Radius-based planet classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bands::{Band, first_match};

/// Planet category derived from radius alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PlanetType {
    Terrestrial,
    #[serde(rename = "Super-Earth")]
    SuperEarth,
    #[serde(rename = "Mini-Neptune")]
    MiniNeptune,
    #[serde(rename = "Neptune-like")]
    NeptuneLike,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    Unknown,
}

/// Upper radius limits (Earth radii, exclusive) in ascending order.
/// Anything at or above the last limit is a gas giant.
const RADIUS_BANDS: &[Band<PlanetType>] = &[
    Band::below(1.25, PlanetType::Terrestrial),
    Band::below(2.0, PlanetType::SuperEarth),
    Band::below(4.0, PlanetType::MiniNeptune),
    Band::below(10.0, PlanetType::NeptuneLike),
];

/// Classify a planet by its radius in Earth radii.
///
/// `None` yields [`PlanetType::Unknown`]. Band limits are exclusive on the
/// upper side, so a radius of exactly 2.0 is a Mini-Neptune.
#[must_use]
pub fn classify(radius: Option<f64>) -> PlanetType {
    match radius {
        None => PlanetType::Unknown,
        Some(r) => first_match(RADIUS_BANDS, r).unwrap_or(PlanetType::GasGiant),
    }
}

impl PlanetType {
    pub const ALL: [Self; 6] = [
        Self::Terrestrial,
        Self::SuperEarth,
        Self::MiniNeptune,
        Self::NeptuneLike,
        Self::GasGiant,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terrestrial => "Terrestrial",
            Self::SuperEarth => "Super-Earth",
            Self::MiniNeptune => "Mini-Neptune",
            Self::NeptuneLike => "Neptune-like",
            Self::GasGiant => "Gas Giant",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
