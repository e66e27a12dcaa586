use exo_core::{HabitabilityBreakdown, HabitableZone, PlanetType, ScoreInputs, classify};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreResponse {
    inputs: ScoreInputs,
    planet_type: PlanetType,
    breakdown: HabitabilityBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    habitable_zone: Option<HabitableZone>,
}

impl ScoreResponse {
    fn evaluate(inputs: ScoreInputs) -> Self {
        Self {
            planet_type: classify(inputs.radius),
            breakdown: HabitabilityBreakdown::compute(&inputs),
            habitable_zone: inputs
                .stellar_temperature
                .map(HabitableZone::for_stellar_temperature),
            inputs,
        }
    }
}

impl From<&ScoreArgs> for ScoreInputs {
    fn from(args: &ScoreArgs) -> Self {
        Self {
            equilibrium_temperature: args.temperature,
            radius: args.radius,
            mass: args.mass,
            semi_major_axis: args.semi_major_axis,
            stellar_temperature: args.stellar_temp,
        }
    }
}

/// Handle `exo score`.
pub fn handle(args: &ScoreArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ScoreResponse::evaluate(ScoreInputs::from(args)), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ScoreArgs {
        ScoreArgs {
            temperature: None,
            radius: None,
            mass: None,
            semi_major_axis: None,
            stellar_temp: None,
        }
    }

    #[test]
    fn earth_analogue_scores_full_marks() {
        let response = ScoreResponse::evaluate(ScoreInputs::from(&ScoreArgs {
            temperature: Some(288.0),
            radius: Some(1.0),
            mass: Some(1.0),
            semi_major_axis: Some(1.0),
            stellar_temp: Some(5778.0),
        }));

        assert_eq!(response.planet_type, PlanetType::Terrestrial);
        assert_eq!(
            response.breakdown,
            HabitabilityBreakdown {
                temperature: 40,
                size: 30,
                mass: 20,
                orbit: 10,
                total: 100,
            }
        );
        assert!(response.habitable_zone.is_some_and(|zone| zone.contains(1.0)));
    }

    #[test]
    fn no_measurements_is_unknown_and_zero() {
        let response = ScoreResponse::evaluate(ScoreInputs::from(&args()));
        assert_eq!(response.planet_type, PlanetType::Unknown);
        assert_eq!(response.breakdown, HabitabilityBreakdown::default());
        assert!(response.habitable_zone.is_none());
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = ScoreResponse::evaluate(ScoreInputs::from(&ScoreArgs {
            radius: Some(12.0),
            ..args()
        }));
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["planetType"], "Gas Giant");
        assert_eq!(value["breakdown"]["total"], 0);
        assert!(value.get("habitableZone").is_none());
    }
}
