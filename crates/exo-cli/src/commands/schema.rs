use exo_core::PlanetRecord;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `exo schema`: print the JSON Schema of a planet record.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schemars::schema_for!(PlanetRecord), flags.format)
}
