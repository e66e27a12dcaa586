use exo_core::catalog::{PlanetFilter, SortKey, sort_planets};
use exo_core::{PlanetRecord, PlanetType};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_planets;

/// Handle `exo query`.
pub async fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let term = args.term.as_deref().unwrap_or_default();
    let limit = effective_limit(args.limit, ctx.config.general.default_limit);

    let fetched = ctx.service.query(term, limit).await;
    let planets = listing(&fetched, args);

    tracing::debug!(
        fetched = fetched.len(),
        shown = planets.len(),
        sort = %SortKey::from(args.sort),
        "query complete"
    );
    output_planets(&planets, flags.format)
}

/// Refine a fetched listing with the local filters, then sort it.
fn listing(fetched: &[PlanetRecord], args: &QueryArgs) -> Vec<PlanetRecord> {
    let filter = PlanetFilter {
        name_contains: args.name.clone(),
        discovery_year: args.year,
        types: args.types.iter().copied().map(PlanetType::from).collect(),
    };
    let mut planets = filter.apply(fetched);
    sort_planets(&mut planets, args.sort.into());
    planets
}
