use exo_core::catalog::random_sample;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RandomArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_planets;

/// Rows fetched when `--limit` is not given.
const RANDOM_FETCH_LIMIT: u32 = 500;

/// Handle `exo random`.
pub async fn handle(args: &RandomArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, RANDOM_FETCH_LIMIT);
    let fetched = ctx.service.query("", limit).await;

    let count = usize::try_from(args.count)?;
    let picked = random_sample(&fetched, count, &mut rand::rng());

    tracing::debug!(fetched = fetched.len(), picked = picked.len(), "random planets selected");
    output_planets(&picked, flags.format)
}
