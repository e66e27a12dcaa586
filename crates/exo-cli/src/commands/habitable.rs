use exo_core::catalog::habitable_candidates;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HabitableArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_planets;

/// Rows fetched when `--limit` is not given; wider than a plain listing so
/// the candidate list is not cut short.
const HABITABLE_FETCH_LIMIT: u32 = 1000;

/// Handle `exo habitable`.
pub async fn handle(
    args: &HabitableArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, HABITABLE_FETCH_LIMIT);
    let fetched = ctx.service.query("", limit).await;
    let candidates = habitable_candidates(&fetched, args.min_score);

    tracing::debug!(
        fetched = fetched.len(),
        candidates = candidates.len(),
        min_score = args.min_score,
        "habitable candidates selected"
    );
    output_planets(&candidates, flags.format)
}
