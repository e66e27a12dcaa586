use exo_core::catalog::CatalogStats;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatsResponse {
    search: String,
    limit: u32,
    #[serde(flatten)]
    stats: CatalogStats,
}

/// Handle `exo stats`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let search = args.term.clone().unwrap_or_default();
    let limit = effective_limit(args.limit, ctx.config.general.default_limit);

    let fetched = ctx.service.query(&search, limit).await;

    output(
        &StatsResponse {
            search,
            limit,
            stats: CatalogStats::from_records(&fetched),
        },
        flags.format,
    )
}
