use anisong_core::params::GlobalSearch;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GlobalArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `anisong global <file.json>`.
pub async fn handle(args: &GlobalArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = read_request(&args.file)?;
    let results = ctx.engine().global(request).await?;
    output(&results, flags.format)
}

fn read_request(path: &std::path::Path) -> anyhow::Result<GlobalSearch> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("{} is not a valid global search body", path.display()))
}
