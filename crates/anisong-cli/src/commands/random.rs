use crate::cli::GlobalFlags;
use crate::cli::root_commands::RandomArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `anisong random`.
pub async fn handle(args: &RandomArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let count = args.count.map(usize::try_from).transpose()?;
    let results = ctx.engine().random(count).await?;
    output(&results, flags.format)
}
