use anisong_db::import::CatalogDump;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `anisong import --songs FILE --artists FILE`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dump = CatalogDump::from_files(&args.songs, &args.artists)?;
    tracing::debug!(
        animes = dump.animes.len(),
        artists = dump.artists.len(),
        "dump files parsed"
    );
    let summary = ctx.catalog.import_dump(&dump).await?;
    output(&summary, flags.format)
}
