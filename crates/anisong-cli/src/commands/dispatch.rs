use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Anime(args) => commands::search::anime(&args, ctx, flags).await,
        Commands::AnnId(args) => commands::search::ann_id(&args, ctx, flags).await,
        Commands::Song(args) => commands::search::song(&args, ctx, flags).await,
        Commands::ArtistId(args) => commands::search::artist_id(&args, ctx, flags).await,
        Commands::Artist(args) => commands::search::artist(&args, ctx, flags).await,
        Commands::Global(args) => commands::global::handle(&args, ctx, flags).await,
        Commands::Random(args) => commands::random::handle(&args, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
    }
}
