use anisong_core::params::{
    AnimeSearchParams, AnnIdSearchParams, ArtistIdSearchParams, ArtistSearchParams,
    SongSearchParams,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AnimeArgs, AnnIdArgs, ArtistArgs, ArtistIdArgs, SongArgs};
use crate::commands::shared::parse::{artist_expansion, song_filters};
use crate::context::AppContext;
use crate::output::output;

/// Handle `anisong anime`.
pub async fn anime(args: &AnimeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = AnimeSearchParams {
        anime_name: args.query.clone(),
        partial_match: args.partial,
        filters: song_filters(&args.filters)?,
    };
    let results = ctx.engine().anime(params).await?;
    output(&results, flags.format)
}

/// Handle `anisong ann-id`.
pub async fn ann_id(args: &AnnIdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = AnnIdSearchParams {
        ann_ids: args.ann_ids.clone(),
        filters: song_filters(&args.filters)?,
    };
    let results = ctx.engine().ann_ids(params).await?;
    output(&results, flags.format)
}

/// Handle `anisong song`.
pub async fn song(args: &SongArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = SongSearchParams {
        song_name: args.query.clone(),
        partial_match: args.partial,
        filters: song_filters(&args.filters)?,
    };
    let results = ctx.engine().song_name(params).await?;
    output(&results, flags.format)
}

/// Handle `anisong artist-id`.
pub async fn artist_id(
    args: &ArtistIdArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let params = ArtistIdSearchParams {
        artist_ids: args.artist_ids.clone(),
        expansion: artist_expansion(&args.expansion)?,
        filters: song_filters(&args.filters)?,
    };
    let results = ctx.engine().artist_ids(params).await?;
    output(&results, flags.format)
}

/// Handle `anisong artist`.
pub async fn artist(args: &ArtistArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = ArtistSearchParams {
        artist_name: args.query.clone(),
        partial_match: args.partial,
        expansion: artist_expansion(&args.expansion)?,
        filters: song_filters(&args.filters)?,
    };
    let results = ctx.engine().artist_name(params).await?;
    output(&results, flags.format)
}
