//! One pipeline per search kind.
//!
//! ```text
//! resolve candidates -> fetch songs (storage order) -> criteria filter
//!     -> dedupe (opt-in) -> truncate -> assemble records
//! ```
//!
//! Inputs are assumed validated. Nothing here raises for a query that simply
//! matches nothing; the result is an empty list.

use std::collections::HashSet;

use anisong_core::entities::Song;
use anisong_core::enums::GroupGranularity;
use anisong_core::params::{
    AnimeSearchParams, AnnIdSearchParams, ArtistExpansion, ArtistIdSearchParams,
    ArtistSearchParams, SongFilters, SongSearchParams, SubSearch,
};
use anisong_core::responses::SongResult;
use anisong_db::CatalogReader;

use crate::artist_graph::ArtistGraph;
use crate::assemble::{anime_index, assemble};
use crate::criteria;
use crate::dedupe::dedupe;
use crate::error::SearchError;
use crate::normalize::TextMatcher;

/// Ids whose name matches, first-seen order, each id once.
fn matching_ids(names: Vec<(i64, String)>, matcher: &TextMatcher) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for (id, name) in names {
        if !seen.contains(&id) && matcher.matches(&name) {
            seen.insert(id);
            ids.push(id);
        }
    }
    ids
}

/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn search_anime<C>(
    catalog: &C,
    params: &AnimeSearchParams,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let matcher = TextMatcher::new(&params.anime_name, params.partial_match);
    let ann_ids = matching_ids(catalog.anime_names().await?, &matcher);
    tracing::debug!(anime = ann_ids.len(), "anime names matched");
    if ann_ids.is_empty() {
        return Ok(Vec::new());
    }
    let songs = catalog.songs_by_anime(&ann_ids).await?;
    finish(catalog, songs, &params.filters, max_results).await
}

/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn search_ann_ids<C>(
    catalog: &C,
    params: &AnnIdSearchParams,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    if params.ann_ids.is_empty() {
        return Ok(Vec::new());
    }
    let songs = catalog.songs_by_anime(&params.ann_ids).await?;
    finish(catalog, songs, &params.filters, max_results).await
}

/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn search_song_name<C>(
    catalog: &C,
    params: &SongSearchParams,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let matcher = TextMatcher::new(&params.song_name, params.partial_match);
    let song_ids = matching_ids(catalog.song_names().await?, &matcher);
    if song_ids.is_empty() {
        return Ok(Vec::new());
    }
    let songs = catalog.songs_by_ids(&song_ids).await?;
    finish(catalog, songs, &params.filters, max_results).await
}

/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn search_artist_ids<C>(
    catalog: &C,
    params: &ArtistIdSearchParams,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    search_artists(
        catalog,
        &params.artist_ids,
        &params.expansion,
        &params.filters,
        max_results,
    )
    .await
}

/// Map the name to artist ids through every name variant, then search by id.
///
/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn search_artist_name<C>(
    catalog: &C,
    params: &ArtistSearchParams,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let matcher = TextMatcher::new(&params.artist_name, params.partial_match);
    let artist_ids = matching_ids(catalog.artist_names().await?, &matcher);
    tracing::debug!(artists = artist_ids.len(), "artist names matched");
    search_artists(
        catalog,
        &artist_ids,
        &params.expansion,
        &params.filters,
        max_results,
    )
    .await
}

/// Run any sub-search kind.
///
/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails.
pub async fn run_sub_search<C>(
    catalog: &C,
    search: &SubSearch,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    match search {
        SubSearch::Anime(p) => search_anime(catalog, p, max_results).await,
        SubSearch::AnnId(p) => search_ann_ids(catalog, p, max_results).await,
        SubSearch::SongName(p) => search_song_name(catalog, p, max_results).await,
        SubSearch::ArtistId(p) => search_artist_ids(catalog, p, max_results).await,
        SubSearch::ArtistName(p) => search_artist_name(catalog, p, max_results).await,
    }
}

async fn search_artists<C>(
    catalog: &C,
    artist_ids: &[i64],
    expansion: &ArtistExpansion,
    filters: &SongFilters,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    if artist_ids.is_empty() {
        return Ok(Vec::new());
    }
    let seeds = catalog.artists(artist_ids).await?;
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let roles = expansion.effective_roles();
    let graph = if expansion.group_granularity == GroupGranularity::Artist {
        ArtistGraph::default()
    } else {
        ArtistGraph::from_edges(&catalog.membership_edges().await?)
    };
    let resolved = graph.resolve(&seeds, expansion.group_granularity, &roles);
    tracing::debug!(
        seeds = seeds.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        instances = resolved.instances().len(),
        granularity = %expansion.group_granularity,
        "artists resolved"
    );

    let songs: Vec<Song> = catalog
        .songs_crediting(&resolved.artist_ids())
        .await?
        .into_iter()
        .filter(|song| resolved.credits_song(song, &roles, expansion.max_other_artists))
        .collect();
    finish(catalog, songs, filters, max_results).await
}

/// Shared tail: filter, optionally dedupe, cap, then assemble.
async fn finish<C>(
    catalog: &C,
    songs: Vec<Song>,
    filters: &SongFilters,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let animes = anime_index(catalog, &songs).await?;
    let mut kept: Vec<Song> = songs
        .into_iter()
        .filter(|song| {
            animes
                .get(&song.ann_id)
                .is_some_and(|anime| criteria::matches(song, anime, filters))
        })
        .collect();
    if filters.ignore_duplicates {
        kept = dedupe(kept, filters.dedupe_policy);
    }
    kept.truncate(max_results);
    assemble(catalog, kept, &animes).await
}
