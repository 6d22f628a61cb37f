//! Global search: fan out sub-searches, join, fold.

use std::collections::HashSet;

use anisong_core::enums::CombinationLogic;
use anisong_core::params::GlobalSearch;
use anisong_core::responses::SongResult;
use anisong_db::CatalogReader;
use futures::future::try_join_all;

use crate::error::SearchError;
use crate::orchestrator::run_sub_search;

/// Fold sub-search outputs keyed by song id.
///
/// Union keeps first-seen order across outputs. Intersection keeps the
/// songs present in every output, in the first output's order.
#[must_use]
pub fn combine(outputs: Vec<Vec<SongResult>>, logic: CombinationLogic) -> Vec<SongResult> {
    let mut seen = HashSet::new();
    match logic {
        CombinationLogic::Union => outputs
            .into_iter()
            .flatten()
            .filter(|song| seen.insert(song.song_id))
            .collect(),
        CombinationLogic::Intersection => {
            let mut outputs = outputs.into_iter();
            let Some(first) = outputs.next() else {
                return Vec::new();
            };
            let rest: Vec<HashSet<i64>> = outputs
                .map(|songs| songs.iter().map(|s| s.song_id).collect())
                .collect();
            first
                .into_iter()
                .filter(|song| rest.iter().all(|ids| ids.contains(&song.song_id)))
                .filter(|song| seen.insert(song.song_id))
                .collect()
        }
    }
}

/// Run every sub-search concurrently, then fold and cap the result.
///
/// Any failing sub-search fails the whole request. Inputs are assumed validated.
///
/// # Errors
///
/// Returns the first [`SearchError`] raised by a sub-search.
pub async fn global_search<C>(
    catalog: &C,
    global: &GlobalSearch,
    max_results: usize,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let outputs = try_join_all(
        global
            .searches
            .iter()
            .map(|search| run_sub_search(catalog, search, max_results)),
    )
    .await?;
    tracing::debug!(
        sub_searches = outputs.len(),
        logic = %global.combination_logic,
        "sub-searches joined"
    );

    let mut combined = combine(outputs, global.combination_logic);
    combined.truncate(max_results);
    Ok(combined)
}
