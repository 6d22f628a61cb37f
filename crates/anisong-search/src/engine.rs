//! Entry point used by callers: validate, run, log.

use std::time::Instant;

use anisong_core::limits::SearchLimits;
use anisong_core::params::{
    AnimeSearchParams, AnnIdSearchParams, ArtistIdSearchParams, ArtistSearchParams, GlobalSearch,
    SongSearchParams, SubSearch,
};
use anisong_core::responses::{SearchResults, SongResult};
use anisong_db::CatalogReader;

use crate::assemble::{anime_index, assemble};
use crate::combine::global_search;
use crate::error::SearchError;
use crate::orchestrator::run_sub_search;
use crate::validate::{validate_global, validate_sub_search};

/// Sample size of [`SearchEngine::random`] when the caller gives none.
pub const DEFAULT_RANDOM_COUNT: usize = 50;

/// Stateless search façade over a borrowed catalog.
///
/// Holds no mutable state, so any number of engines (or concurrent calls on
/// one engine) may share the same catalog.
pub struct SearchEngine<'a, C: CatalogReader + ?Sized> {
    catalog: &'a C,
    limits: SearchLimits,
}

impl<'a, C: CatalogReader + ?Sized> SearchEngine<'a, C> {
    #[must_use]
    pub const fn new(catalog: &'a C, limits: SearchLimits) -> Self {
        Self { catalog, limits }
    }

    #[must_use]
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// # Errors
    ///
    /// [`SearchError::Validation`] for a too-short partial query, otherwise
    /// catalog failures.
    pub async fn anime(&self, params: AnimeSearchParams) -> Result<SearchResults, SearchError> {
        self.sub_search(SubSearch::Anime(params)).await
    }

    /// # Errors
    ///
    /// Catalog failures only.
    pub async fn ann_ids(&self, params: AnnIdSearchParams) -> Result<SearchResults, SearchError> {
        self.sub_search(SubSearch::AnnId(params)).await
    }

    /// # Errors
    ///
    /// [`SearchError::Validation`] for a too-short partial query, otherwise
    /// catalog failures.
    pub async fn song_name(&self, params: SongSearchParams) -> Result<SearchResults, SearchError> {
        self.sub_search(SubSearch::SongName(params)).await
    }

    /// # Errors
    ///
    /// Catalog failures only.
    pub async fn artist_ids(
        &self,
        params: ArtistIdSearchParams,
    ) -> Result<SearchResults, SearchError> {
        self.sub_search(SubSearch::ArtistId(params)).await
    }

    /// # Errors
    ///
    /// [`SearchError::Validation`] for a too-short partial query, otherwise
    /// catalog failures.
    pub async fn artist_name(
        &self,
        params: ArtistSearchParams,
    ) -> Result<SearchResults, SearchError> {
        self.sub_search(SubSearch::ArtistName(params)).await
    }

    /// Run one search of any kind.
    ///
    /// # Errors
    ///
    /// [`SearchError::Validation`] before any catalog access, otherwise
    /// catalog failures.
    pub async fn sub_search(&self, search: SubSearch) -> Result<SearchResults, SearchError> {
        validate_sub_search(&search, &self.limits)?;
        let started = Instant::now();
        let songs =
            run_sub_search(self.catalog, &search, self.limits.max_results_per_search).await?;
        Ok(self.finish(search.kind().as_str(), &search, songs, started))
    }

    /// Run up to `max_sub_searches` searches concurrently and fold them.
    ///
    /// # Errors
    ///
    /// [`SearchError::Validation`] if the request is empty, oversized or holds
    /// an invalid sub-search (nothing runs in that case); otherwise the first
    /// sub-search failure.
    pub async fn global(&self, global: GlobalSearch) -> Result<SearchResults, SearchError> {
        validate_global(&global, &self.limits)?;
        let started = Instant::now();
        let songs = global_search(self.catalog, &global, self.limits.max_results_per_search).await?;
        Ok(self.finish("global", &global, songs, started))
    }

    /// Unfiltered random sample, capped by `max_results_per_search`.
    ///
    /// # Errors
    ///
    /// Catalog failures only.
    pub async fn random(&self, count: Option<usize>) -> Result<SearchResults, SearchError> {
        let started = Instant::now();
        let count = count
            .unwrap_or(DEFAULT_RANDOM_COUNT)
            .min(self.limits.max_results_per_search);
        let ids = self.catalog.random_song_ids(count).await?;
        let songs = self.catalog.songs_by_ids(&ids).await?;
        let animes = anime_index(self.catalog, &songs).await?;
        let songs = assemble(self.catalog, songs, &animes).await?;
        Ok(self.finish("random", &count, songs, started))
    }

    fn finish(
        &self,
        kind: &str,
        params: &impl std::fmt::Debug,
        songs: Vec<SongResult>,
        started: Instant,
    ) -> SearchResults {
        let results = SearchResults::new(songs);
        tracing::info!(
            kind,
            params = ?params,
            count = results.count,
            cap = self.limits.max_results_per_search,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "search completed"
        );
        results
    }
}
