//! Read-only catalog capability injected into every search.
//!
//! The search engine never holds a connection of its own. It borrows something
//! implementing [`CatalogReader`] for the duration of one call, so any number of
//! searches can share one catalog and tests can swap in their own fixtures.

use anisong_core::entities::{Anime, Artist, ArtistInstance, MembershipEdge, Song};

use crate::CatalogDb;
use crate::error::DatabaseError;

/// Bulk read access to anime, songs, artists and the membership graph.
///
/// Every list comes back in storage order (ascending primary key).
#[async_trait::async_trait]
pub trait CatalogReader: Send + Sync {
    /// `(ann_id, name)` for every anime name variant.
    async fn anime_names(&self) -> Result<Vec<(i64, String)>, DatabaseError>;

    async fn animes(&self, ann_ids: &[i64]) -> Result<Vec<Anime>, DatabaseError>;

    /// `(song_id, song_name)` for every song.
    async fn song_names(&self) -> Result<Vec<(i64, String)>, DatabaseError>;

    async fn songs_by_ids(&self, song_ids: &[i64]) -> Result<Vec<Song>, DatabaseError>;

    async fn songs_by_anime(&self, ann_ids: &[i64]) -> Result<Vec<Song>, DatabaseError>;

    /// Songs carrying a structured credit for any of `artist_ids`, in any role.
    async fn songs_crediting(&self, artist_ids: &[i64]) -> Result<Vec<Song>, DatabaseError>;

    /// `(artist_id, name)` for every artist name variant.
    async fn artist_names(&self) -> Result<Vec<(i64, String)>, DatabaseError>;

    async fn artists(&self, artist_ids: &[i64]) -> Result<Vec<Artist>, DatabaseError>;

    async fn membership_edges(&self) -> Result<Vec<MembershipEdge>, DatabaseError>;

    /// Member edges into the given group line-ups.
    async fn line_up_members(
        &self,
        groups: &[ArtistInstance],
    ) -> Result<Vec<MembershipEdge>, DatabaseError>;

    async fn random_song_ids(&self, count: usize) -> Result<Vec<i64>, DatabaseError>;
}

#[async_trait::async_trait]
impl CatalogReader for CatalogDb {
    async fn anime_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        Self::anime_names(self).await
    }

    async fn animes(&self, ann_ids: &[i64]) -> Result<Vec<Anime>, DatabaseError> {
        Self::animes(self, ann_ids).await
    }

    async fn song_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        Self::song_names(self).await
    }

    async fn songs_by_ids(&self, song_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        Self::songs_by_ids(self, song_ids).await
    }

    async fn songs_by_anime(&self, ann_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        Self::songs_by_anime(self, ann_ids).await
    }

    async fn songs_crediting(&self, artist_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        Self::songs_crediting(self, artist_ids).await
    }

    async fn artist_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        Self::artist_names(self).await
    }

    async fn artists(&self, artist_ids: &[i64]) -> Result<Vec<Artist>, DatabaseError> {
        Self::artists(self, artist_ids).await
    }

    async fn membership_edges(&self) -> Result<Vec<MembershipEdge>, DatabaseError> {
        Self::membership_edges(self).await
    }

    async fn line_up_members(
        &self,
        groups: &[ArtistInstance],
    ) -> Result<Vec<MembershipEdge>, DatabaseError> {
        Self::line_up_members(self, groups).await
    }

    async fn random_song_ids(&self, count: usize) -> Result<Vec<i64>, DatabaseError> {
        Self::random_song_ids(self, count).await
    }
}
