//! Song repository: songs, their structured credits, and random sampling.

use std::collections::HashMap;

use anisong_core::entities::{Credit, MediaLinks, Song};
use anisong_core::enums::{CreditRole, SongType};

use crate::CatalogDb;
use crate::error::DatabaseError;
use crate::helpers::{
    MAX_BIND_PARAMS, get_opt_string, id_params, parse_enum, placeholders, sorted_unique,
};

const SONG_COLUMNS: &str = "id, ann_song_id, ann_id, song_type, song_number, song_name, \
     song_artist, song_difficulty, song_category, hq, mq, audio";

fn row_to_song(row: &libsql::Row) -> Result<Song, DatabaseError> {
    let id = row.get::<i64>(0)?;
    let code = row.get::<i64>(3)?;
    let song_type = SongType::try_from(code)
        .map_err(|e| DatabaseError::InvalidState(format!("song {id}: {e}")))?;

    Ok(Song {
        id,
        ann_song_id: row.get::<Option<i64>>(1)?,
        ann_id: row.get::<i64>(2)?,
        song_type,
        number: row.get::<i64>(4)?,
        name: row.get::<String>(5)?,
        artist: row.get::<String>(6)?,
        difficulty: row.get::<Option<f64>>(7)?,
        category: get_opt_string(row, 8)?,
        links: MediaLinks {
            hq: get_opt_string(row, 9)?,
            mq: get_opt_string(row, 10)?,
            audio: get_opt_string(row, 11)?,
        },
        credits: Vec::new(),
    })
}

impl CatalogDb {
    /// Every `(song_id, song_name)` pair in storage order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn song_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, song_name FROM songs ORDER BY id", ())
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push((row.get::<i64>(0)?, row.get::<String>(1)?));
        }
        Ok(names)
    }

    /// Songs with their credits, by song id. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails or a row holds an invalid song type.
    pub async fn songs_by_ids(&self, song_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        self.songs_where("id", song_ids).await
    }

    /// Songs of the given anime with their credits, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails or a row holds an invalid song type.
    pub async fn songs_by_anime(&self, ann_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        self.songs_where("ann_id", ann_ids).await
    }

    /// Songs carrying at least one structured credit for any of `artist_ids`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails.
    pub async fn songs_crediting(&self, artist_ids: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        let ids = sorted_unique(artist_ids);
        let mut song_ids = Vec::new();
        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let sql = format!(
                "SELECT DISTINCT song_id FROM link_song_artist WHERE artist_id IN ({})",
                placeholders(chunk.len())
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                song_ids.push(row.get::<i64>(0)?);
            }
        }
        self.songs_by_ids(&song_ids).await
    }

    /// Up to `count` song ids drawn uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn random_song_ids(&self, count: usize) -> Result<Vec<i64>, DatabaseError> {
        let limit = i64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("sample size {count} too large")))?;
        let mut rows = self
            .conn()
            .query(
                "SELECT id FROM songs ORDER BY RANDOM() LIMIT ?1",
                libsql::params![limit],
            )
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<i64>(0)?);
        }
        Ok(ids)
    }

    async fn songs_where(&self, column: &str, keys: &[i64]) -> Result<Vec<Song>, DatabaseError> {
        let keys = sorted_unique(keys);
        let mut songs = Vec::new();

        for chunk in keys.chunks(MAX_BIND_PARAMS) {
            let sql = format!(
                "SELECT {SONG_COLUMNS} FROM songs WHERE {column} IN ({}) ORDER BY id",
                placeholders(chunk.len())
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                songs.push(row_to_song(&row)?);
            }
        }
        songs.sort_by_key(|s| s.id);

        let song_ids: Vec<i64> = songs.iter().map(|s| s.id).collect();
        let mut credits = self.credits_for(&song_ids).await?;
        for song in &mut songs {
            song.credits = credits.remove(&song.id).unwrap_or_default();
        }
        Ok(songs)
    }

    /// Structured credits grouped by song id, in insertion order.
    async fn credits_for(
        &self,
        song_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Credit>>, DatabaseError> {
        let mut grouped: HashMap<i64, Vec<Credit>> = HashMap::new();
        for chunk in song_ids.chunks(MAX_BIND_PARAMS) {
            let sql = format!(
                "SELECT song_id, artist_id, artist_line_up_id, role_type FROM link_song_artist \
                 WHERE song_id IN ({}) ORDER BY song_id, rowid",
                placeholders(chunk.len())
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                let role: CreditRole = parse_enum(&row.get::<String>(3)?)?;
                grouped.entry(row.get::<i64>(0)?).or_default().push(Credit {
                    artist_id: row.get::<i64>(1)?,
                    line_up_id: row.get::<i64>(2)?,
                    role,
                });
            }
        }
        Ok(grouped)
    }
}
