//! Anime repository.

use std::collections::HashMap;

use anisong_core::entities::Anime;

use crate::CatalogDb;
use crate::error::DatabaseError;
use crate::helpers::{MAX_BIND_PARAMS, get_opt_string, id_params, placeholders, sorted_unique};

const ANIME_COLUMNS: &str =
    "ann_id, anime_expand_name, anime_jp_name, anime_en_name, anime_type, anime_season";

fn row_to_anime(row: &libsql::Row) -> Result<Anime, DatabaseError> {
    Ok(Anime {
        ann_id: row.get::<i64>(0)?,
        expand_name: row.get::<String>(1)?,
        jp_name: get_opt_string(row, 2)?,
        en_name: get_opt_string(row, 3)?,
        alt_names: Vec::new(),
        anime_type: get_opt_string(row, 4)?,
        season: get_opt_string(row, 5)?,
        genres: Vec::new(),
        tags: Vec::new(),
    })
}

impl CatalogDb {
    /// Every `(ann_id, name)` pair: expand, Japanese, English, then alternate names.
    ///
    /// Ordered by ANN id, then by name preference within each anime.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn anime_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT ann_id, name FROM ( \
                     SELECT ann_id, anime_expand_name AS name, 0 AS pref, 0 AS seq FROM animes \
                     UNION ALL \
                     SELECT ann_id, anime_jp_name, 1, 0 FROM animes WHERE anime_jp_name IS NOT NULL \
                     UNION ALL \
                     SELECT ann_id, anime_en_name, 2, 0 FROM animes WHERE anime_en_name IS NOT NULL \
                     UNION ALL \
                     SELECT ann_id, name, 3, rowid FROM link_anime_alt_name \
                 ) ORDER BY ann_id, pref, seq",
                (),
            )
            .await?;

        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push((row.get::<i64>(0)?, row.get::<String>(1)?));
        }
        Ok(names)
    }

    /// Fetch anime by ANN id, ascending. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails.
    pub async fn animes(&self, ann_ids: &[i64]) -> Result<Vec<Anime>, DatabaseError> {
        let ids = sorted_unique(ann_ids);
        let mut animes = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let sql = format!(
                "SELECT {ANIME_COLUMNS} FROM animes WHERE ann_id IN ({}) ORDER BY ann_id",
                placeholders(chunk.len())
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                animes.push(row_to_anime(&row)?);
            }

            let mut alt_names = self.anime_strings("link_anime_alt_name", "name", chunk).await?;
            let mut genres = self.anime_strings("link_anime_genre", "genre", chunk).await?;
            let mut tags = self.anime_strings("link_anime_tag", "tag", chunk).await?;
            for anime in animes.iter_mut().filter(|a| chunk.contains(&a.ann_id)) {
                anime.alt_names = alt_names.remove(&anime.ann_id).unwrap_or_default();
                anime.genres = genres.remove(&anime.ann_id).unwrap_or_default();
                anime.tags = tags.remove(&anime.ann_id).unwrap_or_default();
            }
        }

        Ok(animes)
    }

    /// Fetch a single anime.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_anime(&self, ann_id: i64) -> Result<Option<Anime>, DatabaseError> {
        Ok(self.animes(&[ann_id]).await?.into_iter().next())
    }

    /// Values of one string link table grouped by ANN id, in insertion order.
    async fn anime_strings(
        &self,
        table: &str,
        column: &str,
        ann_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<String>>, DatabaseError> {
        let sql = format!(
            "SELECT ann_id, {column} FROM {table} WHERE ann_id IN ({}) ORDER BY ann_id, rowid",
            placeholders(ann_ids.len())
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(id_params(ann_ids)))
            .await?;

        let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next().await? {
            grouped
                .entry(row.get::<i64>(0)?)
                .or_default()
                .push(row.get::<String>(1)?);
        }
        Ok(grouped)
    }
}
