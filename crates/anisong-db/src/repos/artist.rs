//! Artist repository: identities, name variants, line-ups and membership edges.

use std::collections::{HashMap, HashSet};

use anisong_core::entities::{Artist, ArtistInstance, MembershipEdge};
use anisong_core::enums::CreditRole;

use crate::CatalogDb;
use crate::error::DatabaseError;
use crate::helpers::{MAX_BIND_PARAMS, get_flag, id_params, parse_enum, placeholders, sorted_unique};

fn row_to_artist(row: &libsql::Row) -> Result<Artist, DatabaseError> {
    Ok(Artist {
        id: row.get::<i64>(0)?,
        names: Vec::new(),
        is_vocalist: get_flag(row, 1)?,
        is_performer: get_flag(row, 2)?,
        is_composer: get_flag(row, 3)?,
        is_arranger: get_flag(row, 4)?,
        line_ups: Vec::new(),
    })
}

fn row_to_edge(row: &libsql::Row) -> Result<MembershipEdge, DatabaseError> {
    let role: CreditRole = parse_enum(&row.get::<String>(2)?)?;
    Ok(MembershipEdge {
        member: ArtistInstance::new(row.get::<i64>(0)?, row.get::<i64>(1)?),
        role,
        group: ArtistInstance::new(row.get::<i64>(3)?, row.get::<i64>(4)?),
    })
}

const EDGE_COLUMNS: &str =
    "artist_id, artist_line_up_id, artist_role_type, group_id, group_line_up_id";

impl CatalogDb {
    /// Every `(artist_id, name)` pair, ordered by artist then name insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn artist_names(&self) -> Result<Vec<(i64, String)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT artist_id, name FROM link_artist_name ORDER BY artist_id, inserted_order",
                (),
            )
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push((row.get::<i64>(0)?, row.get::<String>(1)?));
        }
        Ok(names)
    }

    /// Fetch artists with names and line-ups, ascending by id. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails.
    pub async fn artists(&self, artist_ids: &[i64]) -> Result<Vec<Artist>, DatabaseError> {
        let ids = sorted_unique(artist_ids);
        let mut artists = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let params = placeholders(chunk.len());

            let sql = format!(
                "SELECT id, is_vocalist, is_performer, is_composer, is_arranger FROM artists \
                 WHERE id IN ({params}) ORDER BY id"
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            let mut fetched = Vec::new();
            while let Some(row) = rows.next().await? {
                fetched.push(row_to_artist(&row)?);
            }

            let mut names: HashMap<i64, Vec<String>> = HashMap::new();
            let sql = format!(
                "SELECT artist_id, name FROM link_artist_name WHERE artist_id IN ({params}) \
                 ORDER BY artist_id, inserted_order"
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                names
                    .entry(row.get::<i64>(0)?)
                    .or_default()
                    .push(row.get::<String>(1)?);
            }

            let mut line_ups: HashMap<i64, Vec<i64>> = HashMap::new();
            let sql = format!(
                "SELECT artist_id, line_up_id FROM line_ups WHERE artist_id IN ({params}) \
                 ORDER BY artist_id, line_up_id"
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                line_ups
                    .entry(row.get::<i64>(0)?)
                    .or_default()
                    .push(row.get::<i64>(1)?);
            }

            for mut artist in fetched {
                artist.names = names.remove(&artist.id).unwrap_or_default();
                artist.line_ups = line_ups.remove(&artist.id).unwrap_or_default();
                artists.push(artist);
            }
        }

        Ok(artists)
    }

    /// The whole membership graph as member → group edges.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row holds an unknown role.
    pub async fn membership_edges(&self) -> Result<Vec<MembershipEdge>, DatabaseError> {
        let sql = format!("SELECT {EDGE_COLUMNS} FROM link_artist_line_up ORDER BY rowid");
        let mut rows = self.conn().query(&sql, ()).await?;
        let mut edges = Vec::new();
        while let Some(row) = rows.next().await? {
            edges.push(row_to_edge(&row)?);
        }
        Ok(edges)
    }

    /// Member edges into the given group line-ups, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row holds an unknown role.
    pub async fn line_up_members(
        &self,
        groups: &[ArtistInstance],
    ) -> Result<Vec<MembershipEdge>, DatabaseError> {
        let wanted: HashSet<ArtistInstance> = groups.iter().copied().collect();
        let group_ids: Vec<i64> = groups.iter().map(|g| g.artist_id).collect();
        let group_ids = sorted_unique(&group_ids);

        let mut edges = Vec::new();
        for chunk in group_ids.chunks(MAX_BIND_PARAMS) {
            let sql = format!(
                "SELECT {EDGE_COLUMNS} FROM link_artist_line_up WHERE group_id IN ({}) \
                 ORDER BY group_id, group_line_up_id, rowid",
                placeholders(chunk.len())
            );
            let mut rows = self
                .conn()
                .query(&sql, libsql::params_from_iter(id_params(chunk)))
                .await?;
            while let Some(row) = rows.next().await? {
                let edge = row_to_edge(&row)?;
                if wanted.contains(&edge.group) {
                    edges.push(edge);
                }
            }
        }
        Ok(edges)
    }
}
