//! Bulk loader for the upstream JSON catalog dumps.
//!
//! Two files describe the whole catalog:
//!
//! - `song_database.json`: ANN id → anime with its songs and structured credits
//! - `artist_database.json`: artist id → flags, names and line-ups
//!
//! [`CatalogDb::import_dump`] writes both into an empty catalog inside a single
//! transaction, so a failed import leaves nothing behind.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anisong_core::entities::NO_LINE_UP;
use anisong_core::enums::{CreditRole, SongType};
use serde::{Deserialize, Deserializer, Serialize};

use crate::CatalogDb;
use crate::error::DatabaseError;

/// Both dump files, keyed by ANN id and artist id respectively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDump {
    pub animes: BTreeMap<i64, AnimeDump>,
    pub artists: BTreeMap<i64, ArtistDump>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimeDump {
    pub anime_expand_name: String,
    #[serde(default)]
    pub anime_en_name: Option<String>,
    #[serde(default)]
    pub anime_jp_name: Option<String>,
    #[serde(default)]
    pub anime_season: Option<String>,
    #[serde(default)]
    pub anime_type: Option<String>,
    #[serde(default)]
    pub anime_alt_names: Vec<String>,
    #[serde(default)]
    pub anime_genres: Vec<String>,
    #[serde(default)]
    pub anime_tags: Vec<String>,
    #[serde(default)]
    pub songs: Vec<SongDump>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDump {
    #[serde(default)]
    pub ann_song_id: Option<i64>,
    pub song_type: SongType,
    pub song_number: i64,
    pub song_name: String,
    pub song_artist: String,
    #[serde(default)]
    pub song_difficulty: Option<f64>,
    #[serde(default)]
    pub song_category: Option<String>,
    #[serde(default)]
    pub links: LinksDump,
    #[serde(default)]
    pub vocalists: Vec<CreditDump>,
    #[serde(default)]
    pub backing_vocalists: Vec<CreditDump>,
    #[serde(default)]
    pub performers: Vec<CreditDump>,
    #[serde(default)]
    pub composers: Vec<CreditDump>,
    #[serde(default)]
    pub arrangers: Vec<CreditDump>,
}

impl SongDump {
    fn credits(&self) -> impl Iterator<Item = (CreditRole, &CreditDump)> {
        [
            (CreditRole::Vocalist, &self.vocalists),
            (CreditRole::BackingVocalist, &self.backing_vocalists),
            (CreditRole::Performer, &self.performers),
            (CreditRole::Composer, &self.composers),
            (CreditRole::Arranger, &self.arrangers),
        ]
        .into_iter()
        .flat_map(|(role, credits)| credits.iter().map(move |c| (role, c)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksDump {
    #[serde(rename = "HQ", default)]
    pub hq: Option<String>,
    #[serde(rename = "MQ", default)]
    pub mq: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreditDump {
    #[serde(deserialize_with = "flexible_id")]
    pub id: i64,
    #[serde(default)]
    pub line_up_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistDump {
    #[serde(default)]
    pub is_vocalist: bool,
    #[serde(default)]
    pub is_performer: bool,
    #[serde(default)]
    pub is_composer: bool,
    #[serde(default)]
    pub is_arranger: bool,
    #[serde(default)]
    pub artist_amq_names: Vec<String>,
    #[serde(default)]
    pub artist_alt_names: Vec<String>,
    /// Line-ups are numbered 0.. in listed order.
    #[serde(default)]
    pub line_ups: Vec<LineUpDump>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineUpDump {
    #[serde(default)]
    pub members: Vec<MemberDump>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberDump {
    #[serde(deserialize_with = "flexible_id")]
    pub id: i64,
    #[serde(default)]
    pub line_up_id: Option<i64>,
    pub role_type: CreditRole,
}

/// Upstream ids appear both as JSON numbers and as numeric strings.
fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Int(i64),
        Text(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(id) => Ok(id),
        IdRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{text}'"))),
    }
}

/// Row counts written by one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub artists: usize,
    pub line_ups: usize,
    pub memberships: usize,
    pub animes: usize,
    pub songs: usize,
    pub credits: usize,
}

impl CatalogDump {
    /// Read both dump files from disk.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Import` if either file is missing or malformed.
    pub fn from_files(songs_path: &Path, artists_path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self {
            animes: read_json(songs_path)?,
            artists: read_json(artists_path)?,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DatabaseError> {
    let file = File::open(path)
        .map_err(|e| DatabaseError::Import(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DatabaseError::Import(format!("{}: {e}", path.display())))
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}

impl CatalogDb {
    /// Load a dump into an empty catalog in one transaction.
    ///
    /// Artists and their line-ups go first so membership edges and song credits
    /// can reference any artist regardless of dump order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Import` if the catalog already holds data or a
    /// dump row violates the schema, and `DatabaseError::LibSql` on storage failure.
    pub async fn import_dump(&self, dump: &CatalogDump) -> Result<ImportSummary, DatabaseError> {
        let existing = {
            let mut rows = self
                .conn()
                .query(
                    "SELECT (SELECT COUNT(*) FROM animes) + (SELECT COUNT(*) FROM artists)",
                    (),
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            row.get::<i64>(0)?
        };
        if existing > 0 {
            return Err(DatabaseError::Import("catalog is not empty".to_string()));
        }

        let tx = self.conn().transaction().await?;
        match write_dump(&tx, dump).await {
            Ok(summary) => {
                tx.commit().await?;
                tracing::info!(
                    artists = summary.artists,
                    animes = summary.animes,
                    songs = summary.songs,
                    "catalog imported"
                );
                Ok(summary)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }
}

async fn write_dump(
    tx: &libsql::Transaction,
    dump: &CatalogDump,
) -> Result<ImportSummary, DatabaseError> {
    let mut summary = ImportSummary::default();

    for (&artist_id, artist) in &dump.artists {
        tx.execute(
            "INSERT INTO artists (id, is_vocalist, is_performer, is_composer, is_arranger) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                artist_id,
                flag(artist.is_vocalist),
                flag(artist.is_performer),
                flag(artist.is_composer),
                flag(artist.is_arranger)
            ],
        )
        .await
        .map_err(|e| DatabaseError::Import(format!("artist {artist_id}: {e}")))?;
        summary.artists += 1;

        for name in artist.artist_amq_names.iter().chain(&artist.artist_alt_names) {
            tx.execute(
                "INSERT OR IGNORE INTO link_artist_name (artist_id, name) VALUES (?1, ?2)",
                libsql::params![artist_id, name.as_str()],
            )
            .await?;
        }

        for line_up_id in 0..artist.line_ups.len() {
            tx.execute(
                "INSERT INTO line_ups (artist_id, line_up_id) VALUES (?1, ?2)",
                libsql::params![artist_id, line_up_index(line_up_id)?],
            )
            .await?;
            summary.line_ups += 1;
        }
    }

    for (&group_id, artist) in &dump.artists {
        for (index, line_up) in artist.line_ups.iter().enumerate() {
            let group_line_up_id = line_up_index(index)?;
            for member in &line_up.members {
                let member_line_up_id = member.line_up_id.unwrap_or(NO_LINE_UP);
                tx.execute(
                    "INSERT OR IGNORE INTO link_artist_line_up \
                     (artist_id, artist_line_up_id, artist_role_type, group_id, group_line_up_id) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    libsql::params![
                        member.id,
                        member_line_up_id,
                        member.role_type.as_str(),
                        group_id,
                        group_line_up_id
                    ],
                )
                .await
                .map_err(|e| {
                    DatabaseError::Import(format!(
                        "member {} of artist {group_id} line-up {group_line_up_id}: {e}",
                        member.id
                    ))
                })?;
                summary.memberships += 1;
            }
        }
    }

    for (&ann_id, anime) in &dump.animes {
        tx.execute(
            "INSERT INTO animes \
             (ann_id, anime_expand_name, anime_en_name, anime_jp_name, anime_season, anime_type) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                ann_id,
                anime.anime_expand_name.as_str(),
                anime.anime_en_name.clone(),
                anime.anime_jp_name.clone(),
                anime.anime_season.clone(),
                anime.anime_type.clone()
            ],
        )
        .await
        .map_err(|e| DatabaseError::Import(format!("anime {ann_id}: {e}")))?;
        summary.animes += 1;

        for (table, column, values) in [
            ("link_anime_alt_name", "name", &anime.anime_alt_names),
            ("link_anime_genre", "genre", &anime.anime_genres),
            ("link_anime_tag", "tag", &anime.anime_tags),
        ] {
            let sql = format!("INSERT OR IGNORE INTO {table} (ann_id, {column}) VALUES (?1, ?2)");
            for value in values {
                tx.execute(&sql, libsql::params![ann_id, value.as_str()])
                    .await?;
            }
        }

        for song in &anime.songs {
            tx.execute(
                "INSERT INTO songs (ann_song_id, ann_id, song_type, song_number, song_name, \
                 song_artist, song_difficulty, song_category, hq, mq, audio) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    song.ann_song_id,
                    ann_id,
                    i64::from(song.song_type.code()),
                    song.song_number,
                    song.song_name.as_str(),
                    song.song_artist.as_str(),
                    song.song_difficulty,
                    song.song_category.clone(),
                    song.links.hq.clone(),
                    song.links.mq.clone(),
                    song.links.audio.clone()
                ],
            )
            .await
            .map_err(|e| {
                DatabaseError::Import(format!("song '{}' of anime {ann_id}: {e}", song.song_name))
            })?;
            let song_id = tx.last_insert_rowid();
            summary.songs += 1;

            for (role, credit) in song.credits() {
                tx.execute(
                    "INSERT OR IGNORE INTO link_song_artist \
                     (song_id, artist_id, artist_line_up_id, role_type) VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![
                        song_id,
                        credit.id,
                        credit.line_up_id.unwrap_or(NO_LINE_UP),
                        role.as_str()
                    ],
                )
                .await
                .map_err(|e| {
                    DatabaseError::Import(format!(
                        "{role} {} on song '{}': {e}",
                        credit.id, song.song_name
                    ))
                })?;
                summary.credits += 1;
            }
        }
    }

    Ok(summary)
}

fn line_up_index(index: usize) -> Result<i64, DatabaseError> {
    i64::try_from(index).map_err(|_| DatabaseError::Import(format!("line-up index {index} overflows")))
}
