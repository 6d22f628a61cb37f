//! Build denormalized [`SongResult`] records from catalog entities.

use std::collections::{HashMap, HashSet};

use anisong_core::entities::{Anime, ArtistInstance, MembershipEdge, NO_LINE_UP, Song};
use anisong_core::responses::{CreditedArtist, MemberResult, SongResult};
use anisong_db::CatalogReader;
use anisong_db::error::DatabaseError;

use crate::error::SearchError;

/// Fetch the anime of `songs`, keyed by ANN id.
///
/// # Errors
///
/// Returns [`SearchError::Database`] if the catalog read fails.
pub async fn anime_index<C>(
    catalog: &C,
    songs: &[Song],
) -> Result<HashMap<i64, Anime>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let ann_ids: Vec<i64> = songs.iter().map(|s| s.ann_id).collect();
    let animes = catalog.animes(&ann_ids).await?;
    Ok(animes.into_iter().map(|a| (a.ann_id, a)).collect())
}

/// Join `songs` with their anime and credited artists, keeping input order.
///
/// # Errors
///
/// Returns [`SearchError::Database`] if a catalog read fails or a song's
/// anime is missing from `animes`.
pub async fn assemble<C>(
    catalog: &C,
    songs: Vec<Song>,
    animes: &HashMap<i64, Anime>,
) -> Result<Vec<SongResult>, SearchError>
where
    C: CatalogReader + ?Sized,
{
    let groups: Vec<ArtistInstance> = songs
        .iter()
        .flat_map(|s| &s.credits)
        .filter(|c| c.line_up_id != NO_LINE_UP)
        .map(|c| ArtistInstance::new(c.artist_id, c.line_up_id))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let mut members: HashMap<ArtistInstance, Vec<MembershipEdge>> = HashMap::new();
    if !groups.is_empty() {
        for edge in catalog.line_up_members(&groups).await? {
            members.entry(edge.group).or_default().push(edge);
        }
    }

    let artist_ids: Vec<i64> = songs
        .iter()
        .flat_map(|s| s.credits.iter().map(|c| c.artist_id))
        .chain(members.values().flatten().map(|e| e.member.artist_id))
        .collect();
    let names: HashMap<i64, Vec<String>> = catalog
        .artists(&artist_ids)
        .await?
        .into_iter()
        .map(|a| (a.id, a.names))
        .collect();
    let names_of = |id: i64| {
        names.get(&id).cloned().unwrap_or_else(|| {
            tracing::warn!(artist_id = id, "credited artist has no catalog entry");
            Vec::new()
        })
    };

    let mut results = Vec::with_capacity(songs.len());
    for song in songs {
        let anime = animes.get(&song.ann_id).ok_or_else(|| {
            DatabaseError::InvalidState(format!(
                "song {} references missing anime {}",
                song.id, song.ann_id
            ))
        })?;
        let mut result = base_record(&song, anime);

        for credit in &song.credits {
            let instance = ArtistInstance::new(credit.artist_id, credit.line_up_id);
            let line_up_members = members
                .get(&instance)
                .map(|edges| {
                    edges
                        .iter()
                        .map(|e| MemberResult {
                            id: e.member.artist_id,
                            names: names_of(e.member.artist_id),
                            line_up_id: e.member.line_up_id,
                            role: e.role,
                        })
                        .collect()
                })
                .unwrap_or_default();

            result.credited_mut(credit.role).push(CreditedArtist {
                id: credit.artist_id,
                names: names_of(credit.artist_id),
                line_up_id: credit.line_up_id,
                members: line_up_members,
            });
        }
        results.push(result);
    }

    Ok(results)
}

fn base_record(song: &Song, anime: &Anime) -> SongResult {
    SongResult {
        song_id: song.id,
        ann_song_id: song.ann_song_id,
        ann_id: anime.ann_id,
        anime_expand_name: anime.expand_name.clone(),
        anime_jp_name: anime.jp_name.clone(),
        anime_en_name: anime.en_name.clone(),
        anime_alt_names: anime.alt_names.clone(),
        anime_type: anime.anime_type.clone(),
        anime_season: anime.season.clone(),
        anime_genres: anime.genres.clone(),
        anime_tags: anime.tags.clone(),
        song_type: song.song_type,
        song_number: song.number,
        song_name: song.name.clone(),
        song_artist: song.artist.clone(),
        song_difficulty: song.difficulty,
        song_category: song.category.clone(),
        hq: song.links.hq.clone(),
        mq: song.links.mq.clone(),
        audio: song.links.audio.clone(),
        vocalists: Vec::new(),
        backing_vocalists: Vec::new(),
        performers: Vec::new(),
        composers: Vec::new(),
        arrangers: Vec::new(),
    }
}
