//! Import a small dump into an in-memory catalog and read it back.

use std::io::Write;

use anisong_core::entities::{ArtistInstance, NO_LINE_UP};
use anisong_core::enums::{CreditRole, SongType};
use anisong_db::CatalogDb;
use anisong_db::error::DatabaseError;
use anisong_db::import::CatalogDump;
use pretty_assertions::assert_eq;
use serde_json::json;

fn songs_json() -> serde_json::Value {
    json!({
        "2": {
            "anime_expand_name": "Mahou Shoujo Madoka Magica",
            "anime_jp_name": "魔法少女まどか☆マギカ",
            "anime_en_name": "Puella Magi Madoka Magica",
            "anime_alt_names": ["PMMM", "Madoka"],
            "anime_type": "TV",
            "anime_season": "Winter 2011",
            "anime_genres": ["Drama", "Magical Girl"],
            "anime_tags": ["Magic"],
            "songs": [
                {
                    "ann_song_id": 501, "song_type": 1, "song_number": 1,
                    "song_name": "Connect", "song_artist": "ClariS",
                    "song_difficulty": 31.5, "song_category": "Standard",
                    "links": {"HQ": "connect.webm", "audio": "connect.mp3"},
                    "vocalists": [{"id": "10", "line_up_id": 0}],
                    "composers": [{"id": 3}]
                },
                {
                    "song_type": "ending", "song_number": 1,
                    "song_name": "Magia", "song_artist": "Kalafina",
                    "composers": [{"id": 3, "line_up_id": null}]
                }
            ]
        },
        "1": {
            "anime_expand_name": "Bakemonogatari",
            "songs": [
                {
                    "song_type": 3, "song_number": 1,
                    "song_name": "Renai Circulation", "song_artist": "Kana Hanazawa",
                    "vocalists": [{"id": 1}]
                }
            ]
        }
    })
}

fn artists_json() -> serde_json::Value {
    json!({
        "1": {"is_vocalist": true, "artist_amq_names": ["Kana Hanazawa"],
              "artist_alt_names": ["Hanazawa Kana", "Kana Hanazawa"], "line_ups": []},
        "2": {"is_vocalist": true, "artist_amq_names": ["Alice"], "artist_alt_names": [], "line_ups": []},
        "3": {"is_composer": true, "artist_amq_names": ["Yuki Kajiura"], "artist_alt_names": [], "line_ups": []},
        "10": {
            "is_vocalist": true,
            "artist_amq_names": ["ClariS"],
            "artist_alt_names": [],
            "line_ups": [
                {"members": [
                    {"id": "1", "line_up_id": -1, "role_type": "vocalist"},
                    {"id": "2", "line_up_id": -1, "role_type": "vocalist"}
                ]},
                {"members": [
                    {"id": 1, "role_type": "backing_vocalist"}
                ]}
            ]
        }
    })
}

fn dump() -> CatalogDump {
    CatalogDump {
        animes: serde_json::from_value(songs_json()).unwrap(),
        artists: serde_json::from_value(artists_json()).unwrap(),
    }
}

async fn seeded() -> CatalogDb {
    let db = CatalogDb::open_local(":memory:").await.unwrap();
    db.import_dump(&dump()).await.unwrap();
    db
}

#[tokio::test]
async fn import_reports_row_counts() {
    let db = CatalogDb::open_local(":memory:").await.unwrap();
    let summary = db.import_dump(&dump()).await.unwrap();
    assert_eq!(summary.artists, 4);
    assert_eq!(summary.line_ups, 2);
    assert_eq!(summary.memberships, 3);
    assert_eq!(summary.animes, 2);
    assert_eq!(summary.songs, 3);
    assert_eq!(summary.credits, 4);
    assert_eq!(db.song_count().await.unwrap(), 3);
}

#[tokio::test]
async fn import_refuses_non_empty_catalog() {
    let db = seeded().await;
    let err = db.import_dump(&dump()).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Import(_)), "got {err:?}");
}

#[tokio::test]
async fn import_rolls_back_on_unknown_artist() {
    let db = CatalogDb::open_local(":memory:").await.unwrap();
    let mut broken = dump();
    broken.artists.remove(&3);
    assert!(db.import_dump(&broken).await.is_err());
    assert_eq!(db.song_count().await.unwrap(), 0);
    assert!(db.artist_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn anime_names_follow_preference_order() {
    let db = seeded().await;
    let names = db.anime_names().await.unwrap();
    assert_eq!(
        names,
        vec![
            (1, "Bakemonogatari".to_string()),
            (2, "Mahou Shoujo Madoka Magica".to_string()),
            (2, "魔法少女まどか☆マギカ".to_string()),
            (2, "Puella Magi Madoka Magica".to_string()),
            (2, "PMMM".to_string()),
            (2, "Madoka".to_string()),
        ]
    );
}

#[tokio::test]
async fn animes_carry_alt_names_genres_and_tags() {
    let db = seeded().await;
    let anime = db.get_anime(2).await.unwrap().unwrap();
    assert_eq!(anime.alt_names, vec!["PMMM", "Madoka"]);
    assert_eq!(anime.genres, vec!["Drama", "Magical Girl"]);
    assert_eq!(anime.tags, vec!["Magic"]);
    assert_eq!(anime.season.as_deref(), Some("Winter 2011"));
    assert!(db.get_anime(99).await.unwrap().is_none());
}

#[tokio::test]
async fn songs_are_returned_in_storage_order_with_credits() {
    let db = seeded().await;
    let songs = db.songs_by_anime(&[2, 1]).await.unwrap();
    let names: Vec<&str> = songs.iter().map(|s| s.name.as_str()).collect();
    // Anime 1 is imported first, so its song has the lowest id.
    assert_eq!(names, vec!["Renai Circulation", "Connect", "Magia"]);

    let connect = &songs[1];
    assert_eq!(connect.song_type, SongType::Opening);
    assert_eq!(connect.ann_song_id, Some(501));
    assert_eq!(connect.difficulty, Some(31.5));
    assert_eq!(connect.links.hq.as_deref(), Some("connect.webm"));
    assert_eq!(connect.links.mq, None);
    let vocalists: Vec<_> = connect.credits_in(CreditRole::Vocalist).collect();
    assert_eq!(vocalists.len(), 1);
    assert_eq!(vocalists[0].artist_id, 10);
    assert_eq!(vocalists[0].line_up_id, 0);

    let magia = &songs[2];
    assert_eq!(magia.song_type, SongType::Ending);
    assert_eq!(magia.credits[0].line_up_id, NO_LINE_UP);
}

#[tokio::test]
async fn songs_crediting_finds_any_role() {
    let db = seeded().await;
    let songs = db.songs_crediting(&[3]).await.unwrap();
    let names: Vec<&str> = songs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Connect", "Magia"]);
    assert!(db.songs_crediting(&[404]).await.unwrap().is_empty());
}

#[tokio::test]
async fn artists_dedupe_names_and_list_line_ups() {
    let db = seeded().await;
    let artists = db.artists(&[10, 1, 404]).await.unwrap();
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].names, vec!["Kana Hanazawa", "Hanazawa Kana"]);
    assert!(artists[0].line_ups.is_empty());
    assert_eq!(artists[1].primary_name(), Some("ClariS"));
    assert_eq!(artists[1].line_ups, vec![0, 1]);
    assert!(artists[1].is_vocalist);
    assert!(!artists[1].is_composer);
}

#[tokio::test]
async fn membership_edges_keep_roles_and_line_ups() {
    let db = seeded().await;
    let edges = db.membership_edges().await.unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2].member, ArtistInstance::new(1, NO_LINE_UP));
    assert_eq!(edges[2].role, CreditRole::BackingVocalist);
    assert_eq!(edges[2].group, ArtistInstance::new(10, 1));

    let members = db
        .line_up_members(&[ArtistInstance::new(10, 0)])
        .await
        .unwrap();
    let ids: Vec<i64> = members.iter().map(|e| e.member.artist_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn random_song_ids_are_bounded() {
    let db = seeded().await;
    let mut ids = db.random_song_ids(10).await.unwrap();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(db.random_song_ids(2).await.unwrap().len(), 2);
    assert!(db.random_song_ids(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn dump_files_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let songs_path = dir.path().join("song_database.json");
    let artists_path = dir.path().join("artist_database.json");
    std::fs::File::create(&songs_path)
        .unwrap()
        .write_all(songs_json().to_string().as_bytes())
        .unwrap();
    std::fs::File::create(&artists_path)
        .unwrap()
        .write_all(artists_json().to_string().as_bytes())
        .unwrap();

    let dump = CatalogDump::from_files(&songs_path, &artists_path).unwrap();
    assert_eq!(dump.animes.len(), 2);
    assert_eq!(dump.artists[&10].line_ups.len(), 2);

    let missing = CatalogDump::from_files(&dir.path().join("nope.json"), &artists_path);
    assert!(matches!(missing, Err(DatabaseError::Import(_))));
}
