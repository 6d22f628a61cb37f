//! Shared catalog fixture for search integration tests.
//!
//! Song ids follow import order (anime by ANN id, then listed order):
//!
//! | id | anime | song                        | type    | credits                          |
//! |----|-------|-----------------------------|---------|----------------------------------|
//! | 1  | 100   | Staple Stable               | opening | vocalist 3, composer 4           |
//! | 2  | 100   | Kimi no Shiranai Monogatari | ending  | vocalist 1, composer 5           |
//! | 3  | 100   | Renai Circulation           | insert  | vocalists 1, 6, 7                |
//! | 4  | 200   | Connect                     | opening | vocalist 10/0                    |
//! | 5  | 200   | Magia                       | ending  | composer 5, arranger 5           |
//! | 6  | 300   | Connect                     | opening | vocalist 10/0                    |
//! | 7  | 300   | Colorful                    | opening | vocalist 10/1                    |
//! | 8  | 300   | Hikari                      | ending  | vocalist 20/0                    |
//! | 9  | 300   | Loop Song                   | insert  | vocalist 30/0                    |
//!
//! Membership: ClariS (10) line-up 0 = {1, 2}, line-up 1 = {1, 3}; Unit Super
//! (20) line-up 0 = {10/0 vocalist, 3 performer}; 30/0 and 31/0 contain each
//! other.

#![allow(dead_code)]

use anisong_db::CatalogDb;
use anisong_db::import::CatalogDump;
use serde_json::json;

pub async fn seeded_catalog() -> CatalogDb {
    let db = CatalogDb::open_local(":memory:").await.unwrap();
    db.import_dump(&dump()).await.unwrap();
    db
}

fn solo(name: &str) -> serde_json::Value {
    json!({"is_vocalist": true, "artist_amq_names": [name], "artist_alt_names": [], "line_ups": []})
}

fn song(
    song_type: u8,
    number: i64,
    name: &str,
    artist: &str,
    difficulty: Option<f64>,
    credits: serde_json::Value,
) -> serde_json::Value {
    let mut song = json!({
        "song_type": song_type,
        "song_number": number,
        "song_name": name,
        "song_artist": artist,
        "song_difficulty": difficulty,
        "song_category": "Standard",
        "links": {"HQ": format!("{}.webm", name.to_lowercase().replace(' ', "-"))}
    });
    if let (Some(song), Some(credits)) = (song.as_object_mut(), credits.as_object()) {
        for (role, list) in credits {
            song.insert(role.clone(), list.clone());
        }
    }
    song
}

pub fn dump() -> CatalogDump {
    let artists = json!({
        "1": solo("Kana Hanazawa"),
        "2": solo("Yui Horie"),
        "3": {"is_vocalist": true, "is_performer": true, "artist_amq_names": ["Chiwa Saito"],
              "artist_alt_names": ["Saito Chiwa"], "line_ups": []},
        "4": {"is_composer": true, "artist_amq_names": ["Kohei Tanaka"], "artist_alt_names": [], "line_ups": []},
        "5": {"is_composer": true, "is_arranger": true, "artist_amq_names": ["Yuki Kajiura"],
              "artist_alt_names": [], "line_ups": []},
        "6": solo("Guest Singer A"),
        "7": solo("Guest Singer B"),
        "10": {"is_vocalist": true, "artist_amq_names": ["ClariS"], "artist_alt_names": ["Claris"],
               "line_ups": [
                   {"members": [
                       {"id": 1, "line_up_id": -1, "role_type": "vocalist"},
                       {"id": 2, "line_up_id": -1, "role_type": "vocalist"}
                   ]},
                   {"members": [
                       {"id": 1, "line_up_id": -1, "role_type": "vocalist"},
                       {"id": 3, "line_up_id": -1, "role_type": "vocalist"}
                   ]}
               ]},
        "20": {"is_vocalist": true, "artist_amq_names": ["Unit Super"], "artist_alt_names": [],
               "line_ups": [
                   {"members": [
                       {"id": 10, "line_up_id": 0, "role_type": "vocalist"},
                       {"id": 3, "line_up_id": -1, "role_type": "performer"}
                   ]}
               ]},
        "30": {"is_vocalist": true, "artist_amq_names": ["Cycle A"], "artist_alt_names": [],
               "line_ups": [{"members": [{"id": 31, "line_up_id": 0, "role_type": "vocalist"}]}]},
        "31": {"is_vocalist": true, "artist_amq_names": ["Cycle B"], "artist_alt_names": [],
               "line_ups": [{"members": [{"id": 30, "line_up_id": 0, "role_type": "vocalist"}]}]}
    });

    let animes = json!({
        "100": {
            "anime_expand_name": "Bakemonogatari",
            "anime_jp_name": "化物語",
            "anime_alt_names": ["Monogatari Series"],
            "anime_type": "TV",
            "anime_season": "Summer 2009",
            "anime_genres": ["Mystery", "Romance"],
            "anime_tags": ["Vampires"],
            "songs": [
                song(1, 1, "Staple Stable", "Chiwa Saito", Some(45.0),
                     json!({"vocalists": [{"id": 3}], "composers": [{"id": 4}]})),
                song(2, 1, "Kimi no Shiranai Monogatari", "supercell", None,
                     json!({"vocalists": [{"id": 1, "line_up_id": -1}], "composers": [{"id": 5}]})),
                song(3, 1, "Renai Circulation", "Kana Hanazawa", Some(72.5),
                     json!({"vocalists": [{"id": 1}, {"id": 6}, {"id": 7}]}))
            ]
        },
        "200": {
            "anime_expand_name": "Mahou Shoujo Madoka Magica",
            "anime_en_name": "Puella Magi Madoka Magica",
            "anime_type": "TV",
            "anime_season": "Winter 2011",
            "anime_genres": ["Drama", "Magical Girl"],
            "anime_tags": ["Magic"],
            "songs": [
                song(1, 1, "Connect", "ClariS", Some(30.0),
                     json!({"vocalists": [{"id": 10, "line_up_id": 0}]})),
                song(2, 1, "Magia", "Kalafina", Some(55.0),
                     json!({"composers": [{"id": 5}], "arrangers": [{"id": 5}]}))
            ]
        },
        "300": {
            "anime_expand_name": "Madoka Magica Movie",
            "anime_type": "Movie",
            "anime_season": "Fall 2012",
            "anime_genres": ["Drama"],
            "songs": [
                song(1, 1, "Connect", "ClariS", Some(28.0),
                     json!({"vocalists": [{"id": 10, "line_up_id": 0}]})),
                song(1, 2, "Colorful", "ClariS", Some(40.0),
                     json!({"vocalists": [{"id": 10, "line_up_id": 1}]})),
                song(2, 1, "Hikari", "Unit Super", None,
                     json!({"vocalists": [{"id": 20, "line_up_id": 0}]})),
                song(3, 1, "Loop Song", "Cycle A", None,
                     json!({"vocalists": [{"id": 30, "line_up_id": 0}]}))
            ]
        }
    });

    CatalogDump {
        animes: serde_json::from_value(animes).unwrap(),
        artists: serde_json::from_value(artists).unwrap(),
    }
}

pub fn song_ids(results: &anisong_core::responses::SearchResults) -> Vec<i64> {
    results.songs.iter().map(|s| s.song_id).collect()
}
