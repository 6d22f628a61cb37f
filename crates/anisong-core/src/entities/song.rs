use serde::{Deserialize, Serialize};

use crate::enums::{CreditRole, SongType};

/// Line-up index meaning "no specific line-up" (solo context).
pub const NO_LINE_UP: i64 = -1;

/// A theme song belonging to exactly one anime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Catalog row id. Identity used for de-duplication across sub-searches.
    pub id: i64,
    pub ann_song_id: Option<i64>,
    pub ann_id: i64,
    pub song_type: SongType,
    pub number: i64,
    pub name: String,
    /// Unparsed credit string as published upstream.
    pub artist: String,
    pub difficulty: Option<f64>,
    pub category: Option<String>,
    pub links: MediaLinks,
    pub credits: Vec<Credit>,
}

impl Song {
    /// Credits holding `role` on this song.
    pub fn credits_in(&self, role: CreditRole) -> impl Iterator<Item = &Credit> {
        self.credits.iter().filter(move |c| c.role == role)
    }
}

/// Media file names for a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaLinks {
    pub hq: Option<String>,
    pub mq: Option<String>,
    pub audio: Option<String>,
}

/// Structured credit linking a song to an artist (optionally a specific line-up).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Credit {
    pub artist_id: i64,
    /// [`NO_LINE_UP`] when the artist is credited outside any line-up.
    pub line_up_id: i64,
    pub role: CreditRole,
}
