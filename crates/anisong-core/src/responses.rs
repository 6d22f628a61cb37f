//! Denormalized result records returned by every search.
//!
//! One [`SongResult`] flattens a song with its parent anime and the names of
//! every credited artist, so callers never need a second lookup.

use serde::{Deserialize, Serialize};

use crate::enums::{CreditRole, SongType};

/// Member of a credited group line-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberResult {
    pub id: i64,
    pub names: Vec<String>,
    pub line_up_id: i64,
    pub role: CreditRole,
}

/// An artist credited on a song in one role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditedArtist {
    pub id: i64,
    pub names: Vec<String>,
    pub line_up_id: i64,
    /// Members of the credited line-up. Empty for solo credits.
    pub members: Vec<MemberResult>,
}

/// A song joined with its anime and resolved credits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongResult {
    pub song_id: i64,
    pub ann_song_id: Option<i64>,
    pub ann_id: i64,
    pub anime_expand_name: String,
    pub anime_jp_name: Option<String>,
    pub anime_en_name: Option<String>,
    pub anime_alt_names: Vec<String>,
    pub anime_type: Option<String>,
    pub anime_season: Option<String>,
    pub anime_genres: Vec<String>,
    pub anime_tags: Vec<String>,
    pub song_type: SongType,
    pub song_number: i64,
    pub song_name: String,
    pub song_artist: String,
    pub song_difficulty: Option<f64>,
    pub song_category: Option<String>,
    pub hq: Option<String>,
    pub mq: Option<String>,
    pub audio: Option<String>,
    pub vocalists: Vec<CreditedArtist>,
    pub backing_vocalists: Vec<CreditedArtist>,
    pub performers: Vec<CreditedArtist>,
    pub composers: Vec<CreditedArtist>,
    pub arrangers: Vec<CreditedArtist>,
}

impl SongResult {
    /// Credited artists in `role`.
    #[must_use]
    pub fn credited(&self, role: CreditRole) -> &[CreditedArtist] {
        match role {
            CreditRole::Vocalist => &self.vocalists,
            CreditRole::BackingVocalist => &self.backing_vocalists,
            CreditRole::Performer => &self.performers,
            CreditRole::Composer => &self.composers,
            CreditRole::Arranger => &self.arrangers,
        }
    }

    /// Mutable slot for `role`, used while assembling the record.
    pub fn credited_mut(&mut self, role: CreditRole) -> &mut Vec<CreditedArtist> {
        match role {
            CreditRole::Vocalist => &mut self.vocalists,
            CreditRole::BackingVocalist => &mut self.backing_vocalists,
            CreditRole::Performer => &mut self.performers,
            CreditRole::Composer => &mut self.composers,
            CreditRole::Arranger => &mut self.arrangers,
        }
    }
}

/// Response body of every search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub songs: Vec<SongResult>,
    pub count: usize,
}

impl SearchResults {
    #[must_use]
    pub fn new(songs: Vec<SongResult>) -> Self {
        let count = songs.len();
        Self { songs, count }
    }
}
