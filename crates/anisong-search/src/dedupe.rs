//! Collapse re-listings of the same recording.
//!
//! The same song often appears under several anime (a movie reusing a TV
//! opening, a sequel re-crediting an ending). Two entries are duplicates when
//! their normalized key fields are equal; the key is chosen by [`DedupePolicy`].

use std::collections::HashSet;

use anisong_core::entities::Song;
use anisong_core::enums::{DedupePolicy, SongType};

use crate::normalize::normalize;

#[derive(Debug, PartialEq, Eq, Hash)]
struct DedupeKey {
    name: String,
    artist: Option<String>,
    song_type: Option<SongType>,
}

impl DedupeKey {
    fn of(song: &Song, policy: DedupePolicy) -> Self {
        Self {
            name: normalize(&song.name),
            artist: policy.includes_artist().then(|| normalize(&song.artist)),
            song_type: policy.includes_type().then_some(song.song_type),
        }
    }
}

/// Keep the first entry of every duplicate group, preserving input order.
#[must_use]
pub fn dedupe(songs: Vec<Song>, policy: DedupePolicy) -> Vec<Song> {
    let mut seen = HashSet::new();
    songs
        .into_iter()
        .filter(|song| seen.insert(DedupeKey::of(song, policy)))
        .collect()
}
