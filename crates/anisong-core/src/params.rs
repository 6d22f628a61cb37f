//! Search parameter blocks accepted from callers.
//!
//! Every block deserializes from the JSON request bodies the service exposes.
//! Omitted filter fields mean "no restriction".

use serde::{Deserialize, Serialize};

use crate::enums::{
    CombinationLogic, CreditRole, DedupePolicy, GroupGranularity, SearchKind, SongType,
};

/// Inclusive difficulty bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DifficultyRange {
    pub min: f64,
    pub max: f64,
}

impl DifficultyRange {
    #[must_use]
    pub fn contains(&self, difficulty: f64) -> bool {
        (self.min..=self.max).contains(&difficulty)
    }
}

/// Song and anime attribute filters shared by every search kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongFilters {
    #[serde(default)]
    pub ignore_duplicates: bool,
    #[serde(default)]
    pub dedupe_policy: DedupePolicy,
    #[serde(default)]
    pub song_types: Vec<SongType>,
    #[serde(default)]
    pub song_categories: Vec<String>,
    #[serde(default)]
    pub song_difficulty_range: Option<DifficultyRange>,
    #[serde(default)]
    pub anime_types: Vec<String>,
    #[serde(default)]
    pub anime_seasons: Vec<String>,
    #[serde(default)]
    pub anime_genres: Vec<String>,
    #[serde(default)]
    pub anime_tags: Vec<String>,
}

fn default_credit_roles() -> Vec<CreditRole> {
    CreditRole::PERFORMING.to_vec()
}

/// Membership-graph expansion controls for artist-oriented searches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistExpansion {
    /// Upper bound on other artists sharing a credit role. `None` = unlimited.
    #[serde(default)]
    pub max_other_artists: Option<u32>,
    #[serde(default)]
    pub group_granularity: GroupGranularity,
    /// Roles searched. An explicitly empty list means every role.
    #[serde(default = "default_credit_roles")]
    pub credit_roles: Vec<CreditRole>,
}

impl Default for ArtistExpansion {
    fn default() -> Self {
        Self {
            max_other_artists: None,
            group_granularity: GroupGranularity::default(),
            credit_roles: default_credit_roles(),
        }
    }
}

impl ArtistExpansion {
    /// Roles actually searched, with the empty list widened to all roles.
    #[must_use]
    pub fn effective_roles(&self) -> Vec<CreditRole> {
        if self.credit_roles.is_empty() {
            CreditRole::ALL.to_vec()
        } else {
            self.credit_roles.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimeSearchParams {
    pub anime_name: String,
    #[serde(default)]
    pub partial_match: bool,
    #[serde(flatten)]
    pub filters: SongFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnIdSearchParams {
    pub ann_ids: Vec<i64>,
    #[serde(flatten)]
    pub filters: SongFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongSearchParams {
    pub song_name: String,
    #[serde(default)]
    pub partial_match: bool,
    #[serde(flatten)]
    pub filters: SongFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistIdSearchParams {
    pub artist_ids: Vec<i64>,
    #[serde(flatten)]
    pub expansion: ArtistExpansion,
    #[serde(flatten)]
    pub filters: SongFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistSearchParams {
    pub artist_name: String,
    #[serde(default)]
    pub partial_match: bool,
    #[serde(flatten)]
    pub expansion: ArtistExpansion,
    #[serde(flatten)]
    pub filters: SongFilters,
}

/// One element of a global search, tagged by its kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubSearch {
    Anime(AnimeSearchParams),
    AnnId(AnnIdSearchParams),
    SongName(SongSearchParams),
    ArtistId(ArtistIdSearchParams),
    ArtistName(ArtistSearchParams),
}

impl SubSearch {
    #[must_use]
    pub const fn kind(&self) -> SearchKind {
        match self {
            Self::Anime(_) => SearchKind::Anime,
            Self::AnnId(_) => SearchKind::AnnId,
            Self::SongName(_) => SearchKind::SongName,
            Self::ArtistId(_) => SearchKind::ArtistId,
            Self::ArtistName(_) => SearchKind::ArtistName,
        }
    }

    /// The free-text query, its field name and partial flag, for kinds that have one.
    #[must_use]
    pub fn text_query(&self) -> Option<TextQuery<'_>> {
        match self {
            Self::Anime(p) => Some(TextQuery {
                field: "anime_name",
                text: &p.anime_name,
                partial_match: p.partial_match,
            }),
            Self::SongName(p) => Some(TextQuery {
                field: "song_name",
                text: &p.song_name,
                partial_match: p.partial_match,
            }),
            Self::ArtistName(p) => Some(TextQuery {
                field: "artist_name",
                text: &p.artist_name,
                partial_match: p.partial_match,
            }),
            Self::AnnId(_) | Self::ArtistId(_) => None,
        }
    }
}

/// Borrowed view of a free-text query for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextQuery<'a> {
    pub field: &'static str,
    pub text: &'a str,
    pub partial_match: bool,
}

/// Up to five heterogeneous sub-searches folded by `combination_logic`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalSearch {
    pub searches: Vec<SubSearch>,
    #[serde(default)]
    pub combination_logic: CombinationLogic,
}
