//! Song types, credit roles, expansion modes and combination logic.
//!
//! Enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` returning the string stored in SQL. [`SongType`] is the
//! exception: it is stored and emitted as its small integer code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SongType
// ---------------------------------------------------------------------------

/// Where a song plays within its anime.
///
/// Encoded as `1` (opening), `2` (ending), `3` (insert). Deserializes from
/// either the integer code or the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SongTypeRepr", into = "u8")]
pub enum SongType {
    Opening,
    Ending,
    Insert,
}

impl SongType {
    pub const ALL: [Self; 3] = [Self::Opening, Self::Ending, Self::Insert];

    /// Integer code used in storage and in result records.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Opening => 1,
            Self::Ending => 2,
            Self::Insert => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Opening),
            2 => Some(Self::Ending),
            3 => Some(Self::Insert),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Ending => "ending",
            Self::Insert => "insert",
        }
    }
}

impl fmt::Display for SongType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SongType> for u8 {
    fn from(value: SongType) -> Self {
        value.code()
    }
}

impl TryFrom<i64> for SongType {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| CoreError::Validation(format!("unknown song type code {code}")))
    }
}

impl FromStr for SongType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::Validation(format!("unknown song type '{s}'")))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SongTypeRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<SongTypeRepr> for SongType {
    type Error = CoreError;

    fn try_from(repr: SongTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            SongTypeRepr::Code(code) => Self::try_from(code),
            SongTypeRepr::Name(name) => name.parse(),
        }
    }
}

// ---------------------------------------------------------------------------
// CreditRole
// ---------------------------------------------------------------------------

/// Role an artist holds on a song credit or within a group line-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditRole {
    Vocalist,
    BackingVocalist,
    Performer,
    Composer,
    Arranger,
}

impl CreditRole {
    pub const ALL: [Self; 5] = [
        Self::Vocalist,
        Self::BackingVocalist,
        Self::Performer,
        Self::Composer,
        Self::Arranger,
    ];

    /// Roles that put an artist on the recording itself.
    pub const PERFORMING: [Self; 3] = [Self::Vocalist, Self::BackingVocalist, Self::Performer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vocalist => "vocalist",
            Self::BackingVocalist => "backing_vocalist",
            Self::Performer => "performer",
            Self::Composer => "composer",
            Self::Arranger => "arranger",
        }
    }
}

impl fmt::Display for CreditRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("unknown credit role '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// GroupGranularity
// ---------------------------------------------------------------------------

/// How far artist matching expands across the line-up membership graph.
///
/// ```text
/// artist   seed only
/// groups   seed + every group the seed is or was in (transitively upward)
/// members  seed + every member of the seed's line-ups (transitively downward)
/// full     groups + members
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupGranularity {
    Artist,
    #[default]
    Groups,
    Members,
    Full,
}

impl GroupGranularity {
    /// Whether member → group edges are followed.
    #[must_use]
    pub const fn expands_upward(self) -> bool {
        matches!(self, Self::Groups | Self::Full)
    }

    /// Whether group → member edges are followed.
    #[must_use]
    pub const fn expands_downward(self) -> bool {
        matches!(self, Self::Members | Self::Full)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Groups => "groups",
            Self::Members => "members",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for GroupGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CombinationLogic
// ---------------------------------------------------------------------------

/// How a global search folds its sub-search outputs together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationLogic {
    #[default]
    Union,
    Intersection,
}

impl CombinationLogic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
        }
    }
}

impl fmt::Display for CombinationLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DedupePolicy
// ---------------------------------------------------------------------------

/// Which normalized song fields make two entries the same recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupePolicy {
    #[default]
    NameArtistType,
    NameArtist,
    Name,
}

impl DedupePolicy {
    #[must_use]
    pub const fn includes_artist(self) -> bool {
        matches!(self, Self::NameArtistType | Self::NameArtist)
    }

    #[must_use]
    pub const fn includes_type(self) -> bool {
        matches!(self, Self::NameArtistType)
    }
}

// ---------------------------------------------------------------------------
// SearchKind
// ---------------------------------------------------------------------------

/// The five search entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Anime,
    AnnId,
    SongName,
    ArtistId,
    ArtistName,
}

impl SearchKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::AnnId => "ann_id",
            Self::SongName => "song_name",
            Self::ArtistId => "artist_id",
            Self::ArtistName => "artist_name",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", SongType::Opening)]
    #[case("opening", SongType::Opening)]
    #[case("Ending", SongType::Ending)]
    #[case(" 3 ", SongType::Insert)]
    #[case("INSERT", SongType::Insert)]
    fn song_type_parses_codes_and_names(#[case] input: &str, #[case] expected: SongType) {
        assert_eq!(input.parse::<SongType>().unwrap(), expected);
    }

    #[test]
    fn song_type_rejects_unknown_code() {
        assert!("4".parse::<SongType>().is_err());
        assert!(SongType::try_from(0).is_err());
    }

    #[test]
    fn song_type_serializes_as_code_and_accepts_both_forms() {
        assert_eq!(serde_json::to_string(&SongType::Ending).unwrap(), "2");
        let parsed: Vec<SongType> = serde_json::from_str(r#"[1, "insert"]"#).unwrap();
        assert_eq!(parsed, vec![SongType::Opening, SongType::Insert]);
    }

    #[test]
    fn granularity_axes_are_independent() {
        assert!(!GroupGranularity::Artist.expands_upward());
        assert!(!GroupGranularity::Artist.expands_downward());
        assert!(GroupGranularity::Groups.expands_upward());
        assert!(!GroupGranularity::Groups.expands_downward());
        assert!(!GroupGranularity::Members.expands_upward());
        assert!(GroupGranularity::Members.expands_downward());
        assert!(GroupGranularity::Full.expands_upward());
        assert!(GroupGranularity::Full.expands_downward());
    }

    #[test]
    fn credit_role_matches_storage_strings() {
        for role in CreditRole::ALL {
            assert_eq!(role.as_str().parse::<CreditRole>().unwrap(), role);
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
