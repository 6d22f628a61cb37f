use serde::{Deserialize, Serialize};

use crate::enums::CreditRole;

/// An artist or group identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    /// Known name variants; the first one is the primary name.
    pub names: Vec<String>,
    pub is_vocalist: bool,
    pub is_performer: bool,
    pub is_composer: bool,
    pub is_arranger: bool,
    /// Line-up indexes scoped to this artist, ascending.
    pub line_ups: Vec<i64>,
}

impl Artist {
    #[must_use]
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// Node identity in the membership graph: one roster of one artist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtistInstance {
    pub artist_id: i64,
    pub line_up_id: i64,
}

impl ArtistInstance {
    #[must_use]
    pub const fn new(artist_id: i64, line_up_id: i64) -> Self {
        Self {
            artist_id,
            line_up_id,
        }
    }
}

/// `member` holds `role` within the `group` line-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MembershipEdge {
    pub member: ArtistInstance,
    pub role: CreditRole,
    pub group: ArtistInstance,
}

/// A member entry of one group line-up, as exposed in result records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LineUpMember {
    pub artist_id: i64,
    pub line_up_id: i64,
    pub role: CreditRole,
}
