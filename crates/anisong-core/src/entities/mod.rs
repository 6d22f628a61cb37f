//! Entity structs for the anisong catalog.
//!
//! Each entity maps to one or more tables in the libSQL catalog. The search
//! engine treats every entity as read-only.

mod anime;
mod artist;
mod song;

pub use anime::Anime;
pub use artist::{Artist, ArtistInstance, LineUpMember, MembershipEdge};
pub use song::{Credit, MediaLinks, NO_LINE_UP, Song};
