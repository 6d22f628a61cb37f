use anisong_core::enums::{CreditRole, DedupePolicy, GroupGranularity, SongType};
use anisong_core::params::{ArtistExpansion, DifficultyRange, SongFilters};
use serde::de::DeserializeOwned;

use crate::cli::root_commands::{ExpansionArgs, FilterArgs};

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

fn parse_all<T: DeserializeOwned>(raw: &[String], field: &str) -> anyhow::Result<Vec<T>> {
    raw.iter().map(|value| parse_enum(value, field)).collect()
}

/// Build [`SongFilters`] from command-line flags.
pub fn song_filters(args: &FilterArgs) -> anyhow::Result<SongFilters> {
    let dedupe_policy = match &args.dedupe_policy {
        Some(raw) => parse_enum::<DedupePolicy>(raw, "dedupe policy")?,
        None => DedupePolicy::default(),
    };
    let song_difficulty_range = match (args.difficulty_min, args.difficulty_max) {
        (None, None) => None,
        (min, max) => {
            let range = DifficultyRange {
                min: min.unwrap_or(0.0),
                max: max.unwrap_or(100.0),
            };
            if range.min > range.max {
                anyhow::bail!(
                    "--difficulty-min ({}) is greater than --difficulty-max ({})",
                    range.min,
                    range.max
                );
            }
            Some(range)
        }
    };

    Ok(SongFilters {
        ignore_duplicates: args.ignore_duplicates,
        dedupe_policy,
        song_types: parse_all::<SongType>(&args.song_types, "song type")?,
        song_categories: args.song_categories.clone(),
        song_difficulty_range,
        anime_types: args.anime_types.clone(),
        anime_seasons: args.anime_seasons.clone(),
        anime_genres: args.anime_genres.clone(),
        anime_tags: args.anime_tags.clone(),
    })
}

/// Build [`ArtistExpansion`] from command-line flags.
pub fn artist_expansion(args: &ExpansionArgs) -> anyhow::Result<ArtistExpansion> {
    let mut expansion = ArtistExpansion {
        max_other_artists: args.max_other_artists,
        ..ArtistExpansion::default()
    };
    if let Some(raw) = &args.granularity {
        expansion.group_granularity = parse_enum::<GroupGranularity>(raw, "granularity")?;
    }
    if args.all_roles {
        expansion.credit_roles = Vec::new();
    } else if !args.roles.is_empty() {
        expansion.credit_roles = parse_all::<CreditRole>(&args.roles, "credit role")?;
    }
    Ok(expansion)
}
