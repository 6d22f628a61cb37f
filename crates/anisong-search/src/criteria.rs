//! Song and anime attribute filters.
//!
//! Every criterion class is ANDed; an empty set or unset range means no
//! restriction. String attributes compare under full Unicode lowercasing.

use anisong_core::entities::{Anime, Song};
use anisong_core::params::SongFilters;

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(set: &[String], value: Option<&str>) -> bool {
    set.is_empty() || value.is_some_and(|v| set.iter().any(|s| same_ignoring_case(s, v)))
}

fn intersects_ignore_case(set: &[String], values: &[String]) -> bool {
    set.is_empty()
        || values
            .iter()
            .any(|v| set.iter().any(|s| same_ignoring_case(s, v)))
}

/// Whether `song` of `anime` passes every supplied criterion.
#[must_use]
pub fn matches(song: &Song, anime: &Anime, filters: &SongFilters) -> bool {
    let type_ok = filters.song_types.is_empty() || filters.song_types.contains(&song.song_type);
    let category_ok = contains_ignore_case(&filters.song_categories, song.category.as_deref());
    // Unscored songs are never excluded by a difficulty range.
    let difficulty_ok = match (filters.song_difficulty_range, song.difficulty) {
        (Some(range), Some(difficulty)) => range.contains(difficulty),
        _ => true,
    };

    type_ok
        && category_ok
        && difficulty_ok
        && contains_ignore_case(&filters.anime_types, anime.anime_type.as_deref())
        && contains_ignore_case(&filters.anime_seasons, anime.season.as_deref())
        && intersects_ignore_case(&filters.anime_genres, &anime.genres)
        && intersects_ignore_case(&filters.anime_tags, &anime.tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anisong_core::entities::MediaLinks;
    use anisong_core::enums::SongType;
    use anisong_core::params::DifficultyRange;
    use rstest::rstest;

    fn anime() -> Anime {
        Anime {
            ann_id: 1,
            expand_name: "Mahou Shoujo Madoka Magica".into(),
            jp_name: None,
            en_name: None,
            alt_names: Vec::new(),
            anime_type: Some("TV".into()),
            season: Some("Winter 2011".into()),
            genres: vec!["Drama".into(), "Magical Girl".into()],
            tags: vec!["Magic".into()],
        }
    }

    fn song(difficulty: Option<f64>) -> Song {
        Song {
            id: 1,
            ann_song_id: Some(10),
            ann_id: 1,
            song_type: SongType::Opening,
            number: 1,
            name: "Connect".into(),
            artist: "ClariS".into(),
            difficulty,
            category: Some("Standard".into()),
            links: MediaLinks::default(),
            credits: Vec::new(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_criteria_always_match() {
        assert!(matches(&song(Some(50.0)), &anime(), &SongFilters::default()));
        assert!(matches(&song(None), &anime(), &SongFilters::default()));
    }

    #[rstest]
    #[case::song_type(SongFilters { song_types: vec![SongType::Opening], ..Default::default() }, true)]
    #[case::wrong_song_type(SongFilters { song_types: vec![SongType::Ending, SongType::Insert], ..Default::default() }, false)]
    #[case::category(SongFilters { song_categories: strings(&["standard"]), ..Default::default() }, true)]
    #[case::wrong_category(SongFilters { song_categories: strings(&["Chanting"]), ..Default::default() }, false)]
    #[case::difficulty(SongFilters { song_difficulty_range: Some(DifficultyRange { min: 30.0, max: 40.0 }), ..Default::default() }, true)]
    #[case::difficulty_out_of_range(SongFilters { song_difficulty_range: Some(DifficultyRange { min: 40.1, max: 60.0 }), ..Default::default() }, false)]
    #[case::anime_type(SongFilters { anime_types: strings(&["Movie", "tv"]), ..Default::default() }, true)]
    #[case::wrong_anime_type(SongFilters { anime_types: strings(&["OVA"]), ..Default::default() }, false)]
    #[case::season(SongFilters { anime_seasons: strings(&["Winter 2011"]), ..Default::default() }, true)]
    #[case::wrong_season(SongFilters { anime_seasons: strings(&["Spring 2011"]), ..Default::default() }, false)]
    #[case::genre_overlap(SongFilters { anime_genres: strings(&["Comedy", "Drama"]), ..Default::default() }, true)]
    #[case::no_genre_overlap(SongFilters { anime_genres: strings(&["Comedy"]), ..Default::default() }, false)]
    #[case::tag(SongFilters { anime_tags: strings(&["magic"]), ..Default::default() }, true)]
    #[case::wrong_tag(SongFilters { anime_tags: strings(&["Mecha"]), ..Default::default() }, false)]
    fn single_criterion(#[case] filters: SongFilters, #[case] expected: bool) {
        assert_eq!(matches(&song(Some(35.0)), &anime(), &filters), expected);
    }

    #[test]
    fn criteria_are_anded() {
        let mut filters = SongFilters {
            song_types: vec![SongType::Opening],
            anime_genres: strings(&["Drama"]),
            anime_seasons: strings(&["Winter 2011"]),
            ..Default::default()
        };
        assert!(matches(&song(Some(35.0)), &anime(), &filters));

        filters.anime_tags = strings(&["Mecha"]);
        assert!(!matches(&song(Some(35.0)), &anime(), &filters));
    }

    #[test]
    fn unscored_song_passes_any_difficulty_range() {
        let filters = SongFilters {
            song_difficulty_range: Some(DifficultyRange { min: 90.0, max: 100.0 }),
            ..Default::default()
        };
        assert!(matches(&song(None), &anime(), &filters));
        assert!(!matches(&song(Some(35.0)), &anime(), &filters));
    }

    #[test]
    fn non_ascii_values_fold_case() {
        let mut anime = anime();
        anime.season = Some("Été 2011".into());
        anime.genres = vec!["Mahō Shōjo".into()];
        anime.tags = vec!["Ärzte".into()];
        let filters = SongFilters {
            anime_seasons: strings(&["ÉTÉ 2011"]),
            anime_genres: strings(&["MAHŌ SHŌJO"]),
            anime_tags: strings(&["ärzte"]),
            ..Default::default()
        };
        assert!(matches(&song(None), &anime, &filters));

        let other = SongFilters {
            anime_tags: strings(&["Arzte"]),
            ..Default::default()
        };
        assert!(!matches(&song(None), &anime, &other));
    }

    #[test]
    fn missing_attribute_fails_non_empty_set() {
        let mut uncategorized = song(None);
        uncategorized.category = None;
        let filters = SongFilters {
            song_categories: strings(&["Standard"]),
            ..Default::default()
        };
        assert!(!matches(&uncategorized, &anime(), &filters));
    }
}
