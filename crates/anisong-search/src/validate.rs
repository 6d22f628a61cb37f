//! Request validation. Runs before any catalog access.

use anisong_core::limits::SearchLimits;
use anisong_core::params::{GlobalSearch, SubSearch, TextQuery};

use crate::error::SearchError;

/// Reject partial-match queries shorter than the configured minimum.
///
/// Length counts characters of the raw query, before normalization.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] naming the offending field.
pub fn validate_text_query(query: &TextQuery<'_>, limits: &SearchLimits) -> Result<(), SearchError> {
    if query.partial_match && query.text.chars().count() < limits.min_partial_query_len {
        return Err(SearchError::Validation(format!(
            "{} must be at least {} characters long if partial_match is true",
            query.field, limits.min_partial_query_len
        )));
    }
    Ok(())
}

/// # Errors
///
/// Returns [`SearchError::Validation`] if the sub-search has an invalid text query.
pub fn validate_sub_search(search: &SubSearch, limits: &SearchLimits) -> Result<(), SearchError> {
    search
        .text_query()
        .map_or(Ok(()), |query| validate_text_query(&query, limits))
}

/// Check the sub-search count and every sub-search before any of them runs.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] for an empty or oversized request, or
/// for the first invalid sub-search.
pub fn validate_global(global: &GlobalSearch, limits: &SearchLimits) -> Result<(), SearchError> {
    let count = global.searches.len();
    if count == 0 {
        return Err(SearchError::Validation(
            "global search requires at least one sub-search".to_string(),
        ));
    }
    if count > limits.max_sub_searches {
        return Err(SearchError::Validation(format!(
            "global search accepts at most {} sub-searches, got {count}",
            limits.max_sub_searches
        )));
    }
    global
        .searches
        .iter()
        .try_for_each(|search| validate_sub_search(search, limits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anisong_core::enums::CombinationLogic;
    use anisong_core::params::{AnimeSearchParams, AnnIdSearchParams, SongSearchParams};
    use rstest::rstest;

    fn song_search(name: &str, partial_match: bool) -> SubSearch {
        SubSearch::SongName(SongSearchParams {
            song_name: name.to_string(),
            partial_match,
            filters: Default::default(),
        })
    }

    #[rstest]
    #[case("abc", true, false)]
    #[case("abcd", true, true)]
    #[case("abc", false, true)]
    #[case("", false, true)]
    #[case("まどか", true, false)]
    #[case("まどか☆", true, true)]
    fn partial_query_length_boundary(
        #[case] name: &str,
        #[case] partial: bool,
        #[case] accepted: bool,
    ) {
        let result = validate_sub_search(&song_search(name, partial), &SearchLimits::default());
        assert_eq!(result.is_ok(), accepted, "{name:?} partial={partial}");
    }

    #[test]
    fn error_names_the_field() {
        let search = SubSearch::Anime(AnimeSearchParams {
            anime_name: "K-O".to_string(),
            partial_match: true,
            filters: Default::default(),
        });
        let err = validate_sub_search(&search, &SearchLimits::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: anime_name must be at least 4 characters long if partial_match is true"
        );
    }

    #[test]
    fn id_searches_have_nothing_to_validate() {
        let search = SubSearch::AnnId(AnnIdSearchParams {
            ann_ids: Vec::new(),
            filters: Default::default(),
        });
        assert!(validate_sub_search(&search, &SearchLimits::default()).is_ok());
    }

    #[test]
    fn global_requires_at_least_one_sub_search() {
        let global = GlobalSearch {
            searches: Vec::new(),
            combination_logic: CombinationLogic::Union,
        };
        assert!(matches!(
            validate_global(&global, &SearchLimits::default()),
            Err(SearchError::Validation(_))
        ));
    }

    #[test]
    fn global_rejects_more_than_five() {
        let global = GlobalSearch {
            searches: (0..6).map(|i| song_search(&format!("song {i}"), false)).collect(),
            combination_logic: CombinationLogic::Intersection,
        };
        let err = validate_global(&global, &SearchLimits::default()).unwrap_err();
        assert!(err.to_string().contains("at most 5"), "{err}");

        let five = GlobalSearch {
            searches: global.searches[..5].to_vec(),
            combination_logic: CombinationLogic::Intersection,
        };
        assert!(validate_global(&five, &SearchLimits::default()).is_ok());
    }

    #[test]
    fn global_rejects_any_invalid_sub_search() {
        let global = GlobalSearch {
            searches: vec![song_search("Connect", false), song_search("Con", true)],
            combination_logic: CombinationLogic::Union,
        };
        assert!(validate_global(&global, &SearchLimits::default()).is_err());
    }
}
