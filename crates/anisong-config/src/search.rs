//! Search engine limits.

use anisong_core::limits::SearchLimits;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_max_results_per_search() -> usize {
    350
}

const fn default_min_partial_query_len() -> usize {
    4
}

const fn default_max_sub_searches() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Result cap applied to every search.
    #[serde(default = "default_max_results_per_search")]
    pub max_results_per_search: usize,

    /// Minimum query length (characters) when `partial_match` is requested.
    #[serde(default = "default_min_partial_query_len")]
    pub min_partial_query_len: usize,

    /// Maximum sub-searches in one global search.
    #[serde(default = "default_max_sub_searches")]
    pub max_sub_searches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results_per_search: default_max_results_per_search(),
            min_partial_query_len: default_min_partial_query_len(),
            max_sub_searches: default_max_sub_searches(),
        }
    }
}

impl SearchConfig {
    /// Reject values that would make every search return nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results_per_search == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.max_results_per_search".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.max_sub_searches == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.max_sub_searches".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Engine-facing view of these settings.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_results_per_search: self.max_results_per_search,
            min_partial_query_len: self.min_partial_query_len,
            max_sub_searches: self.max_sub_searches,
        }
    }
}
