//! Operational bounds applied by the search engine.

use serde::{Deserialize, Serialize};

/// Caps and thresholds the engine enforces on every request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchLimits {
    /// Result cap per search, applied after filtering and de-duplication.
    pub max_results_per_search: usize,
    /// Shortest query (in characters) accepted when `partial_match` is set.
    pub min_partial_query_len: usize,
    /// Most sub-searches one global search may carry.
    pub max_sub_searches: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_results_per_search: 350,
            min_partial_query_len: 4,
            max_sub_searches: 5,
        }
    }
}
