//! Catalog database location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "anisong.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the libSQL catalog file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
