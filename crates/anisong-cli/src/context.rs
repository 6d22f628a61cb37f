use anisong_config::AnisongConfig;
use anisong_core::limits::SearchLimits;
use anisong_db::CatalogDb;
use anisong_search::SearchEngine;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub catalog: CatalogDb,
    pub limits: SearchLimits,
}

impl AppContext {
    /// Open the catalog named by `--db` or `catalog.path` and resolve limits.
    pub async fn init(config: AnisongConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = flags.db.as_deref().unwrap_or(&config.catalog.path);
        let catalog = CatalogDb::open_local(path)
            .await
            .with_context(|| format!("failed to open catalog at {path}"))?;

        let mut limits = config.search.limits();
        limits.max_results_per_search =
            effective_limit(flags.limit, limits.max_results_per_search)?;

        tracing::debug!(path, ?limits, "catalog opened");
        Ok(Self { catalog, limits })
    }

    /// Engine borrowing this context's catalog.
    #[must_use]
    pub const fn engine(&self) -> SearchEngine<'_, CatalogDb> {
        SearchEngine::new(&self.catalog, self.limits)
    }
}
