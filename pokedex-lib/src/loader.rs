//! Memoizing catalogue loader.
//!
//! The first successful [`CatalogueLoader::load`] reads the source and keeps
//! the result for the lifetime of the loader. Concurrent first callers share
//! one in-flight read. A failed read leaves the cache empty, so the next call
//! starts over.

use std::sync::Arc;

use pokedex_core::Pokemon;
use tokio::sync::OnceCell;

use crate::error::CatalogueError;
use crate::grouping::{DexGroup, group_by_dex};
use crate::source::CatalogueSource;

/// Loads the catalogue from `S` at most once (per success).
pub struct CatalogueLoader<S> {
    source: S,
    cache: OnceCell<Arc<Vec<Pokemon>>>,
}

impl<S: CatalogueSource> CatalogueLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether a catalogue has been loaded and retained.
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    /// The full catalogue. Performs I/O only until the first success.
    pub async fn load(&self) -> Result<Arc<Vec<Pokemon>>, CatalogueError> {
        self.cached().await.map(Arc::clone)
    }

    /// All Pokemon in `game`, grouped by regional dex.
    ///
    /// An unrecognized game yields no groups, but the catalogue is still
    /// loaded so that an unavailable source is reported either way.
    pub async fn pokemon_for_game(&self, game: &str) -> Result<Vec<DexGroup<'_>>, CatalogueError> {
        let catalogue = self.cached().await?;
        Ok(group_by_dex(catalogue, game))
    }

    async fn cached(&self) -> Result<&Arc<Vec<Pokemon>>, CatalogueError> {
        self.cache
            .get_or_try_init(|| async {
                let description = self.source.describe();
                log::debug!("Loading catalogue from {description}");
                match self.source.fetch().await {
                    Ok(catalogue) => {
                        log::info!("Loaded {} Pokemon from {description}", catalogue.len());
                        Ok(Arc::new(catalogue))
                    }
                    Err(e) => {
                        log::warn!("Failed to load catalogue from {description}: {e}");
                        Err(e)
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
