//! Lazily-built, shareable engine.
//!
//! The first `get()` loads the cache and builds the engine; later calls reuse
//! it. `reload()` is the only way to pick up a changed cache. Readers hold an
//! `Arc<Engine>`, so a reload never disturbs lookups already in flight.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::info;

use super::selector::Engine;
use crate::catalog::CatalogIndex;
use crate::config::MatchConfig;

pub struct EngineHandle {
    catalog_path: PathBuf,
    config: MatchConfig,
    engine: RwLock<Option<Arc<Engine>>>,
}

impl EngineHandle {
    pub fn new(catalog_path: impl Into<PathBuf>, config: MatchConfig) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            config,
            engine: RwLock::new(None),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn is_loaded(&self) -> bool {
        self.engine
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// The engine, building it on first use. Never reloads.
    pub fn get(&self) -> Arc<Engine> {
        if let Some(engine) = self
            .engine
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
        {
            return Arc::clone(engine);
        }

        let mut slot = self
            .engine
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Another caller may have finished the build while we waited.
        if let Some(engine) = slot.as_ref() {
            return Arc::clone(engine);
        }
        let engine = Arc::new(self.build());
        *slot = Some(Arc::clone(&engine));
        engine
    }

    /// Rebuild from the cache file, replacing the current engine.
    pub fn reload(&self) -> Arc<Engine> {
        let engine = Arc::new(self.build());
        let mut slot = self
            .engine
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(Arc::clone(&engine));
        info!(entries = engine.catalog().len(), "Reloaded box art cache");
        engine
    }

    fn build(&self) -> Engine {
        let catalog = CatalogIndex::load_or_empty(&self.catalog_path);
        Engine::build(catalog, &self.config)
    }
}
