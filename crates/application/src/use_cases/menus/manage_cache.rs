use menuvault_domain::MenuItem;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::FetchOrchestrator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub keys: Vec<String>,
    pub failed_refreshes: u64,
}

/// Use case for inspecting and invalidating the menu cache.
pub struct ManageMenuCacheUseCase {
    orchestrator: Arc<FetchOrchestrator<Vec<MenuItem>>>,
}

impl ManageMenuCacheUseCase {
    pub fn new(orchestrator: Arc<FetchOrchestrator<Vec<MenuItem>>>) -> Self {
        Self { orchestrator }
    }

    /// Removes every cached entry whose key starts with `prefix`.
    #[instrument(skip(self))]
    pub fn invalidate(&self, prefix: &str) -> usize {
        let removed = self.orchestrator.cache().invalidate_by_prefix(prefix);
        info!(prefix, removed, "Cache entries invalidated");
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.orchestrator.cache();
        CacheStats {
            entries: cache.len(),
            keys: cache.keys(),
            failed_refreshes: self.orchestrator.failed_refreshes(),
        }
    }
}
