use menuvault_domain::{FetchError, MenuItem, MenuType};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::ports::MenuSource;
use crate::services::{FetchOptions, FetchOrchestrator, FetchOrigin};

/// Menu tree for one menu type, as served through the read-through cache.
#[derive(Debug, Clone)]
pub struct MenuFetch {
    pub menu: MenuType,
    pub items: Arc<Vec<MenuItem>>,
    /// False when the fetch failed and no previous tree was cached.
    pub has_data: bool,
    pub error: Option<FetchError>,
    pub origin: FetchOrigin,
}

/// Use case for retrieving menu trees.
///
/// Every menu type is cached under `menu_<type>`; the configured TTL and
/// stale-while-revalidate setting apply to all of them.
pub struct GetMenuUseCase {
    source: Arc<dyn MenuSource>,
    orchestrator: Arc<FetchOrchestrator<Vec<MenuItem>>>,
    ttl: Duration,
    stale_while_revalidate: bool,
}

impl GetMenuUseCase {
    pub fn new(
        source: Arc<dyn MenuSource>,
        orchestrator: Arc<FetchOrchestrator<Vec<MenuItem>>>,
    ) -> Self {
        let ttl = orchestrator.default_ttl();
        Self {
            source,
            orchestrator,
            ttl,
            stale_while_revalidate: false,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_stale_while_revalidate(mut self, enabled: bool) -> Self {
        self.stale_while_revalidate = enabled;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, menu: MenuType, force_refresh: bool) -> MenuFetch {
        let source = Arc::clone(&self.source);
        let options = FetchOptions::new()
            .with_ttl(self.ttl)
            .force_refresh(force_refresh)
            .stale_while_revalidate(self.stale_while_revalidate);

        let outcome = self
            .orchestrator
            .fetch_with_cache(
                &menu.cache_key(),
                move || async move { source.fetch(menu).await.map_err(FetchError::from) },
                options,
            )
            .await;

        debug!(
            menu = %menu,
            origin = outcome.origin.as_str(),
            items = outcome.data.len(),
            failed = outcome.error.is_some(),
            "Menu resolved"
        );

        MenuFetch {
            menu,
            items: outcome.data,
            has_data: outcome.has_data,
            error: outcome.error,
            origin: outcome.origin,
        }
    }
}
