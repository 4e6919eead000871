use menuvault_api::AppState;
use menuvault_application::ports::AuthProvider;
use menuvault_application::services::{FetchOrchestrator, SystemClock, TtlCache};
use menuvault_application::use_cases::{
    CheckRouteAccessUseCase, GetMenuUseCase, ManageMenuCacheUseCase, ResolveActiveMenuUseCase,
    UpdateUserLabelsUseCase,
};
use menuvault_domain::{Config, RouteGuard};
use std::sync::Arc;

use super::Adapters;

/// The single, process-wide cache and every use case sharing it.
pub struct UseCases {
    pub get_menu: Arc<GetMenuUseCase>,
    pub resolve_active_menu: Arc<ResolveActiveMenuUseCase>,
    pub check_route_access: Arc<CheckRouteAccessUseCase>,
    pub update_labels: Arc<UpdateUserLabelsUseCase>,
    pub manage_cache: Arc<ManageMenuCacheUseCase>,
}

impl UseCases {
    pub fn build(config: &Config, adapters: &Adapters) -> Self {
        let orchestrator = Arc::new(
            FetchOrchestrator::new(Arc::new(TtlCache::new()), Arc::new(SystemClock))
                .with_default_ttl(config.cache.ttl())
                .with_refresh_error_capacity(config.cache.refresh_error_capacity),
        );

        let get_menu = Arc::new(
            GetMenuUseCase::new(Arc::clone(&adapters.menu_source), Arc::clone(&orchestrator))
                .with_stale_while_revalidate(config.cache.stale_while_revalidate),
        );

        Self {
            resolve_active_menu: Arc::new(ResolveActiveMenuUseCase::new(Arc::clone(&get_menu))),
            get_menu,
            check_route_access: Arc::new(CheckRouteAccessUseCase::new(
                Arc::clone(&adapters.auth),
                Arc::new(RouteGuard::new(config.guard.clone())),
            )),
            update_labels: Arc::new(UpdateUserLabelsUseCase::new(Arc::clone(
                &adapters.user_directory,
            ))),
            manage_cache: Arc::new(ManageMenuCacheUseCase::new(orchestrator)),
        }
    }

    pub fn into_app_state(self, auth: Arc<dyn AuthProvider>) -> AppState {
        AppState {
            get_menu: self.get_menu,
            resolve_active_menu: self.resolve_active_menu,
            check_route_access: self.check_route_access,
            update_labels: self.update_labels,
            manage_cache: self.manage_cache,
            auth,
        }
    }
}
