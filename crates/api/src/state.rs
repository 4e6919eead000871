use menuvault_application::ports::AuthProvider;
use menuvault_application::use_cases::{
    CheckRouteAccessUseCase, GetMenuUseCase, ManageMenuCacheUseCase, ResolveActiveMenuUseCase,
    UpdateUserLabelsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_menu: Arc<GetMenuUseCase>,
    pub resolve_active_menu: Arc<ResolveActiveMenuUseCase>,
    pub check_route_access: Arc<CheckRouteAccessUseCase>,
    pub update_labels: Arc<UpdateUserLabelsUseCase>,
    pub manage_cache: Arc<ManageMenuCacheUseCase>,
    pub auth: Arc<dyn AuthProvider>,
}
