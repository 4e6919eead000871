pub mod guard;
pub mod labels;
pub mod menus;

pub use guard::CheckRouteAccessUseCase;
pub use labels::UpdateUserLabelsUseCase;
pub use menus::{
    CacheStats, GetMenuUseCase, ManageMenuCacheUseCase, MenuFetch, ResolveActiveMenuUseCase,
};
