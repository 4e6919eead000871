mod get_menu;
mod manage_cache;
mod resolve_active;

pub use get_menu::{GetMenuUseCase, MenuFetch};
pub use manage_cache::{CacheStats, ManageMenuCacheUseCase};
pub use resolve_active::ResolveActiveMenuUseCase;
