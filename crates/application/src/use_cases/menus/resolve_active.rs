use menuvault_domain::menu::{active_selection, visible_to};
use menuvault_domain::{AuthState, FetchError, MenuSelection, MenuType};
use std::sync::Arc;
use tracing::instrument;

use super::GetMenuUseCase;

/// Works out which menu item is selected for a path and which groups must be
/// expanded, considering only items visible to the caller.
pub struct ResolveActiveMenuUseCase {
    get_menu: Arc<GetMenuUseCase>,
}

impl ResolveActiveMenuUseCase {
    pub fn new(get_menu: Arc<GetMenuUseCase>) -> Self {
        Self { get_menu }
    }

    /// # Returns
    ///
    /// * `Ok(Some(MenuSelection))` - If a visible item routes to `path`
    /// * `Ok(None)` - If no visible item routes to `path`
    /// * `Err(FetchError)` - If the menu could not be fetched and nothing was cached
    #[instrument(skip(self, auth))]
    pub async fn execute(
        &self,
        menu: MenuType,
        path: &str,
        auth: &AuthState,
    ) -> Result<Option<MenuSelection>, FetchError> {
        let fetched = self.get_menu.execute(menu, false).await;
        if let Some(error) = fetched.error {
            if !fetched.has_data {
                return Err(error);
            }
        }

        let visible = visible_to(&fetched.items, auth);
        Ok(active_selection(&visible, path))
    }
}
