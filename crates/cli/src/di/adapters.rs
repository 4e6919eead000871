use menuvault_application::ports::{AuthProvider, MenuSource, UserDirectory};
use menuvault_domain::Config;
use menuvault_infrastructure::auth::StaticSessionAuthProvider;
use menuvault_infrastructure::menus::{BuiltinMenuSource, HttpMenuSource};
use menuvault_infrastructure::repositories::InMemoryUserDirectory;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Adapters {
    pub menu_source: Arc<dyn MenuSource>,
    pub user_directory: Arc<dyn UserDirectory>,
    pub auth: Arc<dyn AuthProvider>,
}

impl Adapters {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let menu_source: Arc<dyn MenuSource> = match config.menus.upstream_url.as_deref() {
            Some(url) => {
                info!(upstream = url, "Using upstream menu source");
                Arc::new(HttpMenuSource::new(
                    url,
                    Duration::from_millis(config.menus.request_timeout_ms),
                )?)
            }
            None => {
                info!("Using built-in menus");
                Arc::new(BuiltinMenuSource::with_overrides(&config.menus.overrides))
            }
        };

        let user_directory: Arc<dyn UserDirectory> =
            Arc::new(InMemoryUserDirectory::from_entries(&config.users));
        let auth: Arc<dyn AuthProvider> = Arc::new(StaticSessionAuthProvider::new(
            &config.auth.sessions,
            Arc::clone(&user_directory),
        ));

        info!(
            users = config.users.len(),
            sessions = config.auth.sessions.len(),
            "Adapters initialized"
        );

        Ok(Self {
            menu_source,
            user_directory,
            auth,
        })
    }
}
