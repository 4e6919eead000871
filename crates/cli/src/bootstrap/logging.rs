use menuvault_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over `[logging] level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(
        level = %config.logging.level,
        json = config.logging.json,
        port = config.server.port,
        bind = %config.server.bind_address,
        cache_ttl_secs = config.cache.ttl_secs,
        stale_while_revalidate = config.cache.stale_while_revalidate,
        upstream = config.menus.upstream_url.as_deref().unwrap_or("builtin"),
        "Configuration loaded"
    );
}
