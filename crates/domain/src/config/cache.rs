use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Read-through cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds a fetched payload stays fresh (default: 300)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Serve expired payloads immediately and refresh them in the background
    #[serde(default)]
    pub stale_while_revalidate: bool,

    /// How many background refresh failures are kept for inspection
    #[serde(default = "default_refresh_error_capacity")]
    pub refresh_error_capacity: usize,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            stale_while_revalidate: false,
            refresh_error_capacity: default_refresh_error_capacity(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_refresh_error_capacity() -> usize {
    32
}
