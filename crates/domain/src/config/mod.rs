//! Configuration module for menuvault
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding and CORS
//! - `logging`: Logging settings
//! - `cache`: Read-through cache TTL and refresh behaviour
//! - `guard`: Route guard paths and rules
//! - `menus`: Menu source (built-in or upstream) and overrides
//! - `auth`: Static sessions and the user directory seed
//! - `errors`: Configuration errors

pub mod auth;
pub mod cache;
pub mod errors;
pub mod guard;
pub mod logging;
pub mod menus;
pub mod root;
pub mod server;

pub use auth::{AuthConfig, SessionEntry, UserEntry};
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use guard::{AccessKind, GuardConfig, GuardRule};
pub use logging::LoggingConfig;
pub use menus::{MenuOverrides, MenuSourceConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
