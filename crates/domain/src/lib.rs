//! menuvault domain layer
pub mod auth;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod labels;
pub mod menu;
pub mod route_guard;
pub mod validators;

pub use auth::{AuthState, Role};
pub use config::{CliOverrides, Config, ConfigError};
pub use envelope::{validate, EnvelopeError, ResponseEnvelope};
pub use errors::{DomainError, FetchError};
pub use labels::{LabelAction, LabelMutationRequest, LabelOutcome};
pub use menu::{MenuItem, MenuSelection, MenuType, MENU_CACHE_PREFIX};
pub use route_guard::{GuardDecision, RouteGuard};
