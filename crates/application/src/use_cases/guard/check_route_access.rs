use menuvault_domain::{AuthState, GuardDecision, RouteGuard};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::AuthProvider;

/// Use case deciding whether a navigation request may proceed.
///
/// Fails closed: when the caller's auth state cannot be resolved the caller
/// is treated as anonymous, so protected paths redirect to the login page.
pub struct CheckRouteAccessUseCase {
    auth: Arc<dyn AuthProvider>,
    guard: Arc<RouteGuard>,
}

impl CheckRouteAccessUseCase {
    pub fn new(auth: Arc<dyn AuthProvider>, guard: Arc<RouteGuard>) -> Self {
        Self { auth, guard }
    }

    #[instrument(skip(self, token))]
    pub async fn execute(&self, path: &str, token: Option<&str>) -> GuardDecision {
        let auth = match self.auth.resolve(token).await {
            Ok(auth) => auth,
            Err(e) => {
                warn!(error = %e, "Auth resolution failed, treating caller as anonymous");
                AuthState::anonymous()
            }
        };

        let decision = self.guard.decide(path, &auth);
        debug!(
            logged_in = auth.logged_in,
            allowed = decision.is_allowed(),
            "Route guard decision"
        );
        decision
    }
}
