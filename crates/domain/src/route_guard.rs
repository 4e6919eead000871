use serde::Serialize;

use crate::auth::AuthState;
use crate::config::{AccessKind, GuardConfig, GuardRule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    Redirect { target: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect { target } => Some(target),
        }
    }
}

/// Decides whether a navigation request may proceed.
///
/// Rules are evaluated against the path without its query string or
/// fragment; the most specific (longest) matching prefix wins.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    config: GuardConfig,
}

impl RouteGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn rule_for(&self, path: &str) -> Option<&GuardRule> {
        self.config
            .rules
            .iter()
            .filter(|rule| rule.matches(path))
            .max_by_key(|rule| rule.prefix.trim_end_matches('/').len())
    }

    pub fn decide(&self, path: &str, auth: &AuthState) -> GuardDecision {
        let route = path.split(['?', '#']).next().unwrap_or(path);

        let Some(rule) = self.rule_for(route) else {
            return GuardDecision::Allow;
        };

        match rule.access {
            AccessKind::Public => GuardDecision::Allow,
            AccessKind::GuestOnly if auth.logged_in => GuardDecision::Redirect {
                target: self.config.home_path.clone(),
            },
            AccessKind::GuestOnly => GuardDecision::Allow,
            AccessKind::Authenticated | AccessKind::Roles if !auth.logged_in => {
                self.login_redirect(path)
            }
            AccessKind::Roles if !auth.has_any_role(&rule.roles) => GuardDecision::Redirect {
                target: self.config.landing_path.clone(),
            },
            AccessKind::Authenticated | AccessKind::Roles => GuardDecision::Allow,
        }
    }

    /// Redirect to the login page, carrying `path` as the return-to target.
    pub fn login_redirect(&self, path: &str) -> GuardDecision {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.config.return_param, path)
            .finish();
        GuardDecision::Redirect {
            target: format!("{}?{}", self.config.login_path, query),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}
