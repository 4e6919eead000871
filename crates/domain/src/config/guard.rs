use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::auth::Role;

/// How a guarded path class is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    Public,
    Authenticated,
    Roles,
    GuestOnly,
}

/// A path class protected by the route guard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuardRule {
    /// Path prefix, matched on segment boundaries
    pub prefix: String,

    pub access: AccessKind,

    /// Roles accepted by an `access = "roles"` rule; any one is enough
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl GuardRule {
    pub fn authenticated(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            access: AccessKind::Authenticated,
            roles: BTreeSet::new(),
        }
    }

    pub fn roles(prefix: &str, roles: &[Role]) -> Self {
        Self {
            prefix: prefix.to_string(),
            access: AccessKind::Roles,
            roles: roles.iter().copied().collect(),
        }
    }

    pub fn guest_only(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            access: AccessKind::GuestOnly,
            roles: BTreeSet::new(),
        }
    }

    pub fn public(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            access: AccessKind::Public,
            roles: BTreeSet::new(),
        }
    }

    /// Check if `path` falls under this rule.
    ///
    /// Rule "/admin" matches "/admin" and "/admin/users" but not
    /// "/administrator".
    pub fn matches(&self, path: &str) -> bool {
        let prefix = self.prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self.access, AccessKind::Authenticated | AccessKind::Roles)
    }
}

/// Route guard configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuardConfig {
    /// Where unauthenticated users are sent (default: "/auth/login")
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where logged-in users without the required role land (default: "/dashboard")
    #[serde(default = "default_landing_path")]
    pub landing_path: String,

    /// Where logged-in users visiting guest-only pages are sent (default: "/")
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Query parameter carrying the originally requested path (default: "redirect")
    #[serde(default = "default_return_param")]
    pub return_param: String,

    #[serde(default = "default_rules")]
    pub rules: Vec<GuardRule>,
}

impl GuardConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, path) in [
            ("login_path", &self.login_path),
            ("landing_path", &self.landing_path),
            ("home_path", &self.home_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("guard.{name} must start with '/': {path}"));
            }
        }

        if self.return_param.trim().is_empty() {
            return Err("guard.return_param cannot be empty".to_string());
        }

        for rule in &self.rules {
            if !rule.prefix.starts_with('/') {
                return Err(format!("guard rule prefix must start with '/': {}", rule.prefix));
            }
            if rule.access == AccessKind::Roles && rule.roles.is_empty() {
                return Err(format!(
                    "guard rule '{}' uses access = \"roles\" but lists no roles",
                    rule.prefix
                ));
            }
            if rule.requires_auth() && rule.matches(&self.login_path) {
                return Err(format!(
                    "guard rule '{}' would protect the login page {}",
                    rule.prefix, self.login_path
                ));
            }
        }

        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            landing_path: default_landing_path(),
            home_path: default_home_path(),
            return_param: default_return_param(),
            rules: default_rules(),
        }
    }
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_landing_path() -> String {
    "/dashboard".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_return_param() -> String {
    "redirect".to_string()
}

fn default_rules() -> Vec<GuardRule> {
    vec![
        GuardRule::authenticated("/dashboard"),
        GuardRule::roles("/admin", &[Role::Admin]),
        GuardRule::roles("/developer", &[Role::Developer, Role::Admin]),
        GuardRule::guest_only("/auth/login"),
        GuardRule::guest_only("/auth/register"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_on_segment_boundary() {
        let rule = GuardRule::authenticated("/admin");
        assert!(rule.matches("/admin"));
        assert!(rule.matches("/admin/users/list"));
        assert!(!rule.matches("/administrator"));
        assert!(!rule.matches("/"));
    }

    #[test]
    fn test_trailing_slash_prefix() {
        let rule = GuardRule::authenticated("/dashboard/");
        assert!(rule.matches("/dashboard"));
        assert!(rule.matches("/dashboard/x"));
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        let rule = GuardRule::public("/");
        assert!(rule.matches("/anything"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GuardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_roles_rule_without_roles_is_invalid() {
        let mut cfg = GuardConfig::default();
        cfg.rules.push(GuardRule {
            prefix: "/ops".to_string(),
            access: AccessKind::Roles,
            roles: BTreeSet::new(),
        });
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_protecting_login_page_is_invalid() {
        let mut cfg = GuardConfig::default();
        cfg.rules.push(GuardRule::authenticated("/auth"));
        assert!(cfg.validate().is_err());
    }
}
