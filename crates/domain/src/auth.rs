use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Coarse authorization role derived from a user's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Developer,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Developer, Role::User];

    /// Parse a role from a user label. Labels that are not roles yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(label.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::User => "user",
        }
    }

    /// Single source of truth for role precedence: higher wins.
    pub fn precedence(&self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Developer => 2,
            Role::User => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication state of the caller, as reported by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub logged_in: bool,
    pub user_id: Option<String>,
    pub labels: Vec<String>,
    pub roles: BTreeSet<Role>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: impl Into<String>, labels: Vec<String>) -> Self {
        let roles = labels.iter().filter_map(|l| Role::from_label(l)).collect();
        Self {
            logged_in: true,
            user_id: Some(user_id.into()),
            labels,
            roles,
        }
    }

    /// Logged-in state carrying exactly `roles`, without a user identity.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        Self {
            logged_in: true,
            user_id: None,
            labels: roles.iter().map(|r| r.as_str().to_string()).collect(),
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// True when the caller's role set intersects `required`.
    pub fn has_any_role(&self, required: &BTreeSet<Role>) -> bool {
        required.iter().any(|role| self.roles.contains(role))
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn effective_role(&self) -> Option<Role> {
        self.roles.iter().copied().max_by_key(Role::precedence)
    }

    pub fn is_admin(&self) -> bool {
        self.logged_in && self.has_role(Role::Admin)
    }
}
