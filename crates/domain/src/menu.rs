use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::auth::AuthState;
use crate::errors::DomainError;

/// Cache keys for menu payloads all share this prefix.
pub const MENU_CACHE_PREFIX: &str = "menu_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Admin,
    Dashboard,
    Developer,
}

impl MenuType {
    pub const ALL: [MenuType; 3] = [MenuType::Admin, MenuType::Dashboard, MenuType::Developer];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Admin => "admin",
            MenuType::Dashboard => "dashboard",
            MenuType::Developer => "developer",
        }
    }

    pub fn cache_key(&self) -> String {
        format!("{MENU_CACHE_PREFIX}{}", self.as_str())
    }
}

impl FromStr for MenuType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownMenuType(s.to_string()))
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

/// A node of a navigation menu tree.
///
/// Items without `roles` are visible to everyone; otherwise the caller needs
/// at least one matching label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn link(key: &str, title: &str, route: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            route: Some(route.to_string()),
            ..Default::default()
        }
    }

    pub fn group(key: &str, title: &str, children: Vec<MenuItem>) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            children,
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_target(mut self, target: LinkTarget) -> Self {
        self.target = Some(target);
        self
    }

    fn visible_for(&self, auth: &AuthState) -> bool {
        self.roles.is_empty() || self.roles.iter().any(|r| auth.has_label(r))
    }
}

/// Currently selected item and the chain of groups that must be expanded
/// to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSelection {
    pub selected_keys: Vec<String>,
    pub open_keys: Vec<String>,
}

/// Depth-first search for the first item whose route equals `path`.
pub fn find_by_route<'a>(items: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    for item in items {
        if item.route.as_deref() == Some(path) {
            return Some(item);
        }
        if let Some(found) = find_by_route(&item.children, path) {
            return Some(found);
        }
    }
    None
}

/// Keys of the ancestors of `key`, outermost first. Empty for top-level or
/// unknown keys.
pub fn parent_keys(items: &[MenuItem], key: &str) -> Vec<String> {
    fn walk(items: &[MenuItem], key: &str, trail: &mut Vec<String>) -> bool {
        for item in items {
            if item.children.is_empty() {
                continue;
            }
            trail.push(item.key.clone());
            if item.children.iter().any(|child| child.key == key)
                || walk(&item.children, key, trail)
            {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    walk(items, key, &mut trail);
    trail
}

pub fn active_selection(items: &[MenuItem], path: &str) -> Option<MenuSelection> {
    let item = find_by_route(items, path)?;
    Some(MenuSelection {
        selected_keys: vec![item.key.clone()],
        open_keys: parent_keys(items, &item.key),
    })
}

/// Prune the tree down to what `auth` may see.
///
/// Groups that lose all of their children and have no route of their own
/// are removed as well.
pub fn visible_to(items: &[MenuItem], auth: &AuthState) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.visible_for(auth))
        .filter_map(|item| {
            let children = visible_to(&item.children, auth);
            if !item.children.is_empty() && children.is_empty() && item.route.is_none() {
                return None;
            }
            Some(MenuItem {
                key: item.key.clone(),
                title: item.title.clone(),
                icon: item.icon.clone(),
                route: item.route.clone(),
                target: item.target,
                disabled: item.disabled,
                roles: item.roles.clone(),
                children,
            })
        })
        .collect()
}
