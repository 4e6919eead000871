use serde::{Deserialize, Serialize};

use crate::menu::{MenuItem, MenuType};

/// Where menu payloads come from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuSourceConfig {
    /// Base URL of an upstream serving `/api/menus/{type}`.
    /// When unset, the built-in menus are served.
    #[serde(default)]
    pub upstream_url: Option<String>,

    /// Upstream request timeout in milliseconds (default: 5000)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Replacement trees for the built-in menus
    #[serde(default)]
    pub overrides: MenuOverrides,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MenuOverrides {
    #[serde(default)]
    pub admin: Option<Vec<MenuItem>>,
    #[serde(default)]
    pub dashboard: Option<Vec<MenuItem>>,
    #[serde(default)]
    pub developer: Option<Vec<MenuItem>>,
}

impl MenuOverrides {
    pub fn get(&self, menu: MenuType) -> Option<&Vec<MenuItem>> {
        match menu {
            MenuType::Admin => self.admin.as_ref(),
            MenuType::Dashboard => self.dashboard.as_ref(),
            MenuType::Developer => self.developer.as_ref(),
        }
    }
}

impl Default for MenuSourceConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            request_timeout_ms: default_request_timeout_ms(),
            overrides: MenuOverrides::default(),
        }
    }
}

fn default_request_timeout_ms() -> u64 {
    5000
}
