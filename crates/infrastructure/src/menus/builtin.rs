use async_trait::async_trait;
use menuvault_application::ports::MenuSource;
use menuvault_domain::config::MenuOverrides;
use menuvault_domain::{DomainError, MenuItem, MenuType, ResponseEnvelope};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Serves menu trees compiled into the binary, optionally replaced per type
/// from configuration.
pub struct BuiltinMenuSource {
    menus: HashMap<MenuType, Vec<MenuItem>>,
}

impl BuiltinMenuSource {
    pub fn new() -> Self {
        Self::with_overrides(&MenuOverrides::default())
    }

    pub fn with_overrides(overrides: &MenuOverrides) -> Self {
        let menus = MenuType::ALL
            .iter()
            .map(|&menu| {
                let items = overrides
                    .get(menu)
                    .cloned()
                    .unwrap_or_else(|| default_menu(menu));
                (menu, items)
            })
            .collect();
        Self { menus }
    }

    pub fn items(&self, menu: MenuType) -> &[MenuItem] {
        self.menus.get(&menu).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Default for BuiltinMenuSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuSource for BuiltinMenuSource {
    async fn fetch(&self, menu: MenuType) -> Result<Value, DomainError> {
        let items = self.items(menu).to_vec();
        debug!(menu = %menu, items = items.len(), "Serving built-in menu");
        ResponseEnvelope::success(items, "ok")
            .to_body()
            .map_err(|e| DomainError::Transport(format!("failed to encode {menu} menu: {e}")))
    }
}

pub fn default_menu(menu: MenuType) -> Vec<MenuItem> {
    match menu {
        MenuType::Admin => admin_menu(),
        MenuType::Dashboard => dashboard_menu(),
        MenuType::Developer => developer_menu(),
    }
}

fn admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("1", "Control Panel", "/admin").with_icon("dashboard"),
        MenuItem::group(
            "users",
            "User Management",
            vec![
                MenuItem::link("2", "User List", "/admin/users/list").with_icon("user"),
                MenuItem::link("3", "Roles & Permissions", "/admin/users/roles").with_icon("safe"),
                MenuItem::link("4", "User Activity", "/admin/users/activity")
                    .with_icon("history"),
            ],
        )
        .with_icon("user"),
        MenuItem::group(
            "content",
            "Content",
            vec![
                MenuItem::link("5", "Pages", "/admin/content/pages").with_icon("file"),
                MenuItem::link("6", "Blog Posts", "/admin/content/blogs").with_icon("book"),
                MenuItem::link("7", "Media Library", "/admin/content/media").with_icon("image"),
            ],
        )
        .with_icon("edit"),
        MenuItem::group(
            "system",
            "System Settings",
            vec![
                MenuItem::link("8", "General", "/admin/system/general").with_icon("settings"),
                MenuItem::link("9", "Security", "/admin/system/security").with_icon("safe"),
                MenuItem::link("10", "System Logs", "/admin/system/logs").with_icon("file"),
                MenuItem::link("11", "Backup & Restore", "/admin/system/backups")
                    .with_icon("history"),
            ],
        )
        .with_icon("settings"),
        MenuItem::link("12", "Notifications", "/admin/notifications").with_icon("notification"),
        MenuItem::link("13", "Security Center", "/admin/security").with_icon("safe"),
    ]
}

fn dashboard_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("1", "Dashboard", "/dashboard").with_icon("dashboard"),
        MenuItem::link("2", "Users", "/dashboard/users").with_icon("user"),
        MenuItem::link("3", "Settings", "/dashboard/settings").with_icon("settings"),
        MenuItem::group(
            "sub1",
            "Analytics",
            vec![
                MenuItem::link("4", "Overview", "/dashboard/analytics/overview")
                    .with_icon("dashboard"),
                MenuItem::link("5", "Traffic", "/dashboard/analytics/traffic")
                    .with_icon("history"),
                MenuItem::link("6", "User Behaviour", "/dashboard/analytics/behavior")
                    .with_icon("user"),
            ],
        )
        .with_icon("apps"),
    ]
}

fn developer_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("1", "Developer Center", "/developer").with_icon("dashboard"),
        MenuItem::group(
            "api",
            "API Management",
            vec![
                MenuItem::link("2", "API Keys", "/developer/api/keys").with_icon("safe"),
                MenuItem::link("3", "API Endpoints", "/developer/api/endpoints").with_icon("code"),
                MenuItem::link("4", "Request Logs", "/developer/api/logs").with_icon("file"),
            ],
        )
        .with_icon("code"),
        MenuItem::group(
            "docs",
            "Documentation",
            vec![
                MenuItem::link("5", "API Reference", "/developer/docs/reference").with_icon("file"),
                MenuItem::link("6", "Guides", "/developer/docs/guides").with_icon("info-circle"),
                MenuItem::link("7", "Code Samples", "/developer/docs/examples").with_icon("code"),
            ],
        )
        .with_icon("book"),
        MenuItem::link("8", "Developer Settings", "/developer/settings").with_icon("settings"),
        MenuItem::link("9", "Support", "/developer/support").with_icon("info-circle"),
    ]
}
