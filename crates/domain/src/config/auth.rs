use serde::{Deserialize, Serialize};

/// Bearer-token sessions accepted by the static auth provider
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub sessions: Vec<SessionEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionEntry {
    pub token: String,
    pub user_id: String,
}

/// Seed entry for the in-memory user directory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserEntry {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<String>,
}
