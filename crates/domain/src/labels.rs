use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAction {
    Add,
    Remove,
}

impl FromStr for LabelAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" => Ok(LabelAction::Add),
            "remove" => Ok(LabelAction::Remove),
            other => Err(DomainError::InvalidParameter(format!(
                "action must be \"add\" or \"remove\", got \"{other}\""
            ))),
        }
    }
}

/// Raw label mutation request; every field may be missing on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelMutationRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Result of a successful (possibly no-op) label mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelOutcome {
    pub changed: bool,
    pub message: String,
    pub labels: Vec<String>,
}
